use super::transaction::Transaction;
use crate::error::{LedgerError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix shared by every generated account identifier.
pub const ACCOUNT_ID_PREFIX: &str = "ACC";

/// Identifier of an account, e.g. `ACC000042`.
///
/// Generated ids always follow the `ACC` + zero-padded counter format, but ids typed by a user
/// are accepted as-is so that lookups of unknown ids fail with `AccountNotFound` rather than
/// a parse error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Formats the `n`-th account id.
    pub fn from_sequence(n: u64) -> Self {
        Self(format!("{ACCOUNT_ID_PREFIX}{n:06}"))
    }

    /// The counter encoded in a generated id, `None` for foreign ids.
    pub fn sequence(&self) -> Option<u64> {
        self.0.strip_prefix(ACCOUNT_ID_PREFIX)?.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Signed monetary value held by an account.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Balance(pub Decimal);

/// Strictly positive monetary amount carried by a transaction.
///
/// Deserialization goes through the same validation as [`Amount::new`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(LedgerError::InvalidAmount(value))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = LedgerError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl From<Amount> for Balance {
    fn from(amount: Amount) -> Self {
        Self(amount.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Adds with overflow checking.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Subtracts with overflow checking.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// A ledger account: an owner, a balance and its append-only history.
///
/// The balance never drops below zero after a committed operation; every mutator that can
/// reduce it checks funds before touching any field.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Account {
    pub id: AccountId,
    pub owner_name: String,
    pub balance: Balance,
    /// Oldest first.
    pub transactions: Vec<Transaction>,
}

impl Account {
    /// Creates an empty account. The owner name is trimmed and must not be blank.
    pub fn open(id: AccountId, owner_name: &str) -> Result<Self> {
        let owner_name = owner_name.trim();
        if owner_name.is_empty() {
            return Err(LedgerError::EmptyOwnerName);
        }
        Ok(Self {
            id,
            owner_name: owner_name.to_string(),
            balance: Balance::ZERO,
            transactions: Vec::new(),
        })
    }

    /// Fails with `InsufficientFunds` when `amount` exceeds the balance.
    pub fn ensure_funds(&self, amount: Amount) -> Result<()> {
        if self.balance < Balance::from(amount) {
            return Err(LedgerError::InsufficientFunds {
                account: self.id.clone(),
                balance: self.balance,
                requested: amount.value(),
            });
        }
        Ok(())
    }

    /// The balance after crediting `amount`, or `BalanceOverflow` if it is not representable.
    pub fn credited(&self, amount: Amount) -> Result<Balance> {
        self.balance
            .checked_add(amount.into())
            .ok_or_else(|| LedgerError::BalanceOverflow {
                account: self.id.clone(),
                balance: self.balance,
                amount: amount.value(),
            })
    }

    fn debited(&self, amount: Amount) -> Result<Balance> {
        self.ensure_funds(amount)?;
        self.balance
            .checked_sub(amount.into())
            .ok_or_else(|| LedgerError::BalanceOverflow {
                account: self.id.clone(),
                balance: self.balance,
                amount: amount.value(),
            })
    }

    pub fn deposit(&mut self, amount: Amount) -> Result<()> {
        self.balance = self.credited(amount)?;
        self.transactions.push(Transaction::deposit(amount));
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Amount) -> Result<()> {
        self.balance = self.debited(amount)?;
        self.transactions.push(Transaction::withdrawal(amount));
        Ok(())
    }

    /// Debit side of a transfer to `recipient`.
    pub fn send_transfer(&mut self, amount: Amount, recipient: &AccountId) -> Result<()> {
        self.balance = self.debited(amount)?;
        self.transactions.push(Transaction::transfer_out(amount, recipient));
        Ok(())
    }

    /// Credit side of a transfer from `sender`.
    pub fn receive_transfer(&mut self, amount: Amount, sender: &AccountId) -> Result<()> {
        self.balance = self.credited(amount)?;
        self.transactions.push(Transaction::transfer_in(amount, sender));
        Ok(())
    }
}
