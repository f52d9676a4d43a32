use super::statement;
use crate::domain::account::{Account, Amount, Balance};
use crate::domain::ports::AccountStoreRef;
use crate::domain::transaction::Transaction;
use crate::error::{LedgerError, Result};
use rust_decimal::Decimal;
use tracing::debug;

/// Operations on a single bound account.
///
/// Every mutation is applied to the bound account first and persisted afterwards. Nothing is
/// rolled back when the store fails: the caller gets the `StorageError` and the in-memory account
/// keeps the change until a later successful save.
pub struct AccountService {
    account: Account,
    store: AccountStoreRef,
}

impl AccountService {
    pub fn new(account: Account, store: AccountStoreRef) -> Self {
        Self { account, store }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn into_account(self) -> Account {
        self.account
    }

    #[tracing::instrument(skip(self), fields(account = %self.account.id))]
    pub async fn deposit(&mut self, amount: Decimal) -> Result<()> {
        let amount = Amount::new(amount)?;
        self.account.deposit(amount)?;
        debug!(balance = %self.account.balance, "deposit applied");
        self.store.save_account(&self.account).await
    }

    #[tracing::instrument(skip(self), fields(account = %self.account.id))]
    pub async fn withdraw(&mut self, amount: Decimal) -> Result<()> {
        let amount = Amount::new(amount)?;
        self.account.withdraw(amount)?;
        debug!(balance = %self.account.balance, "withdrawal applied");
        self.store.save_account(&self.account).await
    }

    /// Moves `amount` from the bound account to `to`.
    ///
    /// Checks run in this order: amount validity, funds, then recipient identity, so a
    /// self-transfer the account cannot cover reports `InsufficientFunds`. A recipient whose
    /// balance cannot absorb `amount` fails with `BalanceOverflow` before either side changes.
    ///
    /// The two saves are not atomic. If the source is saved and the recipient save fails, the
    /// recipient's error is returned and the source stays debited; reconciling is up to the
    /// caller (typically by saving `to` again).
    #[tracing::instrument(skip(self, to), fields(from = %self.account.id, to = %to.id))]
    pub async fn transfer(&mut self, to: &mut Account, amount: Decimal) -> Result<()> {
        let amount = Amount::new(amount)?;
        self.account.ensure_funds(amount)?;
        if self.account.id == to.id {
            return Err(LedgerError::SameAccountTransfer(to.id.clone()));
        }

        to.credited(amount)?;

        self.account.send_transfer(amount, &to.id)?;
        to.receive_transfer(amount, &self.account.id)?;
        debug!("transfer applied to both accounts");

        self.store.save_account(&self.account).await?;
        self.store.save_account(to).await
    }

    pub fn balance(&self) -> Balance {
        self.account.balance
    }

    /// Chronological history of the bound account.
    pub fn transactions(&self) -> &[Transaction] {
        &self.account.transactions
    }

    pub fn statement(&self) -> String {
        statement::render(self.transactions())
    }
}
