use super::account::{AccountId, Amount};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    Deposit,
    Withdraw,
    Transfer,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Deposit => "DEPOSIT",
            TransactionKind::Withdraw => "WITHDRAW",
            TransactionKind::Transfer => "TRANSFER",
        };
        f.write_str(label)
    }
}

/// An entry in an account's history. Never edited once appended.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Transaction {
    pub kind: TransactionKind,
    pub amount: Amount,
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

impl Transaction {
    fn now(kind: TransactionKind, amount: Amount, message: String) -> Self {
        Self {
            kind,
            amount,
            timestamp: Utc::now(),
            message,
        }
    }

    pub fn deposit(amount: Amount) -> Self {
        Self::now(
            TransactionKind::Deposit,
            amount,
            format!("Deposit of {amount}"),
        )
    }

    pub fn withdrawal(amount: Amount) -> Self {
        Self::now(
            TransactionKind::Withdraw,
            amount,
            format!("Withdrawal of {amount}"),
        )
    }

    pub fn transfer_out(amount: Amount, recipient: &AccountId) -> Self {
        Self::now(
            TransactionKind::Transfer,
            amount,
            format!("Transfer to account {recipient} of {amount}"),
        )
    }

    pub fn transfer_in(amount: Amount, sender: &AccountId) -> Self {
        Self::now(
            TransactionKind::Transfer,
            amount,
            format!("Transfer from account {sender} of {amount}"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_messages() {
        let amount = Amount::new(dec!(40)).unwrap();
        assert_eq!(Transaction::deposit(amount).message, "Deposit of 40.00");
        assert_eq!(
            Transaction::withdrawal(amount).message,
            "Withdrawal of 40.00"
        );

        let to = AccountId::from_sequence(2);
        let tx = Transaction::transfer_out(amount, &to);
        assert_eq!(tx.kind, TransactionKind::Transfer);
        assert_eq!(tx.message, "Transfer to account ACC000002 of 40.00");
    }

    #[test]
    fn test_kind_serializes_uppercase() {
        let json = serde_json::to_string(&TransactionKind::Withdraw).unwrap();
        assert_eq!(json, "\"WITHDRAW\"");
        assert_eq!(TransactionKind::Deposit.to_string(), "DEPOSIT");
    }
}
