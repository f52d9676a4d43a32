use crate::domain::account::{AccountId, Balance};
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Invalid amount {0}: must be greater than zero")]
    InvalidAmount(Decimal),
    #[error("Insufficient funds in account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        account: AccountId,
        balance: Balance,
        requested: Decimal,
    },
    #[error("Balance of account {account} cannot absorb {amount}: balance {balance}")]
    BalanceOverflow {
        account: AccountId,
        balance: Balance,
        amount: Decimal,
    },
    #[error("Cannot transfer from account {0} to itself")]
    SameAccountTransfer(AccountId),
    #[error("Account not found: {0}")]
    AccountNotFound(String),
    #[error("Owner name must not be empty")]
    EmptyOwnerName,
    #[error("Storage error: {0}")]
    StorageError(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LedgerError {
    /// Wraps any backend failure as a `StorageError`.
    pub fn storage<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::StorageError(err.into())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::storage(err)
    }
}

#[cfg(feature = "storage-rocksdb")]
impl From<rocksdb::Error> for LedgerError {
    fn from(err: rocksdb::Error) -> Self {
        Self::storage(err)
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
