use crate::domain::account::{Account, AccountId};
use crate::domain::ports::AccountStore;
use crate::error::{LedgerError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, IteratorMode, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family for storing accounts.
pub const CF_ACCOUNTS: &str = "accounts";

/// A persistent account store using RocksDB.
///
/// Accounts are stored as JSON under their id in the `accounts` column family.
/// `Clone` shares the underlying `Arc<DB>`.
#[derive(Clone)]
pub struct RocksDBStore {
    db: Arc<DB>,
}

impl RocksDBStore {
    /// Opens or creates a RocksDB instance at `path`, creating the column family if missing.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_accounts = ColumnFamilyDescriptor::new(CF_ACCOUNTS, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_accounts])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn accounts_cf(&self) -> Result<&rocksdb::ColumnFamily> {
        self.db
            .cf_handle(CF_ACCOUNTS)
            .ok_or_else(|| LedgerError::storage("accounts column family not found"))
    }
}

#[async_trait]
impl AccountStore for RocksDBStore {
    async fn save_account(&self, account: &Account) -> Result<()> {
        let cf = self.accounts_cf()?;
        let value = serde_json::to_vec(account)?;
        self.db.put_cf(cf, account.id.as_str().as_bytes(), value)?;
        Ok(())
    }

    async fn load_account(&self, id: &AccountId) -> Result<Account> {
        let cf = self.accounts_cf()?;
        match self.db.get_pinned_cf(cf, id.as_str().as_bytes())? {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => Err(LedgerError::AccountNotFound(id.to_string())),
        }
    }

    async fn get_all_accounts(&self) -> Result<Vec<Account>> {
        let cf = self.accounts_cf()?;
        let mut accounts = Vec::new();
        for item in self.db.iterator_cf(cf, IteratorMode::Start) {
            let (_key, value) = item?;
            accounts.push(serde_json::from_slice(&value)?);
        }
        Ok(accounts)
    }
}
