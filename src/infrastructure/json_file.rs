use crate::domain::account::{Account, AccountId};
use crate::domain::ports::AccountStore;
use crate::error::{LedgerError, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::debug;

/// File-backed account store.
///
/// The whole ledger lives in one JSON document mapping ids to accounts. It is read once on
/// [`JsonFileStore::open`] and rewritten on every save through a temporary file in the same
/// directory followed by a rename, so a crash mid-write leaves the previous document intact.
pub struct JsonFileStore {
    path: PathBuf,
    accounts: RwLock<BTreeMap<AccountId, Account>>,
}

impl JsonFileStore {
    /// Opens the document at `path`, starting empty if the file does not exist yet.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let accounts = if path.exists() {
            let file = File::open(&path).map_err(LedgerError::storage)?;
            serde_json::from_reader(BufReader::new(file))?
        } else {
            BTreeMap::new()
        };
        debug!(path = %path.display(), accounts = accounts.len(), "json store opened");
        Ok(Self {
            path,
            accounts: RwLock::new(accounts),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_document(&self, accounts: &BTreeMap<AccountId, Account>) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(LedgerError::storage)?;

        let tmp = tempfile::NamedTempFile::new_in(&dir).map_err(LedgerError::storage)?;
        {
            let mut writer = BufWriter::new(tmp.as_file());
            serde_json::to_writer_pretty(&mut writer, accounts)?;
            writer.flush().map_err(LedgerError::storage)?;
        }
        tmp.persist(&self.path)
            .map_err(|e| LedgerError::storage(e.error))?;
        Ok(())
    }
}

#[async_trait]
impl AccountStore for JsonFileStore {
    async fn save_account(&self, account: &Account) -> Result<()> {
        let mut accounts = self.accounts.write().await;
        let previous = accounts.insert(account.id.clone(), account.clone());
        if let Err(err) = self.write_document(&accounts) {
            // keep the cache in line with what is on disk
            match previous {
                Some(previous) => accounts.insert(account.id.clone(), previous),
                None => accounts.remove(&account.id),
            };
            return Err(err);
        }
        Ok(())
    }

    async fn load_account(&self, id: &AccountId) -> Result<Account> {
        let accounts = self.accounts.read().await;
        accounts
            .get(id)
            .cloned()
            .ok_or_else(|| LedgerError::AccountNotFound(id.to_string()))
    }

    async fn get_all_accounts(&self) -> Result<Vec<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().cloned().collect())
    }
}
