use super::account::{Account, AccountId};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Keyed persistence of accounts.
///
/// `load_account` fails with `AccountNotFound` for unknown ids; backend failures surface as
/// `StorageError`. Implementations hand out copies, so callers must `save_account` after every
/// mutation.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Inserts or replaces the account stored under `account.id`.
    async fn save_account(&self, account: &Account) -> Result<()>;
    async fn load_account(&self, id: &AccountId) -> Result<Account>;
    /// Every stored account, in no particular order.
    async fn get_all_accounts(&self) -> Result<Vec<Account>>;
}

pub type AccountStoreRef = Arc<dyn AccountStore>;
