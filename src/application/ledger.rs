use super::service::AccountService;
use crate::domain::account::{Account, AccountId};
use crate::domain::id::{IdGenerator, SequentialIdGenerator};
use crate::domain::ports::AccountStoreRef;
use crate::error::{LedgerError, Result};
use tracing::info;

/// Entry point for everything that is not tied to a single account: opening accounts, looking
/// them up and binding an [`AccountService`] to one of them.
pub struct Ledger<G: IdGenerator = SequentialIdGenerator> {
    store: AccountStoreRef,
    ids: G,
}

impl Ledger<SequentialIdGenerator> {
    /// Builds a ledger whose id sequence continues after the accounts already in `store`.
    pub async fn restore(store: AccountStoreRef) -> Result<Self> {
        let existing = store.get_all_accounts().await?;
        let ids = SequentialIdGenerator::seeded_from(&existing);
        Ok(Self::new(store, ids))
    }
}

impl<G: IdGenerator> Ledger<G> {
    pub fn new(store: AccountStoreRef, ids: G) -> Self {
        Self { store, ids }
    }

    pub fn store(&self) -> &AccountStoreRef {
        &self.store
    }

    /// Creates an empty account for `owner_name` and persists it.
    ///
    /// A blank owner name is rejected before an id is consumed.
    pub async fn open_account(&mut self, owner_name: &str) -> Result<Account> {
        if owner_name.trim().is_empty() {
            return Err(LedgerError::EmptyOwnerName);
        }
        let account = Account::open(self.ids.next_id(), owner_name)?;
        self.store.save_account(&account).await?;
        info!(account = %account.id, owner = %account.owner_name, "account opened");
        Ok(account)
    }

    pub async fn load_account(&self, id: &str) -> Result<Account> {
        self.store.load_account(&AccountId::from(id)).await
    }

    /// All accounts, ordered by id.
    pub async fn accounts(&self) -> Result<Vec<Account>> {
        let mut accounts = self.store.get_all_accounts().await?;
        accounts.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(accounts)
    }

    /// Loads `id` and returns a service bound to it.
    pub async fn bind(&self, id: &str) -> Result<AccountService> {
        let account = self.load_account(id).await?;
        Ok(AccountService::new(account, self.store.clone()))
    }
}
