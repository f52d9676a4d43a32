#![allow(dead_code)]

use async_trait::async_trait;
use minibank::application::service::AccountService;
use minibank::domain::account::{Account, AccountId};
use minibank::domain::ports::{AccountStore, AccountStoreRef};
use minibank::error::{LedgerError, Result};
use minibank::infrastructure::in_memory::InMemoryAccountStore;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// In-memory store whose saves can be made to fail for chosen accounts.
#[derive(Default)]
pub struct FlakyStore {
    inner: InMemoryAccountStore,
    failing: Mutex<HashSet<AccountId>>,
}

impl FlakyStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn fail_saves_of(&self, id: &AccountId) {
        self.failing.lock().unwrap().insert(id.clone());
    }

    pub fn heal(&self) {
        self.failing.lock().unwrap().clear();
    }
}

#[async_trait]
impl AccountStore for FlakyStore {
    async fn save_account(&self, account: &Account) -> Result<()> {
        if self.failing.lock().unwrap().contains(&account.id) {
            return Err(LedgerError::storage(format!("disk full while saving {}", account.id)));
        }
        self.inner.save_account(account).await
    }

    async fn load_account(&self, id: &AccountId) -> Result<Account> {
        self.inner.load_account(id).await
    }

    async fn get_all_accounts(&self) -> Result<Vec<Account>> {
        self.inner.get_all_accounts().await
    }
}

/// Opens and saves an account, returning a service bound to it.
pub async fn bound(store: &AccountStoreRef, seq: u64, owner: &str) -> AccountService {
    let account = Account::open(AccountId::from_sequence(seq), owner).unwrap();
    store.save_account(&account).await.unwrap();
    AccountService::new(account, store.clone())
}
