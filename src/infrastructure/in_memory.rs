use crate::domain::account::{Account, AccountId};
use crate::domain::ports::AccountStore;
use crate::error::{LedgerError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory account store.
///
/// Uses `Arc<RwLock<HashMap<AccountId, Account>>>` so clones share the same accounts. The lock
/// only keeps individual calls sound; it does not make multi-step operations such as transfers
/// atomic. Nothing is ever evicted.
#[derive(Default, Clone)]
pub struct InMemoryAccountStore {
    accounts: Arc<RwLock<HashMap<AccountId, Account>>>,
}

impl InMemoryAccountStore {
    /// Creates a new, empty in-memory account store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn save_account(&self, account: &Account) -> Result<()> {
        let mut accounts = self.accounts.write().await;
        accounts.insert(account.id.clone(), account.clone());
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::{Amount, Balance};
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_in_memory_account_store() {
        let store = InMemoryAccountStore::new();
        let mut account = Account::open(AccountId::from_sequence(1), "Alice").unwrap();
        account.deposit(Amount::new(dec!(100.0)).unwrap()).unwrap();

        store.save_account(&account).await.unwrap();
        let retrieved = store.load_account(&account.id).await.unwrap();
        assert_eq!(retrieved, account);

        assert!(matches!(
            store.load_account(&AccountId::from_sequence(2)).await,
            Err(LedgerError::AccountNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_save_is_an_upsert() {
        let store = InMemoryAccountStore::new();
        let mut account = Account::open(AccountId::from_sequence(1), "Alice").unwrap();
        store.save_account(&account).await.unwrap();
        store.save_account(&account).await.unwrap();

        account.deposit(Amount::new(dec!(5)).unwrap()).unwrap();
        store.save_account(&account).await.unwrap();

        let all = store.get_all_accounts().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].balance, Balance::new(dec!(5)));
    }

    #[tokio::test]
    async fn test_get_all_accounts_empty() {
        let store = InMemoryAccountStore::new();
        assert!(store.get_all_accounts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = InMemoryAccountStore::new();
        let other = store.clone();
        let account = Account::open(AccountId::from_sequence(1), "Alice").unwrap();
        store.save_account(&account).await.unwrap();
        assert_eq!(other.load_account(&account.id).await.unwrap(), account);
    }
}
