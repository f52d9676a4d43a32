use minibank::application::service::AccountService;
use minibank::domain::account::{Account, AccountId, Balance};
use minibank::domain::ports::{AccountStore, AccountStoreRef};
use minibank::infrastructure::in_memory::InMemoryAccountStore;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use std::sync::Arc;

mod common;

fn random_amount(rng: &mut StdRng) -> Decimal {
    // cents in [-50.00, 200.00] so invalid and oversized amounts both show up
    Decimal::new(rng.gen_range(-5_000..=20_000), 2)
}

#[tokio::test]
async fn test_random_operations_keep_balances_non_negative() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let store: AccountStoreRef = Arc::new(InMemoryAccountStore::new());
    let mut services = Vec::new();
    for seq in 1..=4 {
        services.push(common::bound(&store, seq, "Owner").await);
    }

    for _ in 0..2_000 {
        let from = rng.gen_range(0..services.len());
        let amount = random_amount(&mut rng);
        match rng.gen_range(0..3) {
            0 => {
                let _ = services[from].deposit(amount).await;
            }
            1 => {
                let _ = services[from].withdraw(amount).await;
            }
            _ => {
                let to = rng.gen_range(0..services.len());
                let mut recipient = services[to].account().clone();
                if services[from].transfer(&mut recipient, amount).await.is_ok() {
                    // keep the recipient's bound copy in step with the store
                    services[to] = AccountService::new(recipient, store.clone());
                }
            }
        }
        for svc in &services {
            assert!(svc.balance() >= Balance::ZERO);
        }
    }

    let stored = store.get_all_accounts().await.unwrap();
    assert_eq!(stored.len(), 4);
    for account in stored {
        assert!(account.balance >= Balance::ZERO);
        let bound = services
            .iter()
            .find(|svc| svc.account().id == account.id)
            .unwrap();
        assert_eq!(bound.account(), &account);
    }
}

#[tokio::test]
async fn test_balance_equals_sum_of_history() {
    let mut rng = StdRng::seed_from_u64(7);
    let store: AccountStoreRef = Arc::new(InMemoryAccountStore::new());
    let account = Account::open(AccountId::from_sequence(1), "Alice").unwrap();
    let mut svc = AccountService::new(account, store);

    for _ in 0..500 {
        let amount = random_amount(&mut rng);
        let _ = if rng.gen_bool(0.5) {
            svc.deposit(amount).await
        } else {
            svc.withdraw(amount).await
        };
    }

    let replayed: Decimal = svc
        .transactions()
        .iter()
        .map(|tx| match tx.kind {
            minibank::domain::transaction::TransactionKind::Deposit => tx.amount.value(),
            _ => -tx.amount.value(),
        })
        .sum();
    assert_eq!(svc.balance(), Balance::new(replayed));
}
