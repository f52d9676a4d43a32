use super::account::{Account, AccountId};

/// Source of identifiers for new accounts.
///
/// Any `FnMut() -> AccountId` closure is a generator, which keeps tests deterministic.
pub trait IdGenerator: Send {
    fn next_id(&mut self) -> AccountId;
}

impl<F> IdGenerator for F
where
    F: FnMut() -> AccountId + Send,
{
    fn next_id(&mut self) -> AccountId {
        self()
    }
}

/// Monotonic counter producing `ACC000001`, `ACC000002`, ...
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }

    /// Continues after the highest generated id among `accounts`.
    ///
    /// Ids that do not follow the `ACC` format are ignored.
    pub fn seeded_from<'a>(accounts: impl IntoIterator<Item = &'a Account>) -> Self {
        let highest = accounts
            .into_iter()
            .filter_map(|account| account.id.sequence())
            .max()
            .unwrap_or(0);
        Self::starting_at(highest + 1)
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> AccountId {
        let id = AccountId::from_sequence(self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_starts_at_one() {
        let mut ids = SequentialIdGenerator::new();
        assert_eq!(ids.next_id().as_str(), "ACC000001");
        assert_eq!(ids.next_id().as_str(), "ACC000002");
    }

    #[test]
    fn test_seeded_from_existing_accounts() {
        let accounts = vec![
            Account::open(AccountId::from_sequence(7), "Alice").unwrap(),
            Account::open(AccountId::from_sequence(3), "Bob").unwrap(),
            Account::open(AccountId::new("legacy-1"), "Carol").unwrap(),
        ];
        let mut ids = SequentialIdGenerator::seeded_from(&accounts);
        assert_eq!(ids.next_id().as_str(), "ACC000008");

        let mut empty = SequentialIdGenerator::seeded_from(std::iter::empty());
        assert_eq!(empty.next_id().as_str(), "ACC000001");
    }

    #[test]
    fn test_closure_generator() {
        let mut n = 100;
        let mut ids = move || {
            n += 1;
            AccountId::new(format!("T{n}"))
        };
        assert_eq!(IdGenerator::next_id(&mut ids).as_str(), "T101");
    }
}
