//! Text rendering of an account's history.

use crate::domain::transaction::Transaction;

pub const EMPTY_HISTORY: &str = "Transaction history is empty";
pub const HEADER: &str = "Date/Time | Type | Amount | Description";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders a header, a separator and one line per transaction, oldest first.
pub fn render(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return EMPTY_HISTORY.to_string();
    }

    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    out.push_str(&"-".repeat(60));
    out.push('\n');
    for tx in transactions {
        out.push_str(&format!(
            "{} | {} | {} | {}\n",
            tx.timestamp.format(TIMESTAMP_FORMAT),
            tx.kind,
            tx.amount,
            tx.message
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::Amount;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_history() {
        assert_eq!(render(&[]), EMPTY_HISTORY);
    }

    #[test]
    fn test_lines_in_insertion_order() {
        let txs = vec![
            Transaction::deposit(Amount::new(dec!(100)).unwrap()),
            Transaction::withdrawal(Amount::new(dec!(25.5)).unwrap()),
        ];
        let text = render(&txs);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], HEADER);
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].ends_with("| DEPOSIT | 100.00 | Deposit of 100.00"));
        assert!(lines[3].ends_with("| WITHDRAW | 25.50 | Withdrawal of 25.50"));
    }
}
