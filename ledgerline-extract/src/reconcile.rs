//! Withdrawal-vs-deposit attribution for single-amount rows.

/// Largest absolute difference still treated as a balanced delta: one minor
/// currency unit of rounding slack.
pub const BALANCE_TOLERANCE: f64 = 0.01;

/// Column a printed amount belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Withdrawal,
    Deposit,
}

/// How a single-amount row related to the running balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    /// The balance delta matched the amount under the chosen sign.
    Balanced,
    /// First row of a document with no opening balance to reconcile against.
    NoPriorBalance,
    /// The delta matched neither sign; the amount falls back to the
    /// withdrawal column and the row may carry the wrong sign.
    Mismatch,
}

/// Decide which column a lone amount belongs to by reconciling the reported
/// balance against the previous one. Pure over its inputs; the caller
/// advances the running balance after building the record.
pub fn classify_single_amount(
    amount: f64,
    balance: f64,
    prev_balance: Option<f64>,
) -> (Column, Reconciliation) {
    let Some(prev) = prev_balance else {
        return (Column::Withdrawal, Reconciliation::NoPriorBalance);
    };

    let delta = balance - prev;
    if (delta + amount).abs() < BALANCE_TOLERANCE {
        (Column::Withdrawal, Reconciliation::Balanced)
    } else if (delta - amount).abs() < BALANCE_TOLERANCE {
        (Column::Deposit, Reconciliation::Balanced)
    } else {
        (Column::Withdrawal, Reconciliation::Mismatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_fell_by_amount_is_withdrawal() {
        let (column, reconciliation) = classify_single_amount(200.0, 1300.0, Some(1500.0));
        assert_eq!(column, Column::Withdrawal);
        assert_eq!(reconciliation, Reconciliation::Balanced);
    }

    #[test]
    fn test_balance_rose_by_amount_is_deposit() {
        let (column, reconciliation) = classify_single_amount(500.0, 1500.0, Some(1000.0));
        assert_eq!(column, Column::Deposit);
        assert_eq!(reconciliation, Reconciliation::Balanced);
    }

    #[test]
    fn test_rounding_slack_inside_tolerance() {
        let (column, reconciliation) = classify_single_amount(0.1, 1000.25, Some(1000.15));
        assert_eq!(column, Column::Deposit);
        assert_eq!(reconciliation, Reconciliation::Balanced);
    }

    #[test]
    fn test_unreconcilable_delta_defaults_to_withdrawal() {
        let (column, reconciliation) = classify_single_amount(300.0, 2000.0, Some(1000.0));
        assert_eq!(column, Column::Withdrawal);
        assert_eq!(reconciliation, Reconciliation::Mismatch);
    }

    #[test]
    fn test_no_prior_balance_defaults_to_withdrawal() {
        let (column, reconciliation) = classify_single_amount(500.0, 1500.0, None);
        assert_eq!(column, Column::Withdrawal);
        assert_eq!(reconciliation, Reconciliation::NoPriorBalance);
    }
}
