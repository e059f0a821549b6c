//! End-to-end statement parse: normalize, scan, attribute amounts, build
//! records.

use anyhow::Result;
use ledgerline_core::{DrCr, TranType, Transaction};

use crate::normalize::normalize;
use crate::reconcile::{Column, Reconciliation, classify_single_amount};
use crate::scan::{TransactionScanner, parse_amount};

/// Result of parsing one statement's extracted text.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    /// Transactions in document order.
    pub transactions: Vec<Transaction>,
    /// Opening balance captured from the statement header, when present.
    pub opening_balance: Option<f64>,
    /// Single-amount rows whose balance delta matched neither sign. Such
    /// rows fall back to the withdrawal column and may be mis-signed.
    pub reconciliation_failures: usize,
}

/// Parse extracted statement text into ordered transactions.
///
/// Ambiguous content never aborts the parse: rows that cannot be reconciled
/// take the withdrawal fallback and are counted, and text without a single
/// structural match yields an empty transaction list.
pub fn parse_statement(raw_text: &str) -> Result<ParseOutcome> {
    let normalized = normalize(raw_text)?;
    let scanner = TransactionScanner::new()?;

    let mut transactions = Vec::new();
    let mut reconciliation_failures = 0usize;
    let mut prev_balance = normalized.opening_balance;

    for row in scanner.scan(&normalized.text) {
        // The scanner's closed-set alternation guarantees both tokens parse.
        let tran_type = match TranType::parse(row.tran_type) {
            Some(t) => t,
            None => continue,
        };
        let dr_cr = match DrCr::parse(row.dr_cr) {
            Some(d) => d,
            None => continue,
        };

        let balance = parse_amount(row.balance);
        let amounts: Vec<f64> = row.amounts.iter().map(|a| parse_amount(a)).collect();

        let (withdrawal, deposit) = match amounts.as_slice() {
            [amount] => {
                let (column, reconciliation) =
                    classify_single_amount(*amount, balance, prev_balance);
                if reconciliation == Reconciliation::Mismatch {
                    reconciliation_failures += 1;
                }
                match column {
                    Column::Withdrawal => (Some(*amount), None),
                    Column::Deposit => (None, Some(*amount)),
                }
            }
            [first, second] => (Some(*first), Some(*second)),
            // Three or more numeric tokens before the balance: column
            // attribution is unknowable, leave both unset.
            _ => (None, None),
        };

        transactions.push(Transaction {
            date: row.date.to_string(),
            value_date: row.value_date.to_string(),
            particulars: row.particulars.trim().to_string(),
            tran_type,
            tran_id: row.tran_id.to_string(),
            cheque_details: String::new(),
            withdrawal,
            deposit,
            balance,
            dr_cr,
        });
        prev_balance = Some(balance);
    }

    Ok(ParseOutcome {
        transactions,
        opening_balance: normalized.opening_balance,
        reconciliation_failures,
    })
}
