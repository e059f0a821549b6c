//! CSV rendering of extracted transactions.

use anyhow::{Context, Result};

use crate::transaction::Transaction;

/// Output columns, in order. The header row is present even for an empty
/// transaction list.
pub const CSV_HEADER: [&str; 10] = [
    "Date",
    "Value Date",
    "Particulars",
    "Tran Type",
    "Tran ID",
    "Cheque Details",
    "Withdrawals",
    "Deposits",
    "Balance",
    "DR/CR",
];

fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

fn format_optional(value: Option<f64>) -> String {
    value.map(format_amount).unwrap_or_default()
}

/// Render transactions as CSV, one row per transaction in input order.
///
/// Fields containing the delimiter, quotes, or line breaks are quoted;
/// everything else is written as-is, so typical statement output has no
/// quoting at all.
pub fn to_csv(transactions: &[Transaction]) -> Result<String> {
    let mut buffer = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buffer);
        writer.write_record(CSV_HEADER)?;

        for txn in transactions {
            let withdrawal = format_optional(txn.withdrawal);
            let deposit = format_optional(txn.deposit);
            let balance = format_amount(txn.balance);
            writer.write_record([
                txn.date.as_str(),
                txn.value_date.as_str(),
                txn.particulars.as_str(),
                txn.tran_type.as_str(),
                txn.tran_id.as_str(),
                txn.cheque_details.as_str(),
                withdrawal.as_str(),
                deposit.as_str(),
                balance.as_str(),
                txn.dr_cr.as_str(),
            ])?;
        }

        writer.flush().context("flushing CSV output")?;
    }
    String::from_utf8(buffer).context("CSV output was not valid UTF-8")
}
