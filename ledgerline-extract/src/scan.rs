//! Structural transaction matching over normalized statement text.
//!
//! Expected row shape after whitespace collapsing:
//!   02-JAN-2023 02-JAN-2023 SALARY JAN SBINT REF001 500.00 1,500.00 Cr
//!   05-JAN-2023 05-JAN-2023 TRANSFER OUT TFR T789 100.00 50.00 1,250.00 Cr
//!
//! A row prints either one or two amounts before the balance; the grammar
//! alone cannot tell a lone withdrawal from a lone deposit, so the amounts
//! group is captured greedily and attribution happens downstream against the
//! running balance.

use anyhow::Result;
use regex::{Captures, Regex};

/// Captured substrings from one structural match, in field order.
/// Transient: consumed immediately by the record-building step.
#[derive(Debug, Clone, PartialEq)]
pub struct RawMatch<'t> {
    pub date: &'t str,
    pub value_date: &'t str,
    pub particulars: &'t str,
    pub tran_type: &'t str,
    pub tran_id: &'t str,
    /// One or two printed amounts, in column order.
    pub amounts: Vec<&'t str>,
    pub balance: &'t str,
    pub dr_cr: &'t str,
}

impl<'t> RawMatch<'t> {
    fn from_captures(caps: Captures<'t>) -> Self {
        RawMatch {
            date: group(&caps, "date"),
            value_date: group(&caps, "value_date"),
            particulars: group(&caps, "particulars"),
            tran_type: group(&caps, "tran_type"),
            tran_id: group(&caps, "tran_id"),
            amounts: group(&caps, "amounts").split_whitespace().collect(),
            balance: group(&caps, "balance"),
            dr_cr: group(&caps, "dr_cr"),
        }
    }
}

fn group<'t>(caps: &Captures<'t>, name: &str) -> &'t str {
    caps.name(name).map_or("", |m| m.as_str())
}

/// Parse a matched amount token, stripping thousands separators. The
/// scanner's pattern guarantees the numeric shape.
pub(crate) fn parse_amount(token: &str) -> f64 {
    token.replace(',', "").parse().unwrap_or(0.0)
}

/// Compiled matcher for the statement's transaction row shape.
pub struct TransactionScanner {
    pattern: Regex,
}

impl TransactionScanner {
    pub fn new() -> Result<Self> {
        // Non-greedy particulars stop at the first transaction-type token;
        // the amounts group then swallows every numeric token up to the
        // final balance + indicator pair.
        let pattern = Regex::new(concat!(
            r"(?i)\b(?P<date>\d{2}-[A-Z]{3}-\d{4})\s+",
            r"(?P<value_date>\d{2}-[A-Z]{3}-\d{4})\s+",
            r"(?P<particulars>.+?)\s+",
            r"(?P<tran_type>TFR|FT|CLG|SBINT|MB|POS|CHRG|IFN)\s+",
            r"(?P<tran_id>\S+)\s+",
            r"(?P<amounts>(?:\d+(?:,\d{3})*\.\d{2}\s+)+)",
            r"(?P<balance>\d+(?:,\d{3})*\.\d{2})\s+",
            r"(?P<dr_cr>Cr|Dr)\b",
        ))?;
        Ok(Self { pattern })
    }

    /// Scan left to right, yielding non-overlapping matches in document
    /// order. Text with no structural match yields an empty sequence.
    pub fn scan<'t>(&self, text: &'t str) -> impl Iterator<Item = RawMatch<'t>> {
        self.pattern.captures_iter(text).map(RawMatch::from_captures)
    }
}
