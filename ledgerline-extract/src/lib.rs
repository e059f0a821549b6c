//! ledgerline-extract: recovers structured transactions from bank-statement
//! text.
//!
//! The pipeline runs strictly forward: [`normalize`] cleans the raw page
//! text, [`scan::TransactionScanner`] finds structural matches in document
//! order, [`reconcile`] resolves which column a lone amount belongs to using
//! the running balance, and [`parse_statement`] ties the stages together into
//! an ordered record list.

pub mod normalize;
pub mod pages;
pub mod reconcile;
pub mod scan;
pub mod statement;

pub use normalize::{NormalizedStatement, normalize};
pub use pages::{fetch_pages_ordered, join_pages};
pub use reconcile::{BALANCE_TOLERANCE, Column, Reconciliation, classify_single_amount};
pub use scan::{RawMatch, TransactionScanner};
pub use statement::{ParseOutcome, parse_statement};
