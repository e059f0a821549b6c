//! ledgerline-core: statement transaction data model and CSV rendering.

pub mod csv_out;
pub mod transaction;

pub use csv_out::{CSV_HEADER, to_csv};
pub use transaction::{DrCr, TranType, Transaction};
