//! Typed statement transaction records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Statement date layout: `02-JAN-2023`.
pub const DATE_FORMAT: &str = "%d-%b-%Y";

/// Transaction category codes printed by this statement format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TranType {
    #[serde(rename = "TFR")]
    Tfr,
    #[serde(rename = "FT")]
    Ft,
    #[serde(rename = "CLG")]
    Clg,
    #[serde(rename = "SBINT")]
    Sbint,
    #[serde(rename = "MB")]
    Mb,
    #[serde(rename = "POS")]
    Pos,
    #[serde(rename = "CHRG")]
    Chrg,
    #[serde(rename = "IFN")]
    Ifn,
}

impl TranType {
    /// Every code in the closed set.
    pub const ALL: [TranType; 8] = [
        TranType::Tfr,
        TranType::Ft,
        TranType::Clg,
        TranType::Sbint,
        TranType::Mb,
        TranType::Pos,
        TranType::Chrg,
        TranType::Ifn,
    ];

    /// Parse a printed code, ignoring case. Returns `None` for tokens
    /// outside the closed set.
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "TFR" => Some(TranType::Tfr),
            "FT" => Some(TranType::Ft),
            "CLG" => Some(TranType::Clg),
            "SBINT" => Some(TranType::Sbint),
            "MB" => Some(TranType::Mb),
            "POS" => Some(TranType::Pos),
            "CHRG" => Some(TranType::Chrg),
            "IFN" => Some(TranType::Ifn),
            _ => None,
        }
    }

    /// Canonical printed form of the code.
    pub fn as_str(&self) -> &'static str {
        match self {
            TranType::Tfr => "TFR",
            TranType::Ft => "FT",
            TranType::Clg => "CLG",
            TranType::Sbint => "SBINT",
            TranType::Mb => "MB",
            TranType::Pos => "POS",
            TranType::Chrg => "CHRG",
            TranType::Ifn => "IFN",
        }
    }
}

/// Whether the reported balance is a credit or debit balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrCr {
    Cr,
    Dr,
}

impl DrCr {
    /// Parse a printed indicator, ignoring case.
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "CR" => Some(DrCr::Cr),
            "DR" => Some(DrCr::Dr),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DrCr::Cr => "Cr",
            DrCr::Dr => "Dr",
        }
    }
}

/// One extracted statement transaction.
///
/// Date and value-date keep the text exactly as printed (`DD-MMM-YYYY`);
/// `date_parsed`/`value_date_parsed` give typed access. At most one of
/// `withdrawal`/`deposit` is set when the statement prints a single amount
/// column; both are set when it prints two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: String,
    pub value_date: String,
    pub particulars: String,
    pub tran_type: TranType,
    pub tran_id: String,
    /// Always empty in this statement variant; kept for column parity.
    pub cheque_details: String,
    pub withdrawal: Option<f64>,
    pub deposit: Option<f64>,
    /// Running account balance after this transaction.
    pub balance: f64,
    pub dr_cr: DrCr,
}

impl Transaction {
    pub fn date_parsed(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    pub fn value_date_parsed(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.value_date, DATE_FORMAT).ok()
    }

    /// Net movement: deposit minus withdrawal, unset columns as zero.
    pub fn signed_amount(&self) -> f64 {
        self.deposit.unwrap_or(0.0) - self.withdrawal.unwrap_or(0.0)
    }
}
