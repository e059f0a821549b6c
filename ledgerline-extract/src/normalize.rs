//! Raw statement text cleanup: header/footer removal and whitespace
//! collapsing.

use anyhow::Result;
use regex::Regex;

use crate::scan::parse_amount;

/// Statement text ready for structural scanning: no line breaks, fields
/// separated by single spaces.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedStatement {
    pub text: String,
    /// Amount on the header's `Opening Balance` line, when a header was
    /// recognized. Seeds the running balance for the first transaction.
    pub opening_balance: Option<f64>,
}

/// Strip the statement preamble (everything through the `Opening Balance`
/// line) and the `GRAND TOTAL` footer, then collapse every whitespace run to
/// a single space. Text without either marker passes through with
/// whitespace collapsing only; zero downstream matches is not an error.
pub fn normalize(raw: &str) -> Result<NormalizedStatement> {
    let header_re = Regex::new(
        r"(?is)^.*?opening\s+balance\s+(?P<amount>\d+(?:,\d{3})*\.\d{2})\s+(?:cr|dr)\b",
    )?;
    let footer_re = Regex::new(r"(?is)\s+grand\s+total.*")?;
    let whitespace_re = Regex::new(r"\s+")?;

    let mut opening_balance = None;
    let mut text = raw;
    if let Some(caps) = header_re.captures(raw) {
        opening_balance = Some(parse_amount(&caps["amount"]));
        text = &raw[caps.get(0).map_or(0, |m| m.end())..];
    }

    let text = footer_re.replace(text, "");
    let text = whitespace_re.replace_all(&text, " ").into_owned();

    Ok(NormalizedStatement { text, opening_balance })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_header_and_captures_opening_balance() {
        let raw = "SOMEBANK LIMITED\nStatement of Account\n\
                   Date  Value Date  Particulars  Tran Type\n\
                   Opening Balance  1,000.00  Cr\n\
                   02-JAN-2023  02-JAN-2023  SALARY  SBINT  R1  500.00  1,500.00  Cr";
        let normalized = normalize(raw).unwrap();
        assert_eq!(normalized.opening_balance, Some(1000.0));
        assert_eq!(
            normalized.text,
            " 02-JAN-2023 02-JAN-2023 SALARY SBINT R1 500.00 1,500.00 Cr"
        );
    }

    #[test]
    fn test_header_recognition_ignores_case_and_line_breaks() {
        let raw = "noise\nOPENING\nBALANCE 2,500.00 dr\nrest";
        let normalized = normalize(raw).unwrap();
        assert_eq!(normalized.opening_balance, Some(2500.0));
        assert_eq!(normalized.text, " rest");
    }

    #[test]
    fn test_strips_grand_total_footer() {
        let raw = "02-JAN-2023 row text Cr\nGRAND TOTAL 700.00 500.00\npage footer";
        let normalized = normalize(raw).unwrap();
        assert_eq!(normalized.text, "02-JAN-2023 row text Cr");
        assert_eq!(normalized.opening_balance, None);
    }

    #[test]
    fn test_text_without_markers_only_collapses_whitespace() {
        let normalized = normalize("plain   text\n\nacross\tpages").unwrap();
        assert_eq!(normalized.text, "plain text across pages");
        assert_eq!(normalized.opening_balance, None);
    }
}
