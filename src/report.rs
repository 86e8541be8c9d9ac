//! Settlement report CSV parsing.
//!
//! The `ViewAutomaticSettlementDetailsCSV` method returns a line-oriented
//! CSV whose column set varies by report version. Columns are matched by
//! their lowercased header name; headers this crate does not recognize
//! are skipped rather than treated as an error, so newer report versions
//! keep parsing.
//!
//! Quoting follows RFC 4180: fields may be wrapped in double quotes, and
//! a doubled quote inside a quoted field is a literal quote. Records do
//! not span lines in this report format.

use chrono::{DateTime, FixedOffset};

use crate::{PaygridError, Result};

/// One parsed settlement report row. Unpopulated columns stay `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettlementReportRow {
    /// The bookkeeping account the row belongs to.
    pub account_name: Option<String>,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub datestamp: Option<DateTime<FixedOffset>>,
    pub message_id: Option<String>,
    pub order_id: Option<String>,
    pub order_type: Option<String>,
    /// The total settled amount the row contributed to.
    pub total: Option<f64>,
    pub username: Option<String>,
    pub fx_payment_amount: Option<f64>,
    pub fx_payment_currency: Option<String>,
    pub settlement_bank_withdrawal_id: Option<String>,
    pub external_reference: Option<String>,
}

enum Column {
    AccountName,
    Amount,
    Currency,
    Datestamp,
    MessageId,
    OrderId,
    OrderType,
    Total,
    Username,
    FxPaymentAmount,
    FxPaymentCurrency,
    SettlementBankWithdrawalId,
    ExternalReference,
    /// Header we do not recognize; the column is ignored.
    Skip,
}

impl Column {
    fn from_header(header: &str) -> Self {
        match header.to_lowercase().as_str() {
            "accountname" => Self::AccountName,
            "amount" => Self::Amount,
            "currency" => Self::Currency,
            "datestamp" => Self::Datestamp,
            "messageid" => Self::MessageId,
            "orderid" => Self::OrderId,
            "ordertype" => Self::OrderType,
            "total" => Self::Total,
            "username" => Self::Username,
            "fxpaymentamount" => Self::FxPaymentAmount,
            "fxpaymentcurrency" => Self::FxPaymentCurrency,
            "settlementbankwithdrawalid" => Self::SettlementBankWithdrawalId,
            "externalreference" | "extraref" => Self::ExternalReference,
            _ => Self::Skip,
        }
    }

    fn apply(&self, row: &mut SettlementReportRow, value: &str) -> Result<()> {
        match self {
            Self::AccountName => row.account_name = Some(value.to_string()),
            Self::Amount => row.amount = Some(parse_decimal(value)?),
            Self::Currency => row.currency = Some(value.to_string()),
            Self::Datestamp => row.datestamp = Some(parse_datestamp(value)?),
            Self::MessageId => row.message_id = Some(value.to_string()),
            Self::OrderId => row.order_id = Some(value.to_string()),
            Self::OrderType => row.order_type = Some(value.to_string()),
            Self::Total => row.total = Some(parse_decimal(value)?),
            Self::Username => row.username = Some(value.to_string()),
            Self::FxPaymentAmount => row.fx_payment_amount = Some(parse_decimal(value)?),
            Self::FxPaymentCurrency => row.fx_payment_currency = Some(value.to_string()),
            Self::SettlementBankWithdrawalId => {
                row.settlement_bank_withdrawal_id = Some(value.to_string())
            }
            Self::ExternalReference => row.external_reference = Some(value.to_string()),
            Self::Skip => {}
        }
        Ok(())
    }
}

/// Parse a settlement report CSV into typed rows.
pub fn parse_settlement_report(csv: &str) -> Result<Vec<SettlementReportRow>> {
    let mut lines = csv.replace('\r', "");
    // A trailing newline is not an empty record.
    while lines.ends_with('\n') {
        lines.pop();
    }

    let mut iter = lines.split('\n');
    let header_line = match iter.next() {
        Some(line) if !line.is_empty() => line,
        _ => return Ok(Vec::new()),
    };

    let columns: Vec<Column> = split_csv_line(header_line)
        .iter()
        .map(|h| Column::from_header(h))
        .collect();

    let mut rows = Vec::new();
    for line in iter {
        if line.is_empty() {
            continue;
        }
        let fields = split_csv_line(line);
        let mut row = SettlementReportRow::default();
        for (column, field) in columns.iter().zip(fields.iter()) {
            if !field.is_empty() {
                column.apply(&mut row, field)?;
            }
        }
        rows.push(row);
    }

    Ok(rows)
}

fn parse_decimal(value: &str) -> Result<f64> {
    value.parse::<f64>().map_err(|_| {
        PaygridError::data(format!("could not convert value '{}' into a decimal", value))
    })
}

fn parse_datestamp(value: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f%#z").map_err(|_| {
        PaygridError::data(format!("could not convert value '{}' into a timestamp", value))
    })
}

fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if current.is_empty() => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);

    fields
}
