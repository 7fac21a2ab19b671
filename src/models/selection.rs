use chrono::NaiveDate;
use derive_getters::Getters;
use thiserror::Error;

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SelectionError {
    #[error("Please enter a stock ticker symbol.")]
    EmptySymbol,
    #[error("Invalid {field} '{value}', expected YYYY-MM-DD.")]
    InvalidDate { field: &'static str, value: String },
    #[error("Start date must be before end date.")]
    InvalidRange,
}

/// Ticker and date range for one analysis pass. Only constructible when the
/// symbol is non-empty and `start < end`.
#[derive(Clone, Debug, Eq, Getters, PartialEq)]
pub struct UserSelection {
    symbol: String,
    start: NaiveDate,
    end: NaiveDate,
}

impl UserSelection {
    pub fn new(symbol: &str, start: NaiveDate, end: NaiveDate) -> Result<Self, SelectionError> {
        let symbol = symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(SelectionError::EmptySymbol);
        }
        if start >= end {
            return Err(SelectionError::InvalidRange);
        }

        Ok(Self { symbol, start, end })
    }

    pub fn parse(symbol: &str, start: &str, end: &str) -> Result<Self, SelectionError> {
        if symbol.trim().is_empty() {
            return Err(SelectionError::EmptySymbol);
        }
        let start = parse_date(start, "start date")?;
        let end = parse_date(end, "end date")?;

        Self::new(symbol, start, end)
    }
}

fn parse_date(value: &str, field: &'static str) -> Result<NaiveDate, SelectionError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        SelectionError::InvalidDate {
            field,
            value: value.to_string(),
        }
    })
}
