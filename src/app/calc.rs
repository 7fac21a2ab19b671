use chrono::NaiveDate;
use derive_getters::Getters;
use rust_decimal::{Decimal, prelude::FromPrimitive};

use crate::models::PriceSeries;

const SENTENCE_DELIMITER: &str = ". ";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn of(change: f64) -> Self {
        if change >= 0.0 {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

pub fn price_change(current: Option<f64>, previous: Option<f64>) -> Option<f64> {
    Some(current? - previous?)
}

pub fn percent_change(current: Option<f64>, previous: Option<f64>) -> Option<f64> {
    let previous = previous.filter(|p| *p != 0.0)?;
    Some((current? - previous) / previous * 100.0)
}

/// Close-to-close change in percent; the first row has no prior and is 0.
pub fn daily_returns(closes: &[f64]) -> Vec<f64> {
    let mut returns = Vec::with_capacity(closes.len());
    for (i, close) in closes.iter().enumerate() {
        let change = match i {
            0 => 0.0,
            _ => (close - closes[i - 1]) / closes[i - 1] * 100.0,
        };
        returns.push(if change.is_finite() { change } else { 0.0 });
    }
    returns
}

pub fn round2(value: f64) -> Decimal {
    Decimal::from_f64(value)
        .map(|d| d.round_dp(2))
        .unwrap_or(Decimal::ZERO)
}

/// Splits a free-text summary into three paragraphs of roughly equal
/// sentence count.
pub fn split_summary(text: &str) -> [String; 3] {
    let sentences: Vec<&str> = text.split(SENTENCE_DELIMITER).collect();
    let third = sentences.len() / 3;

    if third == 0 {
        return [text.to_string(), String::new(), String::new()];
    }

    [
        format!("{}.", sentences[..third].join(SENTENCE_DELIMITER)),
        format!("{}.", sentences[third..2 * third].join(SENTENCE_DELIMITER)),
        sentences[2 * third..].join(SENTENCE_DELIMITER),
    ]
}

pub const NO_BUSINESS_SUMMARY: &str = "No business summary available.";

pub fn business_paragraphs(summary: Option<&str>) -> Vec<String> {
    match summary {
        Some(text) => split_summary(text).to_vec(),
        None => vec![NO_BUSINESS_SUMMARY.to_string()],
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ColumnLabel {
    Field(String),
    Nested(String, String),
}

pub fn flatten_columns(labels: &[ColumnLabel]) -> Vec<String> {
    labels
        .iter()
        .map(|label| match label {
            ColumnLabel::Field(field) | ColumnLabel::Nested(_, field) => field.clone(),
        })
        .collect()
}

#[derive(Clone, Debug, Getters, PartialEq)]
pub struct HistoryRow {
    date: NaiveDate,
    open: Decimal,
    high: Decimal,
    low: Decimal,
    close: Decimal,
    adj_close: Option<Decimal>,
    pct_change: Decimal,
    volume: u64,
}

/// Date-indexed view of a daily series, rounded for display and export.
#[derive(Clone, Debug, Getters, PartialEq)]
pub struct HistoryTable {
    ticker: String,
    columns: Vec<String>,
    rows: Vec<HistoryRow>,
}

impl HistoryTable {
    pub fn from_series(ticker: &str, series: &PriceSeries) -> Self {
        let mut columns = vec![String::from("Date")];
        for field in flatten_columns(&series.column_labels()) {
            if field == "Volume" {
                columns.push(String::from("% Change"));
            }
            columns.push(field);
        }

        let returns = daily_returns(&series.closes());
        let rows = series
            .samples()
            .iter()
            .zip(returns)
            .map(|(sample, change)| HistoryRow {
                date: sample.date(),
                open: round2(*sample.open()),
                high: round2(*sample.high()),
                low: round2(*sample.low()),
                close: round2(*sample.close()),
                adj_close: sample.adj_close().map(round2),
                pct_change: round2(change),
                volume: *sample.volume(),
            })
            .collect();

        Self {
            ticker: ticker.to_string(),
            columns,
            rows,
        }
    }

    pub fn has_adj_close(&self) -> bool {
        self.columns.iter().any(|c| c == "Adj Close")
    }

    /// Cells in column order, prices with two decimals.
    pub fn record(&self, row: &HistoryRow) -> Vec<String> {
        let mut record = vec![
            row.date.format("%Y-%m-%d").to_string(),
            format!("{:.2}", row.open),
            format!("{:.2}", row.high),
            format!("{:.2}", row.low),
            format!("{:.2}", row.close),
        ];
        if self.has_adj_close() {
            record.push(
                row.adj_close
                    .map(|v| format!("{:.2}", v))
                    .unwrap_or_default(),
            );
        }
        record.push(format!("{:.2}", row.pct_change));
        record.push(row.volume.to_string());
        record
    }

    pub fn file_name(&self) -> String {
        format!("{}_stock_data.csv", self.ticker)
    }
}
