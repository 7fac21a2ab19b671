use chrono::{DateTime, FixedOffset, NaiveDate};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::app::calc::ColumnLabel;

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Interval {
    #[default]
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "15m")]
    FifteenMinutes,
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "1d")]
    OneDay,
}

impl Interval {
    pub fn to_str(&self) -> &str {
        match self {
            Interval::FiveMinutes => "5m",
            Interval::FifteenMinutes => "15m",
            Interval::OneHour => "1h",
            Interval::OneDay => "1d",
        }
    }

    pub fn describe(&self) -> &str {
        match self {
            Interval::FiveMinutes => "5-min interval",
            Interval::FifteenMinutes => "15-min interval",
            Interval::OneHour => "1-hour interval",
            Interval::OneDay => "daily interval",
        }
    }
}

#[derive(Clone, Debug, Getters, PartialEq, new)]
pub struct PriceSample {
    timestamp: DateTime<FixedOffset>,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    adj_close: Option<f64>,
    volume: u64,
}

impl PriceSample {
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

/// OHLCV samples for one symbol, ordered by strictly increasing timestamp.
#[derive(Clone, Debug, Getters, PartialEq)]
pub struct PriceSeries {
    symbol: String,
    interval: Interval,
    samples: Vec<PriceSample>,
}

impl PriceSeries {
    pub fn new(symbol: String, interval: Interval, mut samples: Vec<PriceSample>) -> Self {
        samples.sort_by_key(|sample| sample.timestamp);
        // Keep the later of two samples sharing a timestamp
        let mut ordered: Vec<PriceSample> = Vec::with_capacity(samples.len());
        for sample in samples {
            match ordered.last_mut() {
                Some(last) if last.timestamp == sample.timestamp => *last = sample,
                _ => ordered.push(sample),
            }
        }

        Self {
            symbol,
            interval,
            samples: ordered,
        }
    }

    pub fn empty(symbol: &str, interval: Interval) -> Self {
        Self::new(symbol.to_string(), interval, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn first(&self) -> Option<&PriceSample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&PriceSample> {
        self.samples.last()
    }

    pub fn latest_close(&self) -> Option<f64> {
        self.last().map(|sample| sample.close)
    }

    pub fn closes(&self) -> Vec<f64> {
        self.samples.iter().map(|sample| sample.close).collect()
    }

    pub fn has_adj_close(&self) -> bool {
        self.samples.iter().any(|sample| sample.adj_close.is_some())
    }

    /// Column labels as the provider exposes them, qualified by symbol.
    pub fn column_labels(&self) -> Vec<ColumnLabel> {
        let mut fields = vec!["Open", "High", "Low", "Close"];
        if self.has_adj_close() {
            fields.push("Adj Close");
        }
        fields.push("Volume");

        fields
            .into_iter()
            .map(|field| ColumnLabel::Nested(self.symbol.clone(), field.to_string()))
            .collect()
    }
}
