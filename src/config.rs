use std::{fs, path::Path};

use anyhow::{Context, Result};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::models::Interval;

#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct SymbolLabel {
    symbol: String,
    label: String,
}

#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct TickerList {
    title: String,
    currency_prefix: String,
    entries: Vec<SymbolLabel>,
}

/// Symbol lists and defaults behind the dashboard views.
#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize)]
#[serde(default)]
pub struct DashboardConfig {
    indices: Vec<SymbolLabel>,
    global_trending: TickerList,
    regional_trending: TickerList,
    intraday_charts: Vec<SymbolLabel>,
    intraday_interval: Interval,
    news_limit: usize,
    default_ticker: String,
    default_lookback_days: u64,
}

fn labelled(pairs: &[(&str, &str)]) -> Vec<SymbolLabel> {
    pairs
        .iter()
        .map(|(symbol, label)| SymbolLabel::new(symbol.to_string(), label.to_string()))
        .collect()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            indices: labelled(&[
                ("^GSPC", "S&P 500"),
                ("^IXIC", "NASDAQ"),
                ("^DJI", "Dow Jones"),
                ("^NSEI", "Nifty 50"),
                ("^BSESN", "Sensex"),
            ]),
            global_trending: TickerList::new(
                String::from("Global Trending Stocks 🔥"),
                String::from("$"),
                labelled(&[
                    ("AAPL", "AAPL"),
                    ("TSLA", "TSLA"),
                    ("GOOGL", "GOOGL"),
                    ("AMZN", "AMZN"),
                    ("MSFT", "MSFT"),
                ]),
            ),
            regional_trending: TickerList::new(
                String::from("Indian Trending Stocks 📌"),
                String::from("₹"),
                labelled(&[
                    ("RELIANCE.NS", "RELIANCE"),
                    ("TCS.NS", "TCS"),
                    ("INFY.NS", "INFY"),
                    ("HDFCBANK.NS", "HDFCBANK"),
                    ("ICICIBANK.NS", "ICICIBANK"),
                ]),
            ),
            intraday_charts: labelled(&[("^NSEI", "Nifty 50"), ("^DJI", "Dow Jones")]),
            intraday_interval: Interval::FiveMinutes,
            news_limit: 10,
            default_ticker: String::from("MSFT"),
            default_lookback_days: 365,
        }
    }
}

impl DashboardConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at path: {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("Invalid config at {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn with_default_ticker(mut self, ticker: Option<String>) -> Self {
        if let Some(ticker) = ticker.filter(|t| !t.trim().is_empty()) {
            self.default_ticker = ticker;
        }
        self
    }
}
