use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::{Interval, NewsItem, PriceSeries, QuoteSnapshot, Statements};

/// Market-data and news access used by every view.
///
/// Empty series are valid answers, an `Err` is reserved for provider faults.
#[async_trait]
pub trait DataFetch: Send + Sync {
    /// Daily samples in `[start, end)`.
    async fn get_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries>;

    /// Samples for the current session at the given interval.
    async fn get_intraday(&self, symbol: &str, interval: Interval) -> Result<PriceSeries>;

    async fn get_quote(&self, symbol: &str) -> Result<QuoteSnapshot>;

    async fn get_statements(&self, symbol: &str) -> Result<Statements>;

    async fn get_news_feed(&self, symbol: &str) -> Result<Vec<NewsItem>>;

    async fn get_top_news(&self, symbol: &str, limit: usize) -> Result<Vec<NewsItem>> {
        let mut items = self.get_news_feed(symbol).await?;
        items.truncate(limit);
        Ok(items)
    }
}
