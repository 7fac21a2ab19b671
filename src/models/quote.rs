use serde::{Deserialize, Serialize};

/// Point-in-time scalar fields for a symbol. Every field is optional, a
/// missing value is never folded into zero.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct QuoteSnapshot {
    pub symbol: String,
    pub long_name: Option<String>,
    pub currency: Option<String>,
    pub current_price: Option<f64>,
    pub previous_close: Option<f64>,
    pub post_market_price: Option<f64>,
    pub open: Option<f64>,
    pub day_high: Option<f64>,
    pub day_low: Option<f64>,
    pub market_cap: Option<f64>,
    pub trailing_pe: Option<f64>,
    pub forward_pe: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub fifty_two_week_high: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub full_time_employees: Option<u64>,
    pub country: Option<String>,
    pub website: Option<String>,
    pub business_summary: Option<String>,
}

impl QuoteSnapshot {
    pub fn display_name(&self) -> &str {
        self.long_name.as_deref().unwrap_or(&self.symbol)
    }
}
