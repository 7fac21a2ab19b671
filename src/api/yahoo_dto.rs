use std::sync::LazyLock;

use anyhow::{Result, anyhow};
use chrono::{DateTime, FixedOffset, Offset, Utc};
use derive_getters::Getters;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::models::{
    FinancialStatement, Interval, LineItem, NewsItem, PriceSample, PriceSeries, QuoteSnapshot,
    StatementKind, Statements,
};

static CAMEL_CASE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid regex"));

#[derive(Debug, Deserialize, Getters)]
pub struct YahooErrorDto {
    code: String,
    #[serde(default)]
    description: Option<String>,
}

impl YahooErrorDto {
    pub fn is_not_found(&self) -> bool {
        self.code == "Not Found"
    }

    pub fn describe(&self) -> String {
        match &self.description {
            Some(description) => format!("{}: {}", self.code, description),
            None => self.code.clone(),
        }
    }
}

/// Yahoo wraps most numbers as `{"raw": .., "fmt": ..}`, sometimes as `{}`.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum YahooNumberDto {
    Plain(f64),
    Wrapped {
        #[serde(default)]
        raw: Option<f64>,
    },
}

impl YahooNumberDto {
    pub fn value(&self) -> Option<f64> {
        match self {
            YahooNumberDto::Plain(value) => Some(*value),
            YahooNumberDto::Wrapped { raw } => *raw,
        }
    }
}

fn number(field: &Option<YahooNumberDto>) -> Option<f64> {
    field.as_ref().and_then(YahooNumberDto::value)
}

fn text(field: &Option<String>) -> Option<String> {
    field.clone().filter(|value| !value.trim().is_empty())
}

fn value_at(values: &[Option<f64>], i: usize) -> Option<f64> {
    values.get(i).copied().flatten()
}

// Chart (price series)

#[derive(Debug, Deserialize, Getters)]
pub struct YahooChartResponseDto {
    chart: YahooChartDto,
}

#[derive(Debug, Deserialize, Getters)]
pub struct YahooChartDto {
    #[serde(default)]
    result: Option<Vec<YahooChartResultDto>>,
    #[serde(default)]
    error: Option<YahooErrorDto>,
}

#[derive(Debug, Default, Deserialize, Getters)]
pub struct YahooChartResultDto {
    #[serde(default)]
    meta: YahooChartMetaDto,
    #[serde(default)]
    timestamp: Vec<i64>,
    #[serde(default)]
    indicators: YahooIndicatorsDto,
}

#[derive(Debug, Default, Deserialize, Getters)]
pub struct YahooChartMetaDto {
    #[serde(default)]
    symbol: Option<String>,
    #[serde(default)]
    gmtoffset: i32,
}

#[derive(Debug, Default, Deserialize, Getters)]
pub struct YahooIndicatorsDto {
    #[serde(default)]
    quote: Vec<YahooQuoteIndicatorDto>,
    #[serde(default)]
    adjclose: Vec<YahooAdjCloseDto>,
}

#[derive(Debug, Default, Deserialize, Getters)]
pub struct YahooQuoteIndicatorDto {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

#[derive(Debug, Default, Deserialize, Getters)]
pub struct YahooAdjCloseDto {
    #[serde(default)]
    adjclose: Vec<Option<f64>>,
}

impl YahooChartResponseDto {
    /// An unknown symbol or a window without trades yields an empty series.
    pub fn to_series(self, symbol: &str, interval: Interval) -> Result<PriceSeries> {
        if let Some(error) = &self.chart.error {
            if error.is_not_found() {
                return Ok(PriceSeries::empty(symbol, interval));
            }
            return Err(anyhow!("Yahoo chart ({}): {}", symbol, error.describe()));
        }

        let Some(result) = self
            .chart
            .result
            .and_then(|results| results.into_iter().next())
        else {
            return Ok(PriceSeries::empty(symbol, interval));
        };

        let offset = FixedOffset::east_opt(result.meta.gmtoffset).unwrap_or_else(|| Utc.fix());
        let quote = result.indicators.quote.into_iter().next().unwrap_or_default();
        let adj_close = result
            .indicators
            .adjclose
            .into_iter()
            .next()
            .map(|adj| adj.adjclose)
            .unwrap_or_default();

        let samples = result
            .timestamp
            .iter()
            .enumerate()
            .filter_map(|(i, ts)| {
                let timestamp = DateTime::from_timestamp(*ts, 0)?.with_timezone(&offset);
                // Bars with any missing OHLC value are holes in the session
                Some(PriceSample::new(
                    timestamp,
                    value_at(&quote.open, i)?,
                    value_at(&quote.high, i)?,
                    value_at(&quote.low, i)?,
                    value_at(&quote.close, i)?,
                    value_at(&adj_close, i),
                    value_at(&quote.volume, i).map(|v| v.max(0.0) as u64).unwrap_or(0),
                ))
            })
            .collect();

        let symbol = result.meta.symbol.unwrap_or_else(|| symbol.to_string());
        Ok(PriceSeries::new(symbol, interval, samples))
    }
}

// Quote summary (quote, fundamentals, statements)

#[derive(Debug, Deserialize, Getters)]
pub struct YahooQuoteSummaryResponseDto {
    #[serde(rename = "quoteSummary")]
    quote_summary: YahooQuoteSummaryDto,
}

#[derive(Debug, Deserialize, Getters)]
pub struct YahooQuoteSummaryDto {
    #[serde(default)]
    result: Option<Vec<YahooQuoteSummaryResultDto>>,
    #[serde(default)]
    error: Option<YahooErrorDto>,
}

#[derive(Debug, Default, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteSummaryResultDto {
    #[serde(default)]
    price: Option<YahooPriceDto>,
    #[serde(default)]
    summary_detail: Option<YahooSummaryDetailDto>,
    #[serde(default)]
    asset_profile: Option<YahooAssetProfileDto>,
    #[serde(default)]
    balance_sheet_history: Option<Value>,
    #[serde(default)]
    income_statement_history: Option<Value>,
    #[serde(default)]
    cashflow_statement_history: Option<Value>,
}

#[derive(Debug, Default, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct YahooPriceDto {
    #[serde(default)]
    long_name: Option<String>,
    #[serde(default)]
    short_name: Option<String>,
    #[serde(default)]
    currency: Option<String>,
    #[serde(default)]
    regular_market_price: Option<YahooNumberDto>,
    #[serde(default)]
    regular_market_previous_close: Option<YahooNumberDto>,
    #[serde(default)]
    regular_market_open: Option<YahooNumberDto>,
    #[serde(default)]
    regular_market_day_high: Option<YahooNumberDto>,
    #[serde(default)]
    regular_market_day_low: Option<YahooNumberDto>,
    #[serde(default)]
    post_market_price: Option<YahooNumberDto>,
    #[serde(default)]
    market_cap: Option<YahooNumberDto>,
}

#[derive(Debug, Default, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct YahooSummaryDetailDto {
    #[serde(default)]
    previous_close: Option<YahooNumberDto>,
    #[serde(default)]
    open: Option<YahooNumberDto>,
    #[serde(default)]
    day_high: Option<YahooNumberDto>,
    #[serde(default)]
    day_low: Option<YahooNumberDto>,
    #[serde(default)]
    market_cap: Option<YahooNumberDto>,
    #[serde(rename = "trailingPE", default)]
    trailing_pe: Option<YahooNumberDto>,
    #[serde(rename = "forwardPE", default)]
    forward_pe: Option<YahooNumberDto>,
    #[serde(default)]
    dividend_yield: Option<YahooNumberDto>,
    #[serde(default)]
    fifty_two_week_high: Option<YahooNumberDto>,
    #[serde(default)]
    fifty_two_week_low: Option<YahooNumberDto>,
}

#[derive(Debug, Default, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct YahooAssetProfileDto {
    #[serde(default)]
    sector: Option<String>,
    #[serde(default)]
    industry: Option<String>,
    #[serde(default)]
    full_time_employees: Option<u64>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    website: Option<String>,
    #[serde(default)]
    long_business_summary: Option<String>,
}

impl YahooQuoteSummaryResponseDto {
    pub fn into_result(self, symbol: &str) -> Result<YahooQuoteSummaryResultDto> {
        if let Some(error) = &self.quote_summary.error {
            return Err(anyhow!("Yahoo quote summary ({}): {}", symbol, error.describe()));
        }

        self.quote_summary
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| anyhow!("Yahoo quote summary ({}): empty result", symbol))
    }
}

impl YahooQuoteSummaryResultDto {
    pub fn to_quote(&self, symbol: &str) -> QuoteSnapshot {
        let price = self.price.as_ref();
        let detail = self.summary_detail.as_ref();
        let profile = self.asset_profile.as_ref();

        QuoteSnapshot {
            symbol: symbol.to_string(),
            long_name: price.and_then(|p| text(&p.long_name).or_else(|| text(&p.short_name))),
            currency: price.and_then(|p| text(&p.currency)),
            current_price: price.and_then(|p| number(&p.regular_market_price)),
            previous_close: price
                .and_then(|p| number(&p.regular_market_previous_close))
                .or_else(|| detail.and_then(|d| number(&d.previous_close))),
            post_market_price: price.and_then(|p| number(&p.post_market_price)),
            open: detail
                .and_then(|d| number(&d.open))
                .or_else(|| price.and_then(|p| number(&p.regular_market_open))),
            day_high: detail
                .and_then(|d| number(&d.day_high))
                .or_else(|| price.and_then(|p| number(&p.regular_market_day_high))),
            day_low: detail
                .and_then(|d| number(&d.day_low))
                .or_else(|| price.and_then(|p| number(&p.regular_market_day_low))),
            market_cap: price
                .and_then(|p| number(&p.market_cap))
                .or_else(|| detail.and_then(|d| number(&d.market_cap))),
            trailing_pe: detail.and_then(|d| number(&d.trailing_pe)),
            forward_pe: detail.and_then(|d| number(&d.forward_pe)),
            dividend_yield: detail.and_then(|d| number(&d.dividend_yield)),
            fifty_two_week_high: detail.and_then(|d| number(&d.fifty_two_week_high)),
            fifty_two_week_low: detail.and_then(|d| number(&d.fifty_two_week_low)),
            sector: profile.and_then(|p| text(&p.sector)),
            industry: profile.and_then(|p| text(&p.industry)),
            full_time_employees: profile.and_then(|p| p.full_time_employees),
            country: profile.and_then(|p| text(&p.country)),
            website: profile.and_then(|p| text(&p.website)),
            business_summary: profile.and_then(|p| text(&p.long_business_summary)),
        }
    }

    pub fn to_statements(&self) -> Statements {
        Statements::new(
            statement_from_module(
                StatementKind::BalanceSheet,
                self.balance_sheet_history.as_ref(),
                "balanceSheetStatements",
            ),
            statement_from_module(
                StatementKind::IncomeStatement,
                self.income_statement_history.as_ref(),
                "incomeStatementHistory",
            ),
            statement_from_module(
                StatementKind::CashFlow,
                self.cashflow_statement_history.as_ref(),
                "cashflowStatements",
            ),
        )
    }
}

fn statement_from_module(
    kind: StatementKind,
    module: Option<&Value>,
    key: &str,
) -> FinancialStatement {
    let entries: Vec<&Value> = module
        .and_then(|m| m.get(key))
        .and_then(Value::as_array)
        .map(|entries| entries.iter().collect())
        .unwrap_or_default();

    let periods = entries.iter().map(|entry| period_label(entry)).collect();

    let mut names: Vec<&str> = Vec::new();
    for entry in &entries {
        if let Some(fields) = entry.as_object() {
            for name in fields.keys() {
                if name != "endDate" && name != "maxAge" && !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
    }

    let line_items = names
        .iter()
        .map(|name| {
            LineItem::new(
                line_item_label(name),
                entries.iter().map(|entry| raw_number(entry.get(*name))).collect(),
            )
        })
        .collect();

    FinancialStatement::new(kind, periods, line_items)
}

fn period_label(entry: &Value) -> String {
    let end_date = entry.get("endDate");
    end_date
        .and_then(|date| date.get("fmt"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .or_else(|| {
            raw_number(end_date)
                .and_then(|ts| DateTime::from_timestamp(ts as i64, 0))
                .map(|date| date.format("%Y-%m-%d").to_string())
        })
        .unwrap_or_else(|| String::from("N/A"))
}

fn raw_number(value: Option<&Value>) -> Option<f64> {
    value.and_then(|v| v.get("raw").and_then(Value::as_f64).or_else(|| v.as_f64()))
}

/// `totalCurrentAssets` -> `Total Current Assets`
pub fn line_item_label(name: &str) -> String {
    let spaced = CAMEL_CASE_BOUNDARY.replace_all(name, "$1 $2");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// News

#[derive(Debug, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct YahooNewsDto {
    title: String,
    #[serde(default)]
    publisher: Option<String>,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    provider_publish_time: Option<i64>,
}

impl YahooNewsDto {
    pub fn to_news_item(&self) -> NewsItem {
        NewsItem::new(
            self.title.clone(),
            self.provider_publish_time
                .and_then(|ts| DateTime::from_timestamp(ts, 0)),
            text(&self.publisher),
            text(&self.summary),
            text(&self.link),
        )
    }
}
