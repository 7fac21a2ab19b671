use anyhow::Result;
use derive_getters::Getters;
use tracing::{error, info, warn};

use crate::{
    api::DataFetch,
    app::{
        calc::{self, Direction, HistoryTable},
        utils,
    },
    config::DashboardConfig,
    models::{NewsItem, PriceSeries, QuoteSnapshot, SelectionError, Statements, UserSelection},
};

pub const NO_HISTORY: &str = "No historical data found! Check the stock symbol or date range.";
pub const NO_INTRADAY: &str = "No intraday data found!";
pub const NO_NEWS: &str = "No recent news available.";
pub const CHECK_SELECTION: &str = "Please check the stock ticker symbol and try again.";

/// Raw text of the three form fields.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AnalysisForm {
    pub ticker: String,
    pub start: String,
    pub end: String,
}

impl AnalysisForm {
    pub fn with_defaults(config: &DashboardConfig) -> Self {
        let end = utils::today();
        let start = utils::days_before(end, *config.default_lookback_days());
        Self {
            ticker: config.default_ticker().clone(),
            start: start.format("%Y-%m-%d").to_string(),
            end: end.format("%Y-%m-%d").to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PriceChange {
    pub amount: f64,
    pub percent: f64,
    pub direction: Direction,
}

#[derive(Clone, Debug, Getters, PartialEq)]
pub struct PriceHeader {
    title: String,
    current_price: Option<f64>,
    currency: String,
    change: Option<PriceChange>,
    after_hours: Option<f64>,
}

impl PriceHeader {
    pub fn from_quote(symbol: &str, quote: &QuoteSnapshot) -> Self {
        let change = calc::price_change(quote.current_price, quote.previous_close)
            .zip(calc::percent_change(quote.current_price, quote.previous_close))
            .map(|(amount, percent)| PriceChange {
                amount,
                percent,
                direction: Direction::of(amount),
            });

        Self {
            title: format!("{} ({})", quote.display_name(), symbol),
            current_price: quote.current_price,
            currency: quote.currency.clone().unwrap_or_else(|| String::from("USD")),
            change,
            after_hours: quote.post_market_price,
        }
    }
}

#[derive(Clone, Debug, Getters, PartialEq)]
pub struct Analysis {
    selection: UserSelection,
    quote: QuoteSnapshot,
    header: PriceHeader,
    history: PriceSeries,
    intraday: PriceSeries,
    table: Option<HistoryTable>,
    statements: Result<Statements, String>,
    business_summary: Vec<String>,
    news: Result<Vec<NewsItem>, String>,
}

impl Analysis {
    pub fn history_notice(&self) -> Option<&'static str> {
        self.history.is_empty().then_some(NO_HISTORY)
    }

    pub fn intraday_notice(&self) -> Option<&'static str> {
        self.intraday.is_empty().then_some(NO_INTRADAY)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum AnalysisOutcome {
    #[default]
    Idle,
    Rejected(SelectionError),
    Failed(String),
    Ready(Box<Analysis>),
}

pub async fn assemble_analysis(
    fetch: &dyn DataFetch,
    config: &DashboardConfig,
    form: &AnalysisForm,
) -> AnalysisOutcome {
    let selection = match UserSelection::parse(&form.ticker, &form.start, &form.end) {
        Ok(selection) => selection,
        Err(err) => {
            info!("selection rejected: {}", err);
            return AnalysisOutcome::Rejected(err);
        }
    };

    match fetch_and_derive(fetch, config, selection).await {
        Ok(analysis) => AnalysisOutcome::Ready(Box::new(analysis)),
        Err(err) => {
            error!("analysis failed: {:#}", err);
            AnalysisOutcome::Failed(format!("An error occurred: {:#}", err))
        }
    }
}

async fn fetch_and_derive(
    fetch: &dyn DataFetch,
    config: &DashboardConfig,
    selection: UserSelection,
) -> Result<Analysis> {
    let symbol = selection.symbol().clone();
    info!(
        symbol = symbol.as_str(),
        start = %selection.start(),
        end = %selection.end(),
        "assembling stock analysis"
    );

    let history = fetch
        .get_history(&symbol, *selection.start(), *selection.end())
        .await?;
    let intraday = fetch
        .get_intraday(&symbol, *config.intraday_interval())
        .await?;
    let quote = fetch.get_quote(&symbol).await?;

    let statements = fetch.get_statements(&symbol).await.map_err(|err| {
        warn!(symbol = symbol.as_str(), "statements unavailable: {:#}", err);
        format!("Could not fetch financial statements: {:#}", err)
    });
    let news = fetch
        .get_top_news(&symbol, *config.news_limit())
        .await
        .map_err(|err| {
            warn!(symbol = symbol.as_str(), "news unavailable: {:#}", err);
            format!("Could not fetch news: {:#}", err)
        });

    let table = (!history.is_empty()).then(|| HistoryTable::from_series(&symbol, &history));

    Ok(Analysis {
        header: PriceHeader::from_quote(&symbol, &quote),
        business_summary: calc::business_paragraphs(quote.business_summary.as_deref()),
        selection,
        quote,
        history,
        intraday,
        table,
        statements,
        news,
    })
}
