use derive_getters::Getters;
use derive_new::new;
use tracing::{info, warn};

use crate::{
    api::DataFetch,
    config::{DashboardConfig, SymbolLabel, TickerList},
    models::{Interval, PriceSeries},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Down when the latest close sits below the session's first open.
    pub fn of(series: &PriceSeries) -> Option<Self> {
        let first_open = *series.first()?.open();
        let last_close = series.latest_close()?;
        if last_close < first_open {
            Some(Trend::Down)
        } else {
            Some(Trend::Up)
        }
    }
}

#[derive(Clone, Debug, Getters, PartialEq, new)]
pub struct LatestPrice {
    label: String,
    symbol: String,
    price: Option<f64>,
}

#[derive(Clone, Debug, Getters, PartialEq, new)]
pub struct TickerBoard {
    title: String,
    currency_prefix: String,
    prices: Vec<LatestPrice>,
}

#[derive(Clone, Debug, Getters, PartialEq)]
pub struct IntradayPanel {
    label: String,
    title: String,
    series: PriceSeries,
    trend: Option<Trend>,
}

#[derive(Clone, Debug, Getters, PartialEq, new)]
pub struct HomePage {
    indices: Vec<LatestPrice>,
    global_trending: TickerBoard,
    regional_trending: TickerBoard,
    intraday: Vec<IntradayPanel>,
}

pub async fn assemble_home(fetch: &dyn DataFetch, config: &DashboardConfig) -> HomePage {
    info!("assembling home view");

    let mut indices = Vec::with_capacity(config.indices().len());
    for entry in config.indices() {
        indices.push(latest_price(fetch, entry).await);
    }

    let global_trending = ticker_board(fetch, config.global_trending()).await;
    let regional_trending = ticker_board(fetch, config.regional_trending()).await;

    let mut intraday = Vec::with_capacity(config.intraday_charts().len());
    for entry in config.intraday_charts() {
        intraday.push(intraday_panel(fetch, entry, *config.intraday_interval()).await);
    }

    HomePage::new(indices, global_trending, regional_trending, intraday)
}

async fn latest_price(fetch: &dyn DataFetch, entry: &SymbolLabel) -> LatestPrice {
    let price = match fetch.get_intraday(entry.symbol(), Interval::OneDay).await {
        Ok(series) => series.latest_close(),
        Err(err) => {
            warn!(symbol = entry.symbol().as_str(), "latest price unavailable: {:#}", err);
            None
        }
    };

    LatestPrice::new(entry.label().clone(), entry.symbol().clone(), price)
}

async fn ticker_board(fetch: &dyn DataFetch, list: &TickerList) -> TickerBoard {
    let mut prices = Vec::with_capacity(list.entries().len());
    for entry in list.entries() {
        prices.push(latest_price(fetch, entry).await);
    }

    TickerBoard::new(list.title().clone(), list.currency_prefix().clone(), prices)
}

async fn intraday_panel(
    fetch: &dyn DataFetch,
    entry: &SymbolLabel,
    interval: Interval,
) -> IntradayPanel {
    let series = match fetch.get_intraday(entry.symbol(), interval).await {
        Ok(series) => series,
        Err(err) => {
            warn!(symbol = entry.symbol().as_str(), "intraday series unavailable: {:#}", err);
            PriceSeries::empty(entry.symbol(), interval)
        }
    };

    IntradayPanel {
        label: entry.label().clone(),
        title: format!("{} Intraday ({})", entry.label(), interval.describe()),
        trend: Trend::of(&series),
        series,
    }
}
