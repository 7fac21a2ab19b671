use anyhow::{Context, Error, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::{
    api::{
        fetch::DataFetch,
        utils::{make_request, parse_response_array, parse_response_object},
        yahoo_dto::{
            YahooChartResponseDto, YahooNewsDto, YahooQuoteSummaryResponseDto,
            YahooQuoteSummaryResultDto,
        },
    },
    models::{Interval, NewsItem, PriceSeries, QuoteSnapshot, Statements},
};

const BASE_URL: &str = "https://query1.finance.yahoo.com";
const COOKIE_URL: &str = "https://fc.yahoo.com";
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0 Safari/537.36";

const QUOTE_MODULES: &str = "price,summaryDetail,assetProfile";
const STATEMENT_MODULES: &str =
    "balanceSheetHistory,incomeStatementHistory,cashflowStatementHistory";
const NEWS_FEED_SIZE: usize = 50;

#[derive(Debug)]
pub struct YahooApi {
    client: Client,
    crumb: OnceCell<String>,
}

impl YahooApi {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            crumb: OnceCell::new(),
        })
    }

    /// quoteSummary rejects requests without a session cookie and crumb.
    async fn crumb(&self) -> Result<&str> {
        let crumb = self
            .crumb
            .get_or_try_init(|| async {
                // The cookie endpoint answers 404 but still sets the session cookie
                self.client
                    .get(COOKIE_URL)
                    .send()
                    .await
                    .context("Failed to open Yahoo session")?;

                let res = self
                    .client
                    .get(format!("{}/v1/test/getcrumb", BASE_URL))
                    .send()
                    .await
                    .context("Failed to request Yahoo crumb")?;

                if !res.status().is_success() {
                    return Err(Error::msg(format!("Crumb request failed: {}", res.status())));
                }

                let crumb = res.text().await?.trim().to_string();
                if crumb.is_empty() || crumb.contains(' ') || crumb.contains('<') {
                    return Err(Error::msg("Yahoo returned an invalid crumb"));
                }

                debug!("obtained Yahoo crumb");
                Ok::<String, Error>(crumb)
            })
            .await?;

        Ok(crumb.as_str())
    }

    async fn chart(&self, symbol: &str, params: &str, interval: Interval) -> Result<PriceSeries> {
        let endpoint = format!("v8/finance/chart/{}", urlencoding::encode(symbol));
        let res = make_request(&self.client, BASE_URL, &endpoint, params).await?;

        let series = parse_response_object::<YahooChartResponseDto>(
            res,
            &format!("Failed to parse Yahoo chart for {}", symbol),
        )?
        .to_series(symbol, interval)?;

        info!(symbol, interval = interval.to_str(), samples = series.len(), "fetched price series");
        Ok(series)
    }

    async fn quote_summary(
        &self,
        symbol: &str,
        modules: &str,
    ) -> Result<YahooQuoteSummaryResultDto> {
        let crumb = self.crumb().await?;
        let endpoint = format!("v10/finance/quoteSummary/{}", urlencoding::encode(symbol));
        let params = format!("modules={}&crumb={}", modules, urlencoding::encode(crumb));
        let res = make_request(&self.client, BASE_URL, &endpoint, &params).await?;

        parse_response_object::<YahooQuoteSummaryResponseDto>(
            res,
            &format!("Failed to parse Yahoo quote summary for {}", symbol),
        )?
        .into_result(symbol)
    }
}

#[async_trait]
impl DataFetch for YahooApi {
    async fn get_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries> {
        let period = |date: NaiveDate| {
            date.and_hms_opt(0, 0, 0)
                .map(|dt| dt.and_utc().timestamp())
                .with_context(|| format!("Invalid date {}", date))
        };
        let params = format!(
            "period1={}&period2={}&interval={}&events=div%2Csplit",
            period(start)?,
            period(end)?,
            Interval::OneDay.to_str()
        );

        self.chart(symbol, &params, Interval::OneDay)
            .await
            .with_context(|| format!("Yahoo history ({})", symbol))
    }

    async fn get_intraday(&self, symbol: &str, interval: Interval) -> Result<PriceSeries> {
        let params = format!("range=1d&interval={}", interval.to_str());

        self.chart(symbol, &params, interval)
            .await
            .with_context(|| format!("Yahoo intraday ({})", symbol))
    }

    async fn get_quote(&self, symbol: &str) -> Result<QuoteSnapshot> {
        let result = self
            .quote_summary(symbol, QUOTE_MODULES)
            .await
            .with_context(|| format!("Yahoo quote ({})", symbol))?;

        Ok(result.to_quote(symbol))
    }

    async fn get_statements(&self, symbol: &str) -> Result<Statements> {
        let result = self
            .quote_summary(symbol, STATEMENT_MODULES)
            .await
            .with_context(|| format!("Yahoo statements ({})", symbol))?;

        Ok(result.to_statements())
    }

    async fn get_news_feed(&self, symbol: &str) -> Result<Vec<NewsItem>> {
        let params = format!(
            "q={}&quotesCount=0&newsCount={}",
            urlencoding::encode(symbol),
            NEWS_FEED_SIZE
        );
        let res = make_request(&self.client, BASE_URL, "v1/finance/search", &params)
            .await
            .with_context(|| format!("Yahoo news ({})", symbol))?;

        let news = res.get("news").cloned().unwrap_or_default();
        let items = parse_response_array::<YahooNewsDto>(news)?
            .iter()
            .map(YahooNewsDto::to_news_item)
            .collect::<Vec<_>>();

        info!(symbol, items = items.len(), "fetched news feed");
        Ok(items)
    }
}
