#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use crate::{
        app::{
            analysis::{AnalysisForm, assemble_analysis},
            home::assemble_home,
            state::{AnalysisTab, AppState, ChartKind},
            ui,
            views::ViewId,
        },
        config::DashboardConfig,
        models::{FinancialStatement, LineItem, QuoteSnapshot, StatementKind, Statements},
        test::mock::{MockFetch, full_quote},
    };

    fn draw(state: &mut AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(160, 50)).unwrap();
        terminal.draw(|frame| ui::render(frame, state)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut screen = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                screen.push_str(buffer[(x, y)].symbol());
            }
            screen.push('\n');
        }
        screen
    }

    fn form() -> AnalysisForm {
        AnalysisForm {
            ticker: String::from("MSFT"),
            start: String::from("2024-01-01"),
            end: String::from("2024-02-01"),
        }
    }

    async fn analysis_state(fetch: &MockFetch) -> AppState {
        let config = DashboardConfig::default();
        let mut state = AppState::new(&config);
        state.view = ViewId::StockAnalysis;
        state.set_outcome(assemble_analysis(fetch, &config, &form()).await);
        state
    }

    #[tokio::test]
    async fn empty_history_shows_notice_without_charts() {
        let mut fetch = MockFetch::new();
        fetch.history.clear();

        let mut state = analysis_state(&fetch).await;
        for kind in [
            ChartKind::Line,
            ChartKind::Ohlc,
            ChartKind::Volume,
            ChartKind::Candlestick,
        ] {
            state.chart = kind;
            let screen = draw(&mut state);

            assert!(screen.contains("No historical data found!"));
            assert!(!screen.contains("Closing Price History"));
            assert!(!screen.contains("OHLC Chart"));
            assert!(!screen.contains("Trading Volume"));
            assert!(!screen.contains("Candlestick Chart"));
        }

        state.tab = AnalysisTab::PricingData;
        let screen = draw(&mut state);
        assert!(screen.contains("No historical data found!"));
        assert!(!screen.contains("Historical Data (e: export CSV)"));
    }

    #[tokio::test]
    async fn history_renders_selected_chart() {
        let fetch = MockFetch::new();
        let mut state = analysis_state(&fetch).await;

        let screen = draw(&mut state);
        assert!(screen.contains("MSFT Closing Price History"));
        assert!(!screen.contains("No historical data found!"));

        state.chart = ChartKind::Candlestick;
        let screen = draw(&mut state);
        assert!(screen.contains("MSFT Candlestick Chart"));
        assert!(screen.contains('┃'));
    }

    #[tokio::test]
    async fn missing_fields_render_not_available() {
        let mut fetch = MockFetch::new();
        fetch.quote = Some(QuoteSnapshot {
            market_cap: None,
            trailing_pe: None,
            previous_close: None,
            ..full_quote("MSFT")
        });

        let mut state = analysis_state(&fetch).await;
        let screen = draw(&mut state);
        assert!(screen.contains("N/A"));
        assert!(screen.contains("Price change data not available"));

        state.tab = AnalysisTab::FundamentalData;
        let screen = draw(&mut state);
        assert!(screen.contains("Company Information"));
        assert!(screen.contains("Industry: N/A"));
        assert!(screen.contains("Market Cap: N/A"));
        assert!(screen.contains("Total Assets"));
    }

    #[tokio::test]
    async fn news_tab_lists_items() {
        let mut fetch = MockFetch::new();
        fetch.news_feed_size = 2;

        let mut state = analysis_state(&fetch).await;
        state.tab = AnalysisTab::News;
        let screen = draw(&mut state);

        assert!(screen.contains("1. Headline 1"));
        assert!(screen.contains("Date & Time: N/A"));
        assert!(screen.contains("No summary available."));
        assert!(screen.contains("https://news.example.com/2"));
    }

    #[tokio::test]
    async fn rejected_selection_shows_message() {
        let config = DashboardConfig::default();
        let fetch = MockFetch::new();
        let mut state = AppState::new(&config);
        state.view = ViewId::StockAnalysis;
        let mut bad = form();
        bad.end = String::from("2023-01-01");
        state.set_outcome(assemble_analysis(&fetch, &config, &bad).await);

        let screen = draw(&mut state);
        assert!(screen.contains("Start date must be before end date."));
    }

    #[tokio::test]
    async fn home_placeholders() {
        let config = DashboardConfig::default();
        let mut fetch = MockFetch::new();
        fetch.failing_symbols = vec!["^DJI", "TCS.NS"];

        let mut state = AppState::new(&config);
        state.home = Some(assemble_home(&fetch, &config).await);
        let screen = draw(&mut state);

        assert!(screen.contains("Dow Jones: Data unavailable"));
        assert!(screen.contains("TCS: Data unavailable"));
        assert!(screen.contains("AAPL: $99.00"));
        assert!(screen.contains("No intraday data available for Dow Jones."));
        assert!(screen.contains("Nifty 50 Intraday (5-min interval)"));
    }

    fn long_balance_sheet(items: usize) -> Statements {
        let periods = vec![String::from("2024-06-30")];
        let line_items = (1..=items)
            .map(|i| LineItem::new(format!("Account {:02}", i), vec![Some(i as f64 * 1e9)]))
            .collect();
        let empty = |kind| FinancialStatement::new(kind, periods.clone(), Vec::new());
        Statements::new(
            FinancialStatement::new(StatementKind::BalanceSheet, periods.clone(), line_items),
            empty(StatementKind::IncomeStatement),
            empty(StatementKind::CashFlow),
        )
    }

    #[tokio::test]
    async fn long_statement_rows_are_reachable() {
        let mut fetch = MockFetch::new();
        fetch.statements = long_balance_sheet(30);

        let mut state = analysis_state(&fetch).await;
        state.tab = AnalysisTab::FundamentalData;

        let first = draw(&mut state);
        assert!(first.contains("Account 01"));
        assert!(!first.contains("Account 30"));

        let mut seen = vec![false; 30];
        for _ in 0..30 {
            state.scroll_down();
            let screen = draw(&mut state);
            for (i, seen) in seen.iter_mut().enumerate() {
                if screen.contains(&format!("Account {:02}", i + 1)) {
                    *seen = true;
                }
            }
        }

        assert_eq!(state.statement_state.selected(), Some(29));
        assert!(seen.iter().all(|seen| *seen));

        state.cycle_statement();
        assert_eq!(state.statement_state.selected(), None);
    }

    #[tokio::test]
    async fn statement_failure_still_renders_history() {
        let mut fetch = MockFetch::new();
        fetch.statements_fail = true;

        let mut state = analysis_state(&fetch).await;
        let charts = draw(&mut state);
        assert!(charts.contains("MSFT Closing Price History"));

        state.tab = AnalysisTab::PricingData;
        let table = draw(&mut state);
        assert!(table.contains("MSFT Historical Data (e: export CSV)"));

        state.tab = AnalysisTab::FundamentalData;
        let fundamentals = draw(&mut state);
        assert!(fundamentals.contains("Could not fetch financial statements"));
        assert!(fundamentals.contains("Company Information"));
    }

    #[test]
    fn loading_popup_is_drawn() {
        let mut state = AppState::new(&DashboardConfig::default());
        state.popup_message = Some(String::from("Loading..."));

        let screen = draw(&mut state);
        assert!(screen.contains("Loading..."));
    }
}
