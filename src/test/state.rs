#[cfg(test)]
mod tests {
    use crate::{
        app::{
            state::{AnalysisTab, AppState, ChartKind, Focus},
            views::{self, VIEWS, ViewId},
        },
        config::DashboardConfig,
        models::StatementKind,
    };

    #[test]
    fn chart_kinds_cycle_in_order() {
        let mut state = AppState::new(&DashboardConfig::default());
        let mut seen = vec![state.chart];
        for _ in 0..5 {
            state.cycle_chart();
            seen.push(state.chart);
        }

        assert_eq!(
            seen,
            vec![
                ChartKind::Line,
                ChartKind::Intraday,
                ChartKind::Ohlc,
                ChartKind::Volume,
                ChartKind::Candlestick,
                ChartKind::Line,
            ]
        );
    }

    #[test]
    fn tabs_wrap_both_ways() {
        let mut state = AppState::new(&DashboardConfig::default());

        state.next_tab(false);
        assert_eq!(state.tab, AnalysisTab::News);
        state.next_tab(true);
        assert_eq!(state.tab, AnalysisTab::PriceCharts);
        assert_eq!(AnalysisTab::News.to_string(), "Top 10 News");
    }

    #[test]
    fn focus_walks_fields_then_results() {
        let mut state = AppState::new(&DashboardConfig::default());
        assert_eq!(state.focus, Focus::Ticker);

        state.focus_next();
        state.focus_next();
        assert_eq!(state.focus, Focus::End);
        state.focus_next();
        assert_eq!(state.focus, Focus::Results);
        assert!(state.field_mut().is_none());
        state.focus_prev();
        assert_eq!(state.focus, Focus::End);
    }

    #[test]
    fn statements_cycle() {
        let mut state = AppState::new(&DashboardConfig::default());
        state.cycle_statement();
        assert_eq!(state.statement, StatementKind::IncomeStatement);
        state.cycle_statement();
        state.cycle_statement();
        assert_eq!(state.statement, StatementKind::BalanceSheet);
    }

    #[test]
    fn summary_pages_independent_of_statement_rows() {
        let mut state = AppState::new(&DashboardConfig::default());
        state.tab = AnalysisTab::FundamentalData;

        state.scroll_down();
        assert_eq!(state.scroll, 0);
        assert_eq!(state.statement_state.selected(), None);

        state.page_down();
        state.page_down();
        state.page_up();
        assert_eq!(state.scroll, 5);

        state.next_tab(true);
        state.scroll_down();
        assert_eq!(state.scroll, 1);
    }

    #[test]
    fn view_table_dispatch() {
        assert_eq!(VIEWS.len(), 2);
        assert_eq!(views::entry(ViewId::StockAnalysis).title, "Stock Analysis");
        assert_eq!(views::position(ViewId::StockAnalysis), 1);
        assert_eq!(views::entry(ViewId::Home).hotkey, "F1");
    }
}
