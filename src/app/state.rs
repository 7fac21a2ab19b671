use ratatui::widgets::TableState;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::{
    app::{
        analysis::{AnalysisForm, AnalysisOutcome},
        home::HomePage,
        views::ViewId,
    },
    config::DashboardConfig,
    models::StatementKind,
};

#[derive(Clone, Copy, Debug, Default, Display, EnumIter, Eq, PartialEq)]
pub enum AnalysisTab {
    #[default]
    #[strum(serialize = "Price Charts")]
    PriceCharts,
    #[strum(serialize = "Pricing Data")]
    PricingData,
    #[strum(serialize = "Fundamental Data")]
    FundamentalData,
    #[strum(serialize = "Top 10 News")]
    News,
}

#[derive(Clone, Copy, Debug, Default, Display, EnumIter, Eq, PartialEq)]
pub enum ChartKind {
    #[default]
    #[strum(serialize = "Line")]
    Line,
    #[strum(serialize = "Intraday")]
    Intraday,
    #[strum(serialize = "OHLC")]
    Ohlc,
    #[strum(serialize = "Volume")]
    Volume,
    #[strum(serialize = "Candlestick")]
    Candlestick,
}

/// Which part of the Stock Analysis view receives key presses.
#[derive(Clone, Copy, Debug, Default, EnumIter, Eq, PartialEq)]
pub enum Focus {
    #[default]
    Ticker,
    Start,
    End,
    Results,
}

/// Steps to the neighbour of `current` in declaration order, wrapping around.
fn step<T: IntoEnumIterator + PartialEq + Copy>(current: T, forward: bool) -> T {
    let all: Vec<T> = T::iter().collect();
    let i = all.iter().position(|v| *v == current).unwrap_or(0);
    let next = if forward {
        (i + 1) % all.len()
    } else {
        (i + all.len() - 1) % all.len()
    };
    all[next]
}

pub struct AppState {
    pub view: ViewId,
    pub home: Option<HomePage>,
    pub form: AnalysisForm,
    pub focus: Focus,
    pub outcome: AnalysisOutcome,
    pub tab: AnalysisTab,
    pub chart: ChartKind,
    pub statement: StatementKind,
    pub table_state: TableState,
    pub statement_state: TableState,
    pub scroll: u16,
    pub popup_message: Option<String>,
    pub error_popup: Option<String>,
    pub status: Option<String>,
}

impl AppState {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            view: ViewId::default(),
            home: None,
            form: AnalysisForm::with_defaults(config),
            focus: Focus::default(),
            outcome: AnalysisOutcome::default(),
            tab: AnalysisTab::default(),
            chart: ChartKind::default(),
            statement: StatementKind::BalanceSheet,
            table_state: TableState::default(),
            statement_state: TableState::default(),
            scroll: 0,
            popup_message: None,
            error_popup: None,
            status: None,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = step(self.focus, true);
    }

    pub fn focus_prev(&mut self) {
        self.focus = step(self.focus, false);
    }

    /// The form field under focus, if any.
    pub fn field_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Ticker => Some(&mut self.form.ticker),
            Focus::Start => Some(&mut self.form.start),
            Focus::End => Some(&mut self.form.end),
            Focus::Results => None,
        }
    }

    pub fn next_tab(&mut self, forward: bool) {
        self.tab = step(self.tab, forward);
        self.scroll = 0;
    }

    pub fn cycle_chart(&mut self) {
        self.chart = step(self.chart, true);
    }

    pub fn cycle_statement(&mut self) {
        self.statement = step(self.statement, true);
        self.statement_state = TableState::default();
    }

    /// Replaces the previous analysis wholesale and resets per-result
    /// navigation.
    pub fn set_outcome(&mut self, outcome: AnalysisOutcome) {
        if matches!(outcome, AnalysisOutcome::Ready(_)) {
            self.focus = Focus::Results;
        }
        self.outcome = outcome;
        self.table_state = TableState::default();
        self.statement_state = TableState::default();
        self.scroll = 0;
    }

    fn table_len(&self) -> usize {
        match &self.outcome {
            AnalysisOutcome::Ready(analysis) => analysis
                .table()
                .as_ref()
                .map(|table| table.rows().len())
                .unwrap_or(0),
            _ => 0,
        }
    }

    fn statement_len(&self) -> usize {
        match &self.outcome {
            AnalysisOutcome::Ready(analysis) => analysis
                .statements()
                .as_ref()
                .map(|statements| statements.get(self.statement).line_items().len())
                .unwrap_or(0),
            _ => 0,
        }
    }

    /// The table Up/Down moves through on the current tab, with its row count.
    fn selectable(&mut self) -> (&mut TableState, usize) {
        if self.tab == AnalysisTab::FundamentalData {
            let rows = self.statement_len();
            (&mut self.statement_state, rows)
        } else {
            let rows = self.table_len();
            (&mut self.table_state, rows)
        }
    }

    pub fn page_down(&mut self) {
        self.scroll = self.scroll.saturating_add(5);
    }

    pub fn page_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(5);
    }

    pub fn scroll_down(&mut self) {
        if !matches!(
            self.tab,
            AnalysisTab::PricingData | AnalysisTab::FundamentalData
        ) {
            self.scroll = self.scroll.saturating_add(1);
            return;
        }

        let (table_state, rows) = self.selectable();

        if rows > 0 {
            let i = match table_state.selected() {
                Some(i) if i >= rows - 1 => 0,
                Some(i) => i + 1,
                None => 0,
            };
            table_state.select(Some(i));
        }
    }

    pub fn scroll_up(&mut self) {
        if !matches!(
            self.tab,
            AnalysisTab::PricingData | AnalysisTab::FundamentalData
        ) {
            self.scroll = self.scroll.saturating_sub(1);
            return;
        }

        let (table_state, rows) = self.selectable();

        if rows > 0 {
            let i = match table_state.selected() {
                Some(0) | None => rows - 1,
                Some(i) => i - 1,
            };
            table_state.select(Some(i));
        }
    }
}
