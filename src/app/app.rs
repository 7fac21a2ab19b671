use std::{io, path::PathBuf};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use tracing::{error, info};

use crate::{
    api::DataFetch,
    app::{
        analysis::{AnalysisOutcome, assemble_analysis},
        export::write_history_csv,
        home::assemble_home,
        state::{AppState, Focus},
        ui,
        views::ViewId,
    },
    config::DashboardConfig,
};

/// What the event loop has to do after a key press updated the state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    None,
    Quit,
    LoadHome,
    Analyze,
    Export,
}

pub struct App {
    fetch: Box<dyn DataFetch>,
    config: DashboardConfig,
    export_dir: PathBuf,
    state: AppState,
}

impl App {
    pub fn new(fetch: Box<dyn DataFetch>, config: DashboardConfig, export_dir: PathBuf) -> Self {
        let state = AppState::new(&config);
        Self {
            fetch,
            config,
            export_dir,
            state,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    fn show_popup(&mut self, message: &str) {
        self.state.popup_message = Some(message.to_string());
    }

    fn clear_popup(&mut self) {
        self.state.popup_message = None;
    }

    fn show_error_popup(&mut self, message: &str) {
        self.state.error_popup = Some(message.to_string());
    }

    fn clear_error_popup(&mut self) {
        self.state.error_popup = None;
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_app(&mut terminal).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal.draw(|frame| ui::render(frame, &mut self.state))?;
        Ok(())
    }

    async fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        self.load_home(terminal).await?;

        loop {
            self.draw(terminal)?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match self.handle_key(key) {
                    Action::None => {}
                    Action::Quit => return Ok(()),
                    Action::LoadHome => self.load_home(terminal).await?,
                    Action::Analyze => self.analyze(terminal).await?,
                    Action::Export => self.export(),
                }
            }
        }
    }

    /// Applies a key press to the view state and reports any follow-up work.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }

        if self.state.error_popup.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.clear_error_popup();
            }
            return Action::None;
        }

        self.state.status = None;

        match key.code {
            KeyCode::F(1) => {
                self.state.view = ViewId::Home;
                return Action::LoadHome;
            }
            KeyCode::F(2) => {
                self.state.view = ViewId::StockAnalysis;
                return Action::None;
            }
            KeyCode::F(5) => {
                return match self.state.view {
                    ViewId::Home => Action::LoadHome,
                    ViewId::StockAnalysis => Action::Analyze,
                };
            }
            _ => {}
        }

        match self.state.view {
            ViewId::Home => match key.code {
                KeyCode::Char('q') => Action::Quit,
                KeyCode::Char('r') => Action::LoadHome,
                _ => Action::None,
            },
            ViewId::StockAnalysis => self.handle_analysis_key(key),
        }
    }

    fn handle_analysis_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => return Action::Analyze,
            KeyCode::Tab => {
                self.state.focus_next();
                return Action::None;
            }
            KeyCode::BackTab => {
                self.state.focus_prev();
                return Action::None;
            }
            KeyCode::Esc => {
                self.state.focus = Focus::Results;
                return Action::None;
            }
            _ => {}
        }

        if let Some(field) = self.state.field_mut() {
            match key.code {
                KeyCode::Char(c) => field.push(c),
                KeyCode::Backspace => {
                    field.pop();
                }
                _ => {}
            }
            return Action::None;
        }

        match key.code {
            KeyCode::Char('q') => return Action::Quit,
            KeyCode::Char('e') => return Action::Export,
            KeyCode::Char('c') => self.state.cycle_chart(),
            KeyCode::Char('s') => self.state.cycle_statement(),
            KeyCode::Right => self.state.next_tab(true),
            KeyCode::Left => self.state.next_tab(false),
            KeyCode::Down => self.state.scroll_down(),
            KeyCode::Up => self.state.scroll_up(),
            KeyCode::PageDown => self.state.page_down(),
            KeyCode::PageUp => self.state.page_up(),
            _ => {}
        }
        Action::None
    }

    async fn load_home<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        self.show_popup("Loading market data...");
        self.draw(terminal)?;

        self.refresh_home().await;

        self.clear_popup();
        self.draw(terminal)
    }

    async fn analyze<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        self.show_popup("Loading...");
        self.draw(terminal)?;

        self.submit().await;

        self.clear_popup();
        self.draw(terminal)
    }

    pub async fn refresh_home(&mut self) {
        let home = assemble_home(self.fetch.as_ref(), &self.config).await;
        self.state.home = Some(home);
    }

    /// Runs one analysis pass over the current form contents.
    pub async fn submit(&mut self) {
        let outcome = assemble_analysis(self.fetch.as_ref(), &self.config, &self.state.form).await;
        self.state.set_outcome(outcome);
    }

    pub fn export(&mut self) {
        let AnalysisOutcome::Ready(analysis) = &self.state.outcome else {
            self.state.status = Some(String::from("Nothing to export yet."));
            return;
        };
        let Some(table) = analysis.table() else {
            self.state.status = Some(String::from("No historical data to export."));
            return;
        };

        match write_history_csv(table, &self.export_dir) {
            Ok(path) => {
                info!(path = %path.display(), "history exported");
                self.state.status = Some(format!("Exported {}", path.display()));
            }
            Err(e) => {
                error!("export failed: {:#}", e);
                self.show_error_popup(&format!("Error exporting CSV: {:?}", e));
            }
        }
    }
}
