use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Tabs, Wrap},
};
use strum::IntoEnumIterator;

use crate::{
    app::{
        analysis::{Analysis, AnalysisOutcome, CHECK_SELECTION, NO_NEWS},
        calc::{Direction as Move, HistoryTable},
        charts,
        state::{AnalysisTab, AppState, ChartKind, Focus},
        utils,
    },
    models::{NewsItem, Statements},
};

const SIDEBAR_WIDTH: u16 = 30;

pub fn render(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(area);

    render_form(frame, columns[0], state);

    let outcome = std::mem::take(&mut state.outcome);
    match &outcome {
        AnalysisOutcome::Idle => {
            let hint = Paragraph::new("Enter a ticker symbol and date range, then press Enter.")
                .style(Style::default().fg(Color::Gray))
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(hint, columns[1]);
        }
        AnalysisOutcome::Rejected(err) => {
            let message = Paragraph::new(err.to_string())
                .style(Style::default().fg(Color::Yellow))
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(message, columns[1]);
        }
        AnalysisOutcome::Failed(reason) => {
            let message = Paragraph::new(vec![
                Line::from(Span::styled(reason.clone(), Style::default().fg(Color::Red))),
                Line::from(""),
                Line::from(CHECK_SELECTION),
            ])
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
            frame.render_widget(message, columns[1]);
        }
        AnalysisOutcome::Ready(analysis) => render_analysis(frame, columns[1], analysis, state),
    }
    state.outcome = outcome;
}

fn render_form(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let fields = [
        ("Stock Ticker", &state.form.ticker, Focus::Ticker),
        ("Start Date", &state.form.start, Focus::Start),
        ("End Date", &state.form.end, Focus::End),
    ];
    for (i, (title, value, focus)) in fields.into_iter().enumerate() {
        let border_style = if state.focus == focus {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let input = Paragraph::new(value.as_str()).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        frame.render_widget(input, rows[i]);
    }

    let help = Paragraph::new(vec![
        Line::from("Tab: next field"),
        Line::from("Enter: analyze"),
        Line::from("←/→: tabs  c: chart"),
        Line::from("s: statement  e: export"),
        Line::from("↑/↓: rows  PgUp/PgDn: text"),
    ])
    .style(Style::default().fg(Color::DarkGray))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, rows[3]);
}

fn render_analysis(frame: &mut Frame, area: Rect, analysis: &Analysis, state: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    render_header(frame, chunks[0], analysis);
    render_tiles(frame, chunks[1], price_tiles(analysis));
    render_tiles(frame, chunks[2], valuation_tiles(analysis));

    let titles: Vec<String> = AnalysisTab::iter().map(|tab| tab.to_string()).collect();
    let selected = AnalysisTab::iter().position(|tab| tab == state.tab).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, chunks[3]);

    match state.tab {
        AnalysisTab::PriceCharts => render_charts(frame, chunks[4], analysis, state.chart),
        AnalysisTab::PricingData => render_history_table(frame, chunks[4], analysis, state),
        AnalysisTab::FundamentalData => render_fundamentals(frame, chunks[4], analysis, state),
        AnalysisTab::News => render_news(frame, chunks[4], analysis.news(), state.scroll),
    }
}

fn render_header(frame: &mut Frame, area: Rect, analysis: &Analysis) {
    let header = analysis.header();
    let mut lines = vec![
        Line::from(Span::styled(
            header.title().clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "{} {}",
            utils::fmt_price(*header.current_price()),
            header.currency()
        )),
    ];

    lines.push(match header.change() {
        Some(change) => {
            let (marker, color) = match change.direction {
                Move::Up => ("🔺", Color::Green),
                Move::Down => ("🔻", Color::Red),
            };
            Line::from(Span::styled(
                format!(
                    "{} {:.2} ({:.2}%) today",
                    marker, change.amount, change.percent
                ),
                Style::default().fg(color),
            ))
        }
        None => Line::from(Span::styled(
            "Price change data not available",
            Style::default().fg(Color::DarkGray),
        )),
    });

    if let Some(after_hours) = header.after_hours() {
        lines.push(Line::from(format!(
            "📌 After Hours: {:.2} {}",
            after_hours,
            header.currency()
        )));
    }

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::BOTTOM)),
        area,
    );
}

fn price_tiles(analysis: &Analysis) -> [(&'static str, String); 3] {
    let quote = analysis.quote();
    [
        ("Open", utils::fmt_price(quote.open)),
        ("High", utils::fmt_price(quote.day_high)),
        ("Low", utils::fmt_price(quote.day_low)),
    ]
}

fn valuation_tiles(analysis: &Analysis) -> [(&'static str, String); 3] {
    let quote = analysis.quote();
    [
        ("Mkt Cap", utils::fmt_large_number("", quote.market_cap)),
        ("P/E Ratio", utils::fmt_price(quote.trailing_pe)),
        ("Div Yield", utils::fmt_percent_fraction(quote.dividend_yield)),
    ]
}

fn render_tiles(frame: &mut Frame, area: Rect, tiles: [(&'static str, String); 3]) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for ((label, value), column) in tiles.into_iter().zip(columns.iter()) {
        let tile =
            Paragraph::new(value).block(Block::default().title(label).borders(Borders::ALL));
        frame.render_widget(tile, *column);
    }
}

fn render_charts(frame: &mut Frame, area: Rect, analysis: &Analysis, kind: ChartKind) {
    let notices: Vec<Line> = [analysis.history_notice(), analysis.intraday_notice()]
        .into_iter()
        .flatten()
        .map(|notice| Line::from(Span::styled(notice, Style::default().fg(Color::Yellow))))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(notices.len() as u16),
            Constraint::Min(0),
        ])
        .split(area);

    let picker = ChartKind::iter()
        .map(|k| {
            if k == kind {
                Span::styled(
                    format!("[{}]", k),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::raw(format!(" {} ", k))
            }
        })
        .collect::<Vec<_>>();
    frame.render_widget(Paragraph::new(Line::from(picker)), chunks[0]);
    frame.render_widget(Paragraph::new(notices), chunks[1]);

    let symbol = analysis.selection().symbol();
    let history = analysis.history();
    let intraday = analysis.intraday();

    match kind {
        ChartKind::Intraday if !intraday.is_empty() => charts::render_close_line(
            frame,
            chunks[2],
            intraday,
            &format!("{} Intraday Price", symbol),
            Color::Cyan,
        ),
        ChartKind::Intraday => {}
        _ if history.is_empty() => {}
        ChartKind::Line => charts::render_close_line(
            frame,
            chunks[2],
            history,
            &format!("{} Closing Price History", symbol),
            Color::Cyan,
        ),
        ChartKind::Ohlc => {
            charts::render_ohlc(frame, chunks[2], history, &format!("{} OHLC Chart", symbol))
        }
        ChartKind::Volume => {
            charts::render_volume(frame, chunks[2], history, &format!("{} Trading Volume", symbol))
        }
        ChartKind::Candlestick => charts::render_candlesticks(
            frame,
            chunks[2],
            history,
            &format!("{} Candlestick Chart", symbol),
        ),
    }
}

fn render_history_table(frame: &mut Frame, area: Rect, analysis: &Analysis, state: &mut AppState) {
    let Some(table) = analysis.table() else {
        if let Some(notice) = analysis.history_notice() {
            let message = Paragraph::new(notice)
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(message, area);
        }
        return;
    };

    let widget = history_table_widget(table);
    frame.render_stateful_widget(widget, area, &mut state.table_state);
}

fn history_table_widget(table: &HistoryTable) -> Table<'static> {
    let header_cells = table
        .columns()
        .iter()
        .map(|h| Cell::from(h.clone()).style(Style::default().fg(Color::Yellow)));
    let header = Row::new(header_cells).height(1);

    let rows = table.rows().iter().map(|row| {
        let change = *row.pct_change();
        let change_color = if change.is_sign_negative() {
            Color::Red
        } else {
            Color::Green
        };
        let record = table.record(row);
        let change_index = record.len() - 2;
        let cells = record.into_iter().enumerate().map(|(i, value)| {
            if i == change_index {
                Cell::from(value).style(Style::default().fg(change_color))
            } else {
                Cell::from(value)
            }
        });
        Row::new(cells.collect::<Vec<_>>()).height(1)
    });

    let widths = table
        .columns()
        .iter()
        .map(|c| match c.as_str() {
            "Date" => Constraint::Length(12),
            "Volume" => Constraint::Length(14),
            _ => Constraint::Length(11),
        })
        .collect::<Vec<_>>();

    Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!("{} Historical Data (e: export CSV)", table.ticker()))
                .borders(Borders::ALL),
        )
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
}

fn info_lines(entries: Vec<(&'static str, String)>) -> Vec<Line<'static>> {
    entries
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(
                    format!("{}: ", label),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(value),
            ])
        })
        .collect()
}

fn render_fundamentals(frame: &mut Frame, area: Rect, analysis: &Analysis, state: &mut AppState) {
    let quote = analysis.quote();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),
            Constraint::Min(6),
            Constraint::Length(8),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    let company = info_lines(vec![
        ("Sector", utils::fmt_text(quote.sector.as_deref())),
        ("Industry", utils::fmt_text(quote.industry.as_deref())),
        ("Employees", utils::fmt_count(quote.full_time_employees)),
        ("Country", utils::fmt_text(quote.country.as_deref())),
        ("Website", utils::fmt_text(quote.website.as_deref())),
    ]);
    let metrics = info_lines(vec![
        ("Market Cap", utils::fmt_large_number("$", quote.market_cap)),
        ("Forward P/E", utils::fmt_price(quote.forward_pe)),
        ("Trailing P/E", utils::fmt_price(quote.trailing_pe)),
        (
            "Dividend Yield",
            utils::fmt_percent_fraction(quote.dividend_yield),
        ),
        ("52 Week High", utils::fmt_price(quote.fifty_two_week_high)),
        ("52 Week Low", utils::fmt_price(quote.fifty_two_week_low)),
    ]);

    frame.render_widget(
        Paragraph::new(company).block(
            Block::default()
                .title("Company Information")
                .borders(Borders::ALL),
        ),
        columns[0],
    );
    frame.render_widget(
        Paragraph::new(metrics).block(
            Block::default()
                .title("Financial Metrics")
                .borders(Borders::ALL),
        ),
        columns[1],
    );

    render_statement(frame, chunks[1], analysis.statements(), state);

    let summary: Vec<Line> = analysis
        .business_summary()
        .iter()
        .filter(|paragraph| !paragraph.is_empty())
        .flat_map(|paragraph| [Line::from(paragraph.clone()), Line::from("")])
        .collect();
    frame.render_widget(
        Paragraph::new(summary)
            .wrap(Wrap { trim: true })
            .scroll((state.scroll, 0))
            .block(
                Block::default()
                    .title("Business Summary")
                    .borders(Borders::ALL),
            ),
        chunks[2],
    );
}

fn render_statement(
    frame: &mut Frame,
    area: Rect,
    statements: &Result<Statements, String>,
    state: &mut AppState,
) {
    let statements = match statements {
        Ok(statements) => statements,
        Err(message) => {
            let error = Paragraph::new(message.clone())
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .title("Financial Statements")
                        .borders(Borders::ALL),
                );
            frame.render_widget(error, area);
            return;
        }
    };

    let statement = statements.get(state.statement);
    let title = format!("{} (s: next statement)", statement.kind());

    if statement.is_empty() {
        let empty = Paragraph::new(format!("No {} data available.", statement.kind()))
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().title(title).borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(
        std::iter::once(Cell::from("Line Item"))
            .chain(statement.periods().iter().map(|p| Cell::from(p.clone())))
            .map(|cell| cell.style(Style::default().fg(Color::Yellow)))
            .collect::<Vec<_>>(),
    );

    let rows = statement.line_items().iter().map(|item| {
        let values = item
            .values()
            .iter()
            .map(|value| Cell::from(utils::fmt_large_number("", *value)));
        Row::new(
            std::iter::once(Cell::from(item.name().clone()))
                .chain(values)
                .collect::<Vec<_>>(),
        )
    });

    let widths = std::iter::once(Constraint::Length(36))
        .chain(statement.periods().iter().map(|_| Constraint::Length(18)))
        .collect::<Vec<_>>();

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title(title).borders(Borders::ALL))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    frame.render_stateful_widget(table, area, &mut state.statement_state);
}

fn news_lines(items: &[NewsItem]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, item) in items.iter().enumerate() {
        lines.push(Line::from(Span::styled(
            format!("{}. {}", i + 1, item.title()),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(format!(
            "Date & Time: {}",
            utils::fmt_timestamp(item.published().as_ref())
        )));
        if let Some(publisher) = item.publisher() {
            lines.push(Line::from(Span::styled(
                format!("Publisher: {}", publisher),
                Style::default().fg(Color::Gray),
            )));
        }
        lines.push(Line::from(
            item.summary()
                .clone()
                .unwrap_or_else(|| String::from("No summary available.")),
        ));
        lines.push(Line::from(Span::styled(
            item.link()
                .clone()
                .unwrap_or_else(|| String::from("No link available.")),
            Style::default().fg(Color::Blue),
        )));
        lines.push(Line::from(""));
    }
    lines
}

fn render_news(frame: &mut Frame, area: Rect, news: &Result<Vec<NewsItem>, String>, scroll: u16) {
    let block = Block::default().title("Top 10 News").borders(Borders::ALL);
    let paragraph = match news {
        Ok(items) if items.is_empty() => {
            Paragraph::new(NO_NEWS).style(Style::default().fg(Color::DarkGray))
        }
        Ok(items) => Paragraph::new(news_lines(items)).scroll((scroll, 0)),
        Err(message) => Paragraph::new(message.clone()).style(Style::default().fg(Color::Red)),
    };

    frame.render_widget(paragraph.wrap(Wrap { trim: true }).block(block), area);
}
