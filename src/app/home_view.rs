use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{
    charts,
    home::{IntradayPanel, LatestPrice, TickerBoard},
    state::AppState,
};

pub const DATA_UNAVAILABLE: &str = "Data unavailable";

fn price_text(prefix: &str, price: &LatestPrice) -> String {
    match price.price() {
        Some(value) => format!("{}{:.2}", prefix, value),
        None => DATA_UNAVAILABLE.to_string(),
    }
}

fn price_line<'a>(prefix: &str, price: &LatestPrice) -> Line<'a> {
    let value_style = match price.price() {
        Some(_) => Style::default().fg(Color::White),
        None => Style::default().fg(Color::DarkGray),
    };
    Line::from(vec![
        Span::styled(
            format!("{}: ", price.label()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(price_text(prefix, price), value_style),
    ])
}

pub fn render(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let Some(home) = &state.home else {
        let message = Paragraph::new("No market data loaded. Press F5 to refresh.")
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(message, area);
        return;
    };

    let index_rows = home.indices().len().div_ceil(2) as u16;
    let board_rows = home
        .global_trending()
        .prices()
        .len()
        .max(home.regional_trending().prices().len()) as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(index_rows + 2),
            Constraint::Length(board_rows + 2),
            Constraint::Min(8),
        ])
        .split(area);

    render_indices(frame, chunks[0], home.indices());

    let boards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    render_board(frame, boards[0], home.global_trending());
    render_board(frame, boards[1], home.regional_trending());

    render_intraday(frame, chunks[2], home.intraday());
}

/// Index tiles alternate between a left and a right column.
fn render_indices(frame: &mut Frame, area: Rect, indices: &[LatestPrice]) {
    let block = Block::default()
        .title("Market Indices 📈")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let (mut left, mut right) = (Vec::new(), Vec::new());
    for (i, index) in indices.iter().enumerate() {
        let line = price_line("", index);
        if i % 2 == 0 {
            left.push(line);
        } else {
            right.push(line);
        }
    }

    frame.render_widget(Paragraph::new(left), columns[0]);
    frame.render_widget(Paragraph::new(right), columns[1]);
}

fn render_board(frame: &mut Frame, area: Rect, board: &TickerBoard) {
    let lines: Vec<Line> = board
        .prices()
        .iter()
        .map(|price| price_line(board.currency_prefix(), price))
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(board.title().clone())
            .borders(Borders::ALL),
    );
    frame.render_widget(paragraph, area);
}

fn render_intraday(frame: &mut Frame, area: Rect, panels: &[IntradayPanel]) {
    if panels.is_empty() {
        return;
    }

    let constraints = vec![Constraint::Ratio(1, panels.len() as u32); panels.len()];
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (panel, column) in panels.iter().zip(columns.iter()) {
        if panel.series().is_empty() {
            let notice = Paragraph::new(format!(
                "⚠ No intraday data available for {}.",
                panel.label()
            ))
            .style(Style::default().fg(Color::Yellow))
            .block(
                Block::default()
                    .title(panel.title().clone())
                    .borders(Borders::ALL),
            );
            frame.render_widget(notice, *column);
            continue;
        }

        charts::render_close_line(
            frame,
            *column,
            panel.series(),
            panel.title(),
            charts::trend_color(*panel.trend()),
        );
    }
}
