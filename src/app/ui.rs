use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
};

use crate::app::{
    state::AppState,
    views::{self, VIEWS},
};

pub fn render(frame: &mut Frame, state: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let titles = VIEWS
        .iter()
        .map(|view| format!("{} {}", view.hotkey, view.title));
    let nav = Tabs::new(titles)
        .select(views::position(state.view))
        .block(
            Block::default()
                .title("Finserve Dashboard")
                .borders(Borders::ALL),
        )
        .style(Style::default().fg(Color::Cyan))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(nav, chunks[0]);

    (views::entry(state.view).render)(frame, chunks[1], state);

    let footer = state
        .status
        .clone()
        .unwrap_or_else(|| String::from("F1/F2: switch view  F5: refresh  Ctrl+C: quit"));
    frame.render_widget(
        Paragraph::new(footer).style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );

    if let Some(message) = &state.popup_message {
        render_popup(frame, message, "", Color::Yellow);
    }

    if let Some(message) = &state.error_popup {
        render_popup(frame, message, "Error (Enter/Esc to close)", Color::Red);
    }
}

fn render_popup(frame: &mut Frame, message: &str, title: &str, color: Color) {
    let area = centered_rect(50, 20, frame.area());
    let popup = Paragraph::new(message.to_string())
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL),
        );
    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
