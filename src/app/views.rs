use ratatui::{Frame, layout::Rect};

use crate::app::{analysis_view, home_view, state::AppState};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ViewId {
    #[default]
    Home,
    StockAnalysis,
}

pub struct ViewEntry {
    pub id: ViewId,
    pub title: &'static str,
    pub hotkey: &'static str,
    pub render: fn(&mut Frame, Rect, &mut AppState),
}

pub static VIEWS: [ViewEntry; 2] = [
    ViewEntry {
        id: ViewId::Home,
        title: "Home",
        hotkey: "F1",
        render: home_view::render,
    },
    ViewEntry {
        id: ViewId::StockAnalysis,
        title: "Stock Analysis",
        hotkey: "F2",
        render: analysis_view::render,
    },
];

pub fn entry(id: ViewId) -> &'static ViewEntry {
    VIEWS
        .iter()
        .find(|entry| entry.id == id)
        .unwrap_or(&VIEWS[0])
}

pub fn position(id: ViewId) -> usize {
    VIEWS.iter().position(|entry| entry.id == id).unwrap_or(0)
}
