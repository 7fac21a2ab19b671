pub mod analysis;
pub mod analysis_view;
pub mod app;
pub mod calc;
pub mod charts;
pub mod export;
pub mod home;
pub mod home_view;
pub mod state;
pub mod ui;
pub mod utils;
pub mod views;

pub use app::App;
