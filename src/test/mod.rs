
mod analysis;
mod calc;
mod config;
mod export;
mod state;
mod ui;
