pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod logger;
pub mod models;

#[cfg(test)]
mod test;
