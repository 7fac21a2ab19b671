pub mod fetch;
pub mod utils;
pub mod yahoo;
pub mod yahoo_dto;

pub use fetch::DataFetch;
pub use yahoo::YahooApi;
