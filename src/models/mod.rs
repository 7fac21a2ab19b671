pub mod news;
pub mod price_series;
pub mod quote;
pub mod selection;
pub mod statement;

pub use news::NewsItem;
pub use price_series::{Interval, PriceSample, PriceSeries};
pub use quote::QuoteSnapshot;
pub use selection::{SelectionError, UserSelection};
pub use statement::{FinancialStatement, LineItem, StatementKind, Statements};
