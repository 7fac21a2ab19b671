use chrono::{DateTime, Utc};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Getters, PartialEq, Serialize, new)]
pub struct NewsItem {
    title: String,
    published: Option<DateTime<Utc>>,
    publisher: Option<String>,
    summary: Option<String>,
    link: Option<String>,
}
