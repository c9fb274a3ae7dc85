//! News model

use serde::{Deserialize, Serialize};

use super::Id;

/// Entry from `/noticias`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: Id,

    pub title: String,

    /// Image URL
    #[serde(default)]
    pub img: Option<String>,

    /// Publication date (ISO 8601)
    #[serde(default)]
    pub date: Option<String>,

    /// Link to the full article
    #[serde(default)]
    pub url: Option<String>,
}
