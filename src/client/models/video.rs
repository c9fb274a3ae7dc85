//! Institutional video model

use serde::{Deserialize, Serialize};

use super::Id;

/// Entry from `/videos`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: Id,

    pub titulo: String,

    #[serde(default)]
    pub fecha_publicacion: Option<String>,

    /// YouTube video id
    pub url: String,
}

impl Video {
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.url)
    }
}
