//! Class schedule model

use serde::{Deserialize, Serialize};

use super::Id;

/// Geographic position of a classroom
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn map_url(&self) -> String {
        format!(
            "https://www.google.com/maps?q={},{}",
            self.latitude, self.longitude
        )
    }
}

/// Entry from `/horarios`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub id: Id,

    /// Subject name
    pub materia: String,

    #[serde(default)]
    pub hora: Option<String>,

    #[serde(default)]
    pub aula: Option<String>,

    #[serde(default)]
    pub ubicacion: Option<Location>,
}
