//! Campus event model

use serde::{Deserialize, Serialize};

use super::{Id, Location};

/// Entry from `/eventos`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Id,

    pub titulo: String,

    #[serde(default)]
    pub descripcion: Option<String>,

    #[serde(default)]
    pub fecha_evento: Option<String>,

    /// Venue
    #[serde(default)]
    pub lugar: Option<String>,

    /// Free-form "lat, lng" text
    #[serde(default)]
    pub coordenadas: Option<String>,
}

impl Event {
    /// Parsed coordinates, when `coordenadas` reads as `lat,lng`
    pub fn location(&self) -> Option<Location> {
        let raw = self.coordenadas.as_deref()?;
        let (lat, lng) = raw.split_once(',')?;
        let latitude = lat.trim().parse::<f64>().ok()?;
        let longitude = lng.trim().parse::<f64>().ok()?;

        if (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude) {
            Some(Location {
                latitude,
                longitude,
            })
        } else {
            None
        }
    }
}
