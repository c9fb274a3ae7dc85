//! Student profile model

use serde::{Deserialize, Serialize};

/// Profile returned by `/info_usuario`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub username: Option<String>,

    /// First name
    #[serde(default)]
    pub nombre: Option<String>,

    /// Last name
    #[serde(default)]
    pub apellido: Option<String>,

    #[serde(default)]
    pub email: Option<String>,
}

impl UserInfo {
    /// `nombre apellido`, trimmed; `None` when both are blank
    pub fn full_name(&self) -> Option<String> {
        let full = format!(
            "{} {}",
            self.nombre.as_deref().unwrap_or(""),
            self.apellido.as_deref().unwrap_or("")
        );
        let full = full.trim();
        if full.is_empty() {
            None
        } else {
            Some(full.to_string())
        }
    }
}
