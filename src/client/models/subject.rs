//! Course pre-registration model

use serde::{Deserialize, Serialize};

/// Subject offered for pre-registration (also used for the current preselection)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Subject code, e.g. `INF-101`
    pub codigo: String,

    pub nombre: String,

    #[serde(default)]
    pub horario: Option<String>,

    /// Classroom
    #[serde(default)]
    pub aula: Option<String>,
}

impl Subject {
    /// Case-insensitive substring match on code or name
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.codigo.to_lowercase().contains(&query)
            || self.nombre.to_lowercase().contains(&query)
    }

    /// Subjects matching `query`, in their original order
    pub fn search(subjects: Vec<Subject>, query: &str) -> Vec<Subject> {
        subjects.into_iter().filter(|s| s.matches(query)).collect()
    }
}
