//! Coursework task model

use serde::{Deserialize, Serialize};

use super::Id;

/// Entry from `/tareas`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Id,

    pub titulo: String,

    #[serde(default)]
    pub descripcion: Option<String>,

    /// Due date
    #[serde(default)]
    pub fecha_vencimiento: Option<String>,

    #[serde(default)]
    pub completada: bool,
}

impl Task {
    /// Tasks that are still open
    pub fn pending(tasks: Vec<Task>) -> Vec<Task> {
        tasks.into_iter().filter(|t| !t.completada).collect()
    }
}
