//! Tasks, subjects and schedules

use tabled::Tabled;

use crate::client::models::{Schedule, Subject, Task};
use crate::output::formatters::{
    DESCRIPTION_PREVIEW_LEN, date_or_dash, text_or_dash, truncate,
};

/// Task row
#[derive(Debug, Clone, Tabled)]
pub struct TaskDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,

    #[tabled(rename = "DUE")]
    pub due: String,

    #[tabled(rename = "STATUS")]
    pub status: String,
}

impl From<&Task> for TaskDisplay {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.to_string(),
            title: task.titulo.clone(),
            description: truncate(
                &text_or_dash(task.descripcion.as_deref()),
                DESCRIPTION_PREVIEW_LEN,
            ),
            due: date_or_dash(task.fecha_vencimiento.as_deref()),
            status: if task.completada {
                "Completed".to_string()
            } else {
                "Pending".to_string()
            },
        }
    }
}

/// Subject row, used for both the offer and the preselection
#[derive(Debug, Clone, Tabled)]
pub struct SubjectDisplay {
    #[tabled(rename = "CODE")]
    pub code: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "SCHEDULE")]
    pub schedule: String,

    #[tabled(rename = "ROOM")]
    pub room: String,
}

impl From<&Subject> for SubjectDisplay {
    fn from(subject: &Subject) -> Self {
        Self {
            code: subject.codigo.clone(),
            name: subject.nombre.clone(),
            schedule: text_or_dash(subject.horario.as_deref()),
            room: text_or_dash(subject.aula.as_deref()),
        }
    }
}

/// Class schedule row
#[derive(Debug, Clone, Tabled)]
pub struct ScheduleDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "SUBJECT")]
    pub subject: String,

    #[tabled(rename = "TIME")]
    pub time: String,

    #[tabled(rename = "ROOM")]
    pub room: String,

    #[tabled(rename = "MAP")]
    pub map: String,
}

impl From<&Schedule> for ScheduleDisplay {
    fn from(schedule: &Schedule) -> Self {
        Self {
            id: schedule.id.to_string(),
            subject: schedule.materia.clone(),
            time: text_or_dash(schedule.hora.as_deref()),
            room: text_or_dash(schedule.aula.as_deref()),
            map: if schedule.ubicacion.is_some() {
                "yes".to_string()
            } else {
                "-".to_string()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::Id;

    #[test]
    fn test_task_display() {
        let task = Task {
            id: Id::Number(3),
            titulo: "Parcial".to_string(),
            descripcion: Some("a".repeat(150)),
            fecha_vencimiento: Some("2024-12-01".to_string()),
            completada: false,
        };

        let display = TaskDisplay::from(&task);

        assert_eq!(display.id, "3");
        assert_eq!(display.due, "01/12/2024");
        assert_eq!(display.status, "Pending");
        assert!(display.description.ends_with("..."));
        assert_eq!(display.description.chars().count(), DESCRIPTION_PREVIEW_LEN + 3);
    }

    #[test]
    fn test_subject_display_missing_fields() {
        let subject = Subject {
            codigo: "INF-101".to_string(),
            nombre: "Programación I".to_string(),
            horario: None,
            aula: Some("LAB-3".to_string()),
        };

        let display = SubjectDisplay::from(&subject);

        assert_eq!(display.schedule, "-");
        assert_eq!(display.room, "LAB-3");
    }
}
