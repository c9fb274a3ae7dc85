//! Student request (solicitud) models

use serde::{Deserialize, Serialize};

use super::Id;

/// Kind of request a student can file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RequestType {
    pub code: &'static str,
    pub description: &'static str,
}

/// Request types accepted by `/crear_solicitud`
pub const REQUEST_TYPES: [RequestType; 3] = [
    RequestType {
        code: "beca",
        description: "Solicitud de beca",
    },
    RequestType {
        code: "carta_estudio",
        description: "Carta de estudios",
    },
    RequestType {
        code: "record_nota",
        description: "Record de nota",
    },
];

impl RequestType {
    pub fn find(code: &str) -> Option<RequestType> {
        REQUEST_TYPES.iter().copied().find(|t| t.code == code)
    }

    /// Human description for a code, falling back to the code itself
    pub fn describe(code: &str) -> String {
        Self::find(code)
            .map(|t| t.description.to_string())
            .unwrap_or_else(|| code.to_string())
    }
}

/// Entry from `/mis_solicitudes`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRequest {
    pub id: Id,

    /// Request type code
    pub tipo: String,

    #[serde(default)]
    pub descripcion: Option<String>,

    #[serde(default)]
    pub fecha_vencimiento: Option<String>,

    /// Processing state
    #[serde(default)]
    pub estado: Option<String>,
}

/// Body for `POST /crear_solicitud`
#[derive(Debug, Clone, Serialize)]
pub struct NewRequest {
    pub tipo: String,
    pub descripcion: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_request_type() {
        assert_eq!(
            RequestType::find("beca").map(|t| t.description),
            Some("Solicitud de beca")
        );
        assert!(RequestType::find("BECA").is_none());
        assert!(RequestType::find("pasaporte").is_none());
    }

    #[test]
    fn test_describe_falls_back_to_code() {
        assert_eq!(RequestType::describe("record_nota"), "Record de nota");
        assert_eq!(RequestType::describe("otro"), "otro");
    }

    #[test]
    fn test_new_request_body() {
        let body = serde_json::to_value(NewRequest {
            tipo: "beca".to_string(),
            descripcion: "Beca de excelencia".to_string(),
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"tipo": "beca", "descripcion": "Beca de excelencia"})
        );
    }
}
