//! Requests and debts

use tabled::Tabled;

use crate::client::models::{Debt, RequestType, StudentRequest};
use crate::output::formatters::{date_or_dash, format_amount, text_or_dash};

/// Filed request row
#[derive(Debug, Clone, Tabled)]
pub struct RequestDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "TYPE")]
    pub kind: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,

    #[tabled(rename = "DATE")]
    pub date: String,

    #[tabled(rename = "STATUS")]
    pub status: String,
}

impl From<&StudentRequest> for RequestDisplay {
    fn from(request: &StudentRequest) -> Self {
        Self {
            id: request.id.to_string(),
            kind: RequestType::describe(&request.tipo),
            description: text_or_dash(request.descripcion.as_deref()),
            date: date_or_dash(request.fecha_vencimiento.as_deref()),
            status: text_or_dash(request.estado.as_deref()),
        }
    }
}

/// Request type row
#[derive(Debug, Clone, Tabled)]
pub struct RequestTypeDisplay {
    #[tabled(rename = "CODE")]
    pub code: &'static str,

    #[tabled(rename = "DESCRIPTION")]
    pub description: &'static str,
}

impl From<&RequestType> for RequestTypeDisplay {
    fn from(kind: &RequestType) -> Self {
        Self {
            code: kind.code,
            description: kind.description,
        }
    }
}

/// Debt row
#[derive(Debug, Clone, Tabled)]
pub struct DebtDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "AMOUNT")]
    pub amount: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "UPDATED")]
    pub updated: String,
}

impl From<&Debt> for DebtDisplay {
    fn from(debt: &Debt) -> Self {
        Self {
            id: debt.id.to_string(),
            amount: format_amount(debt.monto),
            status: debt.status().to_string(),
            updated: date_or_dash(debt.fecha_actualizacion.as_deref()),
        }
    }
}
