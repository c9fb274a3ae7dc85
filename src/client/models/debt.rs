//! Outstanding balance model

use serde::{Deserialize, Serialize};

use super::Id;

/// Where debts are paid online
pub const PAYMENT_URL: &str = "https://uasd.edu.do/servicios/pago-en-linea/";

/// Entry from `/deudas`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    pub id: Id,

    /// Amount owed
    pub monto: f64,

    #[serde(default)]
    pub pagada: bool,

    #[serde(default)]
    pub fecha_actualizacion: Option<String>,
}

impl Debt {
    pub fn unpaid(debts: Vec<Debt>) -> Vec<Debt> {
        debts.into_iter().filter(|d| !d.pagada).collect()
    }

    pub fn status(&self) -> &'static str {
        if self.pagada { "Paid" } else { "Pending" }
    }
}
