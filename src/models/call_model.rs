//! models/call_model.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registro de llamada en la tabla `b24_data`.
///
/// Solo se exponen las columnas que viajan en la respuesta JSON del listado;
/// `file_name` y `send_status` se consultan por separado.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CallRecord {
    pub id: i64,
    pub stage: String,
    pub deal_url: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub call_type: String,
    pub duration: i64,
    pub manager_id: i64,
    pub date: DateTime<Utc>,
    pub timezone: String,
}
