//! services/call_service.rs
//! Acceso a la tabla `b24_data` (registros de llamadas).

use anyhow::{Context, Result};
use sqlx::{Pool, Postgres};

use crate::models::call_model::CallRecord;

/// Máximo de registros que devuelve una página del listado
pub const DEFAULT_PAGE_LIMIT: i64 = 50;

/// Marca que espera el pipeline de ingesta en `send_status`
const DELIVERED_MARK: &str = "[+]";

#[derive(Clone)]
pub struct CallService {
    db_pool: Pool<Postgres>,
}

impl CallService {
    pub fn new(db_pool: Pool<Postgres>) -> Self {
        CallService { db_pool }
    }

    /// Corre migraciones con sqlx
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.db_pool).await?;
        Ok(())
    }

    /// Lista hasta `limit` registros con `id >= start_id`, en orden ascendente.
    /// Sin filas que cumplan, devuelve un Vec vacío (no es un error).
    pub async fn list_from(&self, start_id: i64, limit: i64) -> Result<Vec<CallRecord>> {
        let rows = sqlx::query_as::<_, CallRecord>(
            r#"
            SELECT id, stage, deal_url, type,
                   duration, manager_id, date, timezone
            FROM b24_data
            WHERE id >= $1
            ORDER BY id
            LIMIT $2
            "#,
        )
        .bind(start_id)
        .bind(limit)
        .fetch_all(&self.db_pool)
        .await
        .with_context(|| format!("Error listando llamadas desde id={start_id}"))?;

        Ok(rows)
    }

    /// Nombre del archivo de grabación de un registro, si el registro existe
    /// y tiene archivo asociado.
    pub async fn file_name_for(&self, entry_id: i64) -> Result<Option<String>> {
        let row: Option<(Option<String>,)> =
            sqlx::query_as("SELECT file_name FROM b24_data WHERE id = $1")
                .bind(entry_id)
                .fetch_optional(&self.db_pool)
                .await
                .with_context(|| format!("Error consultando file_name de id={entry_id}"))?;

        Ok(row.and_then(|(name,)| name))
    }

    /// Marca como entregados todos los ids dados. Con la lista vacía no
    /// toca la base de datos.
    pub async fn mark_delivered(&self, ids: &[i64]) -> Result<()> {
        if ids.is_empty() {
            return Ok(());
        }

        sqlx::query("UPDATE b24_data SET send_status = $1 WHERE id = ANY($2)")
            .bind(DELIVERED_MARK)
            .bind(ids)
            .execute(&self.db_pool)
            .await
            .context("Error marcando llamadas como entregadas")?;

        Ok(())
    }
}
