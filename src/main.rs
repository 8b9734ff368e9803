use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::time::Duration;

use crate::config::app_config::AppConfig;
use crate::logger::init_logger;
use crate::services::call_service::CallService;

mod app;
mod config;
mod handlers;
mod logger;
mod models;
mod services;

#[cfg(test)]
mod tests;

/// Pool pequeño: el volumen de peticiones es bajo y el pool ya garantiza
/// que cada conexión se devuelve al terminar, incluso con error.
const MAX_DB_CONNECTIONS: u32 = 5;
const DB_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

async fn setup_database(config: &AppConfig) -> Pool<Postgres> {
    let db_url = config.database_url();

    log::info!(
        "Conectando a PostgreSQL en {} (base {})",
        config.db_host,
        config.db_name
    );

    PgPoolOptions::new()
        .max_connections(MAX_DB_CONNECTIONS)
        .acquire_timeout(DB_ACQUIRE_TIMEOUT)
        .connect(&db_url)
        .await
        .expect("No se pudo conectar a la base de datos PostgreSQL.")
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Cargar .env al inicio
    init_logger();

    // Configuración completa o nada: una variable ausente tumba el proceso
    // antes de abrir el puerto.
    let config = AppConfig::from_env().expect("Configuración incompleta");

    let db_pool = setup_database(&config).await;

    let call_service = CallService::new(db_pool.clone());
    if let Err(e) = call_service.run_migrations().await {
        panic!("Fallo en migraciones de 'b24_data': {:?}", e);
    }

    log::info!("Levantando servidor en 127.0.0.1:8000");
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(call_service.clone()))
            .configure(app::init_app)
    })
    .workers(1)
    .bind(("127.0.0.1", 8000))?
    .run()
    .await
}
