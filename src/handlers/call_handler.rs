//! handlers/call_handler.rs
//! Endpoints para listar llamadas y descargar sus grabaciones.

use actix_files::NamedFile;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::config::app_config::AppConfig;
use crate::services::call_service::{CallService, DEFAULT_PAGE_LIMIT};
use crate::services::signature_service;

#[derive(Deserialize)]
pub struct ListQuery {
    start_id: i64,
}

/// GET /calls?start_id=N
/// Devuelve hasta 50 registros con id >= start_id y los marca como
/// entregados antes de responder.
pub async fn list_calls_endpoint(
    req: HttpRequest,
    query: web::Query<ListQuery>,
    config: web::Data<AppConfig>,
    call_service: web::Data<CallService>,
) -> HttpResponse {
    let request_data = format!("GET{}/calls?start_id={}", config.portal, query.start_id);
    if !is_authorized(&req, &config, &request_data) {
        log::error!("401 en /calls. Headers: {:?}", req.headers());
        return unauthorized();
    }

    let records = match call_service
        .list_from(query.start_id, DEFAULT_PAGE_LIMIT)
        .await
    {
        Ok(records) => records,
        Err(e) => {
            log::error!(
                "Error listando llamadas (start_id={}): {:?}",
                query.start_id,
                e
            );
            return internal_error();
        }
    };

    let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
    if let Err(e) = call_service.mark_delivered(&ids).await {
        log::error!("Error marcando entregadas {:?}: {:?}", ids, e);
        return internal_error();
    }

    log::info!(
        "Entregados {} registros desde id={}",
        records.len(),
        query.start_id
    );
    HttpResponse::Ok().json(records)
}

/// GET /calls/{call_id}
/// Sirve la grabación asociada al registro, si existe en disco.
pub async fn get_call_file_endpoint(
    req: HttpRequest,
    path: web::Path<i64>,
    config: web::Data<AppConfig>,
    call_service: web::Data<CallService>,
) -> HttpResponse {
    let call_id = path.into_inner();

    let request_data = format!("GET{}/calls/{}", config.portal, call_id);
    if !is_authorized(&req, &config, &request_data) {
        log::error!("401 en /calls/{}. Headers: {:?}", call_id, req.headers());
        return unauthorized();
    }

    let file_name = match call_service.file_name_for(call_id).await {
        Ok(name) => name,
        Err(e) => {
            log::error!("Error consultando grabación de {}: {:?}", call_id, e);
            return internal_error();
        }
    };

    if let Some(file_name) = file_name {
        let file_path = config.file_directory.join(&file_name);
        // Actix Files gestiona Content-Type y el streaming del cuerpo.
        match NamedFile::open_async(&file_path).await {
            Ok(file) => {
                log::info!("Sirviendo grabación de la llamada {}", call_id);
                return file.into_response(&req);
            }
            Err(e) => {
                log::error!("Grabación {:?} no disponible: {}", file_path, e);
            }
        }
    }

    log::error!("404. Llamada {} sin grabación", call_id);
    HttpResponse::NotFound().json(json!({
        "error": "not_found",
        "message": "Call not found"
    }))
}

/// La petición es válida solo si la firma coincide con la esperada y el
/// Bearer coincide con la clave configurada. Un header ausente cuenta como
/// no autorizado.
fn is_authorized(req: &HttpRequest, config: &AppConfig, request_data: &str) -> bool {
    let signature = header_value(req, "signature");
    let authorization = header_value(req, "authorization");

    match (signature, authorization) {
        (Some(signature), Some(authorization)) => {
            let expected = signature_service::sign(&config.secret_key, request_data);
            signature == expected && authorization == format!("Bearer {}", config.api_key)
        }
        _ => false,
    }
}

fn header_value<'a>(req: &'a HttpRequest, name: &str) -> Option<&'a str> {
    req.headers().get(name)?.to_str().ok()
}

fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(json!({
        "error": "invalid_api_key_or_signature",
        "message": "API key or signature is invalid or missing."
    }))
}

fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(json!({
        "error": "internal_error",
        "message": "Internal server error."
    }))
}
