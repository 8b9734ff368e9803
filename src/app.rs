//! app.rs
use crate::handlers::call_handler;
use actix_web::web;

pub fn init_app(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/calls")
            .route("", web::get().to(call_handler::list_calls_endpoint))
            .route(
                "/{call_id}",
                web::get().to(call_handler::get_call_file_endpoint),
            ),
    );
}
