use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::server::EstadoApp;

/// GET /api/asignaciones?latest=true
/// Devuelve `{ data: [...] }` con los cursos del feed cargado (archivo o respaldo).
pub async fn feed_handler(estado: web::Data<EstadoApp>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "data": estado.feed.data,
        "origen": estado.origen,
    }))
}
