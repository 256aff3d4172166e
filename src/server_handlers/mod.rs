pub mod feed;
pub mod docentes;
pub mod calendario;
pub mod asignaciones;
pub mod docs;

pub use feed::*;
pub use docentes::*;
pub use calendario::*;
pub use asignaciones::*;
pub use docs::*;

use actix_web::HttpResponse;
use serde_json::json;

use crate::error::ErrorAgenda;

/// Traduce un `ErrorAgenda` a la respuesta JSON `{"error": ...}` con su código HTTP.
pub fn respuesta_error(e: &ErrorAgenda) -> HttpResponse {
    let cuerpo = json!({"error": e.to_string()});
    match e {
        ErrorAgenda::DocenteNoEncontrado(_) | ErrorAgenda::AsignacionNoEncontrada(_) => HttpResponse::NotFound().json(cuerpo),
        ErrorAgenda::Validacion(_) | ErrorAgenda::FormatoFeed(_) => HttpResponse::BadRequest().json(cuerpo),
        ErrorAgenda::Configuracion(_) | ErrorAgenda::LecturaFeed { .. } => HttpResponse::InternalServerError().json(cuerpo),
    }
}
