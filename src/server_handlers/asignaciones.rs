use std::collections::HashMap;

use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;

use crate::docentes::buscar_docente;
use crate::error::ErrorAgenda;
use crate::server::EstadoApp;
use crate::server_handlers::respuesta_error;

#[derive(Debug, Deserialize)]
pub struct PropuestaRequest {
    pub docente_id: String,
    pub especialista: String,
}

/// GET /asignaciones?docente_id=D-001
pub async fn listar_asignaciones_handler(
    estado: web::Data<EstadoApp>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    let docente = query.get("docente_id").map(|s| s.trim()).filter(|s| !s.is_empty());
    let lista = estado.registro.listar(docente);
    HttpResponse::Ok().json(json!({"total": lista.len(), "asignaciones": lista}))
}

/// POST /asignaciones
/// Body: `{ "docente_id": "D-001", "especialista": "Paula Herrera" }`
pub async fn proponer_asignacion_handler(
    estado: web::Data<EstadoApp>,
    body: web::Json<PropuestaRequest>,
) -> impl Responder {
    let req = body.into_inner();
    if buscar_docente(&estado.feed, req.docente_id.trim()).is_none() {
        return respuesta_error(&ErrorAgenda::DocenteNoEncontrado(req.docente_id));
    }
    match estado.registro.proponer(&req.docente_id, &req.especialista) {
        Ok(a) => HttpResponse::Created().json(a),
        Err(e) => respuesta_error(&e),
    }
}

/// POST /asignaciones/{id}/confirmar
pub async fn confirmar_asignacion_handler(estado: web::Data<EstadoApp>, path: web::Path<u64>) -> impl Responder {
    match estado.registro.confirmar(path.into_inner()) {
        Ok(a) => HttpResponse::Ok().json(a),
        Err(e) => respuesta_error(&e),
    }
}

/// DELETE /asignaciones/{id}
pub async fn eliminar_asignacion_handler(estado: web::Data<EstadoApp>, path: web::Path<u64>) -> impl Responder {
    let id = path.into_inner();
    match estado.registro.eliminar(id) {
        Ok(()) => HttpResponse::Ok().json(json!({"status": "deleted", "id": id})),
        Err(e) => respuesta_error(&e),
    }
}
