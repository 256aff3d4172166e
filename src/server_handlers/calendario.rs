use std::collections::HashMap;

use actix_web::{web, HttpResponse, Responder};
use chrono::Local;
use serde::Deserialize;
use serde_json::json;

use crate::calendario::{calcular_bloque, expandir_horarios, horas_grilla, parsear_fecha, vista_semanal, ConfigGrilla};
use crate::docentes::{buscar_docente, cursos_de_docente};
use crate::error::ErrorAgenda;
use crate::models::{Curso, MarcadorPidd, Ocurrencia};
use crate::server::EstadoApp;
use crate::server_handlers::respuesta_error;
use crate::tabla::{columnas_cursos, encabezados, renderizar_filas};
use crate::util::{estilo_estado, formatear_porcentaje};

#[derive(Debug, Deserialize)]
pub struct ExpandirRequest {
    pub cursos: Vec<Curso>,
    #[serde(default)]
    pub pidd: Option<MarcadorPidd>,
}

#[derive(Debug, Deserialize)]
pub struct BloqueRequest {
    pub ocurrencia: Ocurrencia,
    #[serde(default)]
    pub grilla: Option<ConfigGrilla>,
}

/// POST /calendario/expandir
/// Body: `{ "cursos": [...], "pidd": { "codigo_curso": "...", "esa": 0.5 } }`
pub async fn expandir_handler(body: web::Json<ExpandirRequest>) -> impl Responder {
    let req = body.into_inner();
    let mapa = expandir_horarios(&req.cursos, req.pidd.as_ref());
    HttpResponse::Ok().json(json!({
        "fechas": mapa.len(),
        "ocurrencias": mapa,
    }))
}

/// POST /calendario/bloque
/// Posición de una ocurrencia; `renderizable: false` cuando la hora no se entiende.
/// Una `grilla` enviada por el cliente se valida igual que la de configuración.
pub async fn bloque_handler(estado: web::Data<EstadoApp>, body: web::Json<BloqueRequest>) -> impl Responder {
    let req = body.into_inner();
    let grilla = req.grilla.unwrap_or(estado.grilla);
    if let Err(e) = grilla.validar() {
        return respuesta_error(&e);
    }
    match calcular_bloque(&req.ocurrencia, &grilla) {
        Some(bloque) => HttpResponse::Ok().json(json!({"renderizable": true, "bloque": bloque})),
        None => HttpResponse::Ok().json(json!({"renderizable": false})),
    }
}

/// GET /docentes/{id}/calendario?semana=YYYY-MM-DD
/// Semana (lunes a domingo) que contiene `semana`; por defecto la actual.
pub async fn calendario_docente_handler(
    estado: web::Data<EstadoApp>,
    path: web::Path<String>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    let docente_id = path.into_inner();
    let docente = match buscar_docente(&estado.feed, &docente_id) {
        Some(d) => d,
        None => return respuesta_error(&ErrorAgenda::DocenteNoEncontrado(docente_id)),
    };

    let fecha = match query.get("semana").filter(|s| !s.trim().is_empty()) {
        Some(s) => match parsear_fecha(s) {
            Some(f) => f,
            None => return respuesta_error(&ErrorAgenda::Validacion(format!("semana inválida: '{}'", s))),
        },
        None => Local::now().date_naive(),
    };

    let cursos = cursos_de_docente(&estado.feed, &docente.id);
    let mapa = expandir_horarios(&cursos, docente.pidd.as_ref());
    let semana = vista_semanal(&mapa, fecha, &estado.grilla);

    let estados: Vec<_> = cursos
        .iter()
        .map(|c| json!({"codigo": c.codigo, "seccion": c.seccion, "estilo": estilo_estado(c.estado)}))
        .collect();

    let columnas = columnas_cursos();

    HttpResponse::Ok().json(json!({
        "docente": docente,
        "columnas_cursos": encabezados(&columnas),
        "filas_cursos": renderizar_filas(&columnas, &cursos),
        "esa_pidd": formatear_porcentaje(docente.pidd.as_ref().and_then(|p| p.esa)),
        "grilla": estado.grilla,
        "horas": horas_grilla(&estado.grilla),
        "cursos": estados,
        "semana": semana,
    }))
}
