use std::collections::HashMap;

use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::docentes::{filtrar_docentes, paginar, FiltroDocentes};
use crate::server::EstadoApp;
use crate::tabla::{columnas_docentes, encabezados, renderizar_filas};

const POR_PAGINA_DEFECTO: usize = 20;

/// GET /docentes?q=&sede=&sin_especialista=true&pagina=1&por_pagina=20
pub async fn docentes_handler(
    estado: web::Data<EstadoApp>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    let qm = query.into_inner();
    let no_vacio = |k: &str| qm.get(k).and_then(|s| if s.trim().is_empty() { None } else { Some(s.clone()) });

    let numero = |k: &str, defecto: usize| -> Result<usize, String> {
        match no_vacio(k) {
            Some(s) => s.trim().parse::<usize>().map_err(|_| format!("{} debe ser un entero, no '{}'", k, s)),
            None => Ok(defecto),
        }
    };
    let pagina = match numero("pagina", 1) {
        Ok(p) => p,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": e})),
    };
    let por_pagina = match numero("por_pagina", POR_PAGINA_DEFECTO) {
        Ok(p) => p,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": e})),
    };

    let filtro = FiltroDocentes {
        busqueda: no_vacio("q"),
        sede: no_vacio("sede"),
        solo_sin_especialista: no_vacio("sin_especialista").is_some_and(|v| v == "true" || v == "1"),
    };

    let filtrados: Vec<_> = filtrar_docentes(&estado.feed.docentes, &filtro).into_iter().cloned().collect();
    let pagina = paginar(&filtrados, pagina, por_pagina);
    let columnas = columnas_docentes();

    HttpResponse::Ok().json(json!({
        "columnas": encabezados(&columnas),
        "filas": renderizar_filas(&columnas, &pagina.items),
        "pagina": pagina,
    }))
}
