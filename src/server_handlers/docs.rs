use actix_web::{HttpResponse, Responder};
use serde_json::json;

pub async fn help_handler() -> impl Responder {
    let ejemplo_expandir = json!({
        "cursos": [{
            "codigo": "EDU1010",
            "seccion": "1",
            "nrc": "24511",
            "periodo": "2025-1",
            "metodo": "Presencial",
            "horarios": [{
                "dia": "Lunes",
                "hora": "08:30-10:00",
                "sede": "Santiago Centro",
                "aula": "A-201",
                "fecha_inicio": "2025-03-03",
                "fecha_fin": "2025-07-04"
            }]
        }],
        "pidd": {"codigo_curso": "EDU1010", "esa": 0.62}
    });

    let help = json!({
        "description": "API del calendario de asignaciones docente-especialista. Expande horarios semanales a fechas concretas y calcula su posición en la grilla horaria.",
        "endpoints": {
            "GET /api/asignaciones?latest=true": "feed de cursos { data: [...] } (archivo configurado o respaldo)",
            "GET /docentes": "listado con q, sede, sin_especialista, pagina, por_pagina",
            "GET /docentes/{id}/calendario?semana=YYYY-MM-DD": "semana lunes-domingo con bloques posicionados",
            "POST /calendario/expandir": "mapa fecha -> ocurrencias",
            "POST /calendario/bloque": "posición de una ocurrencia en la grilla",
            "GET|POST /asignaciones": "listar / proponer asignaciones",
            "POST /asignaciones/{id}/confirmar": "confirmar una propuesta",
            "DELETE /asignaciones/{id}": "eliminar una asignación"
        },
        "post_expandir_example": ejemplo_expandir,
        "note": "Los horarios sin fechas, con día irreconocible o con hora ilegible se omiten en silencio; nunca producen error."
    });

    HttpResponse::Ok().json(help)
}
