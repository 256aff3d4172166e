// Carga del feed de asignaciones con respaldo embebido.
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::error::ErrorAgenda;
use crate::models::FeedAsignaciones;

/// Datos estáticos que se usan cuando la fuente configurada falla.
const FEED_RESPALDO: &str = include_str!("../data/asignaciones_respaldo.json");

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum OrigenFeed {
    Archivo(PathBuf),
    Respaldo,
}

#[derive(Debug, Clone)]
pub struct CargaFeed {
    pub feed: FeedAsignaciones,
    pub origen: OrigenFeed,
}

pub fn parsear_feed(texto: &str) -> Result<FeedAsignaciones, ErrorAgenda> {
    Ok(serde_json::from_str::<FeedAsignaciones>(texto)?)
}

pub fn leer_feed(ruta: &Path) -> Result<FeedAsignaciones, ErrorAgenda> {
    let texto = fs::read_to_string(ruta).map_err(|e| ErrorAgenda::LecturaFeed {
        ruta: ruta.display().to_string(),
        source: e,
    })?;
    parsear_feed(&texto)
}

pub fn feed_respaldo() -> FeedAsignaciones {
    match parsear_feed(FEED_RESPALDO) {
        Ok(f) => f,
        Err(e) => {
            // el respaldo se valida en las pruebas; aquí sólo queda no bloquear
            warn!("respaldo embebido inválido: {}", e);
            FeedAsignaciones::default()
        }
    }
}

/// Carga el feed desde `ruta`. Nunca falla: ante cualquier error (o sin
/// ruta) se continúa con los datos de respaldo y se deja registro.
pub fn cargar_feed(ruta: Option<&Path>) -> CargaFeed {
    if let Some(ruta) = ruta {
        match leer_feed(ruta) {
            Ok(feed) => {
                info!("feed cargado desde {}: {} cursos, {} docentes", ruta.display(), feed.data.len(), feed.docentes.len());
                return CargaFeed { feed, origen: OrigenFeed::Archivo(ruta.to_path_buf()) };
            }
            Err(e) => warn!("{}; se usan datos de respaldo", e),
        }
    } else {
        info!("sin AGENDA_DATA_FILE; se usan datos de respaldo");
    }
    CargaFeed { feed: feed_respaldo(), origen: OrigenFeed::Respaldo }
}
