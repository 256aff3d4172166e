use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use tracing::info;

use crate::asignaciones::RegistroAsignaciones;
use crate::calendario::ConfigGrilla;
use crate::config::Configuracion;
use crate::fuente::{cargar_feed, CargaFeed, OrigenFeed};
use crate::models::FeedAsignaciones;
use crate::server_handlers::*;

/// Estado compartido por los handlers. El feed se carga una vez al arrancar;
/// después todo el cálculo de calendario corre sobre esa foto.
pub struct EstadoApp {
    pub feed: FeedAsignaciones,
    pub origen: OrigenFeed,
    pub grilla: ConfigGrilla,
    pub registro: RegistroAsignaciones,
}

impl EstadoApp {
    pub fn new(carga: CargaFeed, grilla: ConfigGrilla) -> Self {
        EstadoApp {
            feed: carga.feed,
            origen: carga.origen,
            grilla,
            registro: RegistroAsignaciones::new(),
        }
    }
}

pub fn configurar_rutas(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/asignaciones", web::get().to(feed_handler))
        .route("/docentes", web::get().to(docentes_handler))
        .route("/docentes/{id}/calendario", web::get().to(calendario_docente_handler))
        .route("/calendario/expandir", web::post().to(expandir_handler))
        .route("/calendario/bloque", web::post().to(bloque_handler))
        .route("/asignaciones", web::get().to(listar_asignaciones_handler))
        .route("/asignaciones", web::post().to(proponer_asignacion_handler))
        .route("/asignaciones/{id}/confirmar", web::post().to(confirmar_asignacion_handler))
        .route("/asignaciones/{id}", web::delete().to(eliminar_asignacion_handler))
        .route("/help", web::get().to(help_handler));
}

pub async fn run_server(config: Configuracion) -> std::io::Result<()> {
    let carga = cargar_feed(config.archivo_datos.as_deref());
    let estado = web::Data::new(EstadoApp::new(carga, config.grilla));

    info!("Iniciando servidor en http://{}", config.bind);
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(Cors::permissive())
            .app_data(estado.clone())
            .configure(configurar_rutas)
    })
    .bind(config.bind.as_str())?
    .run()
    .await
}
