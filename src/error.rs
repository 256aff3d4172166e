use thiserror::Error;

/// Errores de la capa de servicio. El motor de calendario no falla nunca:
/// las entradas malformadas simplemente no producen salida.
#[derive(Debug, Error)]
pub enum ErrorAgenda {
    #[error("configuración inválida: {0}")]
    Configuracion(String),

    #[error("no se pudo leer el feed '{ruta}': {source}")]
    LecturaFeed {
        ruta: String,
        #[source]
        source: std::io::Error,
    },

    #[error("feed con formato inválido: {0}")]
    FormatoFeed(#[from] serde_json::Error),

    #[error("docente no encontrado: {0}")]
    DocenteNoEncontrado(String),

    #[error("asignación no encontrada: {0}")]
    AsignacionNoEncontrada(u64),

    #[error("solicitud inválida: {0}")]
    Validacion(String),
}
