// --- Agenda docente - servidor del calendario de asignaciones ---

use agenda_docente::{run_server, Configuracion};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    let config = match Configuracion::desde_entorno() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("{}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    tracing::info!("=== Agenda docente (API) ===");
    run_server(config).await
}
