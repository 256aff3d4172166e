// Biblioteca raíz del crate `agenda_docente`.
// Expone el motor de calendario (expansión de horarios + grilla) y la API
// HTTP que sirve el dashboard de asignaciones docente-especialista.
pub mod models;
pub mod calendario;
pub mod util;
pub mod vista;
pub mod tabla;
pub mod docentes;
pub mod asignaciones;
pub mod fuente;
pub mod config;
pub mod error;
pub mod server;
pub mod server_handlers;

pub use calendario::{calcular_bloque, expandir_horarios, vista_semanal, Bloque, ConfigGrilla, MapaOcurrencias};
pub use config::Configuracion;
pub use error::ErrorAgenda;
/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
