//! Motor de calendario semanal.
//!
//! Submódulos:
//! - `dias`: reconocimiento de nombres de día
//! - `fechas`: parseo de fechas de la fuente y claves "YYYY-MM-DD"
//! - `expandir`: horarios recurrentes -> ocurrencias por fecha
//! - `grilla`: hora -> posición vertical en la grilla
//! - `semana`: vista de una semana con bloques posicionados
//!
//! Todo es puro y síncrono: misma entrada, misma salida.

pub mod dias;
pub mod fechas;
pub mod expandir;
pub mod grilla;
pub mod semana;

pub use dias::{dia_desde_nombre, nombre_dia};
pub use fechas::{clave_fecha, parsear_fecha};
pub use expandir::{expandir_horarios, ordenar_por_hora, MapaOcurrencias};
pub use grilla::{bloque_para_rango, calcular_bloque, hora_a_minutos, horas_grilla, parsear_rango, Bloque, ConfigGrilla};
pub use semana::{inicio_semana, vista_semanal, BloquePosicionado, DiaCalendario, SemanaCalendario};
