//! Helpers puros compartidos por la API y las vistas: insignias de estado,
//! porcentajes ESA, fechas para mostrar y normalización de texto.

use serde::Serialize;

use crate::calendario::parsear_fecha;
use crate::models::EstadoCambio;

/// Texto que se muestra cuando una fecha no se puede interpretar.
pub const FECHA_INVALIDA: &str = "Invalid date";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tono {
    Exito,
    Advertencia,
    Neutro,
}

/// Descripción de la insignia de estado (sin acoplarse a ningún framework UI)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EstiloEstado {
    pub etiqueta: &'static str,
    pub tono: Tono,
    pub destacado: bool,
}

pub fn estilo_estado(estado: Option<EstadoCambio>) -> EstiloEstado {
    match estado {
        Some(EstadoCambio::Nuevo) => EstiloEstado { etiqueta: "Nuevo", tono: Tono::Exito, destacado: true },
        Some(EstadoCambio::Modificado) => EstiloEstado { etiqueta: "Modificado", tono: Tono::Advertencia, destacado: true },
        _ => EstiloEstado { etiqueta: "Sin cambios", tono: Tono::Neutro, destacado: false },
    }
}

/// Formatea una fracción (0.875) como porcentaje con un decimal ("87.5%").
pub fn formatear_porcentaje(fraccion: Option<f64>) -> String {
    match fraccion {
        Some(f) if f.is_finite() => format!("{:.1}%", f * 100.0),
        _ => "—".to_string(),
    }
}

/// Fecha de la fuente -> "DD/MM/YYYY", o `FECHA_INVALIDA`.
pub fn formatear_fecha(texto: &str) -> String {
    match parsear_fecha(texto) {
        Some(f) => f.format("%d/%m/%Y").to_string(),
        None => FECHA_INVALIDA.to_string(),
    }
}

/// Normaliza un texto para comparaciones: minúsculas, sin acentos,
/// puntuación convertida a espacio y espacios colapsados.
pub fn normalizar_texto(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        let c = match ch {
            'Á' | 'À' | 'Ä' | 'Â' | 'á' | 'à' | 'ä' | 'â' => 'a',
            'É' | 'È' | 'Ë' | 'Ê' | 'é' | 'è' | 'ë' | 'ê' => 'e',
            'Í' | 'Ì' | 'Ï' | 'Î' | 'í' | 'ì' | 'ï' | 'î' => 'i',
            'Ó' | 'Ò' | 'Ö' | 'Ô' | 'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'Ú' | 'Ù' | 'Ü' | 'Û' | 'ú' | 'ù' | 'ü' | 'û' => 'u',
            'Ñ' | 'ñ' => 'n',
            other => other,
        };
        if c.is_alphanumeric() {
            out.extend(c.to_lowercase());
        } else {
            out.push(' ');
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estilo_estado() {
        assert_eq!(estilo_estado(Some(EstadoCambio::Nuevo)).tono, Tono::Exito);
        assert_eq!(estilo_estado(Some(EstadoCambio::Modificado)).etiqueta, "Modificado");
        assert!(!estilo_estado(None).destacado);
        assert_eq!(estilo_estado(Some(EstadoCambio::SinCambio)), estilo_estado(None));
    }

    #[test]
    fn test_formatear_porcentaje() {
        assert_eq!(formatear_porcentaje(Some(0.875)), "87.5%");
        assert_eq!(formatear_porcentaje(Some(1.0)), "100.0%");
        assert_eq!(formatear_porcentaje(None), "—");
        assert_eq!(formatear_porcentaje(Some(f64::NAN)), "—");
    }

    #[test]
    fn test_formatear_fecha() {
        assert_eq!(formatear_fecha("2025-03-10"), "10/03/2025");
        assert_eq!(formatear_fecha("2025-03-10T00:00:00.000Z"), "10/03/2025");
        assert_eq!(formatear_fecha("mañana"), FECHA_INVALIDA);
    }

    #[test]
    fn test_normalizar_texto() {
        assert_eq!(normalizar_texto("  María  José-Núñez "), "maria jose nunez");
        assert_eq!(normalizar_texto("MIÉRCOLES"), "miercoles");
    }
}
