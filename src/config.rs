// Configuración desde `.env` y variables de entorno.
use std::env;
use std::path::PathBuf;

use crate::calendario::ConfigGrilla;
use crate::error::ErrorAgenda;

pub const BIND_POR_DEFECTO: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq)]
pub struct Configuracion {
    pub bind: String,
    /// Archivo JSON con el feed `{ data: [...] }`; sin él se usa el respaldo embebido
    pub archivo_datos: Option<PathBuf>,
    pub grilla: ConfigGrilla,
}

impl Default for Configuracion {
    fn default() -> Self {
        Configuracion {
            bind: BIND_POR_DEFECTO.to_string(),
            archivo_datos: None,
            grilla: ConfigGrilla::default(),
        }
    }
}

fn load_dotenv() {
    let _ = dotenv::dotenv();
}

impl Configuracion {
    /// Lee AGENDA_BIND, AGENDA_DATA_FILE, AGENDA_GRILLA_INICIO,
    /// AGENDA_GRILLA_FIN y AGENDA_PX_POR_HORA (cargando `.env` si existe).
    pub fn desde_entorno() -> Result<Self, ErrorAgenda> {
        load_dotenv();
        Self::desde_fuente(|k| env::var(k).ok())
    }

    /// Versión parametrizable para pruebas: `leer` reemplaza a `env::var`.
    pub fn desde_fuente<F>(leer: F) -> Result<Self, ErrorAgenda>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defecto = Configuracion::default();
        let valor = |k: &str| leer(k).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind = valor("AGENDA_BIND").unwrap_or(defecto.bind);
        let archivo_datos = valor("AGENDA_DATA_FILE").map(PathBuf::from);

        let hora_inicio = match valor("AGENDA_GRILLA_INICIO") {
            Some(v) => parsear_numero::<u32>("AGENDA_GRILLA_INICIO", &v)?,
            None => defecto.grilla.hora_inicio,
        };
        let hora_fin = match valor("AGENDA_GRILLA_FIN") {
            Some(v) => parsear_numero::<u32>("AGENDA_GRILLA_FIN", &v)?,
            None => defecto.grilla.hora_fin,
        };
        let px_por_hora = match valor("AGENDA_PX_POR_HORA") {
            Some(v) => parsear_numero::<f64>("AGENDA_PX_POR_HORA", &v)?,
            None => defecto.grilla.px_por_hora,
        };

        let grilla = ConfigGrilla { hora_inicio, hora_fin, px_por_hora };
        grilla.validar().map_err(|e| match e {
            ErrorAgenda::Validacion(msg) => ErrorAgenda::Configuracion(msg),
            otro => otro,
        })?;

        Ok(Configuracion { bind, archivo_datos, grilla })
    }
}

fn parsear_numero<T: std::str::FromStr>(clave: &str, valor: &str) -> Result<T, ErrorAgenda> {
    valor
        .parse::<T>()
        .map_err(|_| ErrorAgenda::Configuracion(format!("{} no es un número válido: '{}'", clave, valor)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn desde(pares: &[(&str, &str)]) -> Result<Configuracion, ErrorAgenda> {
        let mapa: HashMap<String, String> = pares.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Configuracion::desde_fuente(|k| mapa.get(k).cloned())
    }

    #[test]
    fn test_valores_por_defecto() {
        let c = desde(&[]).unwrap();
        assert_eq!(c, Configuracion::default());
        assert_eq!(c.grilla.hora_inicio, 7);
        assert_eq!(c.grilla.hora_fin, 23);
    }

    #[test]
    fn test_valores_explicitos() {
        let c = desde(&[
            ("AGENDA_BIND", "0.0.0.0:9000"),
            ("AGENDA_DATA_FILE", "data/feed.json"),
            ("AGENDA_GRILLA_INICIO", "8"),
            ("AGENDA_PX_POR_HORA", "48.5"),
        ])
        .unwrap();
        assert_eq!(c.bind, "0.0.0.0:9000");
        assert_eq!(c.archivo_datos, Some(PathBuf::from("data/feed.json")));
        assert_eq!(c.grilla.hora_inicio, 8);
        assert_eq!(c.grilla.px_por_hora, 48.5);
    }

    #[test]
    fn test_vacio_usa_defecto() {
        let c = desde(&[("AGENDA_DATA_FILE", "  ")]).unwrap();
        assert!(c.archivo_datos.is_none());
    }

    #[test]
    fn test_errores() {
        assert!(matches!(desde(&[("AGENDA_GRILLA_INICIO", "siete")]), Err(ErrorAgenda::Configuracion(_))));
        assert!(matches!(desde(&[("AGENDA_GRILLA_INICIO", "23")]), Err(ErrorAgenda::Configuracion(_))));
        assert!(matches!(desde(&[("AGENDA_PX_POR_HORA", "0")]), Err(ErrorAgenda::Configuracion(_))));
        assert!(matches!(desde(&[("AGENDA_GRILLA_FIN", "30")]), Err(ErrorAgenda::Configuracion(_))));
    }
}
