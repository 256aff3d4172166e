// Conversión entre texto de la fuente y fechas locales del calendario.
use chrono::NaiveDate;

/// Formato canónico de las claves del mapa fecha -> ocurrencias.
pub const FORMATO_CLAVE: &str = "%Y-%m-%d";

/// Interpreta una fecha de la fuente como fecha local (sin conversión de zona).
///
/// Acepta "YYYY-MM-DD", el mismo prefijo seguido de una hora ISO
/// ("2025-03-10T00:00:00.000Z": se toma la fecha escrita, no se convierte a UTC),
/// y las formas chilenas "DD-MM-YYYY" / "DD/MM/YYYY".
pub fn parsear_fecha(texto: &str) -> Option<NaiveDate> {
    let t = texto.trim();
    if t.is_empty() {
        return None;
    }
    // cortar la parte de hora si viene en formato ISO
    let solo_fecha = match t.find(|c: char| c == 'T' || c == ' ') {
        Some(pos) => &t[..pos],
        None => t,
    };
    NaiveDate::parse_from_str(solo_fecha, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(solo_fecha, "%d-%m-%Y"))
        .or_else(|_| NaiveDate::parse_from_str(solo_fecha, "%d/%m/%Y"))
        .ok()
}

pub fn clave_fecha(fecha: NaiveDate) -> String {
    fecha.format(FORMATO_CLAVE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsear_fecha_formatos() {
        let esperado = NaiveDate::from_ymd_opt(2025, 3, 10);
        assert_eq!(parsear_fecha("2025-03-10"), esperado);
        assert_eq!(parsear_fecha(" 2025-03-10T23:30:00-03:00 "), esperado);
        assert_eq!(parsear_fecha("10-03-2025"), esperado);
        assert_eq!(parsear_fecha("10/03/2025"), esperado);
    }

    #[test]
    fn test_parsear_fecha_invalida() {
        assert_eq!(parsear_fecha(""), None);
        assert_eq!(parsear_fecha("2025-02-30"), None);
        assert_eq!(parsear_fecha("pronto"), None);
    }

    #[test]
    fn test_clave_fecha() {
        let f = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        assert_eq!(clave_fecha(f), "2025-01-06");
    }
}
