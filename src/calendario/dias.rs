// Reconocimiento de nombres de día de la semana.
use chrono::Weekday;

use crate::util::normalizar_texto;

// Orden domingo..sábado; la primera coincidencia gana.
const TOKENS_DIA: [(Weekday, &[&str]); 7] = [
    (Weekday::Sun, &["domingo", "sunday"]),
    (Weekday::Mon, &["lunes", "monday"]),
    (Weekday::Tue, &["martes", "tuesday"]),
    (Weekday::Wed, &["miercoles", "wednesday"]),
    (Weekday::Thu, &["jueves", "thursday"]),
    (Weekday::Fri, &["viernes", "friday"]),
    (Weekday::Sat, &["sabado", "saturday"]),
];

/// Resuelve un nombre de día en texto libre a un `Weekday`.
///
/// Primero busca uno de los nombres completos como subcadena (sin distinguir
/// mayúsculas ni tildes: "Miércoles" y "miercoles" valen igual). Si nada
/// coincide, acepta la abreviatura exacta ("LU", "MIE", "J"...). Devuelve
/// `None` para texto que no es un día; eso no es un error.
pub fn dia_desde_nombre(nombre: &str) -> Option<Weekday> {
    let norm = normalizar_texto(nombre);
    if norm.is_empty() {
        return None;
    }
    for (dia, tokens) in TOKENS_DIA.iter() {
        if tokens.iter().any(|t| norm.contains(t)) {
            return Some(*dia);
        }
    }
    match norm.as_str() {
        "lu" | "lun" => Some(Weekday::Mon),
        "ma" | "mar" => Some(Weekday::Tue),
        "mi" | "mie" => Some(Weekday::Wed),
        "ju" | "jue" => Some(Weekday::Thu),
        "vi" | "vie" => Some(Weekday::Fri),
        "sa" | "sab" => Some(Weekday::Sat),
        "do" | "dom" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Nombre en español para mostrar en la cabecera de la grilla.
pub fn nombre_dia(dia: Weekday) -> &'static str {
    match dia {
        Weekday::Mon => "Lunes",
        Weekday::Tue => "Martes",
        Weekday::Wed => "Miércoles",
        Weekday::Thu => "Jueves",
        Weekday::Fri => "Viernes",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    }
}
