// Estructuras de datos principales

use serde::{Deserialize, Deserializer, Serialize};

/// Marca de cambio que acompaña a un curso o a un horario puntual.
/// Sólo se usa para destacar visualmente; no altera la expansión.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum EstadoCambio {
    #[serde(rename = "NEW")]
    Nuevo,
    #[serde(rename = "MODIFIED")]
    Modificado,
    #[default]
    #[serde(rename = "UNCHANGED")]
    SinCambio,
}

impl EstadoCambio {
    /// Cualquier etiqueta desconocida se trata como "sin cambios".
    pub fn desde_etiqueta(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "NEW" => EstadoCambio::Nuevo,
            "MODIFIED" => EstadoCambio::Modificado,
            _ => EstadoCambio::SinCambio,
        }
    }
}

impl<'de> Deserialize<'de> for EstadoCambio {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(EstadoCambio::desde_etiqueta(&s))
    }
}

/// Escalar que la fuente manda a veces como texto y a veces como número
/// (el NRC suele llegar como entero).
#[derive(Deserialize)]
#[serde(untagged)]
enum Escalar {
    Texto(String),
    Entero(i64),
    Real(f64),
    Logico(bool),
}

/// Campo de texto tolerante: acepta texto, número, booleano o `null`
/// (que queda como cadena vacía). Usar junto con `#[serde(default)]`.
fn texto_flexible<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Option::<Escalar>::deserialize(deserializer)? {
        Some(Escalar::Texto(s)) => s,
        Some(Escalar::Entero(n)) => n.to_string(),
        Some(Escalar::Real(x)) => x.to_string(),
        Some(Escalar::Logico(b)) => b.to_string(),
        None => String::new(),
    })
}

/// Un bloque semanal recurrente dentro de un curso.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Horario {
    /// Nombre del día tal como viene en la fuente ("Lunes", "miércoles", ...)
    #[serde(default, deserialize_with = "texto_flexible")]
    pub dia: String,
    /// Rango "HH:MM-HH:MM" (24h). Vacío si la fuente no lo trae: el horario
    /// igual se expande, sólo que no se ubica en la grilla.
    #[serde(default, deserialize_with = "texto_flexible")]
    pub hora: String,
    #[serde(default, deserialize_with = "texto_flexible")]
    pub sede: String,
    #[serde(default, deserialize_with = "texto_flexible")]
    pub aula: String,
    #[serde(default)]
    pub fecha_inicio: Option<String>,
    #[serde(default)]
    pub fecha_fin: Option<String>,
    #[serde(default)]
    pub estado: Option<EstadoCambio>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curso {
    #[serde(default, deserialize_with = "texto_flexible")]
    pub codigo: String,
    #[serde(default, deserialize_with = "texto_flexible")]
    pub seccion: String,
    #[serde(default, deserialize_with = "texto_flexible")]
    pub nrc: String,
    #[serde(default, deserialize_with = "texto_flexible")]
    pub periodo: String,
    #[serde(default, deserialize_with = "texto_flexible")]
    pub metodo: String,
    #[serde(default)]
    pub nombre: Option<String>,
    /// Docente dueño del curso; permite agrupar el feed por docente.
    #[serde(default)]
    pub docente_id: Option<String>,
    #[serde(default)]
    pub horarios: Vec<Horario>,
    #[serde(default)]
    pub estado: Option<EstadoCambio>,
}

/// Curso distinguido del Plan Individual de Desarrollo Docente.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarcadorPidd {
    pub codigo_curso: String,
    /// ESA como fracción (0.0 - 1.0)
    #[serde(default)]
    pub esa: Option<f64>,
}

/// Instancia concreta de un `Horario` en una fecha del calendario.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ocurrencia {
    pub fecha: String,
    #[serde(deserialize_with = "texto_flexible")]
    pub codigo: String,
    #[serde(deserialize_with = "texto_flexible")]
    pub seccion: String,
    #[serde(deserialize_with = "texto_flexible")]
    pub nrc: String,
    #[serde(deserialize_with = "texto_flexible")]
    pub periodo: String,
    #[serde(deserialize_with = "texto_flexible")]
    pub metodo: String,
    pub nombre: Option<String>,
    #[serde(deserialize_with = "texto_flexible")]
    pub dia: String,
    #[serde(deserialize_with = "texto_flexible")]
    pub hora: String,
    #[serde(deserialize_with = "texto_flexible")]
    pub sede: String,
    #[serde(deserialize_with = "texto_flexible")]
    pub aula: String,
    pub estado: Option<EstadoCambio>,
    pub es_pidd: bool,
    pub esa: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Docente {
    pub id: String,
    pub nombre: String,
    #[serde(default)]
    pub departamento: String,
    #[serde(default)]
    pub sede: String,
    /// Especialista pedagógico asignado (si ya existe)
    #[serde(default)]
    pub especialista: Option<String>,
    #[serde(default)]
    pub pidd: Option<MarcadorPidd>,
}

/// Cuerpo de `GET /api/asignaciones?latest=true`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedAsignaciones {
    #[serde(default)]
    pub data: Vec<Curso>,
    #[serde(default)]
    pub docentes: Vec<Docente>,
}
