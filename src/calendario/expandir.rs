// Expansión de horarios semanales recurrentes a ocurrencias por fecha.
use std::collections::BTreeMap;

use std::iter;

use chrono::{Datelike, Days, NaiveDate};
use tracing::{debug, warn};

use crate::calendario::dias::dia_desde_nombre;
use crate::calendario::fechas::{clave_fecha, parsear_fecha};
use crate::calendario::grilla::minutos_inicio;
use crate::models::{Curso, Horario, MarcadorPidd, Ocurrencia};

/// Mapa fecha ("YYYY-MM-DD") -> ocurrencias de ese día.
/// Sólo contiene fechas con al menos una ocurrencia.
pub type MapaOcurrencias = BTreeMap<String, Vec<Ocurrencia>>;

/// Expande los horarios de cada curso a ocurrencias concretas.
///
/// Para cada `Horario` con ambas fechas presentes se emite una ocurrencia por
/// cada fecha del rango [inicio, fin] (inclusive en ambos extremos) cuyo día
/// de la semana coincide con el declarado. Se salta de semana en semana, así
/// que el costo es proporcional a las semanas del rango. Horarios sin fechas,
/// con día irreconocible o con `inicio > fin` no aportan nada.
///
/// El orden dentro de cada fecha es el de recorrido (curso, horario); no se
/// ordena por hora. Ver `ordenar_por_hora`.
pub fn expandir_horarios(cursos: &[Curso], pidd: Option<&MarcadorPidd>) -> MapaOcurrencias {
    let mut mapa = MapaOcurrencias::new();
    for curso in cursos {
        let marcador = pidd.filter(|p| p.codigo_curso == curso.codigo);
        for horario in curso.horarios.iter() {
            for fecha in fechas_del_horario(curso, horario) {
                mapa.entry(clave_fecha(fecha))
                    .or_default()
                    .push(construir_ocurrencia(curso, horario, fecha, marcador));
            }
        }
    }
    debug!("expansión: {} cursos -> {} fechas con clases", cursos.len(), mapa.len());
    mapa
}

/// Fechas en que un horario tiene clase.
fn fechas_del_horario(curso: &Curso, horario: &Horario) -> Vec<NaiveDate> {
    let dia = match dia_desde_nombre(&horario.dia) {
        Some(d) => d,
        None => {
            debug!("{}-{}: día '{}' no reconocido, se omite", curso.codigo, curso.seccion, horario.dia);
            return Vec::new();
        }
    };
    let (inicio, fin) = match (fecha_limite(curso, horario.fecha_inicio.as_deref()), fecha_limite(curso, horario.fecha_fin.as_deref())) {
        (Some(i), Some(f)) => (i, f),
        // sin programar todavía
        _ => return Vec::new(),
    };

    // primer día >= inicio que cae en el día pedido
    let desfase = (7 + dia.num_days_from_monday() - inicio.weekday().num_days_from_monday()) % 7;
    let primero = inicio.checked_add_days(Days::new(desfase as u64));
    iter::successors(primero, |d| d.checked_add_days(Days::new(7)))
        .take_while(|d| *d <= fin)
        .collect()
}

fn fecha_limite(curso: &Curso, texto: Option<&str>) -> Option<NaiveDate> {
    let texto = texto?;
    let fecha = parsear_fecha(texto);
    if fecha.is_none() && !texto.trim().is_empty() {
        warn!("{}-{}: fecha '{}' no interpretable, se ignora el horario", curso.codigo, curso.seccion, texto);
    }
    fecha
}

fn construir_ocurrencia(curso: &Curso, horario: &Horario, fecha: NaiveDate, pidd: Option<&MarcadorPidd>) -> Ocurrencia {
    Ocurrencia {
        fecha: clave_fecha(fecha),
        codigo: curso.codigo.clone(),
        seccion: curso.seccion.clone(),
        nrc: curso.nrc.clone(),
        periodo: curso.periodo.clone(),
        metodo: curso.metodo.clone(),
        nombre: curso.nombre.clone(),
        dia: horario.dia.clone(),
        hora: horario.hora.clone(),
        sede: horario.sede.clone(),
        aula: horario.aula.clone(),
        estado: horario.estado.or(curso.estado),
        es_pidd: pidd.is_some(),
        esa: pidd.and_then(|p| p.esa),
    }
}

/// Ordena las ocurrencias de un día por hora de inicio (estable).
/// Las que no tienen hora interpretable quedan al final.
pub fn ordenar_por_hora(ocurrencias: &mut [Ocurrencia]) {
    ocurrencias.sort_by_key(|o| minutos_inicio(&o.hora).unwrap_or(u32::MAX));
}
