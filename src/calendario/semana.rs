// Vista semanal: combina el mapa expandido con la grilla para una semana.
use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use crate::calendario::dias::nombre_dia;
use crate::calendario::expandir::{ordenar_por_hora, MapaOcurrencias};
use crate::calendario::fechas::clave_fecha;
use crate::calendario::grilla::{calcular_bloque, Bloque, ConfigGrilla};
use crate::models::Ocurrencia;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BloquePosicionado {
    pub ocurrencia: Ocurrencia,
    pub bloque: Bloque,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiaCalendario {
    pub fecha: String,
    pub nombre: &'static str,
    pub bloques: Vec<BloquePosicionado>,
    /// Ocurrencias sin hora interpretable: no van en la grilla pero sí en el detalle
    pub sin_bloque: Vec<Ocurrencia>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemanaCalendario {
    pub inicio: String,
    pub dias: Vec<DiaCalendario>,
}

/// Lunes de la semana que contiene `fecha`.
pub fn inicio_semana(fecha: NaiveDate) -> NaiveDate {
    let retroceso = fecha.weekday().num_days_from_monday() as u64;
    fecha.checked_sub_days(Days::new(retroceso)).unwrap_or(fecha)
}

/// Arma la semana lunes..domingo que contiene `fecha`.
pub fn vista_semanal(mapa: &MapaOcurrencias, fecha: NaiveDate, config: &ConfigGrilla) -> SemanaCalendario {
    let lunes = inicio_semana(fecha);
    let dias = lunes
        .iter_days()
        .take(7)
        .map(|dia| armar_dia(mapa, dia, config))
        .collect();
    SemanaCalendario { inicio: clave_fecha(lunes), dias }
}

fn armar_dia(mapa: &MapaOcurrencias, dia: NaiveDate, config: &ConfigGrilla) -> DiaCalendario {
    let clave = clave_fecha(dia);
    let mut ocurrencias = mapa.get(&clave).cloned().unwrap_or_default();
    ordenar_por_hora(&mut ocurrencias);

    let mut bloques = Vec::new();
    let mut sin_bloque = Vec::new();
    for o in ocurrencias {
        match calcular_bloque(&o, config) {
            Some(bloque) => bloques.push(BloquePosicionado { ocurrencia: o, bloque }),
            None => sin_bloque.push(o),
        }
    }
    DiaCalendario { fecha: clave, nombre: nombre_dia(dia.weekday()), bloques, sin_bloque }
}
