//! Registro en memoria de asignaciones docente -> especialista pedagógico.
//!
//! No hay algoritmo de propuesta: quien llama indica el especialista y el
//! registro sólo lleva el ciclo propuesta -> confirmada / eliminada.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ErrorAgenda;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstadoAsignacion {
    Propuesta,
    Confirmada,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asignacion {
    pub id: u64,
    pub docente_id: String,
    pub especialista: String,
    pub estado: EstadoAsignacion,
    pub creada: DateTime<Utc>,
    pub confirmada: Option<DateTime<Utc>>,
}

#[derive(Debug, Default)]
struct Tabla {
    siguiente_id: u64,
    filas: BTreeMap<u64, Asignacion>,
}

#[derive(Debug, Default)]
pub struct RegistroAsignaciones {
    tabla: Mutex<Tabla>,
}

impl RegistroAsignaciones {
    pub fn new() -> Self {
        Self::default()
    }

    // cada operación toca una sola fila: un lock envenenado sigue consistente
    fn tabla(&self) -> MutexGuard<'_, Tabla> {
        self.tabla.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn proponer(&self, docente_id: &str, especialista: &str) -> Result<Asignacion, ErrorAgenda> {
        let docente_id = docente_id.trim();
        let especialista = especialista.trim();
        if docente_id.is_empty() || especialista.is_empty() {
            return Err(ErrorAgenda::Validacion("docente_id y especialista son obligatorios".to_string()));
        }
        let mut tabla = self.tabla();
        tabla.siguiente_id += 1;
        let asignacion = Asignacion {
            id: tabla.siguiente_id,
            docente_id: docente_id.to_string(),
            especialista: especialista.to_string(),
            estado: EstadoAsignacion::Propuesta,
            creada: Utc::now(),
            confirmada: None,
        };
        tabla.filas.insert(asignacion.id, asignacion.clone());
        info!("asignación {} propuesta: {} -> {}", asignacion.id, asignacion.docente_id, asignacion.especialista);
        Ok(asignacion)
    }

    /// Confirma una propuesta. Confirmar dos veces no cambia la fecha original.
    pub fn confirmar(&self, id: u64) -> Result<Asignacion, ErrorAgenda> {
        let mut tabla = self.tabla();
        let fila = tabla.filas.get_mut(&id).ok_or(ErrorAgenda::AsignacionNoEncontrada(id))?;
        if fila.estado == EstadoAsignacion::Propuesta {
            fila.estado = EstadoAsignacion::Confirmada;
            fila.confirmada = Some(Utc::now());
            info!("asignación {} confirmada", id);
        }
        Ok(fila.clone())
    }

    pub fn eliminar(&self, id: u64) -> Result<(), ErrorAgenda> {
        match self.tabla().filas.remove(&id) {
            Some(_) => {
                info!("asignación {} eliminada", id);
                Ok(())
            }
            None => Err(ErrorAgenda::AsignacionNoEncontrada(id)),
        }
    }

    /// Lista por id ascendente, opcionalmente sólo de un docente.
    pub fn listar(&self, docente_id: Option<&str>) -> Vec<Asignacion> {
        self.tabla()
            .filas
            .values()
            .filter(|a| docente_id.is_none_or(|d| a.docente_id == d))
            .cloned()
            .collect()
    }
}
