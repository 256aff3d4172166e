// Estado del panel de detalle de un docente.
use serde::{Deserialize, Serialize};

use crate::models::Ocurrencia;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Pestana {
    #[default]
    Calendario,
    Cursos,
    Historial,
}

/// Un único valor en lugar de varios booleanos sueltos: no existe
/// "detalle abierto sin docente".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "estado", rename_all = "snake_case")]
pub enum EstadoVista {
    #[default]
    Cerrado,
    Abierto {
        docente: String,
        pestana: Pestana,
    },
    Detalle {
        docente: String,
        pestana: Pestana,
        ocurrencia: Ocurrencia,
    },
}

impl EstadoVista {
    /// Abre el panel de un docente (reemplaza cualquier estado previo).
    pub fn abrir(self, docente: impl Into<String>) -> Self {
        EstadoVista::Abierto { docente: docente.into(), pestana: Pestana::default() }
    }

    pub fn cambiar_pestana(self, nueva: Pestana) -> Self {
        match self {
            EstadoVista::Abierto { docente, .. } => EstadoVista::Abierto { docente, pestana: nueva },
            EstadoVista::Detalle { docente, ocurrencia, .. } => EstadoVista::Detalle { docente, pestana: nueva, ocurrencia },
            otro => otro,
        }
    }

    /// Clic sobre un bloque: la ocurrencia completa es el payload del evento.
    pub fn seleccionar(self, ocurrencia: Ocurrencia) -> Self {
        match self {
            EstadoVista::Abierto { docente, pestana } | EstadoVista::Detalle { docente, pestana, .. } => {
                EstadoVista::Detalle { docente, pestana, ocurrencia }
            }
            EstadoVista::Cerrado => EstadoVista::Cerrado,
        }
    }

    pub fn cerrar_detalle(self) -> Self {
        match self {
            EstadoVista::Detalle { docente, pestana, .. } => EstadoVista::Abierto { docente, pestana },
            otro => otro,
        }
    }

    pub fn cerrar(self) -> Self {
        EstadoVista::Cerrado
    }

    pub fn docente(&self) -> Option<&str> {
        match self {
            EstadoVista::Cerrado => None,
            EstadoVista::Abierto { docente, .. } | EstadoVista::Detalle { docente, .. } => Some(docente),
        }
    }

    pub fn ocurrencia(&self) -> Option<&Ocurrencia> {
        match self {
            EstadoVista::Detalle { ocurrencia, .. } => Some(ocurrencia),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ocurrencia() -> Ocurrencia {
        Ocurrencia {
            fecha: "2025-03-10".to_string(),
            codigo: "EDU101".to_string(),
            seccion: "1".to_string(),
            nrc: "4411".to_string(),
            periodo: "2025-1".to_string(),
            metodo: "Presencial".to_string(),
            nombre: None,
            dia: "Lunes".to_string(),
            hora: "08:00-10:00".to_string(),
            sede: "Campus A".to_string(),
            aula: "A-1".to_string(),
            estado: None,
            es_pidd: false,
            esa: None,
        }
    }

    #[test]
    fn test_flujo_completo() {
        let v = EstadoVista::default().abrir("D-01");
        assert_eq!(v.docente(), Some("D-01"));
        let v = v.cambiar_pestana(Pestana::Cursos).seleccionar(ocurrencia());
        assert_eq!(v.ocurrencia().map(|o| o.nrc.as_str()), Some("4411"));
        let v = v.cerrar_detalle();
        assert_eq!(v, EstadoVista::Abierto { docente: "D-01".to_string(), pestana: Pestana::Cursos });
        assert_eq!(v.cerrar(), EstadoVista::Cerrado);
    }

    #[test]
    fn test_transiciones_invalidas_no_cambian_estado() {
        assert_eq!(EstadoVista::Cerrado.seleccionar(ocurrencia()), EstadoVista::Cerrado);
        assert_eq!(EstadoVista::Cerrado.cerrar_detalle(), EstadoVista::Cerrado);
        assert_eq!(EstadoVista::Cerrado.cambiar_pestana(Pestana::Historial), EstadoVista::Cerrado);
    }

    #[test]
    fn test_serializa_con_etiqueta() {
        let v = EstadoVista::default().abrir("D-02");
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["estado"], "abierto");
        assert_eq!(json["pestana"], "Calendario");
    }
}
