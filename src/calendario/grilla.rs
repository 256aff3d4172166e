// Ubicación vertical de las ocurrencias en la grilla horaria.
use serde::{Deserialize, Serialize};

use crate::error::ErrorAgenda;
use crate::models::Ocurrencia;

/// Parámetros de la grilla: horas visibles y escala vertical.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfigGrilla {
    pub hora_inicio: u32,
    pub hora_fin: u32,
    pub px_por_hora: f64,
}

impl Default for ConfigGrilla {
    fn default() -> Self {
        ConfigGrilla { hora_inicio: 7, hora_fin: 23, px_por_hora: 60.0 }
    }
}

impl ConfigGrilla {
    /// Exige `hora_inicio < hora_fin <= 24` y una escala positiva y finita.
    pub fn validar(&self) -> Result<(), ErrorAgenda> {
        if self.hora_fin > 24 || self.hora_inicio >= self.hora_fin {
            return Err(ErrorAgenda::Validacion(format!(
                "rango de grilla inválido: {}..{}",
                self.hora_inicio, self.hora_fin
            )));
        }
        if !self.px_por_hora.is_finite() || self.px_por_hora <= 0.0 {
            return Err(ErrorAgenda::Validacion(format!(
                "px_por_hora debe ser positivo, no {}",
                self.px_por_hora
            )));
        }
        Ok(())
    }
}

/// Posición de un bloque: desplazamiento desde el borde superior y altura (px).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bloque {
    pub desplazamiento: f64,
    pub altura: f64,
}

/// Convierte una hora de reloj a minutos desde medianoche.
///
/// Formas válidas: "HH:MM", "H:MM", "HHMM" y "HMM" (espacios ignorados).
/// Sin dos puntos, los dos últimos dígitos son los minutos. Devuelve `None`
/// para cualquier otra cosa: "7:5" no se lee como 07:05 ni como medianoche.
pub fn hora_a_minutos(texto: &str) -> Option<u32> {
    let limpio: String = texto.chars().filter(|c| !c.is_whitespace()).collect();
    let (hh, mm) = match limpio.split_once(':') {
        Some((h, m)) => {
            if h.is_empty() || h.len() > 2 || m.len() != 2 {
                return None;
            }
            (h, m)
        }
        None => {
            if limpio.len() < 3 || limpio.len() > 4 || !limpio.is_ascii() {
                return None;
            }
            limpio.split_at(limpio.len() - 2)
        }
    };
    if !hh.chars().all(|c| c.is_ascii_digit()) || !mm.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let h = hh.parse::<u32>().ok()?;
    let m = mm.parse::<u32>().ok()?;
    if h >= 24 || m >= 60 {
        return None;
    }
    Some(h * 60 + m)
}

/// Separa "HH:MM-HH:MM" en (inicio, fin) en minutos.
/// Divide en el primer '-', recorta espacios y exige ambas mitades.
pub fn parsear_rango(hora: &str) -> Option<(u32, u32)> {
    let (a, b) = hora.split_once('-')?;
    let (a, b) = (a.trim(), b.trim());
    if a.is_empty() || b.is_empty() {
        return None;
    }
    Some((hora_a_minutos(a)?, hora_a_minutos(b)?))
}

/// Minuto de inicio del rango, para ordenar ocurrencias de un mismo día.
pub(crate) fn minutos_inicio(hora: &str) -> Option<u32> {
    parsear_rango(hora).map(|(inicio, _)| inicio)
}

/// Calcula la posición de una ocurrencia en la grilla.
///
/// `None` significa "no renderizable": el llamador la omite de la grilla
/// sin propagar error. El desplazamiento puede ser negativo si la clase
/// empieza antes de la primera hora visible; recortar es cosa del llamador.
pub fn calcular_bloque(ocurrencia: &Ocurrencia, config: &ConfigGrilla) -> Option<Bloque> {
    bloque_para_rango(&ocurrencia.hora, config)
}

pub fn bloque_para_rango(hora: &str, config: &ConfigGrilla) -> Option<Bloque> {
    let (inicio, fin) = parsear_rango(hora)?;
    let inicio = inicio as f64;
    let fin = fin as f64;
    let base = config.hora_inicio as f64 * 60.0;
    Some(Bloque {
        desplazamiento: (inicio - base) / 60.0 * config.px_por_hora,
        altura: (fin - inicio) / 60.0 * config.px_por_hora,
    })
}

/// Etiquetas de hora de la grilla ("07:00" .. "23:00").
pub fn horas_grilla(config: &ConfigGrilla) -> Vec<String> {
    (config.hora_inicio..=config.hora_fin).map(|h| format!("{:02}:00", h)).collect()
}
