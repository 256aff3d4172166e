// Columnas tipadas para las tablas del dashboard.
use crate::calendario::parsear_fecha;
use crate::models::{Curso, Docente};
use crate::util::{estilo_estado, formatear_fecha, formatear_porcentaje};

/// Una columna: etiqueta visible + proyección tipada del registro.
pub struct Columna<T> {
    pub etiqueta: &'static str,
    pub valor: fn(&T) -> String,
}

pub fn columnas_docentes() -> Vec<Columna<Docente>> {
    vec![
        Columna { etiqueta: "ID", valor: |d| d.id.clone() },
        Columna { etiqueta: "Nombre", valor: |d| d.nombre.clone() },
        Columna { etiqueta: "Departamento", valor: |d| d.departamento.clone() },
        Columna { etiqueta: "Sede", valor: |d| d.sede.clone() },
        Columna {
            etiqueta: "Especialista",
            valor: |d| d.especialista.clone().unwrap_or_else(|| "Sin asignar".to_string()),
        },
        Columna {
            etiqueta: "ESA PIDD",
            valor: |d| formatear_porcentaje(d.pidd.as_ref().and_then(|p| p.esa)),
        },
    ]
}

pub fn columnas_cursos() -> Vec<Columna<Curso>> {
    vec![
        Columna { etiqueta: "Curso", valor: |c| c.codigo.clone() },
        Columna { etiqueta: "Sección", valor: |c| c.seccion.clone() },
        Columna { etiqueta: "NRC", valor: |c| c.nrc.clone() },
        Columna { etiqueta: "Periodo", valor: |c| c.periodo.clone() },
        Columna { etiqueta: "Método", valor: |c| c.metodo.clone() },
        Columna { etiqueta: "Vigencia", valor: vigencia },
        Columna { etiqueta: "Estado", valor: |c| estilo_estado(c.estado).etiqueta.to_string() },
    ]
}

/// "DD/MM/YYYY - DD/MM/YYYY" desde el primer inicio hasta el último fin de
/// los horarios del curso. Sin fechas: "Sin programar".
fn vigencia(curso: &Curso) -> String {
    let desde = curso
        .horarios
        .iter()
        .filter_map(|h| h.fecha_inicio.as_deref())
        .filter(|t| parsear_fecha(t).is_some())
        .min_by_key(|t| parsear_fecha(t));
    let hasta = curso
        .horarios
        .iter()
        .filter_map(|h| h.fecha_fin.as_deref())
        .filter(|t| parsear_fecha(t).is_some())
        .max_by_key(|t| parsear_fecha(t));
    match (desde, hasta) {
        (Some(d), Some(h)) => format!("{} - {}", formatear_fecha(d), formatear_fecha(h)),
        _ => "Sin programar".to_string(),
    }
}

pub fn encabezados<T>(columnas: &[Columna<T>]) -> Vec<&'static str> {
    columnas.iter().map(|c| c.etiqueta).collect()
}

pub fn renderizar_filas<T>(columnas: &[Columna<T>], registros: &[T]) -> Vec<Vec<String>> {
    registros
        .iter()
        .map(|r| columnas.iter().map(|c| (c.valor)(r)).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EstadoCambio, Horario, MarcadorPidd};

    #[test]
    fn test_filas_docentes() {
        let d = Docente {
            id: "D-01".to_string(),
            nombre: "Ana Rojas".to_string(),
            departamento: "Educación".to_string(),
            sede: "Santiago".to_string(),
            especialista: None,
            pidd: Some(MarcadorPidd { codigo_curso: "EDU101".to_string(), esa: Some(0.42) }),
        };
        let cols = columnas_docentes();
        assert_eq!(encabezados(&cols)[4], "Especialista");
        let filas = renderizar_filas(&cols, &[d]);
        assert_eq!(filas[0], vec!["D-01", "Ana Rojas", "Educación", "Santiago", "Sin asignar", "42.0%"]);
    }

    #[test]
    fn test_filas_cursos() {
        let c = Curso {
            codigo: "EDU101".to_string(),
            seccion: "3".to_string(),
            nrc: "4411".to_string(),
            periodo: "2025-1".to_string(),
            metodo: "Online".to_string(),
            nombre: None,
            docente_id: None,
            horarios: vec![],
            estado: Some(EstadoCambio::Nuevo),
        };
        let filas = renderizar_filas(&columnas_cursos(), &[c]);
        assert_eq!(filas[0][5], "Sin programar");
        assert_eq!(filas[0][6], "Nuevo");
    }

    #[test]
    fn test_vigencia_abarca_todos_los_horarios() {
        let h = |inicio: &str, fin: &str| Horario {
            dia: "Lunes".to_string(),
            hora: "08:00-10:00".to_string(),
            sede: String::new(),
            aula: String::new(),
            fecha_inicio: Some(inicio.to_string()),
            fecha_fin: Some(fin.to_string()),
            estado: None,
        };
        let c = Curso {
            codigo: "EDU101".to_string(),
            seccion: "3".to_string(),
            nrc: "4411".to_string(),
            periodo: "2025-1".to_string(),
            metodo: "Online".to_string(),
            nombre: None,
            docente_id: None,
            horarios: vec![h("2025-03-10", "2025-06-30"), h("2025-03-03", "ayer"), h("2025-04-01", "2025-07-04")],
            estado: None,
        };
        assert_eq!(vigencia(&c), "03/03/2025 - 04/07/2025");
    }
}
