use agenda_docente::calendario::{calcular_bloque, ConfigGrilla};
use agenda_docente::models::Ocurrencia;

fn ocurrencia(hora: &str) -> Ocurrencia {
    Ocurrencia {
        fecha: "2025-03-10".to_string(),
        codigo: "EDU100".to_string(),
        seccion: "1".to_string(),
        nrc: "1001".to_string(),
        periodo: "2025-1".to_string(),
        metodo: "Presencial".to_string(),
        nombre: None,
        dia: "Lunes".to_string(),
        hora: hora.to_string(),
        sede: "Campus A".to_string(),
        aula: "101".to_string(),
        estado: None,
        es_pidd: false,
        esa: None,
    }
}

fn grilla() -> ConfigGrilla {
    ConfigGrilla { hora_inicio: 7, hora_fin: 23, px_por_hora: 5.0 }
}

#[test]
fn test_bloque_siete_a_nueve_y_media() {
    let b = calcular_bloque(&ocurrencia("07:00-09:30"), &grilla()).expect("debe ser renderizable");
    assert_eq!(b.desplazamiento, 0.0);
    assert_eq!(b.altura, 12.5);
}

#[test]
fn test_bloque_sin_dos_puntos_igual() {
    assert_eq!(
        calcular_bloque(&ocurrencia("0700-0930"), &grilla()),
        calcular_bloque(&ocurrencia("07:00-09:30"), &grilla())
    );
    assert_eq!(
        calcular_bloque(&ocurrencia(" 07:00 - 09:30 "), &grilla()),
        calcular_bloque(&ocurrencia("07:00-09:30"), &grilla())
    );
}

#[test]
fn test_mitades_vacias_no_renderizable() {
    assert!(calcular_bloque(&ocurrencia("  -  "), &grilla()).is_none());
    assert!(calcular_bloque(&ocurrencia(""), &grilla()).is_none());
}

#[test]
fn test_hora_corta_no_cae_a_medianoche() {
    // "7:5" no se interpreta: la ocurrencia queda fuera de la grilla
    assert!(calcular_bloque(&ocurrencia("7:5-9:00"), &grilla()).is_none());
}

#[test]
fn test_escala_por_defecto() {
    let b = calcular_bloque(&ocurrencia("13:15-14:45"), &ConfigGrilla::default()).unwrap();
    assert_eq!(b.desplazamiento, 375.0);
    assert_eq!(b.altura, 90.0);
}
