// Listado de docentes: búsqueda, filtros y paginación.
use serde::{Deserialize, Serialize};

use crate::models::{Curso, Docente, FeedAsignaciones};
use crate::util::normalizar_texto;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FiltroDocentes {
    #[serde(default)]
    pub busqueda: Option<String>,
    #[serde(default)]
    pub sede: Option<String>,
    #[serde(default)]
    pub solo_sin_especialista: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pagina<T> {
    pub items: Vec<T>,
    pub pagina: usize,
    pub por_pagina: usize,
    pub total: usize,
    pub total_paginas: usize,
}

/// Aplica búsqueda (id, nombre, departamento; sin tildes ni mayúsculas),
/// sede y "sólo sin especialista". Conserva el orden original.
pub fn filtrar_docentes<'a>(docentes: &'a [Docente], filtro: &FiltroDocentes) -> Vec<&'a Docente> {
    let busqueda = filtro
        .busqueda
        .as_deref()
        .map(normalizar_texto)
        .filter(|s| !s.is_empty());
    let sede = filtro.sede.as_deref().map(normalizar_texto).filter(|s| !s.is_empty());

    docentes
        .iter()
        .filter(|d| match &busqueda {
            Some(q) => {
                let texto = normalizar_texto(&format!("{} {} {}", d.id, d.nombre, d.departamento));
                texto.contains(q.as_str())
            }
            None => true,
        })
        .filter(|d| match &sede {
            Some(s) => normalizar_texto(&d.sede) == *s,
            None => true,
        })
        .filter(|d| !filtro.solo_sin_especialista || d.especialista.is_none())
        .collect()
}

/// Página `pagina` (base 1) de `por_pagina` elementos.
/// Una página fuera de rango se ajusta a la última; `por_pagina = 0` vale como 1.
pub fn paginar<T: Clone>(items: &[T], pagina: usize, por_pagina: usize) -> Pagina<T> {
    let por_pagina = por_pagina.max(1);
    let total = items.len();
    let total_paginas = total.div_ceil(por_pagina).max(1);
    let pagina = pagina.clamp(1, total_paginas);
    let desde = (pagina - 1) * por_pagina;
    let hasta = (desde + por_pagina).min(total);
    Pagina {
        items: items[desde.min(total)..hasta].to_vec(),
        pagina,
        por_pagina,
        total,
        total_paginas,
    }
}

pub fn buscar_docente<'a>(feed: &'a FeedAsignaciones, id: &str) -> Option<&'a Docente> {
    feed.docentes.iter().find(|d| d.id == id)
}

/// Cursos del feed que pertenecen al docente indicado.
pub fn cursos_de_docente(feed: &FeedAsignaciones, docente_id: &str) -> Vec<Curso> {
    feed.data
        .iter()
        .filter(|c| c.docente_id.as_deref() == Some(docente_id))
        .cloned()
        .collect()
}
