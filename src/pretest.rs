// src/pretest.rs
//
// Pre-test de diagnóstico: cuatro bloques fijos (sumas hasta cinco, restas,
// multiplicaciones y divisiones exactas fáciles). Es puramente orientativo y
// su envío está stubbeado en `api.rs`.

use crate::model::{PreTestQuestion, PreTestSection};

fn sumas_hasta_cinco() -> Vec<PreTestQuestion> {
    let pairs: [(u32, u32); 6] = [(0, 5), (1, 4), (2, 3), (3, 2), (4, 1), (5, 0)];
    pairs
        .into_iter()
        .map(|(a, b)| PreTestQuestion {
            prompt: format!("{a} + {b}"),
            correct_answer: a + b,
        })
        .collect()
}

fn restas_faciles() -> Vec<PreTestQuestion> {
    // Resultados pequeños, nunca negativos
    let pairs: [(u32, u32); 6] = [(5, 0), (5, 1), (4, 1), (3, 2), (4, 3), (2, 1)];
    pairs
        .into_iter()
        .map(|(a, b)| PreTestQuestion {
            prompt: format!("{a} - {b}"),
            correct_answer: a - b,
        })
        .collect()
}

fn multiplicaciones_faciles() -> Vec<PreTestQuestion> {
    let pairs: [(u32, u32); 6] = [(0, 3), (1, 4), (2, 2), (2, 3), (3, 2), (1, 5)];
    pairs
        .into_iter()
        .map(|(a, b)| PreTestQuestion {
            prompt: format!("{a} × {b}"),
            correct_answer: a * b,
        })
        .collect()
}

fn divisiones_exactas() -> Vec<PreTestQuestion> {
    // Solo divisiones exactas
    let pairs: [(u32, u32); 6] = [(4, 2), (6, 3), (8, 4), (9, 3), (10, 5), (12, 4)];
    pairs
        .into_iter()
        .map(|(a, b)| PreTestQuestion {
            prompt: format!("{a} ÷ {b}"),
            correct_answer: a / b,
        })
        .collect()
}

/// Preguntas del bloque pedido.
pub fn questions_for_section(section: PreTestSection) -> Vec<PreTestQuestion> {
    match section {
        PreTestSection::Addition => sumas_hasta_cinco(),
        PreTestSection::Subtraction => restas_faciles(),
        PreTestSection::Multiplication => multiplicaciones_faciles(),
        PreTestSection::Division => divisiones_exactas(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cada_bloque_tiene_seis_preguntas() {
        for section in PreTestSection::ORDER {
            assert_eq!(questions_for_section(section).len(), 6, "{section:?}");
        }
    }

    #[test]
    fn las_sumas_del_pretest_suman_cinco() {
        for q in questions_for_section(PreTestSection::Addition) {
            assert_eq!(q.correct_answer, 5);
        }
    }

    #[test]
    fn las_restas_no_son_negativas() {
        for q in questions_for_section(PreTestSection::Subtraction) {
            // u32 ya lo garantiza; comprobamos además que el resultado es pequeño
            assert!(q.correct_answer <= 5);
        }
    }

    #[test]
    fn las_divisiones_son_exactas() {
        let esperado = [2, 2, 2, 3, 2, 3];
        let qs = questions_for_section(PreTestSection::Division);
        for (q, e) in qs.iter().zip(esperado) {
            assert_eq!(q.correct_answer, e, "{}", q.prompt);
        }
    }
}
