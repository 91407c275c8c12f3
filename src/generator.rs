// src/generator.rs
//
// Generador de quizzes: a partir de la tabla estática de sumas produce las
// preguntas de opción múltiple de un cinturón de color (10) o de un grado de
// cinturón negro (20, o 30 para el 7º dan). El RNG se inyecta para poder
// sembrarlo en los tests.

use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

use crate::data::FactTable;
use crate::model::{Belt, BeltSelector, FactPair, Question, QuestionTag};

/// Las dos parejas que se INTRODUCEN en este cinturón/nivel.
pub fn two_facts_for_belt(table: &FactTable, level: u8, belt: Belt) -> [FactPair; 2] {
    table.facts_for(level, belt)
}

/// Opciones de respuesta: la suma correcta más {+1, −1, +2}. El −1 se omite si
/// bajaría de cero; en ese caso el quiz puede mostrar menos de 4 opciones.
fn choice_set(rng: &mut impl Rng, sum: u32) -> Vec<u32> {
    let mut candidates = vec![sum, sum + 1];
    if sum > 0 {
        candidates.push(sum - 1);
    }
    candidates.push(sum + 2);

    let mut seen = HashSet::new();
    let mut choices: Vec<u32> = candidates
        .into_iter()
        .filter(|c| seen.insert(*c))
        .collect();
    choices.shuffle(rng);
    choices
}

fn question_from_pair(rng: &mut impl Rng, pair: FactPair, tag: QuestionTag) -> Question {
    let sum = pair.sum();
    Question {
        prompt: pair.prompt(),
        correct_answer: sum,
        choices: choice_set(rng, sum),
        tag,
    }
}

/// Cuatro preguntas NUEVAS: cada pareja introducida, derecha y del revés.
fn four_new_questions(
    rng: &mut impl Rng,
    table: &FactTable,
    level: u8,
    belt: Belt,
) -> Vec<Question> {
    let facts = two_facts_for_belt(table, level, belt);
    vec![
        question_from_pair(rng, facts[0], QuestionTag::New),
        question_from_pair(rng, facts[0].invertida(), QuestionTag::New),
        question_from_pair(rng, facts[1], QuestionTag::New),
        question_from_pair(rng, facts[1].invertida(), QuestionTag::New),
    ]
}

/// Hasta seis preguntas de REPASO: parejas de todos los cinturones anteriores
/// (en ambos órdenes) o, si es el primer cinturón, la reserva del nivel.
fn review_questions(
    rng: &mut impl Rng,
    table: &FactTable,
    level: u8,
    belt: Belt,
) -> Vec<Question> {
    let prev = belt.anteriores();
    let pool: Vec<FactPair> = if prev.is_empty() {
        table.review_pool(level)
    } else {
        let mut pairs = Vec::new();
        for b in prev {
            for f in two_facts_for_belt(table, level, b) {
                pairs.push(f);
                pairs.push(f.invertida());
            }
        }
        pairs
    };

    // Deduplicar por texto de pregunta antes de elegir
    let mut seen = HashSet::new();
    let mut questions: Vec<Question> = pool
        .into_iter()
        .filter(|p| seen.insert(p.prompt()))
        .map(|p| question_from_pair(rng, p, QuestionTag::Review))
        .collect();

    questions.shuffle(rng);
    questions.truncate(6);
    questions
}

/// Construye el quiz completo para la selección pedida.
pub fn build_quiz(
    rng: &mut impl Rng,
    table: &FactTable,
    level: u8,
    selector: BeltSelector,
) -> Vec<Question> {
    match selector {
        BeltSelector::Color(belt) => build_color_quiz(rng, table, level, belt),
        BeltSelector::Black(degree) => build_black_quiz(rng, level, degree),
    }
}

fn build_color_quiz(
    rng: &mut impl Rng,
    table: &FactTable,
    level: u8,
    belt: Belt,
) -> Vec<Question> {
    let mut combined = four_new_questions(rng, table, level, belt);
    combined.extend(review_questions(rng, table, level, belt));
    combined.shuffle(rng);

    // Únicas por texto, exactamente 10
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(10);
    for q in combined {
        if !seen.insert(q.prompt.clone()) {
            continue;
        }
        unique.push(q);
        if unique.len() == 10 {
            break;
        }
    }

    // Relleno con parejas aleatorias pequeñas si la deduplicación dejó hueco
    while unique.len() < 10 {
        let pair = FactPair(rng.gen_range(0..=6), rng.gen_range(0..=6));
        if !seen.insert(pair.prompt()) {
            continue;
        }
        unique.push(question_from_pair(rng, pair, QuestionTag::Pad));
    }
    unique
}

fn build_black_quiz(rng: &mut impl Rng, level: u8, degree: u8) -> Vec<Question> {
    // Grados 1–6: 20 preguntas; 7º dan: 30. Los sumandos crecen con nivel y grado.
    let total = if degree == 7 { 30 } else { 20 };
    let l = level.clamp(1, 6) as u32;

    let max_addend = (5 + l + (3 * degree as u32).div_ceil(2)).min(12) as u8;
    let min_addend = (degree - 1) / 2;

    let mut pool = Vec::new();
    'fill: for a in min_addend..=max_addend {
        for b in min_addend..=max_addend {
            pool.push(FactPair(a, b));
            if pool.len() > total * 3 {
                break 'fill;
            }
        }
    }
    pool.shuffle(rng);

    let mut seen = HashSet::new();
    let mut questions = Vec::with_capacity(total);
    for pair in pool {
        if !seen.insert(pair.prompt()) {
            continue;
        }
        questions.push(question_from_pair(rng, pair, QuestionTag::Black));
        if questions.len() == total {
            break;
        }
    }

    while questions.len() < total {
        let pair = FactPair(
            rng.gen_range(0..=max_addend),
            rng.gen_range(0..=max_addend),
        );
        if !seen.insert(pair.prompt()) {
            continue;
        }
        questions.push(question_from_pair(rng, pair, QuestionTag::Black));
    }
    questions
}

/// Texto del módulo de aprendizaje previo al quiz.
pub fn learning_content(table: &FactTable, level: u8, selector: BeltSelector) -> String {
    match selector {
        BeltSelector::Black(_) => {
            "Desafío de Cinturón Negro: ¡sumas rápidas con números más grandes!".to_owned()
        }
        BeltSelector::Color(belt) => {
            let facts = two_facts_for_belt(table, level, belt);
            let FactPair(a, b) = facts[0];
            format!("{a} + {b} = {}", facts[0].sum())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_fact_table_embedded;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Semillas que recorren estados distintos del RNG.
    const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    fn assert_prompts_unicos(questions: &[Question]) {
        let mut seen = HashSet::new();
        for q in questions {
            assert!(seen.insert(q.prompt.clone()), "prompt repetido: {}", q.prompt);
        }
    }

    fn assert_opciones_validas(q: &Question) {
        assert!(
            q.choices.contains(&q.correct_answer),
            "la respuesta correcta {} no está entre las opciones de {}",
            q.correct_answer,
            q.prompt
        );
        let mut seen = HashSet::new();
        for c in &q.choices {
            assert!(seen.insert(*c), "opción repetida {c} en {}", q.prompt);
        }
        assert!(q.choices.len() >= 3 && q.choices.len() <= 4);
    }

    #[test]
    fn quiz_de_color_tiene_diez_preguntas_unicas() {
        let table = read_fact_table_embedded();
        for seed in SEEDS {
            for level in 1..=6u8 {
                for belt in Belt::ORDER {
                    let mut r = rng(seed);
                    let quiz = build_quiz(&mut r, &table, level, BeltSelector::Color(belt));
                    assert_eq!(quiz.len(), 10, "nivel {level}, cinturón {belt:?}");
                    assert_prompts_unicos(&quiz);
                    for q in &quiz {
                        assert_opciones_validas(q);
                    }
                }
            }
        }
    }

    #[test]
    fn quiz_negro_tiene_veinte_o_treinta_preguntas() {
        let table = read_fact_table_embedded();
        for seed in SEEDS {
            for level in 1..=6u8 {
                for degree in 1..=7u8 {
                    let mut r = rng(seed);
                    let quiz = build_quiz(&mut r, &table, level, BeltSelector::Black(degree));
                    let expected = if degree == 7 { 30 } else { 20 };
                    assert_eq!(quiz.len(), expected, "nivel {level}, grado {degree}");
                    assert_prompts_unicos(&quiz);
                    for q in &quiz {
                        assert_opciones_validas(q);
                        assert_eq!(q.tag, QuestionTag::Black);
                    }
                }
            }
        }
    }

    #[test]
    fn blanco_de_nivel_uno_introduce_cero_mas_cero() {
        let table = read_fact_table_embedded();
        assert_eq!(
            two_facts_for_belt(&table, 1, Belt::White),
            [FactPair(0, 0), FactPair(0, 0)]
        );
        let mut r = rng(11);
        let quiz = build_quiz(&mut r, &table, 1, BeltSelector::Color(Belt::White));
        let nueva = quiz
            .iter()
            .find(|q| q.prompt == "0 + 0")
            .expect("el quiz del cinturón blanco debe incluir 0 + 0");
        assert_eq!(nueva.correct_answer, 0);
    }

    #[test]
    fn grado_siete_de_nivel_tres_acota_los_sumandos() {
        // min = (7-1)/2 = 3; max = min(12, 5 + 3 + ceil(7·1.5)) = 12
        let table = read_fact_table_embedded();
        for seed in SEEDS {
            let mut r = rng(seed);
            let quiz = build_quiz(&mut r, &table, 3, BeltSelector::Black(7));
            for q in &quiz {
                let (a, b) = parse_prompt(&q.prompt);
                assert!((3..=12).contains(&a), "sumando {a} fuera de rango en {}", q.prompt);
                assert!(b <= 12, "sumando {b} fuera de rango en {}", q.prompt);
                assert_eq!(a + b, q.correct_answer);
            }
        }
    }

    #[test]
    fn grado_uno_permite_sumandos_desde_cero() {
        let table = read_fact_table_embedded();
        let mut r = rng(3);
        let quiz = build_quiz(&mut r, &table, 1, BeltSelector::Black(1));
        // min = 0, max = min(12, 5 + 1 + 2) = 8
        for q in &quiz {
            let (a, b) = parse_prompt(&q.prompt);
            assert!(a <= 8 && b <= 8, "sumando fuera de rango en {}", q.prompt);
        }
    }

    #[test]
    fn nivel_fuera_de_rango_degrada_sin_fallar() {
        let table = read_fact_table_embedded();
        let mut r = rng(5);
        let quiz = build_quiz(&mut r, &table, 0, BeltSelector::Color(Belt::Yellow));
        assert_eq!(quiz.len(), 10);
        let quiz = build_quiz(&mut r, &table, 200, BeltSelector::Black(4));
        assert_eq!(quiz.len(), 20);
    }

    #[test]
    fn opciones_de_suma_cero_omiten_el_negativo() {
        // Con suma 0 el candidato −1 desaparece y quedan {0, 1, 2}.
        for seed in SEEDS {
            let mut r = rng(seed);
            let choices = choice_set(&mut r, 0);
            let mut sorted = choices.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, vec![0, 1, 2]);
        }
    }

    #[test]
    fn misma_semilla_produce_el_mismo_quiz() {
        let table = read_fact_table_embedded();
        let a = build_quiz(&mut rng(12345), &table, 4, BeltSelector::Color(Belt::Blue));
        let b = build_quiz(&mut rng(12345), &table, 4, BeltSelector::Color(Belt::Blue));
        assert_eq!(a, b);
    }

    #[test]
    fn contenido_de_aprendizaje() {
        let table = read_fact_table_embedded();
        assert_eq!(
            learning_content(&table, 1, BeltSelector::Color(Belt::Yellow)),
            "0 + 1 = 1"
        );
        assert!(
            learning_content(&table, 2, BeltSelector::Black(3)).contains("Cinturón Negro")
        );
    }

    fn parse_prompt(prompt: &str) -> (u32, u32) {
        let mut parts = prompt.split(" + ");
        let a = parts.next().unwrap().parse().unwrap();
        let b = parts.next().unwrap().parse().unwrap();
        (a, b)
    }
}
