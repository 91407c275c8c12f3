// src/store.rs
//
// Almacén plano clave→valor del progreso del alumno. Reproduce el formato
// histórico (valores "completed"/"perfect" o JSON) pero lo normaliza SIEMPRE
// al leer: hacia dentro de la app solo circula `BeltProgress`. Un valor
// ilegible cuenta como inexistente; nunca bloquea el renderizado.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::model::Belt;

pub const KEY_PIN: &str = "child-pin";
pub const KEY_NAME: &str = "child-name";
pub const KEY_AGE: &str = "child-age";
pub const KEY_REACTION: &str = "reaction-speed";
pub const KEY_THEME: &str = "selected-theme";
pub const KEY_LAST_SESSION: &str = "last-session-seconds";

/// Registro normalizado de un cinturón de color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BeltProgress {
    pub completed: bool,
    pub perfect: bool,
}

/// Forma JSON persistida, con el nombre de campo heredado.
#[derive(Serialize, Deserialize)]
struct StoredBeltProgress {
    completed: bool,
    #[serde(rename = "perfectPerformance", default)]
    perfect_performance: bool,
}

fn belt_key(level: u8, belt: Belt) -> String {
    format!("progress-{level}-{}", belt.key())
}

fn unlocked_degrees_key(level: u8) -> String {
    format!("level{level}-unlocked-degrees")
}

fn completed_degrees_key(level: u8) -> String {
    format!("level{level}-completed-degrees")
}

fn daily_key(date: &str) -> String {
    format!("daily-correct-{date}")
}

/// Clave del contador diario de hoy.
pub fn today_key() -> String {
    chrono::Local::now().date_naive().to_string()
}

fn normalize_belt_value(raw: &str) -> Option<BeltProgress> {
    match raw {
        "completed" => Some(BeltProgress {
            completed: true,
            perfect: false,
        }),
        "perfect" => Some(BeltProgress {
            completed: true,
            perfect: true,
        }),
        _ => match serde_json::from_str::<StoredBeltProgress>(raw) {
            Ok(p) => Some(BeltProgress {
                completed: p.completed,
                perfect: p.perfect_performance,
            }),
            Err(e) => {
                log::warn!("valor de progreso ilegible ({raw:?}): {e}");
                None
            }
        },
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ProgressStore {
    entries: BTreeMap<String, String>,
}

impl ProgressStore {
    pub fn new() -> Self {
        ProgressStore::default()
    }

    // --- acceso crudo ---------------------------------------------------

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.entries.insert(key.to_owned(), value.into());
    }

    pub fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    // --- cinturones de color --------------------------------------------

    pub fn belt_progress(&self, level: u8, belt: Belt) -> Option<BeltProgress> {
        let raw = self.entries.get(&belt_key(level, belt))?;
        normalize_belt_value(raw)
    }

    pub fn is_belt_completed(&self, level: u8, belt: Belt) -> bool {
        self.belt_progress(level, belt)
            .map(|p| p.completed)
            .unwrap_or(false)
    }

    /// Guarda la finalización de un cinturón. Un registro ya completado no se
    /// sobrescribe nunca con un resultado peor (escritura única por clave).
    pub fn record_belt_completion(&mut self, level: u8, belt: Belt, perfect: bool) {
        if self.is_belt_completed(level, belt) {
            return;
        }
        let stored = StoredBeltProgress {
            completed: true,
            perfect_performance: perfect,
        };
        let json = serde_json::to_string(&stored)
            .unwrap_or_else(|_| "{\"completed\":true}".to_owned());
        self.set(&belt_key(level, belt), json);
    }

    /// Un cinturón se puede elegir si es el blanco o su anterior está completado.
    pub fn is_belt_unlocked(&self, level: u8, belt: Belt) -> bool {
        match belt.anterior() {
            None => true,
            Some(prev) => self.is_belt_completed(level, prev),
        }
    }

    pub fn are_color_belts_completed(&self, level: u8) -> bool {
        Belt::ORDER.iter().all(|b| self.is_belt_completed(level, *b))
    }

    pub fn count_completed_belts(&self, level: u8) -> usize {
        Belt::ORDER
            .iter()
            .filter(|b| self.is_belt_completed(level, **b))
            .count()
    }

    // --- grados de cinturón negro ---------------------------------------

    fn read_degree_list(&self, key: &str) -> Vec<u8> {
        let Some(raw) = self.entries.get(key) else {
            return vec![];
        };
        match serde_json::from_str::<Vec<i64>>(raw) {
            Ok(list) => {
                let set: BTreeSet<u8> = list
                    .into_iter()
                    .filter(|d| (1..=7).contains(d))
                    .map(|d| d as u8)
                    .collect();
                set.into_iter().collect()
            }
            Err(e) => {
                log::warn!("lista de grados ilegible en {key} ({raw:?}): {e}");
                vec![]
            }
        }
    }

    fn write_degree_list(&mut self, key: &str, list: &BTreeSet<u8>) {
        let as_vec: Vec<u8> = list.iter().copied().collect();
        let json = serde_json::to_string(&as_vec).unwrap_or_else(|_| "[]".to_owned());
        self.set(key, json);
    }

    pub fn unlocked_degrees(&self, level: u8) -> Vec<u8> {
        self.read_degree_list(&unlocked_degrees_key(level))
    }

    pub fn completed_degrees(&self, level: u8) -> Vec<u8> {
        self.read_degree_list(&completed_degrees_key(level))
    }

    pub fn is_degree_completed(&self, level: u8, degree: u8) -> bool {
        self.completed_degrees(level).contains(&degree)
    }

    pub fn all_degrees_completed(&self, level: u8) -> bool {
        let completed = self.completed_degrees(level);
        (1..=7).all(|d| completed.contains(&d))
    }

    /// Marca un grado como completado y desbloquea el siguiente (hasta el 7º).
    pub fn record_degree_completion(&mut self, level: u8, degree: u8) {
        let mut completed: BTreeSet<u8> = self.completed_degrees(level).into_iter().collect();
        completed.insert(degree);
        self.write_degree_list(&completed_degrees_key(level), &completed);

        let mut unlocked: BTreeSet<u8> = self.unlocked_degrees(level).into_iter().collect();
        unlocked.insert(degree);
        unlocked.insert((degree + 1).min(7));
        self.write_degree_list(&unlocked_degrees_key(level), &unlocked);
    }

    /// Grados efectivamente desbloqueados: lo guardado, el 1º si el marrón
    /// está completado, y `min(7, máximo completado + 1)`. El conjunto se
    /// rellena hacia abajo, con lo que repara huecos que hubieran quedado
    /// guardados.
    pub fn effective_unlocked_degrees(&self, level: u8) -> Vec<u8> {
        let mut base: BTreeSet<u8> = self.unlocked_degrees(level).into_iter().collect();
        if self.is_belt_completed(level, Belt::Brown) {
            base.insert(1);
        }
        for d in self.completed_degrees(level) {
            base.insert(d);
            base.insert((d + 1).min(7));
        }
        match base.iter().max().copied() {
            Some(max) => (1..=max).collect(),
            None => vec![],
        }
    }

    pub fn is_degree_unlocked(&self, level: u8, degree: u8) -> bool {
        self.effective_unlocked_degrees(level).contains(&degree)
    }

    // --- niveles ---------------------------------------------------------

    /// El nivel 1 siempre; los demás exigen los seis cinturones del nivel
    /// anterior y, según la configuración, también sus siete grados.
    pub fn is_level_unlocked(&self, level: u8, require_black: bool) -> bool {
        if level <= 1 {
            return true;
        }
        let prev = level - 1;
        let colors_done = self.are_color_belts_completed(prev);
        let black_ok = !require_black || self.all_degrees_completed(prev);
        colors_done && black_ok
    }

    // --- contador diario -------------------------------------------------

    pub fn daily_correct(&self, date: &str) -> u32 {
        self.entries
            .get(&daily_key(date))
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    pub fn bump_daily_correct(&mut self, date: &str) {
        let next = self.daily_correct(date) + 1;
        self.set(&daily_key(date), next.to_string());
    }

    // --- identidad y perfil ----------------------------------------------

    pub fn child_pin(&self) -> Option<&str> {
        self.get(KEY_PIN)
    }

    pub fn child_name(&self) -> &str {
        self.get(KEY_NAME).unwrap_or("")
    }

    pub fn child_age(&self) -> &str {
        self.get(KEY_AGE).unwrap_or("")
    }

    pub fn reaction_speed(&self) -> f32 {
        self.get(KEY_REACTION)
            .and_then(|v| v.parse().ok())
            .unwrap_or(1.0)
    }

    pub fn theme_key(&self) -> Option<&str> {
        self.get(KEY_THEME)
    }

    pub fn last_session_seconds(&self) -> u64 {
        self.get(KEY_LAST_SESSION)
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    /// Registra el PIN enviado. Si difiere del guardado (o no había ninguno),
    /// primero borra TODO el progreso del alumno anterior. Devuelve si hubo
    /// borrado.
    pub fn handle_pin_submit(&mut self, pin: &str) -> bool {
        let is_new = self.child_pin() != Some(pin);
        if is_new {
            self.wipe_learner_progress();
        }
        self.set(KEY_PIN, pin);
        is_new
    }

    // --- borrados --------------------------------------------------------

    /// Borra cinturones, grados y contadores diarios. Los escalares de perfil
    /// sobreviven hasta que se sobrescriban.
    pub fn wipe_learner_progress(&mut self) {
        self.entries.retain(|k, _| {
            !(k.starts_with("progress-")
                || k.starts_with("daily-correct-")
                || (k.starts_with("level") && k.ends_with("-degrees")))
        });
    }

    /// Reinicio total manual: vacía el almacén entero.
    pub fn clear_all(&mut self) {
        self.entries.clear();
    }
}
