use crate::api::SubmitAck;
use crate::data::{FactTable, read_fact_table_embedded};
use crate::model::{BeltSelector, GameConfig, PreTestQuestion, PreTestSection, Question, Screen, Theme};
use crate::sound::SoundPlayer;
use crate::store::ProgressStore;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

// Submódulos
pub mod actions;
pub mod completion;
pub mod navigation;
pub mod progress;
pub mod queries;
pub mod resets;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{BeltInfo, DegreeInfo, LevelInfo};

/// Marca visual de cada respuesta del quiz (rayo/estrella/tick según rapidez).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnswerMark {
    pub symbol: &'static str,
    pub correct: bool,
    pub time_taken: f64,
}

/// Estado en memoria de un quiz en curso. Nunca se persiste: cerrar la app a
/// mitad de quiz lo descarta.
#[derive(Default)]
pub struct QuizRun {
    pub selector: Option<BeltSelector>,
    pub questions: Vec<Question>,
    pub current: usize,
    pub correct_count: usize,
    pub wrong_count: usize,
    pub question_times: Vec<f64>,
    pub slow_prompts: HashSet<String>,
    pub answer_marks: Vec<AnswerMark>,
    pub started_at: Option<f64>,
    pub question_started_at: Option<f64>,
    pub paused_at: Option<f64>,
    pub finished: bool,
}

/// Pantalla de aprendizaje: qué se muestra y a dónde se vuelve.
pub struct LearningState {
    pub content: String,
    /// `true` si venimos de un fallo en mitad del quiz (desvío); `false` si es
    /// la introducción previa al quiz.
    pub return_to_quiz: bool,
}

/// Estado del pre-test de diagnóstico.
pub struct PreTestState {
    pub section: PreTestSection,
    pub questions: Vec<PreTestQuestion>,
    pub current: usize,
    pub input: String,
    pub score_current: u32,
    pub completed_sections: BTreeMap<PreTestSection, u32>,
    pub started_at: Option<f64>,
    pub elapsed: f64,
    pub ack: Option<SubmitAck>,
    #[cfg(target_arch = "wasm32")]
    pub submit_rx: Option<std::sync::mpsc::Receiver<SubmitAck>>,
}

impl Default for PreTestState {
    fn default() -> Self {
        PreTestState {
            section: PreTestSection::Addition,
            questions: vec![],
            current: 0,
            input: String::new(),
            score_current: 0,
            completed_sections: BTreeMap::new(),
            started_at: None,
            elapsed: 0.0,
            ack: None,
            #[cfg(target_arch = "wasm32")]
            submit_rx: None,
        }
    }
}

fn default_rng() -> StdRng {
    StdRng::from_entropy()
}

#[derive(Serialize, Deserialize)]
pub struct MathApp {
    pub store: ProgressStore,
    pub config: GameConfig,
    pub selected_theme: Option<Theme>,
    #[serde(skip, default = "read_fact_table_embedded")]
    pub facts: FactTable,
    #[serde(skip)]
    pub screen: Screen,
    #[serde(skip)]
    pub name_input: String,
    #[serde(skip)]
    pub age_input: String,
    #[serde(skip)]
    pub pin_input: String,
    #[serde(skip)]
    pub pin_error: Option<String>,
    #[serde(skip)]
    pub selected_level: Option<u8>,
    #[serde(skip)]
    pub quiz: QuizRun,
    #[serde(skip)]
    pub learning: Option<LearningState>,
    #[serde(skip)]
    pub pretest: PreTestState,
    #[serde(skip)]
    pub message: String,
    #[serde(skip)]
    pub confirm_reset: bool,
    #[serde(skip)]
    pub show_settings: bool,
    #[serde(skip)]
    pub sounds: SoundPlayer,
    #[serde(skip, default = "default_rng")]
    pub rng: StdRng,
}

impl Default for MathApp {
    fn default() -> Self {
        MathApp {
            store: ProgressStore::new(),
            config: GameConfig::default(),
            selected_theme: None,
            facts: read_fact_table_embedded(),
            screen: Screen::NameForm,
            name_input: String::new(),
            age_input: String::new(),
            pin_input: String::new(),
            pin_error: None,
            selected_level: None,
            quiz: QuizRun::default(),
            learning: None,
            pretest: PreTestState::default(),
            message: String::new(),
            confirm_reset: false,
            show_settings: false,
            sounds: SoundPlayer::default(),
            rng: default_rng(),
        }
    }
}

impl MathApp {
    /// Restaura el estado persistido (progreso, perfil, configuración) y
    /// arranca siempre en el formulario de nombre/PIN.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: MathApp = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        // Prerrellenar el formulario con el perfil guardado
        app.name_input = app.store.child_name().to_owned();
        app.age_input = app.store.child_age().to_owned();
        app
    }

    #[cfg(test)]
    pub(crate) fn new_for_tests(seed: u64) -> Self {
        MathApp {
            rng: StdRng::seed_from_u64(seed),
            ..MathApp::default()
        }
    }
}
