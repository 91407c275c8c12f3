use super::*;
use crate::model::{Belt, BeltSelector, Screen};
use crate::sound::Sfx;

impl MathApp {
    // Predicados de desbloqueo, por encima del almacén y de la configuración.

    pub fn is_belt_unlocked(&self, level: u8, belt: Belt) -> bool {
        self.store.is_belt_unlocked(level, belt)
    }

    pub fn is_degree_unlocked(&self, level: u8, degree: u8) -> bool {
        self.store.is_degree_unlocked(level, degree)
    }

    /// El cinturón negro aparece en el selector cuando el marrón está hecho.
    pub fn is_black_unlocked(&self, level: u8) -> bool {
        self.store.is_belt_completed(level, Belt::Brown)
    }

    pub fn is_level_unlocked(&self, level: u8) -> bool {
        self.store
            .is_level_unlocked(level, self.config.require_black_for_next_level)
    }

    /// Cierra el quiz terminado: con puntuación perfecta persiste el registro
    /// (escritura única) y pasa a resultados; si no, redirige a la pantalla de
    /// ánimos sin tocar el almacén.
    pub(crate) fn procesar_resultado(&mut self) {
        let Some(selector) = self.quiz.selector else {
            self.screen = Screen::BeltPicker;
            return;
        };
        let level = self.selected_level.unwrap_or(1);

        if !self.all_correct() {
            self.screen = Screen::WayToGo;
            return;
        }

        match selector {
            BeltSelector::Color(belt) => {
                self.store.record_belt_completion(level, belt, true);
            }
            BeltSelector::Black(degree) => {
                self.store.record_degree_completion(level, degree);
            }
        }
        self.sounds.play(Sfx::Complete);
        self.screen = Screen::Results;
    }
}
