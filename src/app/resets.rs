use super::*;
use crate::model::Screen;
use eframe::egui;

impl MathApp {
    /// Envío del formulario de PIN. Única validación de entrada de toda la
    /// app: el PIN debe tener al menos 2 caracteres. Un PIN distinto del
    /// guardado significa "alumno nuevo" y borra todo el progreso antes de
    /// escribir el PIN.
    pub fn enviar_pin(&mut self) {
        let pin = self.pin_input.trim().to_owned();
        if pin.len() < 2 {
            self.pin_error = Some("Introduce un PIN válido (mínimo 2 caracteres).".to_owned());
            return;
        }
        self.pin_error = None;

        let wiped = self.store.handle_pin_submit(&pin);
        if wiped {
            self.reset_para_nuevo_alumno();
        }
        self.persistir_perfil();
        self.abrir_pretest();
    }

    /// Estado de sesión de un alumno recién llegado: solo nivel 1 a la vista,
    /// nada seleccionado, quiz limpio.
    pub(crate) fn reset_para_nuevo_alumno(&mut self) {
        self.selected_level = Some(1);
        self.selected_theme = None;
        self.hard_reset_quiz_state();
        self.pretest = PreTestState::default();
        self.message.clear();
    }

    /// Reinicio total manual: vacía el almacén y vuelve al formulario.
    pub fn reset_total(&mut self) {
        self.store.clear_all();
        self.config = crate::model::GameConfig::default();
        self.selected_theme = None;
        self.selected_level = None;
        self.hard_reset_quiz_state();
        self.pretest = PreTestState::default();
        self.name_input.clear();
        self.age_input.clear();
        self.pin_input.clear();
        self.pin_error = None;
        self.confirm_reset = false;
        self.show_settings = false;
        self.message.clear();
        self.screen = Screen::NameForm;
    }

    pub fn confirm_reset(&mut self, ctx: &egui::Context) {
        egui::Window::new("Confirmar reinicio")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("¿Seguro que quieres borrar todo el progreso? ¡Esta acción no se puede deshacer!");
                ui.horizontal(|ui| {
                    if ui.button("Sí, borrar").clicked() {
                        self.reset_total();
                    }
                    if ui.button("No").clicked() {
                        self.confirm_reset = false;
                    }
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Belt;
    use crate::store::KEY_PIN;

    #[test]
    fn pin_demasiado_corto_muestra_error_en_linea() {
        let mut app = MathApp::new_for_tests(8);
        app.pin_input = "4".to_owned();
        app.enviar_pin();
        assert!(app.pin_error.is_some());
        assert_eq!(app.screen, Screen::NameForm);
        assert_eq!(app.store.child_pin(), None);
    }

    #[test]
    fn pin_nuevo_borra_el_progreso_del_alumno_anterior() {
        let mut app = MathApp::new_for_tests(8);
        app.store.set(KEY_PIN, "7");
        app.store.record_belt_completion(1, Belt::White, true);
        app.store.record_degree_completion(2, 1);

        app.pin_input = "42".to_owned();
        app.enviar_pin();

        assert_eq!(app.store.child_pin(), Some("42"));
        assert!(!app.store.is_belt_completed(1, Belt::White));
        assert_eq!(app.store.completed_degrees(2), Vec::<u8>::new());
        assert_eq!(app.selected_level, Some(1));
        assert_eq!(app.screen, Screen::PreTest);
    }

    #[test]
    fn mismo_pin_conserva_el_progreso() {
        let mut app = MathApp::new_for_tests(8);
        app.store.set(KEY_PIN, "77");
        app.store.record_belt_completion(3, Belt::Green, true);

        app.pin_input = "77".to_owned();
        app.enviar_pin();

        assert!(app.store.is_belt_completed(3, Belt::Green));
        assert_eq!(app.screen, Screen::PreTest);
    }

    #[test]
    fn reset_total_vacia_todo_y_vuelve_al_formulario() {
        let mut app = MathApp::new_for_tests(8);
        app.store.set(KEY_PIN, "12");
        app.store.record_belt_completion(1, Belt::White, true);
        app.name_input = "Vera".to_owned();
        app.screen = Screen::LevelPicker;

        app.reset_total();

        assert_eq!(app.store.child_pin(), None);
        assert!(!app.store.is_belt_completed(1, Belt::White));
        assert!(app.name_input.is_empty());
        assert_eq!(app.screen, Screen::NameForm);
    }
}
