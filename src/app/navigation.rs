use super::*;
use crate::model::{Belt, BeltSelector, Screen, Theme};
use crate::sound::Sfx;
use crate::store;

impl MathApp {
    pub fn abrir_pretest(&mut self) {
        self.screen = Screen::PreTest;
        self.message.clear();
    }

    /// El pre-test es orientativo: se puede saltar sin consecuencias.
    pub fn saltar_pretest(&mut self) {
        self.sounds.play(Sfx::Click);
        self.screen = Screen::ThemePicker;
        self.message.clear();
    }

    pub fn elegir_tema(&mut self, theme: Theme) {
        self.sounds.play(Sfx::Click);
        self.selected_theme = Some(theme);
        self.store.set(store::KEY_THEME, theme.key());
        self.screen = Screen::LevelPicker;
        self.message.clear();
    }

    pub fn abrir_temas(&mut self) {
        self.screen = Screen::ThemePicker;
        self.message.clear();
    }

    pub fn abrir_niveles(&mut self) {
        self.screen = Screen::LevelPicker;
        self.message.clear();
    }

    pub fn seleccionar_nivel(&mut self, level: u8) {
        if !self.is_level_unlocked(level) {
            return;
        }
        self.sounds.play(Sfx::Click);
        self.selected_level = Some(level);
        self.screen = Screen::BeltPicker;
        self.message.clear();
    }

    /// Selector de cinturones; sin nivel elegido redirige al de niveles.
    pub fn abrir_cinturones(&mut self) {
        if self.selected_level.is_none() {
            self.screen = Screen::LevelPicker;
            return;
        }
        self.screen = Screen::BeltPicker;
        self.message.clear();
    }

    /// Selector de grados; exige nivel elegido (entrada directa → cinturones).
    pub fn abrir_grados(&mut self) {
        if self.selected_level.is_none() {
            self.screen = Screen::BeltPicker;
            return;
        }
        self.screen = Screen::DegreePicker;
        self.message.clear();
    }

    /// Botón principal de la pantalla de resultados: a dónde seguir depende de
    /// lo que se acaba de completar.
    pub fn continuar_tras_resultado(&mut self) {
        self.sounds.stop_all();
        match self.quiz.selector {
            Some(BeltSelector::Black(7)) => self.abrir_niveles(),
            Some(BeltSelector::Black(_)) => self.abrir_grados(),
            Some(BeltSelector::Color(Belt::Brown)) => self.abrir_grados(),
            _ => self.abrir_cinturones(),
        }
    }

    /// Desde la pantalla de ánimos: otro intento del mismo cinturón.
    pub fn reintentar_cinturon(&mut self) {
        match self.quiz.selector {
            Some(selector) => self.empezar_cinturon(selector),
            None => self.abrir_cinturones(),
        }
    }

    pub fn volver_al_formulario(&mut self) {
        self.screen = Screen::NameForm;
        self.message.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sin_nivel_elegido_se_redirige_en_vez_de_fallar() {
        let mut app = MathApp::new_for_tests(2);
        app.abrir_cinturones();
        assert_eq!(app.screen, Screen::LevelPicker);
        app.abrir_grados();
        assert_eq!(app.screen, Screen::BeltPicker);
    }

    #[test]
    fn un_nivel_bloqueado_no_se_puede_seleccionar() {
        let mut app = MathApp::new_for_tests(2);
        app.seleccionar_nivel(3);
        assert_eq!(app.selected_level, None);
        app.seleccionar_nivel(1);
        assert_eq!(app.selected_level, Some(1));
        assert_eq!(app.screen, Screen::BeltPicker);
    }

    #[test]
    fn el_tema_elegido_se_persiste() {
        let mut app = MathApp::new_for_tests(2);
        app.elegir_tema(Theme::Dinosaurs);
        assert_eq!(app.store.theme_key(), Some("dinosaurs"));
        assert_eq!(app.screen, Screen::LevelPicker);
    }

    #[test]
    fn tras_el_marron_se_ofrecen_los_grados() {
        let mut app = MathApp::new_for_tests(2);
        app.selected_level = Some(1);
        app.quiz.selector = Some(BeltSelector::Color(Belt::Brown));
        app.continuar_tras_resultado();
        assert_eq!(app.screen, Screen::DegreePicker);

        app.quiz.selector = Some(BeltSelector::Black(7));
        app.continuar_tras_resultado();
        assert_eq!(app.screen, Screen::LevelPicker);
    }
}
