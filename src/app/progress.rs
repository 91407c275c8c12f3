use super::*;
use crate::model::Theme;
use crate::store;

impl MathApp {
    /// Aciertos acumulados hoy (el contador se reinicia solo al cambiar la fecha).
    pub fn daily_correct_today(&self) -> u32 {
        self.store.daily_correct(&store::today_key())
    }

    /// Resolución de tema: primero la selección en memoria, después la clave
    /// persistida y por último el primer tema de la lista. Un resolvedor con
    /// orden explícito, sin cadenas de fallback implícitas.
    pub fn resolve_theme(&self) -> Theme {
        if let Some(theme) = self.selected_theme {
            return theme;
        }
        if let Some(theme) = self.store.theme_key().and_then(Theme::from_key) {
            return theme;
        }
        Theme::ALL[0]
    }

    /// Sincroniza los escalares de perfil del formulario hacia el almacén.
    pub fn persistir_perfil(&mut self) {
        let name = self.name_input.trim();
        if !name.is_empty() {
            self.store.set(store::KEY_NAME, name);
        }
        let age = self.age_input.trim();
        if !age.is_empty() {
            self.store.set(store::KEY_AGE, age);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn el_resolvedor_de_tema_sigue_el_orden_declarado() {
        let mut app = MathApp::new_for_tests(3);
        // 3) sin nada: el primero de la lista
        assert_eq!(app.resolve_theme(), Theme::ALL[0]);

        // 2) clave persistida
        app.store.set(store::KEY_THEME, "farm");
        assert_eq!(app.resolve_theme(), Theme::Farm);

        // clave persistida ilegible: se ignora y cae al final de la lista
        app.store.set(store::KEY_THEME, "marciano");
        assert_eq!(app.resolve_theme(), Theme::ALL[0]);

        // 1) la selección en memoria manda sobre todo
        app.selected_theme = Some(Theme::Candyland);
        assert_eq!(app.resolve_theme(), Theme::Candyland);
    }

    #[test]
    fn persistir_perfil_ignora_campos_vacios() {
        let mut app = MathApp::new_for_tests(3);
        app.store.set(store::KEY_NAME, "Vera");
        app.name_input = "   ".to_owned();
        app.age_input = "6".to_owned();
        app.persistir_perfil();
        assert_eq!(app.store.child_name(), "Vera");
        assert_eq!(app.store.child_age(), "6");
    }
}
