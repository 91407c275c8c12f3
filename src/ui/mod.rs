mod helpers;
pub mod layout;
pub mod views;

use crate::app::MathApp;
use crate::model::Screen;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for MathApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Confirmación del envío stubbeado (solo hace algo en wasm)
        self.poll_pretest_ack();

        // PANEL SUPERIOR con ajustes y reinicio, fuera del formulario inicial
        if !matches!(self.screen, Screen::NameForm) {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Dispatch por pantalla a las funciones de views/
        match self.screen {
            Screen::NameForm => views::name_form::ui_name_form(self, ctx),
            Screen::PreTest => views::pretest::ui_pretest(self, ctx),
            Screen::ThemePicker => views::theme_picker::ui_theme_picker(self, ctx),
            Screen::LevelPicker => views::level_picker::ui_level_picker(self, ctx),
            Screen::BeltPicker => views::belt_picker::ui_belt_picker(self, ctx),
            Screen::DegreePicker => views::degree_picker::ui_degree_picker(self, ctx),
            Screen::Learning => views::learning::ui_learning(self, ctx),
            Screen::Quiz => views::quiz::ui_quiz(self, ctx),
            Screen::Results => views::results::ui_results(self, ctx),
            Screen::WayToGo => views::way_to_go::ui_way_to_go(self, ctx),
        }

        if self.show_settings {
            views::settings::ui_settings(self, ctx);
        }
        if self.confirm_reset {
            self.confirm_reset(ctx);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, self);
    }
}
