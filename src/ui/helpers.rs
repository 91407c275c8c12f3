// src/ui/helpers.rs
use egui::{Button, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Botón-tarjeta de selector: deshabilitado y con candado si está bloqueado.
pub fn card_button(ui: &mut Ui, label: &str, width: f32, height: f32, locked: bool) -> bool {
    let text = if locked {
        format!("{label}  🔒")
    } else {
        label.to_owned()
    };
    let btn = Button::new(text).min_size(Vec2::new(width, height));
    let response = ui.add_enabled(!locked, btn);
    if locked {
        response
            .on_hover_text("Todavía bloqueado: completa el anterior para abrirlo")
            .clicked()
    } else {
        response.clicked()
    }
}
