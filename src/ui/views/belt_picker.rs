use crate::MathApp;
use crate::model::BeltSelector;
use crate::ui::helpers::card_button;
use crate::ui::layout::centered_panel;
use crate::view_models::BeltInfo;
use egui::{Align, Context};

pub fn ui_belt_picker(app: &mut MathApp, ctx: &Context) {
    // Entrada directa sin nivel: volvemos al selector de niveles
    let Some(level) = app.selected_level else {
        app.abrir_niveles();
        return;
    };

    centered_panel(ctx, 480.0, 480.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            let theme = app.resolve_theme();
            ui.heading(format!("{} Nivel {level}", theme.emoji_nivel(level)));
            ui.add_space(14.0);

            let infos: Vec<BeltInfo> = app.belt_infos().unwrap_or_default();
            let mut elegido = None;
            for info in &infos {
                let locked = !info.unlocked;
                if card_button(ui, &format!("{}  ·  10 preguntas", info.label()), 380.0, 40.0, locked) {
                    elegido = Some(info.belt);
                }
                ui.add_space(6.0);
            }

            // Tarjeta del cinturón negro: se abre al completar el marrón
            let black_locked = !app.is_black_unlocked(level);
            let abrir_grados = card_button(ui, "Cinturón Negro  ·  grados 1–7", 380.0, 40.0, black_locked);

            if let Some(belt) = elegido {
                app.empezar_cinturon(BeltSelector::Color(belt));
            } else if abrir_grados {
                app.abrir_grados();
            }

            ui.add_space(12.0);
            if ui
                .add_sized([200.0, 32.0], egui::Button::new("⟵ Niveles"))
                .clicked()
            {
                app.abrir_niveles();
            }
        });
    });
}
