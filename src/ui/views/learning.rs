use crate::MathApp;
use crate::ui::layout::centered_panel;
use egui::{Align, Context, RichText};

pub fn ui_learning(app: &mut MathApp, ctx: &Context) {
    let now = ctx.input(|i| i.time);

    // Entrada directa sin nada que aprender: al selector
    let Some(learning) = &app.learning else {
        app.abrir_cinturones();
        return;
    };
    let content = learning.content.clone();
    let return_to_quiz = learning.return_to_quiz;

    centered_panel(ctx, 320.0, 560.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            if return_to_quiz {
                ui.heading("💪 ¡Casi! Repasa y sigue");
            } else {
                ui.heading("📖 Hoy aprendemos");
            }
            ui.add_space(20.0);

            ui.label(RichText::new(content).size(44.0).strong());
            ui.add_space(8.0);
            ui.label("Dilo en voz alta un par de veces antes de seguir.");
            ui.add_space(20.0);

            let label = if return_to_quiz {
                "▶ Seguir con el quiz"
            } else {
                "▶ ¡A practicar!"
            };
            if ui.add_sized([260.0, 44.0], egui::Button::new(label)).clicked() {
                app.continuar_tras_aprendizaje(now);
            }
        });
    });
}
