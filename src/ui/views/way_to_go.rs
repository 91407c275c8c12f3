use crate::MathApp;
use crate::ui::layout::{centered_panel, two_button_row};
use egui::{Align, Context, RichText};

pub fn ui_way_to_go(app: &mut MathApp, ctx: &Context) {
    centered_panel(ctx, 360.0, 520.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.heading(RichText::new("🌟 ¡Buen trabajo!").size(30.0));
            ui.add_space(8.0);
            ui.label("Esta vez no ha salido perfecto, pero cada intento te hace más fuerte.");
            ui.add_space(14.0);

            ui.label(format!(
                "Aciertos: {}   ·   Fallos: {}",
                app.quiz.correct_count, app.quiz.wrong_count
            ));
            if !app.quiz.slow_prompts.is_empty() {
                ui.add_space(6.0);
                let lentas: Vec<String> = app.quiz.slow_prompts.iter().cloned().collect();
                ui.label(format!("Para repasar con calma: {}", lentas.join(", ")));
            }

            ui.add_space(18.0);
            let (reintentar, volver) =
                two_button_row(ui, 420.0, "🔁 Intentarlo otra vez", "⟵ Cinturones");
            if reintentar {
                app.reintentar_cinturon();
            }
            if volver {
                app.abrir_cinturones();
            }
        });
    });
}
