use crate::MathApp;
use crate::model::BeltSelector;
use crate::ui::layout::centered_panel;
use egui::{Align, Color32, Context, RichText};

pub fn ui_results(app: &mut MathApp, ctx: &Context) {
    // Solo se llega aquí con puntuación perfecta; cualquier otra cosa es una
    // entrada directa rara y se redirige.
    let Some(selector) = app.quiz.selector else {
        app.abrir_cinturones();
        return;
    };

    centered_panel(ctx, 420.0, 560.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.heading(
                RichText::new("🎉 ¡ENHORABUENA! 🎉")
                    .size(34.0)
                    .color(Color32::GOLD),
            );
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Has ganado +{} puntos", app.puntos_ganados()))
                    .color(Color32::LIGHT_GREEN)
                    .strong(),
            );
            ui.add_space(14.0);

            egui::Grid::new("results_grid")
                .num_columns(2)
                .spacing([24.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Aciertos de hoy");
                    ui.label(
                        RichText::new(app.daily_correct_today().to_string()).size(26.0).strong(),
                    );
                    ui.end_row();

                    ui.label("Tiempo empleado");
                    ui.label(
                        RichText::new(format!("{} s", app.store.last_session_seconds()))
                            .size(26.0)
                            .strong(),
                    );
                    ui.end_row();
                });

            ui.add_space(14.0);
            ui.label(
                RichText::new(format!("🥋 ¡Has conseguido el {}!", selector.nombre()))
                    .size(20.0)
                    .strong(),
            );
            ui.add_space(18.0);

            let label = match selector {
                BeltSelector::Black(_) => "Ir a los grados",
                _ => "Ir a los cinturones",
            };
            if ui.add_sized([260.0, 44.0], egui::Button::new(label)).clicked() {
                app.continuar_tras_resultado();
            }
        });
    });
}
