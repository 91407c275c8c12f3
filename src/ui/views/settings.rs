use crate::MathApp;
use crate::store::KEY_REACTION;
use egui::Context;

pub fn ui_settings(app: &mut MathApp, ctx: &Context) {
    let mut abierto = true;
    egui::Window::new("⚙ Ajustes")
        .collapsible(false)
        .resizable(false)
        .open(&mut abierto)
        .show(ctx, |ui| {
            ui.checkbox(
                &mut app.config.require_black_for_next_level,
                "Exigir el cinturón negro para pasar de nivel",
            );
            ui.add_space(8.0);

            let mut speed = app.store.reaction_speed();
            ui.horizontal(|ui| {
                ui.label("Velocidad de reacción");
                if ui
                    .add(egui::Slider::new(&mut speed, 0.5..=2.0).step_by(0.1))
                    .changed()
                {
                    app.store.set(KEY_REACTION, format!("{speed:.1}"));
                }
            });
            ui.add_space(12.0);

            if ui.button("🔄 Borrar todo el progreso…").clicked() {
                app.confirm_reset = true;
            }
        });
    if !abierto {
        app.show_settings = false;
    }
}
