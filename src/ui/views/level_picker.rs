use crate::MathApp;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::centered_panel;
use crate::view_models::LevelInfo;
use egui::{Align, Context};

pub fn ui_level_picker(app: &mut MathApp, ctx: &Context) {
    centered_panel(ctx, 460.0, 480.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            let name = app.store.child_name().to_owned();
            if name.is_empty() {
                ui.heading("¡A entrenar!");
            } else {
                ui.heading(format!("¡A entrenar, {name}!"));
            }
            ui.add_space(14.0);

            let infos: Vec<LevelInfo> = app.level_infos();
            let mut elegido = None;
            for info in &infos {
                let label = format!("{}  {}", info.label(), info.stars());
                if big_list_button(ui, label, 380.0, 40.0, info.unlocked) {
                    elegido = Some(info.level);
                }
                ui.add_space(6.0);
            }
            if let Some(level) = elegido {
                app.seleccionar_nivel(level);
            }

            ui.add_space(10.0);
            ui.label("El nivel 1 siempre está abierto; termina sus cinturones para seguir.");
            ui.add_space(8.0);
            if ui
                .add_sized([200.0, 32.0], egui::Button::new("⟵ Cambiar de tema"))
                .clicked()
            {
                app.abrir_temas();
            }
        });
    });
}
