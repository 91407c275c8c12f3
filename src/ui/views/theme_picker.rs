use crate::MathApp;
use crate::model::Theme;
use crate::ui::layout::centered_panel;
use egui::{Align, Context};

pub fn ui_theme_picker(app: &mut MathApp, ctx: &Context) {
    centered_panel(ctx, 380.0, 560.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.heading("🎨 Elige tu mundo");
            ui.add_space(16.0);

            let mut elegido = None;
            egui::Grid::new("theme_grid")
                .num_columns(2)
                .spacing([12.0, 12.0])
                .show(ui, |ui| {
                    for (i, theme) in Theme::ALL.into_iter().enumerate() {
                        let label = format!("{} {}", theme.emoji(), theme.nombre());
                        if ui.add_sized([240.0, 52.0], egui::Button::new(label)).clicked() {
                            elegido = Some(theme);
                        }
                        if i % 2 == 1 {
                            ui.end_row();
                        }
                    }
                });
            if let Some(theme) = elegido {
                app.elegir_tema(theme);
            }
        });
    });
}
