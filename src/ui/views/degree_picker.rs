use crate::MathApp;
use crate::model::BeltSelector;
use crate::ui::helpers::card_button;
use crate::ui::layout::centered_panel;
use crate::view_models::DegreeInfo;
use egui::{Align, Context};

pub fn ui_degree_picker(app: &mut MathApp, ctx: &Context) {
    let Some(level) = app.selected_level else {
        app.abrir_cinturones();
        return;
    };

    centered_panel(ctx, 480.0, 480.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.heading(format!("🥋 Grados de Cinturón Negro — Nivel {level}"));
            ui.add_space(14.0);

            let infos: Vec<DegreeInfo> = app.degree_infos().unwrap_or_default();
            let mut elegido = None;
            for info in &infos {
                if card_button(ui, &info.label(), 380.0, 38.0, !info.unlocked) {
                    elegido = Some(info.degree);
                }
                ui.add_space(6.0);
            }
            if let Some(degree) = elegido {
                app.empezar_cinturon(BeltSelector::Black(degree));
            }

            ui.add_space(12.0);
            if ui
                .add_sized([200.0, 32.0], egui::Button::new("⟵ Cinturones"))
                .clicked()
            {
                app.abrir_cinturones();
            }
        });
    });
}
