use crate::MathApp;
use crate::ui::layout::centered_panel;
use egui::{Align, Color32, Context, RichText, TextEdit};

pub fn ui_name_form(app: &mut MathApp, ctx: &Context) {
    centered_panel(ctx, 320.0, 460.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.heading("👋 ¡Bienvenido al Dojo de las Sumas!");
            ui.add_space(6.0);
            ui.label("Dime quién eres para empezar a entrenar.");
            ui.add_space(18.0);

            egui::Grid::new("name_form_grid")
                .num_columns(2)
                .spacing([12.0, 10.0])
                .show(ui, |ui| {
                    ui.label("Nombre");
                    ui.add(TextEdit::singleline(&mut app.name_input).desired_width(220.0));
                    ui.end_row();

                    ui.label("Edad");
                    ui.add(TextEdit::singleline(&mut app.age_input).desired_width(80.0));
                    ui.end_row();

                    ui.label("PIN");
                    ui.add(
                        TextEdit::singleline(&mut app.pin_input)
                            .desired_width(120.0)
                            .password(true),
                    );
                    ui.end_row();
                });

            // Único campo validado de toda la app
            if let Some(error) = &app.pin_error {
                ui.add_space(6.0);
                ui.label(RichText::new(error).color(Color32::LIGHT_RED));
            }

            ui.add_space(16.0);
            let submit = ui.add_sized([220.0, 40.0], egui::Button::new("▶ Empezar"));
            let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
            if submit.clicked() || enter {
                app.enviar_pin();
            }

            ui.add_space(10.0);
            ui.label(
                RichText::new("Un PIN nuevo empieza un entrenamiento desde cero.")
                    .small()
                    .weak(),
            );
        });
    });
}
