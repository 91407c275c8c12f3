use crate::MathApp;
use crate::model::PreTestSection;
use crate::ui::layout::{centered_panel, two_button_row};
use egui::{Align, Context, RichText, TextEdit};

pub fn ui_pretest(app: &mut MathApp, ctx: &Context) {
    let now = ctx.input(|i| i.time);

    centered_panel(ctx, 420.0, 540.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.heading("📝 Pequeña prueba inicial");
            ui.add_space(6.0);
            ui.label("Cuatro bloques cortos para saber por dónde empiezas. No cuenta para los cinturones.");
            ui.add_space(14.0);

            if app.seccion_pretest_activa() {
                seccion_en_curso(app, ui, now);
            } else {
                menu_de_bloques(app, ui, now);
            }
        });
    });
}

fn seccion_en_curso(app: &mut MathApp, ui: &mut egui::Ui, now: f64) {
    let section = app.pretest.section;
    let total = app.pretest.questions.len();
    let current = app.pretest.current;
    let prompt = app.pretest.questions[current].prompt.clone();

    ui.label(format!(
        "{} — pregunta {} de {}",
        section.nombre(),
        current + 1,
        total
    ));
    if let Some(started) = app.pretest.started_at {
        ui.label(format!("⏱ {:.0} s", (now - started).max(0.0)));
    }
    ui.add_space(10.0);

    ui.heading(RichText::new(prompt).size(40.0));
    ui.add_space(10.0);

    let input = ui.add(
        TextEdit::singleline(&mut app.pretest.input)
            .desired_width(120.0)
            .hint_text("?"),
    );
    input.request_focus();

    ui.add_space(8.0);
    let enviar = ui.add_sized([180.0, 36.0], egui::Button::new("Enviar"));
    let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
    if enviar.clicked() || (enter && !app.pretest.input.trim().is_empty()) {
        app.responder_pretest(now);
    }
}

fn menu_de_bloques(app: &mut MathApp, ui: &mut egui::Ui, now: f64) {
    for section in PreTestSection::ORDER {
        let label = match app.pretest.completed_sections.get(&section) {
            Some(score) => format!("{} ✅ ({score}/6)", section.nombre()),
            None => format!("{} ▶", section.nombre()),
        };
        let hecho = app.pretest.completed_sections.contains_key(&section);
        if ui.add_sized([320.0, 36.0], egui::Button::new(label)).clicked() && !hecho {
            app.empezar_seccion_pretest(section, now);
        }
        ui.add_space(6.0);
    }

    ui.add_space(10.0);

    if app.pretest_terminado() {
        let aciertos: u32 = app.pretest.completed_sections.values().sum();
        ui.label(format!("Total: {aciertos}/24 en {:.0} s", app.pretest.elapsed));
        ui.add_space(6.0);

        match &app.pretest.ack {
            Some(ack) => {
                ui.label(format!("📨 {}", ack.message));
                ui.add_space(6.0);
                if ui
                    .add_sized([320.0, 40.0], egui::Button::new("🎨 Elegir tema"))
                    .clicked()
                {
                    app.saltar_pretest();
                }
            }
            None => {
                let (enviar, saltar) =
                    two_button_row(ui, 320.0, "📨 Enviar resultados", "Saltar");
                if enviar {
                    app.enviar_resultados_pretest();
                }
                if saltar {
                    app.saltar_pretest();
                }
            }
        }
    } else if ui
        .add_sized([320.0, 36.0], egui::Button::new("Saltar la prueba"))
        .clicked()
    {
        app.saltar_pretest();
    }
}
