use crate::MathApp;
use crate::ui::layout::centered_panel;
use egui::{Align, Context, ProgressBar, RichText};

pub fn ui_quiz(app: &mut MathApp, ctx: &Context) {
    let now = ctx.input(|i| i.time);

    // Límite de tiempo de los grados negros
    app.tick(now);
    if app.quiz.finished {
        return;
    }

    let Some(question) = app.current_question().cloned() else {
        app.abrir_cinturones();
        return;
    };
    let total = app.max_questions();
    let current = app.quiz.current;

    centered_panel(ctx, 460.0, 620.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("Pregunta {} de {total}", current + 1));
                ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                    match app.time_left_secs(now) {
                        Some(left) => ui.label(format!("⏳ {left:.0} s")),
                        None => ui.label(format!("⏱ {:.0} s", app.elapsed_secs(now))),
                    };
                });
            });
            ui.add(ProgressBar::new(app.quiz_progress_fraction()).show_percentage());
            ui.add_space(16.0);

            ui.heading(RichText::new(format!("{} = ?", question.prompt)).size(48.0));
            ui.add_space(18.0);

            // Opciones en una fila; puede haber 3 si la resta bajaba de cero
            let mut elegida = None;
            ui.horizontal(|ui| {
                let n = question.choices.len() as f32;
                let btn_w = ((ui.available_width() - 8.0 * n) / n).clamp(80.0, 140.0);
                ui.add_space((ui.available_width() - (btn_w + 8.0) * n).max(0.0) / 2.0);
                for choice in &question.choices {
                    let btn = egui::Button::new(RichText::new(choice.to_string()).size(28.0))
                        .min_size(egui::vec2(btn_w, 64.0));
                    if ui.add(btn).clicked() {
                        elegida = Some(*choice);
                    }
                }
            });
            if let Some(choice) = elegida {
                app.responder(choice, now);
            }

            ui.add_space(16.0);

            // Marcas de respuesta (rayo/estrella/tick) y última señal de sonido
            ui.horizontal(|ui| {
                ui.add_space((ui.available_width() - 300.0).max(0.0) / 2.0);
                let marks: String = app
                    .quiz
                    .answer_marks
                    .iter()
                    .map(|m| m.symbol)
                    .collect::<Vec<_>>()
                    .join(" ");
                ui.label(marks);
                if let Some(sfx) = app.sounds.recent() {
                    ui.label(sfx.emoji());
                }
            });

            if !app.message.is_empty() {
                ui.add_space(8.0);
                ui.label(&app.message);
            }
        });
    });
}
