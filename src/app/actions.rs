use super::*;
use crate::api::PreTestResults;
use crate::generator::{build_quiz, learning_content};
use crate::model::{Belt, BeltSelector, PreTestSection, Screen};
use crate::pretest::questions_for_section;
use crate::sound::Sfx;
use crate::store;

impl MathApp {
    // ----- ciclo de vida del quiz -----

    pub fn hard_reset_quiz_state(&mut self) {
        self.quiz = QuizRun::default();
        self.learning = None;
        self.sounds.stop_all();
    }

    /// Arranca un cinturón. La entrada en frío pasa siempre por el módulo de
    /// aprendizaje antes del quiz.
    pub fn empezar_cinturon(&mut self, selector: BeltSelector) {
        self.hard_reset_quiz_state();
        self.sounds.play(Sfx::Click);

        let level = self.selected_level.unwrap_or(1);
        self.quiz.selector = Some(selector);
        self.learning = Some(LearningState {
            content: learning_content(&self.facts, level, selector),
            return_to_quiz: false,
        });
        self.screen = Screen::Learning;
        self.message.clear();
    }

    /// Construye las preguntas y pone el reloj a cero.
    pub fn comenzar_quiz(&mut self, now: f64) {
        let selector = match self.quiz.selector {
            Some(s) => s,
            None => {
                // Entrada directa sin selección: volvemos al selector
                self.screen = Screen::BeltPicker;
                return;
            }
        };
        let level = self.selected_level.unwrap_or(1);

        let mut questions = build_quiz(&mut self.rng, &self.facts, level, selector);
        if questions.is_empty() {
            questions = build_quiz(
                &mut self.rng,
                &self.facts,
                1,
                BeltSelector::Color(Belt::White),
            );
        }

        self.quiz.questions = questions;
        self.quiz.current = 0;
        self.quiz.started_at = Some(now);
        self.quiz.question_started_at = Some(now);
        self.quiz.paused_at = None;
        self.quiz.finished = false;
        self.screen = Screen::Quiz;
    }

    /// Procesa la opción elegida. Acierto: avanza; fallo: pausa el reloj y
    /// desvía al módulo de aprendizaje (la pregunta fallada queda atrás).
    pub fn responder(&mut self, choice: u32, now: f64) {
        if self.quiz.finished {
            return;
        }
        let question = match self.quiz.questions.get(self.quiz.current) {
            Some(q) => q.clone(),
            None => return,
        };

        let time_taken = now - self.quiz.question_started_at.unwrap_or(now);
        self.quiz.question_times.push(time_taken);

        if choice == question.correct_answer {
            self.quiz.correct_count += 1;
            self.sounds.play(Sfx::Correct);
            self.store.bump_daily_correct(&store::today_key());

            let symbol = if time_taken <= 1.5 {
                "⚡"
            } else if time_taken <= 2.0 {
                "⭐"
            } else if time_taken <= 5.0 {
                "✓"
            } else {
                self.quiz.slow_prompts.insert(question.prompt.clone());
                "🐢"
            };
            self.quiz.answer_marks.push(AnswerMark {
                symbol,
                correct: true,
                time_taken,
            });
            self.avanzar_pregunta(now);
        } else {
            self.quiz.wrong_count += 1;
            self.sounds.play(Sfx::Wrong);
            self.quiz.answer_marks.push(AnswerMark {
                symbol: "❌",
                correct: false,
                time_taken,
            });

            self.quiz.paused_at = Some(now);
            let level = self.selected_level.unwrap_or(1);
            let selector = self
                .quiz
                .selector
                .unwrap_or(BeltSelector::Color(Belt::White));
            self.learning = Some(LearningState {
                content: learning_content(&self.facts, level, selector),
                return_to_quiz: true,
            });
            self.screen = Screen::Learning;
        }
    }

    fn avanzar_pregunta(&mut self, now: f64) {
        let total = self.max_questions().min(self.quiz.questions.len());
        if self.quiz.current + 1 >= total {
            self.finalizar_quiz(now);
            return;
        }
        self.quiz.current += 1;
        self.quiz.question_started_at = Some(now);
    }

    /// Vuelta del módulo de aprendizaje: o bien reanuda el quiz pausado, o
    /// bien lo arranca por primera vez.
    pub fn continuar_tras_aprendizaje(&mut self, now: f64) {
        let return_to_quiz = self
            .learning
            .as_ref()
            .map(|l| l.return_to_quiz)
            .unwrap_or(false);
        self.learning = None;

        if return_to_quiz {
            // Descontar la pausa del reloj
            if let (Some(paused), Some(started)) = (self.quiz.paused_at.take(), self.quiz.started_at)
            {
                self.quiz.started_at = Some(started + (now - paused));
            }
            self.screen = Screen::Quiz;
            self.quiz.question_started_at = Some(now);
            self.avanzar_pregunta(now);
        } else {
            self.comenzar_quiz(now);
        }
    }

    pub fn finalizar_quiz(&mut self, now: f64) {
        if self.quiz.finished {
            return;
        }
        self.quiz.finished = true;

        let elapsed = self.elapsed_secs(now);
        self.store
            .set(store::KEY_LAST_SESSION, (elapsed.round() as u64).to_string());

        self.procesar_resultado();
    }

    /// Llamado cada frame desde la pantalla del quiz: corta el quiz si el
    /// límite de tiempo del cinturón negro ha vencido.
    pub fn tick(&mut self, now: f64) {
        if self.quiz.finished || self.screen != Screen::Quiz {
            return;
        }
        let Some(selector) = self.quiz.selector else {
            return;
        };
        if let Some(limit) = selector.time_limit_secs() {
            if self.elapsed_secs(now) >= limit {
                self.finalizar_quiz(now);
            }
        }
    }

    // ----- pre-test -----

    pub fn empezar_seccion_pretest(&mut self, section: PreTestSection, now: f64) {
        self.sounds.play(Sfx::Click);
        self.pretest.section = section;
        self.pretest.questions = questions_for_section(section);
        self.pretest.current = 0;
        self.pretest.input.clear();
        self.pretest.score_current = 0;
        self.pretest.started_at = Some(now);
    }

    pub fn seccion_pretest_activa(&self) -> bool {
        !self.pretest.questions.is_empty()
    }

    pub fn pretest_terminado(&self) -> bool {
        self.pretest.completed_sections.len() == PreTestSection::ORDER.len()
    }

    /// Corrige la respuesta escrita y avanza; al acabar el bloque lo apunta
    /// como completado. El pre-test es orientativo: no toca el progreso.
    pub fn responder_pretest(&mut self, now: f64) {
        let Some(q) = self.pretest.questions.get(self.pretest.current) else {
            return;
        };
        let answer: Option<u32> = self.pretest.input.trim().parse().ok();
        if answer == Some(q.correct_answer) {
            self.pretest.score_current += 1;
            self.sounds.play(Sfx::Correct);
        } else {
            self.sounds.play(Sfx::Wrong);
        }
        self.pretest.input.clear();

        if self.pretest.current + 1 >= self.pretest.questions.len() {
            // Bloque terminado
            if let Some(started) = self.pretest.started_at.take() {
                self.pretest.elapsed += (now - started).max(0.0);
            }
            let section = self.pretest.section;
            let score = self.pretest.score_current;
            self.pretest.completed_sections.insert(section, score);
            self.pretest.questions.clear();
        } else {
            self.pretest.current += 1;
        }
    }

    /// Envía los resultados al endpoint stubbeado (siempre tiene éxito).
    pub fn enviar_resultados_pretest(&mut self) {
        let scores = self
            .pretest
            .completed_sections
            .iter()
            .map(|(s, n)| (s.key().to_owned(), *n))
            .collect();
        let results = PreTestResults {
            child_name: self.store.child_name().to_owned(),
            child_age: self.store.child_age().to_owned(),
            scores,
            total_seconds: self.pretest.elapsed.round() as u64,
        };

        #[cfg(not(target_arch = "wasm32"))]
        {
            self.pretest.ack = Some(crate::api::send_pretest_results(&results));
        }
        #[cfg(target_arch = "wasm32")]
        {
            let (tx, rx) = std::sync::mpsc::channel();
            self.pretest.submit_rx = Some(rx);
            crate::api::send_pretest_results_async(results, tx);
        }
    }

    /// En wasm, recoge la confirmación pendiente del envío stubbeado.
    pub fn poll_pretest_ack(&mut self) {
        #[cfg(target_arch = "wasm32")]
        {
            let maybe = self
                .pretest
                .submit_rx
                .as_ref()
                .and_then(|rx| rx.try_recv().ok());
            if let Some(ack) = maybe {
                self.pretest.ack = Some(ack);
                self.pretest.submit_rx = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Theme;

    fn app_en_quiz(selector: BeltSelector, level: u8) -> MathApp {
        let mut app = MathApp::new_for_tests(99);
        app.selected_theme = Some(Theme::Animals);
        app.selected_level = Some(level);
        app.empezar_cinturon(selector);
        assert_eq!(app.screen, Screen::Learning);
        app.continuar_tras_aprendizaje(0.0);
        assert_eq!(app.screen, Screen::Quiz);
        app
    }

    fn responder_bien(app: &mut MathApp, now: f64) {
        let correct = app.current_question().unwrap().correct_answer;
        app.responder(correct, now);
    }

    fn responder_mal(app: &mut MathApp, now: f64) {
        let correct = app.current_question().unwrap().correct_answer;
        app.responder(correct + 100, now);
    }

    #[test]
    fn quiz_perfecto_termina_en_resultados() {
        let mut app = app_en_quiz(BeltSelector::Color(Belt::White), 1);
        for i in 0..10 {
            assert_eq!(app.screen, Screen::Quiz, "pregunta {i}");
            responder_bien(&mut app, i as f64);
        }
        assert!(app.quiz.finished);
        assert_eq!(app.quiz.correct_count, 10);
        assert_eq!(app.screen, Screen::Results);
        assert!(app.store.is_belt_completed(1, Belt::White));
    }

    #[test]
    fn fallo_desvia_al_aprendizaje_y_reanuda() {
        let mut app = app_en_quiz(BeltSelector::Color(Belt::White), 1);
        responder_mal(&mut app, 1.0);
        assert_eq!(app.screen, Screen::Learning);
        assert!(app.learning.as_ref().unwrap().return_to_quiz);
        assert_eq!(app.quiz.wrong_count, 1);

        app.continuar_tras_aprendizaje(5.0);
        assert_eq!(app.screen, Screen::Quiz);
        // la pregunta fallada queda atrás
        assert_eq!(app.quiz.current, 1);
    }

    #[test]
    fn quiz_imperfecto_redirige_a_animos() {
        let mut app = app_en_quiz(BeltSelector::Color(Belt::White), 1);
        responder_mal(&mut app, 1.0);
        app.continuar_tras_aprendizaje(2.0);
        for i in 0..9 {
            responder_bien(&mut app, 3.0 + i as f64);
        }
        assert!(app.quiz.finished);
        assert_eq!(app.screen, Screen::WayToGo);
        // sin puntuación perfecta no se persiste nada
        assert!(!app.store.is_belt_completed(1, Belt::White));
    }

    #[test]
    fn el_limite_de_tiempo_corta_el_quiz_negro() {
        let mut app = app_en_quiz(BeltSelector::Black(1), 1);
        responder_bien(&mut app, 1.0);
        app.tick(59.0);
        assert!(!app.quiz.finished);
        app.tick(61.0);
        assert!(app.quiz.finished);
        assert_eq!(app.screen, Screen::WayToGo);
    }

    #[test]
    fn los_aciertos_suman_al_contador_diario() {
        let mut app = app_en_quiz(BeltSelector::Color(Belt::White), 1);
        let hoy = crate::store::today_key();
        let antes = app.store.daily_correct(&hoy);
        responder_bien(&mut app, 1.0);
        responder_bien(&mut app, 2.0);
        assert_eq!(app.store.daily_correct(&hoy), antes + 2);
    }

    #[test]
    fn marcas_de_velocidad_segun_el_tiempo() {
        let mut app = app_en_quiz(BeltSelector::Color(Belt::White), 1);
        responder_bien(&mut app, 1.0); // 1.0s → ⚡
        responder_bien(&mut app, 2.9); // 1.9s → ⭐
        responder_bien(&mut app, 7.0); // 4.1s → ✓
        responder_bien(&mut app, 20.0); // 13.0s → lenta
        let symbols: Vec<&str> = app.quiz.answer_marks.iter().map(|m| m.symbol).collect();
        assert_eq!(symbols, vec!["⚡", "⭐", "✓", "🐢"]);
        assert_eq!(app.quiz.slow_prompts.len(), 1);
    }

    #[test]
    fn pretest_completo_y_envio_stubbeado() {
        let mut app = MathApp::new_for_tests(7);
        app.store.set(crate::store::KEY_NAME, "Vera");
        for section in PreTestSection::ORDER {
            app.empezar_seccion_pretest(section, 0.0);
            assert!(app.seccion_pretest_activa());
            for _ in 0..6 {
                let q = app.pretest.questions[app.pretest.current].clone();
                app.pretest.input = q.correct_answer.to_string();
                app.responder_pretest(10.0);
            }
            assert!(!app.seccion_pretest_activa());
        }
        assert!(app.pretest_terminado());
        assert_eq!(
            app.pretest.completed_sections.values().sum::<u32>(),
            24
        );

        app.enviar_resultados_pretest();
        app.poll_pretest_ack();
        assert_eq!(app.pretest.ack.as_ref().unwrap().status, "success");
    }
}
