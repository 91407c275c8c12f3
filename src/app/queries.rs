use super::*;
use crate::model::Question;

impl MathApp {
    pub fn current_question(&self) -> Option<&Question> {
        self.quiz.questions.get(self.quiz.current)
    }

    /// Total de preguntas del quiz en curso (10, 20 o 30 según la selección).
    pub fn max_questions(&self) -> usize {
        self.quiz
            .selector
            .map(|s| s.max_questions())
            .unwrap_or(10)
    }

    pub fn all_correct(&self) -> bool {
        self.quiz.correct_count == self.max_questions()
    }

    /// Segundos de quiz transcurridos, descontando pausas.
    pub fn elapsed_secs(&self, now: f64) -> f64 {
        match self.quiz.started_at {
            Some(started) => {
                let hasta = self.quiz.paused_at.unwrap_or(now);
                (hasta - started).max(0.0)
            }
            None => 0.0,
        }
    }

    /// Segundos restantes del límite, si el quiz en curso tiene uno.
    pub fn time_left_secs(&self, now: f64) -> Option<f64> {
        let limit = self.quiz.selector?.time_limit_secs()?;
        Some((limit - self.elapsed_secs(now)).max(0.0))
    }

    /// Fracción 0..=1 de la barra de progreso del quiz.
    pub fn quiz_progress_fraction(&self) -> f32 {
        let max = self.max_questions() as f32;
        (self.quiz.correct_count as f32 / max).min(1.0)
    }

    /// Puntos mostrados en resultados: 10 por quiz perfecto; si no, la mitad
    /// de los aciertos con un mínimo de 1.
    pub fn puntos_ganados(&self) -> u32 {
        if self.all_correct() {
            10
        } else {
            ((self.quiz.correct_count / 2) as u32).max(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Belt, BeltSelector};

    #[test]
    fn reloj_con_pausa_descontada() {
        let mut app = MathApp::new_for_tests(4);
        app.quiz.started_at = Some(10.0);
        assert_eq!(app.elapsed_secs(25.0), 15.0);

        app.quiz.paused_at = Some(20.0);
        // pausado: el tiempo deja de correr
        assert_eq!(app.elapsed_secs(99.0), 10.0);
    }

    #[test]
    fn tiempo_restante_solo_en_negro() {
        let mut app = MathApp::new_for_tests(4);
        app.quiz.selector = Some(BeltSelector::Color(Belt::Red));
        app.quiz.started_at = Some(0.0);
        assert_eq!(app.time_left_secs(5.0), None);

        app.quiz.selector = Some(BeltSelector::Black(2));
        assert_eq!(app.time_left_secs(15.0), Some(45.0));
        assert_eq!(app.time_left_secs(500.0), Some(0.0));
    }

    #[test]
    fn puntos_ganados_con_minimo() {
        let mut app = MathApp::new_for_tests(4);
        app.quiz.selector = Some(BeltSelector::Color(Belt::Red));
        app.quiz.correct_count = 10;
        assert_eq!(app.puntos_ganados(), 10);

        app.quiz.correct_count = 7;
        assert_eq!(app.puntos_ganados(), 3);

        app.quiz.correct_count = 0;
        assert_eq!(app.puntos_ganados(), 1);
    }
}
