// src/sound.rs
//
// Señales de sonido "dispara y olvida". El reproductor recuerda la última
// señal para que la pantalla la refleje (emoji junto a las marcas) y la
// registra en el log; que una señal se pierda en una transición de pantalla
// no es un error.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sfx {
    Correct,
    Wrong,
    Click,
    Complete,
}

impl Sfx {
    pub fn emoji(self) -> &'static str {
        match self {
            Sfx::Correct => "🎵",
            Sfx::Wrong => "🔔",
            Sfx::Click => "🔈",
            Sfx::Complete => "🎉",
        }
    }
}

#[derive(Default, Debug)]
pub struct SoundPlayer {
    recent: Option<Sfx>,
}

impl SoundPlayer {
    pub fn play(&mut self, sfx: Sfx) {
        log::debug!("sfx: {sfx:?}");
        self.recent = Some(sfx);
    }

    /// Última señal lanzada desde la última limpieza.
    pub fn recent(&self) -> Option<Sfx> {
        self.recent
    }

    /// Limpieza al salir de una pantalla; perder una señal no es fatal.
    pub fn stop_all(&mut self) {
        self.recent = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn la_ultima_senal_queda_visible() {
        let mut player = SoundPlayer::default();
        player.play(Sfx::Correct);
        player.play(Sfx::Wrong);
        assert_eq!(player.recent(), Some(Sfx::Wrong));
    }

    #[test]
    fn stop_all_descarta_lo_reciente() {
        let mut player = SoundPlayer::default();
        player.play(Sfx::Wrong);
        player.stop_all();
        assert_eq!(player.recent(), None);
    }
}
