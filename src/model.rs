use serde::{Deserialize, Serialize};
use std::fmt;

/// Cinturones de color, en orden de progresión.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Belt {
    White,
    Yellow,
    Green,
    Blue,
    Red,
    Brown,
}

impl Belt {
    pub const ORDER: [Belt; 6] = [
        Belt::White,
        Belt::Yellow,
        Belt::Green,
        Belt::Blue,
        Belt::Red,
        Belt::Brown,
    ];

    /// Clave estable usada en el almacén de progreso ("progress-3-red", etc.)
    pub fn key(self) -> &'static str {
        match self {
            Belt::White => "white",
            Belt::Yellow => "yellow",
            Belt::Green => "green",
            Belt::Blue => "blue",
            Belt::Red => "red",
            Belt::Brown => "brown",
        }
    }

    pub fn from_key(s: &str) -> Option<Belt> {
        Belt::ORDER.into_iter().find(|b| b.key() == s)
    }

    pub fn nombre(self) -> &'static str {
        match self {
            Belt::White => "Blanco",
            Belt::Yellow => "Amarillo",
            Belt::Green => "Verde",
            Belt::Blue => "Azul",
            Belt::Red => "Rojo",
            Belt::Brown => "Marrón",
        }
    }

    /// Cinturón inmediatamente anterior en el orden fijo (None para blanco).
    pub fn anterior(self) -> Option<Belt> {
        let idx = Belt::ORDER.iter().position(|b| *b == self)?;
        idx.checked_sub(1).map(|i| Belt::ORDER[i])
    }

    /// Todos los cinturones anteriores a este, en orden.
    pub fn anteriores(self) -> Vec<Belt> {
        let idx = Belt::ORDER.iter().position(|b| *b == self).unwrap_or(0);
        Belt::ORDER[..idx].to_vec()
    }
}

/// Qué se va a jugar: un cinturón de color o un grado de cinturón negro (1..=7).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BeltSelector {
    Color(Belt),
    Black(u8),
}

impl BeltSelector {
    /// Acepta tanto "red" como el formato "black-3" del almacén antiguo.
    pub fn parse(s: &str) -> Option<BeltSelector> {
        if let Some(rest) = s.strip_prefix("black-") {
            let degree: u8 = rest.parse().ok()?;
            if (1..=7).contains(&degree) {
                return Some(BeltSelector::Black(degree));
            }
            return None;
        }
        Belt::from_key(s).map(BeltSelector::Color)
    }

    /// Número total de preguntas del quiz para esta selección.
    pub fn max_questions(self) -> usize {
        match self {
            BeltSelector::Color(_) => 10,
            BeltSelector::Black(7) => 30,
            BeltSelector::Black(_) => 20,
        }
    }

    /// Límite de tiempo en segundos; los cinturones de color no tienen.
    pub fn time_limit_secs(self) -> Option<f64> {
        match self {
            BeltSelector::Color(_) => None,
            BeltSelector::Black(7) => Some(30.0),
            BeltSelector::Black(_) => Some(60.0),
        }
    }

    pub fn nombre(self) -> String {
        match self {
            BeltSelector::Color(b) => format!("Cinturón {}", b.nombre()),
            BeltSelector::Black(d) => format!("Cinturón Negro ({d}º dan)"),
        }
    }
}

impl fmt::Display for BeltSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BeltSelector::Color(b) => write!(f, "{}", b.key()),
            BeltSelector::Black(d) => write!(f, "black-{d}"),
        }
    }
}

/// Pareja de sumandos que se introduce como material nuevo en un cinturón.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FactPair(pub u8, pub u8);

impl FactPair {
    pub fn sum(self) -> u32 {
        self.0 as u32 + self.1 as u32
    }

    pub fn prompt(self) -> String {
        format!("{} + {}", self.0, self.1)
    }

    /// La misma pareja con los sumandos intercambiados.
    pub fn invertida(self) -> FactPair {
        FactPair(self.1, self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionTag {
    New,
    Review,
    Pad,
    Black,
}

/// Pregunta de opción múltiple, generada por quiz y nunca persistida.
#[derive(Clone, Debug, PartialEq)]
pub struct Question {
    pub prompt: String,
    pub correct_answer: u32,
    pub choices: Vec<u32>,
    pub tag: QuestionTag,
}

/// Pregunta del pre-test (respuesta escrita, no de opción múltiple).
#[derive(Clone, Debug, PartialEq)]
pub struct PreTestQuestion {
    pub prompt: String,
    pub correct_answer: u32,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum PreTestSection {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl PreTestSection {
    pub const ORDER: [PreTestSection; 4] = [
        PreTestSection::Addition,
        PreTestSection::Subtraction,
        PreTestSection::Multiplication,
        PreTestSection::Division,
    ];

    pub fn key(self) -> &'static str {
        match self {
            PreTestSection::Addition => "addition",
            PreTestSection::Subtraction => "subtraction",
            PreTestSection::Multiplication => "multiplication",
            PreTestSection::Division => "division",
        }
    }

    pub fn nombre(self) -> &'static str {
        match self {
            PreTestSection::Addition => "Sumas",
            PreTestSection::Subtraction => "Restas",
            PreTestSection::Multiplication => "Multiplicaciones",
            PreTestSection::Division => "Divisiones",
        }
    }
}

/// Temas visuales que el niño elige tras el pre-test.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Theme {
    Underwater,
    Candyland,
    Animals,
    Farm,
    Fairytales,
    Dinosaurs,
}

impl Theme {
    pub const ALL: [Theme; 6] = [
        Theme::Underwater,
        Theme::Candyland,
        Theme::Animals,
        Theme::Farm,
        Theme::Fairytales,
        Theme::Dinosaurs,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Theme::Underwater => "underwater",
            Theme::Candyland => "candyland",
            Theme::Animals => "animals",
            Theme::Farm => "farm",
            Theme::Fairytales => "fairytales",
            Theme::Dinosaurs => "dinosaurs",
        }
    }

    pub fn from_key(s: &str) -> Option<Theme> {
        Theme::ALL.into_iter().find(|t| t.key() == s)
    }

    pub fn nombre(self) -> &'static str {
        match self {
            Theme::Underwater => "Bajo el mar",
            Theme::Candyland => "Mundo de dulces",
            Theme::Animals => "Animales",
            Theme::Farm => "La granja",
            Theme::Fairytales => "Cuentos de hadas",
            Theme::Dinosaurs => "Dinosaurios",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Theme::Underwater => "🐠",
            Theme::Candyland => "🍭",
            Theme::Animals => "🦁",
            Theme::Farm => "🐮",
            Theme::Fairytales => "🦄",
            Theme::Dinosaurs => "🦖",
        }
    }

    /// Emoji del nivel (1..=6) dentro de este tema.
    pub fn emoji_nivel(self, level: u8) -> &'static str {
        let idx = (level.clamp(1, 6) - 1) as usize;
        match self {
            Theme::Underwater => ["🐠", "🐬", "🐳", "🦈", "🐙", "🦀"][idx],
            Theme::Candyland => ["🍬", "🍭", "🍫", "🍩", "🍪", "🧁"][idx],
            Theme::Animals => ["🐶", "🐱", "🦁", "🐯", "🐵", "🐸"][idx],
            Theme::Farm => ["🐮", "🐷", "🐔", "🐴", "🐑", "🦆"][idx],
            Theme::Fairytales => ["🧚", "🦄", "🐉", "👸", "🧙", "🧞"][idx],
            Theme::Dinosaurs => ["🦕", "🦖", "🐊", "🐢", "🦎", "🐍"][idx],
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Screen {
    NameForm,
    PreTest,
    ThemePicker,
    LevelPicker,
    BeltPicker,
    DegreePicker,
    Learning,
    Quiz,
    Results,
    WayToGo,
}

impl Default for Screen {
    fn default() -> Self {
        Screen::NameForm
    }
}

/// Opciones de juego persistidas junto al progreso.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GameConfig {
    /// Si es `true`, desbloquear el siguiente nivel exige completar también
    /// los 7 grados de cinturón negro, no solo los 6 cinturones de color.
    pub require_black_for_next_level: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            require_black_for_next_level: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_parsea_colores_y_grados() {
        assert_eq!(BeltSelector::parse("red"), Some(BeltSelector::Color(Belt::Red)));
        assert_eq!(BeltSelector::parse("black-3"), Some(BeltSelector::Black(3)));
        assert_eq!(BeltSelector::parse("black-0"), None);
        assert_eq!(BeltSelector::parse("black-8"), None);
        assert_eq!(BeltSelector::parse("violeta"), None);
    }

    #[test]
    fn selector_roundtrip_por_display() {
        for b in Belt::ORDER {
            let sel = BeltSelector::Color(b);
            assert_eq!(BeltSelector::parse(&sel.to_string()), Some(sel));
        }
        for d in 1..=7u8 {
            let sel = BeltSelector::Black(d);
            assert_eq!(BeltSelector::parse(&sel.to_string()), Some(sel));
        }
    }

    #[test]
    fn max_questions_por_seleccion() {
        assert_eq!(BeltSelector::Color(Belt::White).max_questions(), 10);
        for d in 1..=6u8 {
            assert_eq!(BeltSelector::Black(d).max_questions(), 20);
        }
        assert_eq!(BeltSelector::Black(7).max_questions(), 30);
    }

    #[test]
    fn orden_de_cinturones() {
        assert_eq!(Belt::White.anterior(), None);
        assert_eq!(Belt::Brown.anterior(), Some(Belt::Red));
        assert_eq!(
            Belt::Blue.anteriores(),
            vec![Belt::White, Belt::Yellow, Belt::Green]
        );
    }
}
