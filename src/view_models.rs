// src/view_models.rs

use crate::model::Belt;

#[derive(Clone, Debug)]
pub struct LevelInfo {
    pub level: u8, // número "humano" (1..=6)
    pub unlocked: bool,
    pub completed_belts: usize,
    pub emoji: &'static str,
}

#[derive(Clone, Debug)]
pub struct BeltInfo {
    pub belt: Belt,
    pub unlocked: bool,
    pub completed: bool,
    pub perfect: bool,
}

#[derive(Clone, Debug)]
pub struct DegreeInfo {
    pub degree: u8,
    pub unlocked: bool,
    pub completed: bool,
}

impl LevelInfo {
    /// Estrellas por cinturón completado, huecas para los que faltan.
    pub fn stars(&self) -> String {
        let done = "⭐".repeat(self.completed_belts);
        let left = "☆".repeat(Belt::ORDER.len().saturating_sub(self.completed_belts));
        format!("{done}{left}")
    }

    pub fn label(&self) -> String {
        if self.unlocked {
            format!("{} Nivel {} 🔓", self.emoji, self.level)
        } else {
            format!("{} Nivel {} 🔒", self.emoji, self.level)
        }
    }
}

impl BeltInfo {
    pub fn label(&self) -> String {
        let nombre = self.belt.nombre();
        if self.completed {
            format!("Cinturón {nombre} ⭐")
        } else if self.unlocked {
            format!("Cinturón {nombre} 🔓")
        } else {
            format!("Cinturón {nombre} 🔒")
        }
    }
}

impl DegreeInfo {
    pub fn label(&self) -> String {
        let preguntas = if self.degree == 7 { 30 } else { 20 };
        if self.completed {
            format!("Grado {} ✅ ({preguntas} preguntas)", self.degree)
        } else if self.unlocked {
            format!("Grado {} 🔓 ({preguntas} preguntas)", self.degree)
        } else {
            format!("Grado {} 🔒 ({preguntas} preguntas)", self.degree)
        }
    }
}
