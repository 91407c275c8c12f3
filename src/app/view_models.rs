use super::*;
use crate::model::Belt;

impl MathApp {
    pub fn level_infos(&self) -> Vec<LevelInfo> {
        let theme = self.resolve_theme();
        (1..=6u8)
            .map(|level| LevelInfo {
                level,
                unlocked: self.is_level_unlocked(level),
                completed_belts: self.store.count_completed_belts(level),
                emoji: theme.emoji_nivel(level),
            })
            .collect()
    }

    pub fn belt_infos(&self) -> Option<Vec<BeltInfo>> {
        let level = self.selected_level?;
        Some(
            Belt::ORDER
                .iter()
                .map(|belt| {
                    let progress = self.store.belt_progress(level, *belt).unwrap_or_default();
                    BeltInfo {
                        belt: *belt,
                        unlocked: self.is_belt_unlocked(level, *belt),
                        completed: progress.completed,
                        perfect: progress.perfect,
                    }
                })
                .collect(),
        )
    }

    pub fn degree_infos(&self) -> Option<Vec<DegreeInfo>> {
        let level = self.selected_level?;
        Some(
            (1..=7u8)
                .map(|degree| DegreeInfo {
                    degree,
                    unlocked: self.is_degree_unlocked(level, degree),
                    completed: self.store.is_degree_completed(level, degree),
                })
                .collect(),
        )
    }
}
