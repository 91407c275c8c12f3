// src/data.rs

use crate::model::{Belt, FactPair};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Parejas introducidas en cada cinturón de un nivel.
#[derive(Deserialize, Debug, Clone)]
pub struct LevelFacts {
    pub white: [FactPair; 2],
    pub yellow: [FactPair; 2],
    pub green: [FactPair; 2],
    pub blue: [FactPair; 2],
    pub red: [FactPair; 2],
    pub brown: [FactPair; 2],
}

impl LevelFacts {
    pub fn get(&self, belt: Belt) -> [FactPair; 2] {
        match belt {
            Belt::White => self.white,
            Belt::Yellow => self.yellow,
            Belt::Green => self.green,
            Belt::Blue => self.blue,
            Belt::Red => self.red,
            Belt::Brown => self.brown,
        }
    }
}

/// Tabla estática de sumas: material nuevo por (nivel, cinturón) y reserva de
/// repaso por nivel.
#[derive(Deserialize, Debug, Clone)]
pub struct FactTable {
    facts: BTreeMap<u8, LevelFacts>,
    review_pools: BTreeMap<u8, Vec<FactPair>>,
}

impl FactTable {
    /// Parejas del (nivel, cinturón) pedido. El nivel se recorta a 1..=6 y si
    /// aun así falta la entrada, se degrada al blanco del primer nivel.
    pub fn facts_for(&self, level: u8, belt: Belt) -> [FactPair; 2] {
        let l = level.clamp(1, 6);
        if let Some(lf) = self.facts.get(&l) {
            return lf.get(belt);
        }
        self.facts
            .values()
            .next()
            .map(|lf| lf.white)
            .unwrap_or([FactPair(0, 0), FactPair(0, 0)])
    }

    /// Reserva de repaso del nivel, para cinturones sin cinturones anteriores.
    pub fn review_pool(&self, level: u8) -> Vec<FactPair> {
        let l = level.clamp(1, 6);
        self.review_pools
            .get(&l)
            .cloned()
            .unwrap_or_else(|| vec![FactPair(0, 1), FactPair(1, 0)])
    }
}

/// Carga la tabla de sumas desde el YAML embebido
pub fn read_fact_table_embedded() -> FactTable {
    let file_content = include_str!("data/fact_pairs.yaml");
    serde_yaml::from_str(file_content).expect("No se pudo parsear la tabla de sumas YAML")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabla_embebida_cubre_los_seis_niveles() {
        let table = read_fact_table_embedded();
        for level in 1..=6u8 {
            for belt in Belt::ORDER {
                let facts = table.facts_for(level, belt);
                assert_eq!(facts.len(), 2);
            }
            assert_eq!(table.review_pool(level).len(), 6);
        }
    }

    #[test]
    fn nivel_fuera_de_rango_se_recorta() {
        let table = read_fact_table_embedded();
        assert_eq!(table.facts_for(0, Belt::White), table.facts_for(1, Belt::White));
        assert_eq!(table.facts_for(99, Belt::Brown), table.facts_for(6, Belt::Brown));
    }

    #[test]
    fn nivel_uno_blanco_es_cero_mas_cero() {
        let table = read_fact_table_embedded();
        assert_eq!(
            table.facts_for(1, Belt::White),
            [FactPair(0, 0), FactPair(0, 0)]
        );
    }
}
