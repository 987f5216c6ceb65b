//! Immutable cost table built from a validated resource document.
//!
//! Construction is the single place where sign validation happens; after
//! that the table is read-only and every lookup is infallible for levels
//! inside the documented range.

use crate::resources::{ConfigError, RawLevelCost, UpgradeResources};

/// Lowest brawler level. Level 1 costs nothing to reach.
pub const MIN_LEVEL: u8 = 1;

/// Highest brawler level.
pub const MAX_LEVEL: u8 = 11;

/// An additive (power points, gold) pair. `Default` is the zero cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LevelCost {
    pub power_points: u64,
    pub gold: u64,
}

/// Validated unit gold costs for gear purchases.
#[derive(Debug, Clone)]
pub struct GearUnitCosts {
    pub gadget: u64,
    pub normal_gear: u64,
    pub epic_gear: u64,
    pub mythic_gear: u64,
    pub starpower: u64,
    pub hypercharge: u64,
}

/// Per-level and per-gear costs, frozen after construction.
#[derive(Debug, Clone)]
pub struct CostTable {
    // Index 0 holds the cost of advancing to level 2.
    level_costs: [LevelCost; (MAX_LEVEL - MIN_LEVEL) as usize],
    gears: GearUnitCosts,
}

impl CostTable {
    /// Load the resource document at `path` and build the table from it.
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let resources = UpgradeResources::load(path)?;
        Self::from_resources(&resources)
    }

    /// Validate a parsed resource document and freeze it into a table.
    ///
    /// Rejects any negative cost, naming the offending field. The
    /// `buffies` section is deliberately not inspected.
    pub fn from_resources(resources: &UpgradeResources) -> Result<Self, ConfigError> {
        let levels = &resources.levels;
        let entries: [(&'static str, &'static str, &RawLevelCost); 10] = [
            ("levels.level_2.power_points", "levels.level_2.gold", &levels.level_2),
            ("levels.level_3.power_points", "levels.level_3.gold", &levels.level_3),
            ("levels.level_4.power_points", "levels.level_4.gold", &levels.level_4),
            ("levels.level_5.power_points", "levels.level_5.gold", &levels.level_5),
            ("levels.level_6.power_points", "levels.level_6.gold", &levels.level_6),
            ("levels.level_7.power_points", "levels.level_7.gold", &levels.level_7),
            ("levels.level_8.power_points", "levels.level_8.gold", &levels.level_8),
            ("levels.level_9.power_points", "levels.level_9.gold", &levels.level_9),
            ("levels.level_10.power_points", "levels.level_10.gold", &levels.level_10),
            ("levels.level_11.power_points", "levels.level_11.gold", &levels.level_11),
        ];

        let mut level_costs = [LevelCost::default(); (MAX_LEVEL - MIN_LEVEL) as usize];
        for (slot, (pp_field, gold_field, raw)) in level_costs.iter_mut().zip(entries) {
            *slot = LevelCost {
                power_points: non_negative(pp_field, raw.power_points)?,
                gold: non_negative(gold_field, raw.gold)?,
            };
        }

        let gears = &resources.gears;
        let gears = GearUnitCosts {
            gadget: non_negative("gears.gadget", gears.gadget)?,
            normal_gear: non_negative("gears.normal_gears", gears.normal_gears)?,
            epic_gear: non_negative("gears.epic_gears", gears.epic_gears)?,
            mythic_gear: non_negative("gears.mythic_gears", gears.mythic_gears)?,
            starpower: non_negative("gears.starpower", gears.starpower)?,
            hypercharge: non_negative("gears.hypercharge", gears.hypercharge)?,
        };

        Ok(Self { level_costs, gears })
    }

    /// Cost of advancing to `level` from the level below it.
    ///
    /// Contract: `level` must be in `2..=11`. Callers validate ranges
    /// before lookup; an out-of-range level here is a bug, not bad input.
    pub fn cost_for_level(&self, level: u8) -> LevelCost {
        assert!(
            level > MIN_LEVEL && level <= MAX_LEVEL,
            "no cost entry for level {level}"
        );
        self.level_costs[(level - 2) as usize]
    }

    /// Unit gold costs for gear purchases.
    pub fn gears(&self) -> &GearUnitCosts {
        &self.gears
    }
}

fn non_negative(field: &'static str, value: i64) -> Result<u64, ConfigError> {
    u64::try_from(value).map_err(|_| ConfigError::NegativeCost { field, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::SAMPLE;

    fn sample_table() -> CostTable {
        let resources: UpgradeResources = serde_json::from_str(SAMPLE).unwrap();
        CostTable::from_resources(&resources).unwrap()
    }

    #[test]
    fn lookup_covers_every_level() {
        let table = sample_table();
        assert_eq!(
            table.cost_for_level(2),
            LevelCost {
                power_points: 20,
                gold: 20
            }
        );
        assert_eq!(
            table.cost_for_level(11),
            LevelCost {
                power_points: 1440,
                gold: 2800
            }
        );
    }

    #[test]
    #[should_panic(expected = "no cost entry")]
    fn lookup_below_range_panics() {
        sample_table().cost_for_level(1);
    }

    #[test]
    #[should_panic(expected = "no cost entry")]
    fn lookup_above_range_panics() {
        sample_table().cost_for_level(12);
    }

    #[test]
    fn negative_level_cost_is_rejected() {
        let doc = SAMPLE.replace("\"gold\": 140", "\"gold\": -140");
        let resources: UpgradeResources = serde_json::from_str(&doc).unwrap();
        let err = CostTable::from_resources(&resources).unwrap_err();
        match err {
            ConfigError::NegativeCost { field, value } => {
                assert_eq!(field, "levels.level_5.gold");
                assert_eq!(value, -140);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn negative_gear_cost_is_rejected() {
        let doc = SAMPLE.replace("\"starpower\": 2000", "\"starpower\": -1");
        let resources: UpgradeResources = serde_json::from_str(&doc).unwrap();
        let err = CostTable::from_resources(&resources).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NegativeCost {
                field: "gears.starpower",
                value: -1
            }
        ));
    }

    #[test]
    fn negative_buffies_are_tolerated() {
        // Reserved data: never validated, never read.
        let doc = SAMPLE.replace("\"gems\": 9", "\"gems\": -9");
        let resources: UpgradeResources = serde_json::from_str(&doc).unwrap();
        assert!(CostTable::from_resources(&resources).is_ok());
    }
}
