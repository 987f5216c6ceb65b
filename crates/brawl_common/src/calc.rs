//! Cost aggregation over the cost table.
//!
//! Both functions are pure: same inputs, same totals, no side effects.
//! Gating policy (which gear a target level actually unlocks) lives in
//! the prompting flow; `gear_cost` trusts that quantities for locked
//! categories arrive as zero.

use crate::cost_table::{CostTable, LevelCost, MAX_LEVEL, MIN_LEVEL};
use crate::request::UpgradeRequest;

/// Invalid level range handed to [`leveling_cost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("level {0} is outside the valid range {MIN_LEVEL}-{MAX_LEVEL}")]
    OutOfBounds(u8),

    #[error("initial level {initial} is above target level {target}")]
    Inverted { initial: u8, target: u8 },
}

/// Total power points and gold to level up from `initial_level` to
/// `target_level`.
///
/// Sums the per-level advancement costs for every level strictly above
/// `initial_level` up to and including `target_level`. Equal levels are a
/// valid no-op and cost `(0, 0)`.
pub fn leveling_cost(
    table: &CostTable,
    initial_level: u8,
    target_level: u8,
) -> Result<LevelCost, RangeError> {
    for level in [initial_level, target_level] {
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            return Err(RangeError::OutOfBounds(level));
        }
    }
    if initial_level > target_level {
        return Err(RangeError::Inverted {
            initial: initial_level,
            target: target_level,
        });
    }

    let mut total = LevelCost::default();
    for level in (initial_level + 1)..=target_level {
        let step = table.cost_for_level(level);
        total.power_points += step.power_points;
        total.gold += step.gold;
    }
    Ok(total)
}

/// Total gold for the requested gear purchases.
///
/// Each category contributes quantity times unit cost; the hypercharge is
/// a flat all-or-nothing cost, never a multiplier.
pub fn gear_cost(table: &CostTable, request: &UpgradeRequest) -> u64 {
    let gears = table.gears();

    let mut total = gears.gadget * u64::from(request.gadget_amount)
        + gears.normal_gear * u64::from(request.normal_gear_amount)
        + gears.epic_gear * u64::from(request.epic_gear_amount)
        + gears.mythic_gear * u64::from(request.mythic_gear_amount)
        + gears.starpower * u64::from(request.starpower_amount);

    if request.hypercharge {
        total += gears.hypercharge;
    }
    total
}
