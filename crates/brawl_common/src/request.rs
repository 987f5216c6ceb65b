//! The upgrade request: which levels to traverse and which gear to buy.
//!
//! Built incrementally by the prompting flow, then read-only for the
//! aggregation step. The unlock thresholds and quantity maxima here are
//! the gating policy the prompting flow enforces; the aggregation
//! functions never re-check them.

/// Target level at which gadgets become purchasable.
pub const GADGET_UNLOCK_LEVEL: u8 = 7;

/// Target level at which gears become purchasable.
pub const GEAR_UNLOCK_LEVEL: u8 = 8;

/// Target level at which star powers become purchasable.
pub const STARPOWER_UNLOCK_LEVEL: u8 = 9;

/// Only max-level brawlers can buy the hypercharge.
pub const HYPERCHARGE_LEVEL: u8 = 11;

pub const MAX_GADGETS: u8 = 2;
pub const MAX_NORMAL_GEARS: u8 = 6;
pub const MAX_EPIC_GEARS: u8 = 1;
pub const MAX_MYTHIC_GEARS: u8 = 1;
pub const MAX_STARPOWERS: u8 = 2;

/// One user's upgrade plan for a single brawler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeRequest {
    pub initial_level: u8,
    pub target_level: u8,

    pub gadget_amount: u8,
    pub normal_gear_amount: u8,
    pub epic_gear_amount: u8,
    pub mythic_gear_amount: u8,
    pub starpower_amount: u8,
    pub hypercharge: bool,
}

impl Default for UpgradeRequest {
    fn default() -> Self {
        Self {
            initial_level: crate::cost_table::MIN_LEVEL,
            target_level: crate::cost_table::MAX_LEVEL,
            gadget_amount: 0,
            normal_gear_amount: 0,
            epic_gear_amount: 0,
            mythic_gear_amount: 0,
            starpower_amount: 0,
            hypercharge: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request_buys_nothing() {
        let request = UpgradeRequest::default();
        assert_eq!(request.initial_level, 1);
        assert_eq!(request.target_level, 11);
        assert_eq!(request.gadget_amount, 0);
        assert_eq!(request.starpower_amount, 0);
        assert!(!request.hypercharge);
    }
}
