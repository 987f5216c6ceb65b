//! Brawl Common - Shared cost model for the brawler upgrade planner
//!
//! The pure core of the planner: resource table schema and loading, the
//! immutable cost table, the upgrade request model, and the aggregation
//! functions that turn both into totals. No terminal I/O lives here.

pub mod calc;
pub mod cost_table;
pub mod progress_indicator;
pub mod request;
pub mod resources;

pub use calc::{gear_cost, leveling_cost, RangeError};
pub use cost_table::{CostTable, GearUnitCosts, LevelCost, MAX_LEVEL, MIN_LEVEL};
pub use request::UpgradeRequest;
pub use resources::{ConfigError, UpgradeResources};
