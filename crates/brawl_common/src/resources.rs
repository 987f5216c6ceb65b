//! Upgrade resource table schema and loading.
//!
//! Mirrors the on-disk JSON document exactly. Every numeric field is kept
//! signed at this layer so that sign validation is an explicit step during
//! [`CostTable`](crate::cost_table::CostTable) construction instead of a
//! deserialization artifact.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Errors raised while loading or validating the resource table.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read resource table {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("resource table is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("negative cost for {field}: {value}")]
    NegativeCost { field: &'static str, value: i64 },
}

/// Cost of advancing to a single level: power points plus gold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RawLevelCost {
    pub power_points: i64,
    pub gold: i64,
}

/// Per-level advancement costs, levels 2 through 11.
///
/// Level 1 is the starting level and has no entry. Every field is required;
/// a document missing any level fails deserialization outright.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelCosts {
    pub level_2: RawLevelCost,
    pub level_3: RawLevelCost,
    pub level_4: RawLevelCost,
    pub level_5: RawLevelCost,
    pub level_6: RawLevelCost,
    pub level_7: RawLevelCost,
    pub level_8: RawLevelCost,
    pub level_9: RawLevelCost,
    pub level_10: RawLevelCost,
    pub level_11: RawLevelCost,
}

/// Unit gold costs for the five gear categories plus the hypercharge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GearCosts {
    pub gadget: i64,
    pub normal_gears: i64,
    pub epic_gears: i64,
    pub mythic_gears: i64,
    pub starpower: i64,
    pub hypercharge: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamblingCosts {
    pub power_points: i64,
    pub gold: i64,
}

/// Buffies section. Parsed and retained for forward compatibility; no
/// computation currently reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuffiesCosts {
    pub gambling: GamblingCosts,
    pub gems: i64,
}

/// The complete upgrade resource document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeResources {
    pub levels: LevelCosts,
    pub gears: GearCosts,
    pub buffies: BuffiesCosts,
}

impl UpgradeResources {
    /// Load and parse the resource table from `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let resources: UpgradeResources = serde_json::from_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded upgrade resource table");
        Ok(resources)
    }
}

/// Complete, well-formed resource document shared by tests across the crate.
#[cfg(test)]
pub(crate) const SAMPLE: &str = r#"{
        "levels": {
            "level_2": {"power_points": 20, "gold": 20},
            "level_3": {"power_points": 30, "gold": 35},
            "level_4": {"power_points": 50, "gold": 75},
            "level_5": {"power_points": 80, "gold": 140},
            "level_6": {"power_points": 130, "gold": 290},
            "level_7": {"power_points": 210, "gold": 480},
            "level_8": {"power_points": 340, "gold": 800},
            "level_9": {"power_points": 550, "gold": 1250},
            "level_10": {"power_points": 890, "gold": 1875},
            "level_11": {"power_points": 1440, "gold": 2800}
        },
        "gears": {
            "gadget": 1000,
            "normal_gears": 1000,
            "epic_gears": 1500,
            "mythic_gears": 2000,
            "starpower": 2000,
            "hypercharge": 5000
        },
        "buffies": {
            "gambling": {"power_points": 25, "gold": 18},
            "gems": 9
        }
    }"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_complete_document() {
        let resources: UpgradeResources = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(resources.levels.level_2.power_points, 20);
        assert_eq!(resources.gears.hypercharge, 5000);
        assert_eq!(resources.buffies.gems, 9);
    }

    #[test]
    fn missing_level_is_rejected() {
        let broken = SAMPLE.replace("\"level_5\"", "\"level_x\"");
        let result = serde_json::from_str::<UpgradeResources>(&broken);
        assert!(result.is_err());
    }

    #[test]
    fn non_integer_cost_is_rejected() {
        let broken = SAMPLE.replace("\"gadget\": 1000", "\"gadget\": \"many\"");
        let result = serde_json::from_str::<UpgradeResources>(&broken);
        assert!(result.is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = UpgradeResources::load(Path::new("/nonexistent/upgrade-resources.json"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let resources = UpgradeResources::load(file.path()).unwrap();
        assert_eq!(resources.levels.level_11.gold, 2800);
    }
}
