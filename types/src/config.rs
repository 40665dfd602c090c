//! Per-region user configuration.
//!
//! The controller never persists settings itself; the host's settings store
//! resolves them and pushes a fresh `RegionConfig` on every config change.
//! All regions are enabled by default, matching the shipped defaults.

use serde::{Deserialize, Serialize};

use crate::region::Region;

/// Resolved per-region enable flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionConfig {
    pub chambers_of_xeric: bool,
    pub theatre_of_blood: bool,
    pub tombs_of_amascut: bool,
    pub inferno: bool,
    pub hallowed_sepulchre: bool,
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            chambers_of_xeric: true,
            theatre_of_blood: true,
            tombs_of_amascut: true,
            inferno: true,
            hallowed_sepulchre: true,
        }
    }
}

impl RegionConfig {
    /// Whether low detail mode may activate for the given region.
    pub fn enabled(&self, region: Region) -> bool {
        match region {
            Region::ChambersOfXeric => self.chambers_of_xeric,
            Region::TheatreOfBlood => self.theatre_of_blood,
            Region::TombsOfAmascut => self.tombs_of_amascut,
            Region::Inferno => self.inferno,
            Region::HallowedSepulchre => self.hallowed_sepulchre,
        }
    }

    /// Config with every region disabled, used when the feature is off.
    pub fn all_disabled() -> Self {
        Self {
            chambers_of_xeric: false,
            theatre_of_blood: false,
            tombs_of_amascut: false,
            inferno: false,
            hallowed_sepulchre: false,
        }
    }

    /// Builder-style toggle, mainly for tests and host glue.
    pub fn with_enabled(mut self, region: Region, enabled: bool) -> Self {
        match region {
            Region::ChambersOfXeric => self.chambers_of_xeric = enabled,
            Region::TheatreOfBlood => self.theatre_of_blood = enabled,
            Region::TombsOfAmascut => self.tombs_of_amascut = enabled,
            Region::Inferno => self.inferno = enabled,
            Region::HallowedSepulchre => self.hallowed_sepulchre = enabled,
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_all_enabled() {
        let config = RegionConfig::default();
        for region in Region::ALL {
            assert!(config.enabled(region), "{region} should default to enabled");
        }
    }

    #[test]
    fn test_parse_partial_toml() {
        let toml = r#"
inferno = false
hallowed_sepulchre = false
"#;
        let config: RegionConfig = toml::from_str(toml).unwrap();
        assert!(config.enabled(Region::ChambersOfXeric));
        assert!(config.enabled(Region::TheatreOfBlood));
        assert!(config.enabled(Region::TombsOfAmascut));
        assert!(!config.enabled(Region::Inferno));
        assert!(!config.enabled(Region::HallowedSepulchre));
    }

    #[test]
    fn test_with_enabled_round_trip() {
        let config = RegionConfig::default().with_enabled(Region::TheatreOfBlood, false);
        assert!(!config.enabled(Region::TheatreOfBlood));
        assert!(config.enabled(Region::ChambersOfXeric));
    }
}
