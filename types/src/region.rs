//! The closed set of high-load areas that can trigger low detail mode.

use serde::{Deserialize, Serialize};

/// A designated high-load area.
///
/// The variant order is the fixed detection priority: when signals place the
/// player in more than one region at once, the earliest variant wins. This
/// order is not user-configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    ChambersOfXeric,
    TheatreOfBlood,
    TombsOfAmascut,
    Inferno,
    HallowedSepulchre,
}

impl Region {
    /// All regions in detection priority order.
    pub const ALL: [Region; 5] = [
        Region::ChambersOfXeric,
        Region::TheatreOfBlood,
        Region::TombsOfAmascut,
        Region::Inferno,
        Region::HallowedSepulchre,
    ];

    /// Human-readable name for logging and display.
    pub fn name(&self) -> &'static str {
        match self {
            Region::ChambersOfXeric => "Chambers of Xeric",
            Region::TheatreOfBlood => "Theatre of Blood",
            Region::TombsOfAmascut => "Tombs of Amascut",
            Region::Inferno => "Inferno",
            Region::HallowedSepulchre => "Hallowed Sepulchre",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
