//! Region detection: which high-load area, if any, do the current signals
//! place the player in.
//!
//! Detection is a pure function of the signal snapshot and the user's
//! per-region config. Regions are checked in the fixed priority order of
//! [`Region::ALL`]; the first region that is both enabled and occupied wins.
//! A disabled region falls through to lower-priority regions even when its
//! predicate holds.

use autodetail_types::{Region, RegionConfig};

use crate::signals::{SignalId, SignalSnapshot};

/// Party id value meaning "not in a raid party". Ambiguous on its own: it is
/// also reported mid-reload and briefly when a solo raid starts.
const RAID_PARTY_NONE: i32 = -1;

/// Raid state value before the encounter has started. Opaque game-internal
/// constant; do not infer further meaning.
const RAID_STATE_NOT_STARTED: i32 = 0;

/// Raid state value while the instance is reloading. Opaque game-internal
/// constant; do not infer further meaning.
const RAID_STATE_RELOADING: i32 = 5;

/// Theatre of Blood state values 0 and 1 mean "outside" and "queued";
/// only values above this are inside the instance.
const THEATRE_SPECTATING_MAX: i32 = 1;

/// Return the highest-priority enabled region the player currently occupies.
pub fn detect(signals: &SignalSnapshot, config: &RegionConfig) -> Option<Region> {
    Region::ALL
        .into_iter()
        .find(|&region| config.enabled(region) && occupies(signals, region))
}

/// Whether the signals place the player inside the given region, ignoring
/// config. Deterministic, no side effects.
pub fn occupies(signals: &SignalSnapshot, region: Region) -> bool {
    match region {
        Region::ChambersOfXeric => inside_chambers_of_xeric(signals),
        Region::TheatreOfBlood => {
            signals.get(SignalId::TheatreOfBlood) > THEATRE_SPECTATING_MAX
        }
        Region::TombsOfAmascut => {
            // No single authoritative signal exists for this raid; encounter
            // flag plus its party flag is the best available proxy.
            signals.get(SignalId::EncounterFlag) != 0
                && signals.get(SignalId::TombsParty) != 0
        }
        Region::Inferno => signals.get(SignalId::Inferno) == 1,
        Region::HallowedSepulchre => signals.get(SignalId::Sepulchre) > 0,
    }
}

fn inside_chambers_of_xeric(signals: &SignalSnapshot) -> bool {
    if signals.get(SignalId::RaidFlag) != 1 {
        return false;
    }
    // The raid state signal is undefined outside a raid, so it is only read
    // once the raid flag confirms we are inside and the party id is the
    // ambiguous sentinel. A sentinel party id with the state at "not started"
    // or "reloading" means we are mid-reload, not in a live solo raid.
    signals.get(SignalId::RaidParty) != RAID_PARTY_NONE
        || !matches!(
            signals.get(SignalId::RaidState),
            RAID_STATE_NOT_STARTED | RAID_STATE_RELOADING
        )
}
