//! The signal vocabulary and the latest-value snapshot.
//!
//! A signal is one named integer of game state. The host delivers raw varbit
//! and varp change notifications for everything; `SignalId` names the eight
//! values this controller cares about and the `from_*` constructors drop the
//! rest at the boundary. `SignalSnapshot` holds the latest observed value for
//! each signal and is only ever mutated by the service loop.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::game_ids;

/// One of the game-state values relevant to region detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalId {
    /// Chambers of Xeric raid membership flag.
    RaidFlag,
    /// Chambers of Xeric party id (-1 sentinel when absent).
    RaidParty,
    /// Chambers of Xeric encounter progression state.
    RaidState,
    /// Theatre of Blood participation state.
    TheatreOfBlood,
    /// Generic "inside a raid-style encounter" flag.
    EncounterFlag,
    /// Tombs of Amascut party membership flag.
    TombsParty,
    /// Inferno presence flag.
    Inferno,
    /// Hallowed Sepulchre floor number.
    Sepulchre,
}

impl SignalId {
    /// Map a raw varbit change onto the signal set. `None` means the varbit
    /// is irrelevant to region detection and the notification can be dropped.
    pub fn from_varbit(varbit_id: i32) -> Option<SignalId> {
        match varbit_id {
            game_ids::VARBIT_IN_RAID => Some(SignalId::RaidFlag),
            game_ids::VARBIT_RAID_STATE => Some(SignalId::RaidState),
            game_ids::VARBIT_THEATRE_OF_BLOOD => Some(SignalId::TheatreOfBlood),
            game_ids::VARBIT_TOMBS_PARTY => Some(SignalId::TombsParty),
            game_ids::VARBIT_INFERNO => Some(SignalId::Inferno),
            game_ids::VARBIT_SEPULCHRE => Some(SignalId::Sepulchre),
            _ => None,
        }
    }

    /// Map a raw varp change onto the signal set.
    pub fn from_varp(varp_id: i32) -> Option<SignalId> {
        match varp_id {
            game_ids::VARP_RAID_PARTY => Some(SignalId::RaidParty),
            game_ids::VARP_IN_ENCOUNTER => Some(SignalId::EncounterFlag),
            _ => None,
        }
    }
}

/// Immutable-from-the-outside view of the latest signal values.
///
/// Signals that have never been observed read as 0, matching what the host
/// reports for uninitialized state.
#[derive(Debug, Clone, Default)]
pub struct SignalSnapshot {
    values: HashMap<SignalId, i32>,
}

impl SignalSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest value for a signal, 0 if never observed.
    pub fn get(&self, id: SignalId) -> i32 {
        self.values.get(&id).copied().unwrap_or(0)
    }

    /// Record a new value from a change notification.
    pub fn record(&mut self, id: SignalId, value: i32) {
        self.values.insert(id, value);
    }
}
