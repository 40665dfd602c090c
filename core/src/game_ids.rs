//! Raw ids of the game-state values the controller watches.
//!
//! Two id spaces exist in the host: varbits (packed sub-values) and varps
//! (whole player variables). The controller only ever sees these through
//! change notifications; `SignalId` maps them onto the closed signal set.

/// Varbit: nonzero while inside the Chambers of Xeric raid.
pub const VARBIT_IN_RAID: i32 = 5432;

/// Varbit: Chambers of Xeric encounter progression state.
pub const VARBIT_RAID_STATE: i32 = 5425;

/// Varp: Chambers of Xeric party id, -1 when not in a party.
pub const VARP_RAID_PARTY: i32 = 1427;

/// Varbit: Theatre of Blood participation state (0/1 are outside/queued).
pub const VARBIT_THEATRE_OF_BLOOD: i32 = 6440;

/// Varp: nonzero while inside any raid-style encounter.
pub const VARP_IN_ENCOUNTER: i32 = 2926;

/// Varbit: nonzero while in a Tombs of Amascut party.
pub const VARBIT_TOMBS_PARTY: i32 = 14345;

/// Varbit: 1 exactly while inside the Inferno.
pub const VARBIT_INFERNO: i32 = 11878;

/// Varbit: floor number inside the Hallowed Sepulchre, 0 outside.
pub const VARBIT_SEPULCHRE: i32 = 10392;
