//! Notifications delivered to the single-writer service loop.

use autodetail_types::RegionConfig;
use serde::{Deserialize, Serialize};

use crate::signals::SignalId;
use crate::stage::GameStage;

/// Everything producers can hand to the service loop.
///
/// Producers run in arbitrary host contexts; the loop is the only place any
/// of these are acted on, and each is acted on exactly once, in FIFO order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Notification {
    /// A relevant game signal changed value.
    SignalChanged { id: SignalId, value: i32 },
    /// The user's per-region settings were re-resolved.
    ConfigChanged(RegionConfig),
    /// The host progressed to a new lifecycle stage.
    GameStageChanged(GameStage),
    /// The external controller's low detail setting was toggled.
    ControllerEnabledChanged(bool),
    /// The external controller plugin was loaded or unloaded.
    ControllerPresenceChanged(bool),
    /// Corrective re-evaluation, scheduled by the loop behind everything
    /// already queued in the current round.
    Recheck,
    /// Stop the loop, restoring the shared flag first if we hold it.
    Shutdown,
}
