//! Mode arbitration: the sole writer of the low detail belief.
//!
//! The arbiter holds the process-wide belief about whether low detail mode is
//! active and decides, on every input change, whether to flip the shared
//! flag. Each decision issues at most one effector call, and only when the
//! desired value differs from the current belief.

use autodetail_types::{Region, RegionConfig};
use tracing::debug;

use crate::detector;
use crate::guard::ConflictGuard;
use crate::signals::SignalSnapshot;
use crate::stage::GameStage;


/// The single effector: flips the host's shared low detail flag.
///
/// The arbiter guarantees at most one call per decision and never issues
/// contradictory back-to-back calls within one decision cycle.
pub trait DetailEffector {
    fn set_low_detail(&mut self, enabled: bool);
}

/// The arbiter's own memory of what it last did to the flag.
///
/// Held in memory only: created at startup, reset at shutdown, never
/// persisted, never read by anything but the arbiter itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeBelief {
    /// Whether we believe low detail mode is currently active.
    pub low_detail_active: bool,
    /// The region that caused the last activation, if any.
    pub active_region: Option<Region>,
}

/// Outcome of one decision cycle, for tracing and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Desired state already matches belief, or activation is gated.
    Unchanged,
    /// The effector was told to enable low detail for this region.
    Activated(Region),
    /// The effector was told to disable low detail.
    Deactivated,
    /// The external controller owns the flag; no action taken.
    ControllerOwnsFlag,
}

/// The authoritative decision engine for the shared low detail flag.
#[derive(Debug, Default)]
pub struct ModeArbiter {
    belief: ModeBelief,
    guard: ConflictGuard,
}

impl ModeArbiter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn belief(&self) -> ModeBelief {
        self.belief
    }

    pub fn guard(&self) -> &ConflictGuard {
        &self.guard
    }

    pub fn guard_mut(&mut self) -> &mut ConflictGuard {
        &mut self.guard
    }

    /// Forget any held belief. Called once at startup before the first
    /// decision, so the arbiter never trusts state from a previous run.
    pub fn reset(&mut self) {
        self.belief = ModeBelief::default();
    }

    /// Run one decision cycle against the latest inputs.
    pub fn evaluate(
        &mut self,
        signals: &SignalSnapshot,
        config: &RegionConfig,
        stage: GameStage,
        effector: &mut dyn DetailEffector,
    ) -> Decision {
        if self.guard.owns_flag() {
            // The external controller owns the flag; leave belief untouched.
            return Decision::ControllerOwnsFlag;
        }

        let detected = detector::detect(signals, config);
        let desired = detected.is_some();

        if desired == self.belief.low_detail_active {
            return Decision::Unchanged;
        }

        // The host sizes textures once based on the memory mode at login
        // screen load; flipping earlier cannot be corrected for the rest of
        // the session. Gates activation only, never deactivation.
        if desired && !stage.login_ready() {
            return Decision::Unchanged;
        }

        effector.set_low_detail(desired);
        self.belief.low_detail_active = desired;

        match detected {
            Some(region) => {
                self.belief.active_region = Some(region);
                debug!(%region, "enabled low detail mode");
                Decision::Activated(region)
            }
            None => {
                self.belief.active_region = None;
                debug!("disabled low detail mode");
                Decision::Deactivated
            }
        }
    }

    /// Restore the shared flag to its default on shutdown.
    ///
    /// Only acts if this arbiter is the one holding the flag active and the
    /// external controller has not claimed it; other consumers then see the
    /// flag exactly as it was before this controller ran.
    pub fn shutdown(&mut self, effector: &mut dyn DetailEffector) {
        if self.belief.low_detail_active && !self.guard.owns_flag() {
            effector.set_low_detail(false);
            debug!("restored default detail mode on shutdown");
        }
        self.belief = ModeBelief::default();
    }
}
