//! The single-writer service loop.
//!
//! The shared low detail flag has no compare-and-set of its own, so every
//! read-decide-write cycle must be serialized onto one logical context. This
//! loop is that context: it owns the signal snapshot, the resolved config,
//! the lifecycle stage and the arbiter, and it is the only code that calls
//! the effector. Producers deliver notifications through a cloneable
//! [`ServiceHandle`] with non-blocking sends.
//!
//! The channel being FIFO is what makes the end-of-round deferral work: when
//! the external controller releases the flag, its own effector write for that
//! same transition may still be in flight in the current round, so instead of
//! deciding immediately the loop enqueues a `Recheck` to itself, which lands
//! behind every notification already queued.

use autodetail_types::RegionConfig;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::debug;

use crate::arbiter::{DetailEffector, ModeArbiter};
use crate::events::Notification;
use crate::guard::ConflictGuard;
use crate::signals::{SignalId, SignalSnapshot};
use crate::stage::GameStage;

#[cfg(test)]
mod service_tests;

/// Errors on the producer side of the service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The service loop has stopped and its receiver is gone.
    #[error("detail service is no longer running")]
    ChannelClosed,
}

/// Cloneable producer handle for delivering notifications to the loop.
///
/// Sends never block; notifications from any context are queued and acted on
/// by the service task in arrival order.
#[derive(Debug, Clone)]
pub struct ServiceHandle {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ServiceHandle {
    pub fn notify(&self, notification: Notification) -> Result<(), ServiceError> {
        self.tx
            .send(notification)
            .map_err(|_| ServiceError::ChannelClosed)
    }

    /// A relevant signal changed value.
    pub fn signal_changed(&self, id: SignalId, value: i32) -> Result<(), ServiceError> {
        self.notify(Notification::SignalChanged { id, value })
    }

    /// Raw varbit change from the host; irrelevant ids are dropped here.
    pub fn varbit_changed(&self, varbit_id: i32, value: i32) -> Result<(), ServiceError> {
        match SignalId::from_varbit(varbit_id) {
            Some(id) => self.signal_changed(id, value),
            None => Ok(()),
        }
    }

    /// Raw varp change from the host; irrelevant ids are dropped here.
    pub fn varp_changed(&self, varp_id: i32, value: i32) -> Result<(), ServiceError> {
        match SignalId::from_varp(varp_id) {
            Some(id) => self.signal_changed(id, value),
            None => Ok(()),
        }
    }

    pub fn config_changed(&self, config: RegionConfig) -> Result<(), ServiceError> {
        self.notify(Notification::ConfigChanged(config))
    }

    pub fn game_stage_changed(&self, stage: GameStage) -> Result<(), ServiceError> {
        self.notify(Notification::GameStageChanged(stage))
    }

    pub fn controller_enabled_changed(&self, enabled: bool) -> Result<(), ServiceError> {
        self.notify(Notification::ControllerEnabledChanged(enabled))
    }

    pub fn controller_presence_changed(&self, present: bool) -> Result<(), ServiceError> {
        self.notify(Notification::ControllerPresenceChanged(present))
    }

    pub fn shutdown(&self) -> Result<(), ServiceError> {
        self.notify(Notification::Shutdown)
    }
}

/// The service loop: owns all mutable state and the effector.
pub struct DetailService<E: DetailEffector> {
    effector: E,
    arbiter: ModeArbiter,
    signals: SignalSnapshot,
    config: RegionConfig,
    stage: GameStage,
    rx: mpsc::UnboundedReceiver<Notification>,
    /// Sender kept for self-scheduled rechecks.
    tx: mpsc::UnboundedSender<Notification>,
}

impl<E: DetailEffector> DetailService<E> {
    /// Create the service and its producer handle.
    pub fn new(effector: E) -> (Self, ServiceHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = ServiceHandle { tx: tx.clone() };
        let service = Self {
            effector,
            arbiter: ModeArbiter::new(),
            signals: SignalSnapshot::new(),
            config: RegionConfig::default(),
            stage: GameStage::Starting,
            rx,
            tx,
        };
        (service, handle)
    }

    /// Run until shutdown or until every handle is dropped.
    ///
    /// Consumes the service and returns the effector so the caller can
    /// reclaim it. Each notification is processed to completion before the
    /// next is received; decisions never interleave.
    pub async fn run(mut self) -> E {
        // Fresh belief on startup. The initial decision is normally a no-op
        // because the host starts below the login screen.
        self.arbiter.reset();
        self.decide();

        while let Some(notification) = self.rx.recv().await {
            if !self.process(notification) {
                break;
            }
        }
        self.effector
    }

    /// Handle one notification. Returns false when the loop should stop.
    fn process(&mut self, notification: Notification) -> bool {
        match notification {
            Notification::SignalChanged { id, value } => {
                self.signals.record(id, value);
                self.decide();
            }
            Notification::ConfigChanged(config) => {
                self.config = config;
                self.decide();
            }
            Notification::GameStageChanged(stage) => {
                self.stage = stage;
                self.decide();
            }
            Notification::ControllerEnabledChanged(enabled) => {
                self.controller_update(|guard| guard.set_controller_enabled(enabled));
            }
            Notification::ControllerPresenceChanged(present) => {
                self.controller_update(|guard| guard.set_controller_present(present));
            }
            Notification::Recheck => {
                self.decide();
            }
            Notification::Shutdown => {
                self.arbiter.shutdown(&mut self.effector);
                return false;
            }
        }
        true
    }

    /// Apply a conflict guard update.
    ///
    /// On an ownership release (owned -> not owned) the corrective decision
    /// is deferred: the controller's own write for that transition may still
    /// be queued in this round, and deciding now would race it. The recheck
    /// observes whatever the caches hold when it finally runs.
    fn controller_update(&mut self, update: impl FnOnce(&mut ConflictGuard)) {
        let owned_before = self.arbiter.guard().owns_flag();
        update(self.arbiter.guard_mut());

        if owned_before && !self.arbiter.guard().owns_flag() {
            debug!("external controller released the flag, scheduling recheck");
            // Cannot fail: we hold the receiver.
            let _ = self.tx.send(Notification::Recheck);
        } else {
            self.decide();
        }
    }

    /// One decision cycle against the current caches. Runs synchronously to
    /// completion; the arbiter issues at most one effector call.
    fn decide(&mut self) {
        self.arbiter
            .evaluate(&self.signals, &self.config, self.stage, &mut self.effector);
    }
}
