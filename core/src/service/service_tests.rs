//! Tests for the service loop.
//!
//! The sync tests drive `process` directly so queue order is explicit; the
//! async tests run the real loop end to end.

use autodetail_types::RegionConfig;

use super::DetailService;
use crate::arbiter::DetailEffector;
use crate::events::Notification;
use crate::game_ids;
use crate::signals::SignalId;
use crate::stage::GameStage;

#[derive(Debug, Default)]
struct RecordingEffector {
    calls: Vec<bool>,
}

impl DetailEffector for RecordingEffector {
    fn set_low_detail(&mut self, enabled: bool) {
        self.calls.push(enabled);
    }
}

fn logged_in_service() -> (DetailService<RecordingEffector>, super::ServiceHandle) {
    let (mut service, handle) = DetailService::new(RecordingEffector::default());
    service.process(Notification::GameStageChanged(GameStage::LoggedIn));
    (service, handle)
}

fn enter_chambers(service: &mut DetailService<RecordingEffector>) {
    service.process(Notification::SignalChanged {
        id: SignalId::RaidFlag,
        value: 1,
    });
    service.process(Notification::SignalChanged {
        id: SignalId::RaidParty,
        value: 5,
    });
}

#[test]
fn test_signal_changes_drive_one_activation() {
    let (mut service, _handle) = logged_in_service();
    enter_chambers(&mut service);
    assert_eq!(service.effector.calls, [true]);
}

#[test]
fn test_controller_release_is_deferred_to_end_of_round() {
    let (mut service, _handle) = logged_in_service();

    // Controller owns the flag; region signals arrive but nothing happens.
    service.process(Notification::ControllerEnabledChanged(true));
    enter_chambers(&mut service);
    assert!(service.effector.calls.is_empty());

    // Release: no immediate decision, a recheck is queued instead.
    service.process(Notification::ControllerEnabledChanged(false));
    assert!(service.effector.calls.is_empty());

    let queued = service.rx.try_recv().expect("recheck should be queued");
    assert_eq!(queued, Notification::Recheck);

    // The deferred recheck fires the corrective activation exactly once.
    service.process(queued);
    assert_eq!(service.effector.calls, [true]);

    // And it is idempotent if something triggers another decision.
    service.process(Notification::Recheck);
    assert_eq!(service.effector.calls, [true]);
}

#[test]
fn test_deferred_recheck_observes_latest_snapshot() {
    let (mut service, _handle) = logged_in_service();

    service.process(Notification::ControllerEnabledChanged(true));
    enter_chambers(&mut service);
    service.process(Notification::ControllerEnabledChanged(false));
    let recheck = service.rx.try_recv().expect("recheck should be queued");

    // A queued departure is processed before the recheck runs; the recheck
    // sees the player already gone and does nothing.
    service.process(Notification::SignalChanged {
        id: SignalId::RaidFlag,
        value: 0,
    });
    service.process(recheck);

    assert!(service.effector.calls.is_empty());
}

#[test]
fn test_controller_takeover_and_release_cycle() {
    let (mut service, _handle) = logged_in_service();

    enter_chambers(&mut service);
    assert_eq!(service.effector.calls, [true]);

    // Takeover: our belief stays put, and the departure that follows is not
    // acted on because the controller owns the flag now.
    service.process(Notification::ControllerEnabledChanged(true));
    service.process(Notification::SignalChanged {
        id: SignalId::RaidFlag,
        value: 0,
    });
    assert_eq!(service.effector.calls, [true]);

    // Release: the deferred recheck finally issues the deactivation.
    service.process(Notification::ControllerEnabledChanged(false));
    let recheck = service.rx.try_recv().expect("recheck should be queued");
    service.process(recheck);
    assert_eq!(service.effector.calls, [true, false]);
}

#[test]
fn test_controller_unload_counts_as_release() {
    let (mut service, _handle) = logged_in_service();

    service.process(Notification::ControllerEnabledChanged(true));
    enter_chambers(&mut service);

    // The competing plugin is unloaded entirely; same deferral path.
    service.process(Notification::ControllerPresenceChanged(false));
    assert!(service.effector.calls.is_empty());
    let recheck = service.rx.try_recv().expect("recheck should be queued");
    service.process(recheck);
    assert_eq!(service.effector.calls, [true]);
}

#[test]
fn test_config_change_drives_decision() {
    let (mut service, _handle) = logged_in_service();
    enter_chambers(&mut service);

    service.process(Notification::ConfigChanged(RegionConfig::all_disabled()));
    assert_eq!(service.effector.calls, [true, false]);
}

#[test]
fn test_handle_drops_irrelevant_raw_ids() {
    let (mut service, handle) = DetailService::new(RecordingEffector::default());

    handle.varbit_changed(9999, 1).unwrap();
    handle.varbit_changed(game_ids::VARBIT_INFERNO, 1).unwrap();
    handle.varp_changed(1, 7).unwrap();

    // Only the relevant change made it into the queue.
    let queued = service.rx.try_recv().unwrap();
    assert_eq!(
        queued,
        Notification::SignalChanged {
            id: SignalId::Inferno,
            value: 1
        }
    );
    assert!(service.rx.try_recv().is_err());
}

#[tokio::test]
async fn test_run_loop_end_to_end() {
    let (service, handle) = DetailService::new(RecordingEffector::default());
    let task = tokio::spawn(service.run());

    handle.game_stage_changed(GameStage::LoggedIn).unwrap();
    handle
        .signal_changed(SignalId::RaidFlag, 1)
        .and_then(|_| handle.signal_changed(SignalId::RaidParty, 5))
        .unwrap();
    handle.shutdown().unwrap();

    // One activation while inside, one restore on shutdown.
    let effector = task.await.unwrap();
    assert_eq!(effector.calls, [true, false]);

    // The loop is gone; further sends fail.
    assert!(handle.signal_changed(SignalId::RaidFlag, 0).is_err());
}

#[tokio::test]
async fn test_run_loop_startup_below_login_is_noop() {
    let (service, handle) = DetailService::new(RecordingEffector::default());
    let task = tokio::spawn(service.run());

    // Region signals before the login screen is ready: activation is gated.
    handle.signal_changed(SignalId::Inferno, 1).unwrap();
    handle.shutdown().unwrap();

    let effector = task.await.unwrap();
    assert!(effector.calls.is_empty());
}
