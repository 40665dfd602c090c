//! Conflict guard: tracks the competing external controller.
//!
//! A separate, uncoordinated plugin can write the same low detail flag. While
//! that controller claims authority the arbiter must not touch the flag at
//! all, or the two writers silently overwrite each other. The guard keeps the
//! latest observation of the controller's state and reduces it to a single
//! ownership predicate.

/// Latest observation of the external controller.
///
/// Two inputs, refreshed by their own notifications: whether the controller
/// plugin is loaded at all, and whether its low detail setting is on. It only
/// owns the flag when both hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConflictGuard {
    controller_present: bool,
    controller_enabled: bool,
}

impl Default for ConflictGuard {
    fn default() -> Self {
        // Assume the competing plugin is installed until a presence
        // notification says otherwise; it still needs to report enabled
        // before it owns anything.
        Self {
            controller_present: true,
            controller_enabled: false,
        }
    }
}

impl ConflictGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the external controller currently claims the shared flag.
    pub fn owns_flag(&self) -> bool {
        self.controller_present && self.controller_enabled
    }

    /// Record the controller plugin being loaded or unloaded.
    pub fn set_controller_present(&mut self, present: bool) {
        self.controller_present = present;
    }

    /// Record the controller's low detail setting being toggled.
    pub fn set_controller_enabled(&mut self, enabled: bool) {
        self.controller_enabled = enabled;
    }
}
