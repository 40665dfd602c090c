//! Host client lifecycle stages.

use serde::{Deserialize, Serialize};

/// Lifecycle stage of the host client, ordered by progression.
///
/// The discriminants are the host's own ordinals so raw lifecycle
/// notifications can be mapped without a translation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStage {
    Starting = 0,
    LoginScreen = 10,
    LoginScreenAuthenticator = 11,
    LoggingIn = 20,
    Loading = 25,
    LoggedIn = 30,
    ConnectionLost = 40,
    Hopping = 45,
}

impl GameStage {
    /// Map a raw lifecycle ordinal from the host.
    pub fn from_raw(raw: i32) -> Option<GameStage> {
        match raw {
            0 => Some(GameStage::Starting),
            10 => Some(GameStage::LoginScreen),
            11 => Some(GameStage::LoginScreenAuthenticator),
            20 => Some(GameStage::LoggingIn),
            25 => Some(GameStage::Loading),
            30 => Some(GameStage::LoggedIn),
            40 => Some(GameStage::ConnectionLost),
            45 => Some(GameStage::Hopping),
            _ => None,
        }
    }

    /// Whether the host has progressed at least to the login screen.
    ///
    /// The client sizes its textures once, based on the memory mode at the
    /// time the login screen loads. Activating low detail before that point
    /// locks in low-resolution textures for the whole session, so activation
    /// is gated on this milestone.
    pub fn login_ready(&self) -> bool {
        *self >= GameStage::LoginScreen
    }
}
