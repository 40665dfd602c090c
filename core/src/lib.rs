pub mod arbiter;
pub mod detector;
pub mod events;
pub mod game_ids;
pub mod guard;
pub mod service;
pub mod signals;
pub mod stage;

// Re-exports for convenience
pub use arbiter::{Decision, DetailEffector, ModeArbiter, ModeBelief};
pub use events::Notification;
pub use guard::ConflictGuard;
pub use service::{DetailService, ServiceError, ServiceHandle};
pub use signals::{SignalId, SignalSnapshot};
pub use stage::GameStage;
