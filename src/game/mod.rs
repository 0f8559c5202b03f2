//! Game sessions.
//!
//! - `MemoryGame`: the controller that owns one session
//! - `Progress`: matched pairs and attempts
//! - `RevertTimer`: the cancellable revert of a mismatched pair
//! - `GameEvent`: what the presentation layer is told

mod controller;
mod events;
mod progress;
mod timer;

pub use controller::{ClickOutcome, MemoryGame};
pub use events::GameEvent;
pub use progress::Progress;
pub use timer::{RevertTicket, RevertTimer};
