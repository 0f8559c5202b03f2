//! # memory-match
//!
//! Engine for a memory-matching ("concentration") card game: cards are
//! dealt face down in pairs and the player turns them over two at a time
//! until every pair is found.
//!
//! ## Design Principles
//!
//! 1. **No Presentation in the Core**: Cards are addressed by `CardHandle`.
//!    The controller emits `GameEvent`s; a front end maps handles to
//!    whatever it draws.
//!
//! 2. **Sessions Are Values**: All state lives in a `MemoryGame`. There is
//!    nothing global, so sessions can run side by side and tests need no
//!    reset.
//!
//! 3. **Time Is an Input**: The controller never sleeps. Callers pass the
//!    current `Instant`, and the revert of a mismatched pair is a
//!    cancellable ticket rather than a detached callback.
//!
//! ## Modules
//!
//! - `core`: Card handles, RNG, board size and configuration
//! - `cards`: Cards and deck generation
//! - `rules`: Turn state machine and pair evaluation
//! - `game`: The session controller, progress, revert timer, events
//! - `error`: Error types

pub mod core;
pub mod cards;
pub mod rules;
pub mod game;
pub mod error;

// Re-export commonly used types
pub use crate::core::{BoardSize, CardHandle, GameConfig, GameRng, GameRngState};

pub use crate::cards::{Card, CardFace, Deck};

pub use crate::rules::{ClickDecision, IgnoreReason, MatchOutcome, MatchRule, TurnPhase, ValueEquality};

pub use crate::game::{ClickOutcome, GameEvent, MemoryGame, Progress, RevertTicket, RevertTimer};

pub use crate::error::{BoardSizeError, ConfigError, GameError, BOARD_SIZE_HINT};
