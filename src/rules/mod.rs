//! Game rules: the turn state machine and pair evaluation.

pub mod engine;
pub mod evaluator;

pub use engine::{ClickDecision, IgnoreReason, TurnPhase};
pub use evaluator::{MatchOutcome, MatchRule, ValueEquality};
