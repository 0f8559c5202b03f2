//! The game controller.
//!
//! `MemoryGame` owns everything about one session: configuration, RNG,
//! the current deck, the turn phase, progress, the pending revert, and the
//! queue of events for the presentation layer. Sessions are independent
//! values, so any number can run side by side.
//!
//! ## Usage
//!
//! ```
//! use std::time::Instant;
//! use memory_match::{ClickOutcome, GameConfig, MemoryGame};
//! use memory_match::core::CardHandle;
//!
//! let mut game = MemoryGame::new(GameConfig::new().with_seed(1));
//! game.start_str("4").unwrap();
//!
//! let outcome = game.click(CardHandle::new(0), Instant::now()).unwrap();
//! assert_eq!(outcome, ClickOutcome::Revealed(CardHandle::new(0)));
//! ```

use std::time::Instant;

use smallvec::SmallVec;
use tracing::{debug, info, warn};

use super::events::GameEvent;
use super::progress::Progress;
use super::timer::{RevertTicket, RevertTimer};
use crate::cards::{Card, Deck};
use crate::core::{BoardSize, CardHandle, GameConfig, GameRng, GameRngState};
use crate::error::GameError;
use crate::rules::{ClickDecision, IgnoreReason, MatchOutcome, MatchRule, TurnPhase, ValueEquality};

/// What a click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// The card was turned up as the first of a pair.
    Revealed(CardHandle),
    /// The pair matched; the board is unlocked again.
    Matched {
        first: CardHandle,
        second: CardHandle,
        completed: bool,
    },
    /// The pair did not match; the board stays locked until the ticket fires.
    Mismatched(RevertTicket),
}

/// One game session.
#[derive(Clone, Debug)]
pub struct MemoryGame<R: MatchRule = ValueEquality> {
    config: GameConfig,
    rng: GameRng,
    rule: R,
    size: BoardSize,
    deck: Deck,
    phase: TurnPhase,
    progress: Progress,
    timer: RevertTimer,
    generation: u64,
    completion_visible: bool,
    events: Vec<GameEvent>,
}

impl MemoryGame {
    /// Start a session and deal the configured default board.
    pub fn new(config: GameConfig) -> Self {
        Self::with_rule(config, ValueEquality)
    }
}

impl<R: MatchRule> MemoryGame<R> {
    /// Start a session with a custom pairing rule.
    pub fn with_rule(config: GameConfig, rule: R) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let size = config.default_cards;
        let mut game = Self {
            config,
            rng,
            rule,
            size,
            deck: Deck::from_values(&[]),
            phase: TurnPhase::Idle,
            progress: Progress::default(),
            timer: RevertTimer::new(),
            generation: 0,
            completion_visible: false,
            events: Vec::new(),
        };
        game.start(size);
        game
    }

    // === Start / Restart ===

    /// Parse a board size and deal a new board.
    ///
    /// On error the current board is left exactly as it was.
    pub fn start_str(&mut self, input: &str) -> Result<(), GameError> {
        let size: BoardSize = input.parse()?;
        self.start(size);
        Ok(())
    }

    /// Deal a new board of `size` cards, abandoning the current one.
    pub fn start(&mut self, size: BoardSize) {
        if let Some(ticket) = self.timer.cancel() {
            debug!(revert = ticket.id(), "cancelled pending revert");
            self.events.push(GameEvent::RevertCancelled { revert: ticket.id() });
        }

        self.generation += 1;
        self.size = size;
        self.deck = Deck::generate(size, &mut self.rng);
        self.phase = TurnPhase::Idle;
        self.progress = Progress::new(size.pairs());
        self.completion_visible = false;

        debug!(generation = self.generation, cards = size.cards(), "dealt board");
        self.events.push(GameEvent::BoardDealt {
            generation: self.generation,
            cards: size.cards(),
        });
    }

    /// Deal a new board of the current size.
    pub fn restart(&mut self) {
        self.start(self.size);
    }

    // === Input ===

    /// Handle a click on `card`.
    ///
    /// `now` is used to schedule the revert of a mismatched pair.
    pub fn click(&mut self, card: CardHandle, now: Instant) -> Result<ClickOutcome, GameError> {
        let matched = self.card(card)?.is_matched();
        let (next, decision) = self.phase.on_click(card, matched);

        match decision {
            ClickDecision::Ignore(reason) => {
                debug!(%card, %reason, "ignored click");
                Ok(ClickOutcome::Ignored(reason))
            }
            ClickDecision::RevealFirst => {
                self.reveal(card)?;
                self.phase = next;
                Ok(ClickOutcome::Revealed(card))
            }
            ClickDecision::RevealSecond { first } => {
                self.reveal(card)?;
                self.phase = next;
                self.evaluate(first, card, now)
            }
        }
    }

    fn reveal(&mut self, handle: CardHandle) -> Result<(), GameError> {
        let card = self
            .deck
            .get_mut(handle)
            .ok_or(GameError::UnknownCard(handle))?;
        card.reveal();
        let value = card.value();

        debug!(card = %handle, value, "revealed card");
        self.events.push(GameEvent::CardRevealed { card: handle, value });
        Ok(())
    }

    fn evaluate(
        &mut self,
        first: CardHandle,
        second: CardHandle,
        now: Instant,
    ) -> Result<ClickOutcome, GameError> {
        let a = self.card(first)?;
        let b = self.card(second)?;
        let value = a.value();

        match self.rule.evaluate(a, b) {
            MatchOutcome::Match => {
                for handle in [first, second] {
                    if let Some(card) = self.deck.get_mut(handle) {
                        card.mark_matched();
                    }
                }
                self.progress.record_match();
                self.phase = TurnPhase::Idle;

                info!(
                    %first,
                    %second,
                    matched = self.progress.matched_pairs(),
                    total = self.progress.total_pairs(),
                    "pair matched"
                );
                self.events.push(GameEvent::PairMatched { first, second, value });

                let completed = self.check_completion();
                Ok(ClickOutcome::Matched {
                    first,
                    second,
                    completed,
                })
            }
            MatchOutcome::Mismatch => {
                self.progress.record_mismatch();
                let delay = self.config.reveal_delay();
                let ticket = self.timer.schedule(first, second, now + delay);

                debug!(%first, %second, revert = ticket.id(), "pair mismatched");
                self.events.push(GameEvent::PairMismatched {
                    first,
                    second,
                    revert: ticket.id(),
                    delay,
                });
                Ok(ClickOutcome::Mismatched(ticket))
            }
        }
    }

    fn check_completion(&mut self) -> bool {
        if !self.progress.is_complete() || self.completion_visible {
            return false;
        }

        self.completion_visible = true;
        info!(attempts = self.progress.attempts(), "board cleared");
        self.events.push(GameEvent::GameCompleted {
            attempts: self.progress.attempts(),
        });
        true
    }

    // === Revert ===

    /// Apply the pending revert if it is due at `now`.
    ///
    /// Returns the ticket that fired, if any.
    pub fn tick(&mut self, now: Instant) -> Option<RevertTicket> {
        let ticket = self.timer.poll(now)?;
        self.apply_revert(ticket);
        Some(ticket)
    }

    /// Apply exactly this revert, for callers that run their own timers.
    ///
    /// Fails without changing anything if the ticket was cancelled by a
    /// restart or has already fired.
    pub fn fire(&mut self, ticket: RevertTicket) -> Result<(), GameError> {
        let ticket = self.timer.claim(ticket).map_err(|err| {
            warn!(revert = ticket.id(), "ignored stale revert");
            err
        })?;
        self.apply_revert(ticket);
        Ok(())
    }

    fn apply_revert(&mut self, ticket: RevertTicket) {
        let (first, second) = ticket.cards();
        for handle in [first, second] {
            if let Some(card) = self.deck.get_mut(handle) {
                card.hide();
            }
        }
        self.phase = TurnPhase::Idle;

        debug!(%first, %second, revert = ticket.id(), "hid mismatched pair");
        self.events.push(GameEvent::CardsHidden { first, second });
    }

    // === Queries ===

    fn card(&self, handle: CardHandle) -> Result<&Card, GameError> {
        self.deck.get(handle).ok_or(GameError::UnknownCard(handle))
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn board_size(&self) -> BoardSize {
        self.size
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Whether new selections are currently suppressed.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.phase.is_locked()
    }

    /// Selected, face-up, unmatched cards.
    #[must_use]
    pub fn selection(&self) -> SmallVec<[CardHandle; 2]> {
        self.phase.selected()
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        self.progress
    }

    #[must_use]
    pub fn is_completion_visible(&self) -> bool {
        self.completion_visible
    }

    /// Number of boards dealt in this session.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn pending_revert(&self) -> Option<RevertTicket> {
        self.timer.pending()
    }

    /// RNG state before the next deal.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Take all events queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
