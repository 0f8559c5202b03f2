//! Deferred revert of a mismatched pair.
//!
//! The timer never sleeps. It records when the pending revert is due and
//! hands it out either when polled past that instant or when the exact
//! ticket is presented. Cancelling drops the pending revert, so a ticket
//! issued before a restart can never be applied afterwards.

use std::time::Instant;

use tracing::debug;

use crate::core::CardHandle;
use crate::error::GameError;

/// One scheduled revert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevertTicket {
    id: u64,
    first: CardHandle,
    second: CardHandle,
    due: Instant,
}

impl RevertTicket {
    /// Unique id within the owning session.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The two cards to turn back over.
    #[must_use]
    pub fn cards(&self) -> (CardHandle, CardHandle) {
        (self.first, self.second)
    }

    /// When the revert should happen.
    #[must_use]
    pub fn due(&self) -> Instant {
        self.due
    }
}

/// Holds at most one pending revert.
#[derive(Clone, Debug, Default)]
pub struct RevertTimer {
    next_id: u64,
    pending: Option<RevertTicket>,
}

impl RevertTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a revert, replacing any pending one.
    pub fn schedule(&mut self, first: CardHandle, second: CardHandle, due: Instant) -> RevertTicket {
        self.next_id += 1;
        let ticket = RevertTicket {
            id: self.next_id,
            first,
            second,
            due,
        };
        if let Some(replaced) = self.pending.replace(ticket) {
            debug!(revert = replaced.id, "replaced pending revert");
        }
        ticket
    }

    /// Drop the pending revert, if any.
    pub fn cancel(&mut self) -> Option<RevertTicket> {
        self.pending.take()
    }

    /// Take the pending revert if it is due at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<RevertTicket> {
        match self.pending {
            Some(ticket) if ticket.due <= now => self.pending.take(),
            _ => None,
        }
    }

    /// Take the pending revert if it is exactly `ticket`.
    pub fn claim(&mut self, ticket: RevertTicket) -> Result<RevertTicket, GameError> {
        match self.pending {
            Some(pending) if pending.id == ticket.id => {
                self.pending = None;
                Ok(pending)
            }
            _ => Err(GameError::StaleRevert(ticket.id)),
        }
    }

    #[must_use]
    pub fn pending(&self) -> Option<RevertTicket> {
        self.pending
    }
}
