use std::time::Duration;

use crate::util::{
    sequence::{RequestSequence, RequestToken},
    time::sleep,
};

/// Ticket for one input handed to a [`Debouncer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(RequestToken);

/// Delays a changing value until it has been stable for `delay`.
///
/// Every new input takes a ticket with [`bump`](Self::bump), which invalidates all
/// earlier tickets. [`settle`](Self::settle) waits out the delay and yields the
/// value only if its ticket is still the newest, so a burst of inputs publishes
/// just the last one.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    sequence: RequestSequence,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            sequence: RequestSequence::new(),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Register a new input, superseding any pending one.
    pub fn bump(&self) -> DebounceTicket {
        DebounceTicket(self.sequence.begin())
    }

    pub fn is_current(&self, ticket: DebounceTicket) -> bool {
        self.sequence.is_current(ticket.0)
    }

    /// Drop every pending input; nothing issued so far will settle.
    pub fn cancel(&self) {
        self.sequence.invalidate();
    }

    /// Wait for the quiet period, then release `value` if no newer input arrived.
    ///
    /// # Returns
    /// - `Some(value)` - `ticket` is still the newest after `delay`
    /// - `None` - A newer input arrived or the debouncer was cancelled
    pub async fn settle<T>(&self, ticket: DebounceTicket, value: T) -> Option<T> {
        sleep(self.delay).await;

        if self.is_current(ticket) {
            Some(value)
        } else {
            None
        }
    }
}
