//! Debounced lookups that drop superseded results.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;

use super::config::SEARCH_DEBOUNCE_MS;

/// Monotonic ticket counter. Each keystroke takes a new ticket; a result
/// is applied only while its ticket is still the latest.
#[derive(Clone, Default)]
pub struct SearchGeneration {
    latest: Arc<AtomicU64>,
}

impl SearchGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidate every outstanding ticket and hand out a fresh one.
    pub fn next(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Drop every outstanding ticket without starting a new lookup.
    pub fn cancel(&self) {
        self.next();
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }

    /// Wait out the debounce window. `false` when a newer ticket was taken
    /// meanwhile and the caller should give up.
    pub async fn settle(&self, ticket: u64) -> bool {
        TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
        self.is_current(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_is_current() {
        let generation = SearchGeneration::new();
        let first = generation.next();
        let second = generation.next();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn cancel_invalidates_pending_ticket() {
        let generation = SearchGeneration::new();
        let pending = generation.next();
        generation.cancel();
        assert!(!generation.is_current(pending));
    }

    #[test]
    fn clones_share_the_counter() {
        let generation = SearchGeneration::new();
        let other = generation.clone();
        let ticket = generation.next();
        other.next();
        assert!(!generation.is_current(ticket));
    }
}
