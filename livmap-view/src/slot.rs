//! Owned in-flight request tracking for search slots.
//!
//! Remote score lookups resolve after an arbitrary delay, and the user can
//! fire a second search before the first answers. Each slot owns a
//! generation counter: beginning a request invalidates every earlier token,
//! so a slow response can never clobber the result of a newer search. This
//! replaces shared mutable loading flags with state the owner controls.

/// Token identifying one request begun on a [`RequestSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken {
    generation: u64,
}

/// Tracks the in-flight request for a single search slot.
///
/// # Examples
/// ```
/// use livmap_view::RequestSlot;
///
/// let mut slot = RequestSlot::new();
/// let stale = slot.begin();
/// let current = slot.begin();
/// assert!(!slot.settle(stale));
/// assert!(slot.settle(current));
/// ```
#[derive(Debug, Default)]
pub struct RequestSlot {
    generation: u64,
    in_flight: bool,
}

impl RequestSlot {
    /// Construct an idle slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new request, invalidating any earlier token.
    pub fn begin(&mut self) -> RequestToken {
        self.generation = self.generation.wrapping_add(1);
        self.in_flight = true;
        RequestToken {
            generation: self.generation,
        }
    }

    /// Whether `token` still identifies the slot's current request.
    #[must_use]
    pub const fn is_current(&self, token: RequestToken) -> bool {
        self.in_flight && token.generation == self.generation
    }

    /// Complete the request identified by `token`.
    ///
    /// Returns `true` when the token was current, in which case the caller
    /// should apply the response; a stale token returns `false` and its
    /// response must be discarded.
    pub fn settle(&mut self, token: RequestToken) -> bool {
        if self.is_current(token) {
            self.in_flight = false;
            true
        } else {
            false
        }
    }

    /// Abandon the current request without a response.
    pub fn cancel(&mut self) {
        self.in_flight = false;
    }

    /// Whether a request is currently awaiting its response.
    #[must_use]
    pub const fn is_in_flight(&self) -> bool {
        self.in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn settling_the_current_token_succeeds_once() {
        let mut slot = RequestSlot::new();
        let token = slot.begin();
        assert!(slot.is_in_flight());
        assert!(slot.settle(token));
        assert!(!slot.is_in_flight());
        assert!(!slot.settle(token), "a settled token cannot settle twice");
    }

    #[rstest]
    fn a_newer_request_invalidates_earlier_tokens() {
        let mut slot = RequestSlot::new();
        let first = slot.begin();
        let second = slot.begin();
        assert!(!slot.settle(first), "superseded response must be discarded");
        assert!(slot.is_in_flight(), "the newer request is still pending");
        assert!(slot.settle(second));
    }

    #[rstest]
    fn cancelling_discards_the_pending_request() {
        let mut slot = RequestSlot::new();
        let token = slot.begin();
        slot.cancel();
        assert!(!slot.settle(token));
    }

    #[rstest]
    fn rapid_successive_searches_only_apply_the_last() {
        let mut slot = RequestSlot::new();
        let tokens: Vec<_> = (0..5).map(|_| slot.begin()).collect();
        let applied: Vec<bool> = tokens.into_iter().map(|t| slot.settle(t)).collect();
        assert_eq!(applied, vec![false, false, false, false, true]);
    }
}
