//! Cancellable frame scheduling.
//!
//! Pointer movement fires far more often than the display can usefully
//! update, so recomputation is throttled to at most once per rendered frame:
//! each new event cancels the previously scheduled task and schedules a
//! fresh one for the next frame boundary. This module provides the handle
//! abstraction that makes the cancellation explicit.

/// Handle identifying one scheduled frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    /// Wrap a raw handle identifier.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw identifier, for hosts bridging to platform timer APIs.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Schedule work at frame boundaries.
///
/// Implementations bridge to the host's animation-frame or timer primitive.
/// `request` returns a handle the caller may later pass to `cancel`;
/// cancelling a handle that already fired, or was never issued, is a no-op.
pub trait FrameClock {
    /// Schedule a callback for the next frame boundary.
    fn request(&mut self) -> FrameHandle;

    /// Cancel a previously scheduled callback.
    fn cancel(&mut self, handle: FrameHandle);
}

/// Deterministic clock for tests and headless hosts.
///
/// Handles are issued sequentially and fired manually via [`Self::fire`].
///
/// # Examples
/// ```
/// use livmap_view::{FrameClock, ManualFrameClock};
///
/// let mut clock = ManualFrameClock::new();
/// let first = clock.request();
/// let second = clock.request();
/// clock.cancel(first);
/// assert_eq!(clock.fire(), Some(second));
/// assert_eq!(clock.fire(), None);
/// ```
#[derive(Debug, Default)]
pub struct ManualFrameClock {
    next_id: u64,
    scheduled: Vec<FrameHandle>,
}

impl ManualFrameClock {
    /// Construct a clock with nothing scheduled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire the oldest scheduled callback, returning its handle.
    pub fn fire(&mut self) -> Option<FrameHandle> {
        if self.scheduled.is_empty() {
            None
        } else {
            Some(self.scheduled.remove(0))
        }
    }

    /// Number of callbacks currently scheduled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.scheduled.len()
    }
}

impl FrameClock for ManualFrameClock {
    fn request(&mut self) -> FrameHandle {
        self.next_id = self.next_id.wrapping_add(1);
        let handle = FrameHandle::new(self.next_id);
        self.scheduled.push(handle);
        handle
    }

    fn cancel(&mut self, handle: FrameHandle) {
        self.scheduled.retain(|scheduled| *scheduled != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn handles_are_issued_sequentially() {
        let mut clock = ManualFrameClock::new();
        assert_ne!(clock.request(), clock.request());
        assert_eq!(clock.pending(), 2);
    }

    #[rstest]
    fn cancelling_removes_only_the_named_handle() {
        let mut clock = ManualFrameClock::new();
        let first = clock.request();
        let second = clock.request();
        clock.cancel(first);
        assert_eq!(clock.pending(), 1);
        assert_eq!(clock.fire(), Some(second));
    }

    #[rstest]
    fn cancelling_an_unknown_handle_is_a_no_op() {
        let mut clock = ManualFrameClock::new();
        let handle = clock.request();
        clock.cancel(FrameHandle::new(999));
        assert_eq!(clock.fire(), Some(handle));
    }

    #[rstest]
    fn firing_drains_in_schedule_order() {
        let mut clock = ManualFrameClock::new();
        let first = clock.request();
        let second = clock.request();
        assert_eq!(clock.fire(), Some(first));
        assert_eq!(clock.fire(), Some(second));
        assert_eq!(clock.fire(), None);
    }
}
