//! Timeline scroll state and the settle debounce.
//!
//! Scrolling the timeline updates the year highlight live, but the heavier
//! follow-up work (connector redraw) waits until the gesture has settled:
//! 150 ms with no further scroll events. Repeated events reset the timer, so
//! the settle fires exactly once per quiescence.

use std::time::{Duration, Instant};

/// Quiescence window after the last scroll event.
pub const SCROLL_DEBOUNCE: Duration = Duration::from_millis(150);

/// Standard debounce (not throttle): the trailing edge always fires.
#[derive(Debug, Clone, Default)]
pub struct ScrollDebounce {
    last_event: Option<Instant>,
}

impl ScrollDebounce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a scroll event, restarting the quiescence window.
    pub fn on_scroll(&mut self, now: Instant) {
        self.last_event = Some(now);
    }

    /// True while a gesture is in flight (an event happened within the
    /// window and has not settled yet).
    pub fn is_scrolling(&self, now: Instant) -> bool {
        matches!(self.last_event, Some(t) if now.duration_since(t) < SCROLL_DEBOUNCE)
    }

    /// True while a settle is still owed (scrolling or settled-not-yet-taken).
    pub fn is_pending(&self) -> bool {
        self.last_event.is_some()
    }

    /// Consumes the settle once the window has elapsed. Returns true exactly
    /// once per quiescence.
    pub fn take_settled(&mut self, now: Instant) -> bool {
        match self.last_event {
            Some(t) if now.duration_since(t) >= SCROLL_DEBOUNCE => {
                self.last_event = None;
                true
            }
            _ => false,
        }
    }
}

/// Horizontal scroll position of the timeline strip.
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    /// Current offset as last reported by the scroll area
    offset: f32,
    /// Width of the visible scroll window, refreshed each frame
    viewport_width: f32,
    /// Programmatic scroll target (mini-nav click), applied next frame
    pending_offset: Option<f32>,
    /// Settle debounce for scroll gestures
    pub debounce: ScrollDebounce,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    /// Updates the observed scroll position and viewport width.
    pub fn observe(&mut self, offset: f32, viewport_width: f32) {
        self.offset = offset;
        self.viewport_width = viewport_width;
    }

    /// Queues a programmatic scroll, e.g. from a mini-nav click.
    pub fn request_offset(&mut self, offset: f32) {
        self.pending_offset = Some(offset);
    }

    /// Takes the queued scroll target, if any.
    pub fn take_pending_offset(&mut self) -> Option<f32> {
        self.pending_offset.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_scroll_one_settle() {
        let start = Instant::now();
        let mut debounce = ScrollDebounce::new();
        debounce.on_scroll(start);

        assert!(!debounce.take_settled(start + Duration::from_millis(100)));
        assert!(debounce.take_settled(start + Duration::from_millis(150)));
        // Consumed: no second settle
        assert!(!debounce.take_settled(start + Duration::from_millis(500)));
    }

    #[test]
    fn rapid_scrolls_settle_once_after_the_last() {
        let start = Instant::now();
        let mut debounce = ScrollDebounce::new();
        let mut settles = 0;

        // Ten events 30 ms apart, polling in between
        for i in 0..10 {
            let t = start + Duration::from_millis(30 * i);
            debounce.on_scroll(t);
            if debounce.take_settled(t + Duration::from_millis(10)) {
                settles += 1;
            }
        }
        assert_eq!(settles, 0);

        let last = start + Duration::from_millis(270);
        assert!(debounce.take_settled(last + SCROLL_DEBOUNCE));
        assert!(!debounce.take_settled(last + Duration::from_secs(1)));
    }

    #[test]
    fn is_scrolling_tracks_the_window() {
        let start = Instant::now();
        let mut debounce = ScrollDebounce::new();
        assert!(!debounce.is_scrolling(start));
        debounce.on_scroll(start);
        assert!(debounce.is_scrolling(start + Duration::from_millis(100)));
        assert!(!debounce.is_scrolling(start + Duration::from_millis(200)));
    }

    #[test]
    fn pending_offset_is_taken_once() {
        let mut scroll = ScrollState::new();
        scroll.request_offset(420.0);
        assert_eq!(scroll.take_pending_offset(), Some(420.0));
        assert_eq!(scroll.take_pending_offset(), None);
    }
}
