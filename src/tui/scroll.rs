// Scroll system for the content document
//
// Owns all state needed for scrolling: position, content size, viewport size,
// and an optional smooth-scroll target. Navigation sets a target; every tick
// eases the offset toward it (a quarter of the remaining distance, at least
// one row) until it lands. Manual scrolling cancels any running animation.
//
// The component embedding this stamps the instant of every offset change and
// defers its active-section recompute until a quiet period has passed.

use std::time::{Duration, Instant};

/// Quiet period after the last offset change before dependents recompute
pub const SCROLL_DEBOUNCE: Duration = Duration::from_millis(100);

/// Scroll state for a single panel
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Current scroll offset (line index at top of viewport)
    offset: usize,

    /// Total number of lines in content
    total: usize,

    /// Number of lines visible in viewport
    viewport: usize,

    /// Row a smooth scroll is easing toward
    target: Option<usize>,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            offset: 0,
            total: 0,
            viewport: 0,
            target: None,
        }
    }

    /// Update content and viewport dimensions.
    /// Call this each render frame with current sizes.
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;
        self.offset = self.offset.min(self.max_offset());
        if let Some(t) = self.target {
            self.target = Some(t.min(self.max_offset()));
        }
    }

    /// Scroll up by one line. Cancels any running animation.
    /// Returns true if the offset changed.
    pub fn scroll_up(&mut self) -> bool {
        self.target = None;
        if self.offset > 0 {
            self.offset -= 1;
            true
        } else {
            false
        }
    }

    /// Scroll down by one line. Cancels any running animation.
    pub fn scroll_down(&mut self) -> bool {
        self.target = None;
        if self.offset < self.max_offset() {
            self.offset += 1;
            true
        } else {
            false
        }
    }

    /// Scroll up by a page
    pub fn page_up(&mut self) -> bool {
        self.target = None;
        let page = self.viewport.max(1);
        let before = self.offset;
        self.offset = self.offset.saturating_sub(page);
        self.offset != before
    }

    /// Scroll down by a page
    pub fn page_down(&mut self) -> bool {
        self.target = None;
        let page = self.viewport.max(1);
        let before = self.offset;
        self.offset = (self.offset + page).min(self.max_offset());
        self.offset != before
    }

    /// Jump to top
    pub fn scroll_to_top(&mut self) -> bool {
        self.target = None;
        let before = self.offset;
        self.offset = 0;
        self.offset != before
    }

    /// Jump to bottom
    pub fn scroll_to_bottom(&mut self) -> bool {
        self.target = None;
        let before = self.offset;
        self.offset = self.max_offset();
        self.offset != before
    }

    /// Begin a smooth scroll toward `row` (clamped to valid offsets)
    pub fn animate_to(&mut self, row: usize) {
        self.target = Some(row.min(self.max_offset()));
    }

    /// Advance a running animation by one eased step.
    /// Returns true if the offset changed.
    pub fn tick(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        if target == self.offset {
            self.target = None;
            return false;
        }

        let remaining = target.abs_diff(self.offset);
        let step = (remaining / 4).max(1);
        if target > self.offset {
            self.offset += step;
        } else {
            self.offset -= step;
        }

        if self.offset == target {
            self.target = None;
        }
        true
    }

    #[allow(dead_code)] // Animation queries are exercised by the timing tests
    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Get current scroll offset
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Get visible range (start_index, end_index)
    pub fn visible_range(&self) -> (usize, usize) {
        let start = self.offset;
        let end = (self.offset + self.viewport).min(self.total);
        (start, end)
    }

    /// Check if content overflows viewport (scrollbar needed)
    pub fn needs_scrollbar(&self) -> bool {
        self.total > self.viewport
    }

    /// Maximum valid offset
    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }

    /// Get total content size
    pub fn total(&self) -> usize {
        self.total
    }

    /// Get viewport size
    pub fn viewport(&self) -> usize {
        self.viewport
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// Trailing-edge debounce stamp.
///
/// `touch` records an event; `fire` reports true once, only after the quiet
/// period has elapsed with no further touches.
#[derive(Debug, Clone, Default)]
pub struct Debounce {
    last_touched: Option<Instant>,
}

impl Debounce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a triggering event
    pub fn touch(&mut self, now: Instant) {
        self.last_touched = Some(now);
    }

    /// True exactly once per burst, after `quiet` has elapsed since the last touch
    pub fn fire(&mut self, now: Instant, quiet: Duration) -> bool {
        match self.last_touched {
            Some(t) if now.duration_since(t) >= quiet => {
                self.last_touched = None;
                true
            }
            _ => false,
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animation_eases_toward_target_and_lands() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(200, 20);
        scroll.animate_to(40);

        let mut offsets = Vec::new();
        while scroll.is_animating() {
            scroll.tick();
            offsets.push(scroll.offset());
            assert!(offsets.len() < 100, "animation must terminate");
        }

        // Monotonic approach, exact landing
        assert!(offsets.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(*offsets.last().unwrap(), 40);
        // First step is a quarter of the distance
        assert_eq!(offsets[0], 10);
    }

    #[test]
    fn animation_moves_at_least_one_row() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(100, 20);
        scroll.animate_to(2);

        assert!(scroll.tick());
        assert_eq!(scroll.offset(), 1); // 2/4 rounds to 0, clamped up to 1
        assert!(scroll.tick());
        assert_eq!(scroll.offset(), 2);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn animation_target_clamps_to_document_end() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(30, 20);
        scroll.animate_to(500);
        while scroll.tick() {}
        assert_eq!(scroll.offset(), 10); // total - viewport
    }

    #[test]
    fn manual_scroll_cancels_animation() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(200, 20);
        scroll.animate_to(100);
        scroll.tick();
        assert!(scroll.is_animating());

        scroll.scroll_up();
        assert!(!scroll.is_animating());
        assert!(!scroll.tick());
    }

    #[test]
    fn scroll_up_at_top_reports_no_change() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(50, 20);
        assert!(!scroll.scroll_up());
        assert!(scroll.scroll_down());
    }

    #[test]
    fn visible_range_tracks_offset() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(100, 10);
        assert_eq!(scroll.visible_range(), (0, 10));
        scroll.page_down();
        assert_eq!(scroll.visible_range(), (10, 20));
    }

    #[test]
    fn debounce_fires_once_after_quiet_period() {
        let t0 = Instant::now();
        let mut debounce = Debounce::new();

        debounce.touch(t0);
        // Still inside the quiet period
        assert!(!debounce.fire(t0 + Duration::from_millis(99), SCROLL_DEBOUNCE));
        // A new touch restarts the window
        debounce.touch(t0 + Duration::from_millis(50));
        assert!(!debounce.fire(t0 + Duration::from_millis(120), SCROLL_DEBOUNCE));
        // Quiet period elapsed: fires exactly once
        assert!(debounce.fire(t0 + Duration::from_millis(150), SCROLL_DEBOUNCE));
        assert!(!debounce.fire(t0 + Duration::from_millis(300), SCROLL_DEBOUNCE));
    }
}
