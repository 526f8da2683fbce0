//! Scrollable trait for components with scrollable content
//!
//! Components that display more content than fits in their viewport
//! implement this trait to get uniform scroll behavior.

use super::Component;
use crate::tui::scroll::ScrollState;

/// Trait for components with scrollable content
///
/// Provides a uniform interface for scroll operations. Components
/// own their `ScrollState` and expose it through this trait; most
/// methods have default implementations that delegate to it.
pub trait Scrollable: Component {
    /// Get immutable reference to scroll state
    fn scroll_state(&self) -> &ScrollState;

    /// Get mutable reference to scroll state
    fn scroll_state_mut(&mut self) -> &mut ScrollState;

    // ─────────────────────────────────────────────────────────────
    // Navigation - default implementations delegate to ScrollState
    // ─────────────────────────────────────────────────────────────

    /// Scroll up by one line. Returns true if the offset changed.
    fn scroll_up(&mut self) -> bool {
        self.scroll_state_mut().scroll_up()
    }

    /// Scroll down by one line. Returns true if the offset changed.
    fn scroll_down(&mut self) -> bool {
        self.scroll_state_mut().scroll_down()
    }

    /// Jump to the top of content
    fn scroll_to_top(&mut self) -> bool {
        self.scroll_state_mut().scroll_to_top()
    }

    /// Jump to the bottom of content
    fn scroll_to_bottom(&mut self) -> bool {
        self.scroll_state_mut().scroll_to_bottom()
    }

    /// Scroll up by a page
    fn page_up(&mut self) -> bool {
        self.scroll_state_mut().page_up()
    }

    /// Scroll down by a page
    fn page_down(&mut self) -> bool {
        self.scroll_state_mut().page_down()
    }

    // ─────────────────────────────────────────────────────────────
    // State queries
    // ─────────────────────────────────────────────────────────────

    /// Get the visible range of lines (start_index, end_index)
    #[allow(dead_code)]
    fn visible_range(&self) -> (usize, usize) {
        self.scroll_state().visible_range()
    }

    /// Check if scrollbar is needed (content exceeds viewport)
    #[allow(dead_code)]
    fn needs_scrollbar(&self) -> bool {
        self.scroll_state().needs_scrollbar()
    }

    /// Get current scroll offset
    fn scroll_offset(&self) -> usize {
        self.scroll_state().offset()
    }
}
