//! Toast notification component
//!
//! A non-blocking overlay that auto-dismisses after a fixed duration.
//! Renders in the bottom-right corner on top of all other content.

use crate::theme::Theme;
use crate::util::display_width;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

/// How long a toast stays on screen
const TOAST_DURATION: Duration = Duration::from_secs(2);

/// A toast notification that auto-dismisses
pub struct Toast {
    /// Message to display
    pub message: String,
    /// When the toast should disappear
    deadline: Instant,
}

impl Toast {
    /// Create a new toast shown from `now`
    pub fn new(message: impl Into<String>, now: Instant) -> Self {
        Self {
            message: message.into(),
            deadline: now + TOAST_DURATION,
        }
    }

    /// Check if the toast has expired and should be removed
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Render the toast in the bottom-right corner
    ///
    /// Uses `Clear` so the toast is visible on top of other content.
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        // Message width plus padding and borders
        let width = (display_width(&self.message) as u16 + 4).min(area.width.saturating_sub(4));
        let height = 3;

        // Position: bottom-right corner, offset by 2 cells from edge
        let x = area.right().saturating_sub(width + 2);
        let y = area.bottom().saturating_sub(height + 2);
        let toast_area = Rect::new(x, y, width, height);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.highlight))
            .style(Style::default().bg(theme.background));

        let text = Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.foreground))
            .block(block);

        f.render_widget(Clear, toast_area);
        f.render_widget(text, toast_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_exactly_at_the_deadline() {
        let t0 = Instant::now();
        let toast = Toast::new("✓ Copiado", t0);
        assert!(!toast.is_expired(t0 + Duration::from_millis(1999)));
        assert!(toast.is_expired(t0 + Duration::from_millis(2000)));
    }
}
