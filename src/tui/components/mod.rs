// Components module - reusable UI building blocks
//
// Shell components are rendered in every view:
// - Title bar: owner name + menu toggle state
// - Status bar: key hints, active section
// - Toast: transient confirmation overlay
//
// Behavior components own their slice of the interaction contract:
// - Sidebar: collapsible navigation with a focus trap
// - Content: scrollable document (smooth scroll, reveal, lazy artwork)
// - Typewriter: hero name animation
// - Contact: copy-email affordance with confirmation + fallback
//
// Each component is a focused, single-responsibility module.

pub mod contact;
pub mod content;
pub mod scrollbar;
pub mod sidebar;
pub mod status_bar;
pub mod title_bar;
pub mod toast;
pub mod typewriter;

pub use toast::Toast;

use crate::tui::app::App;
use ratatui::{layout::Rect, Frame};

/// Render the title bar (convenience wrapper)
pub fn render_title(f: &mut Frame, area: Rect, app: &App) {
    title_bar::render(f, area, app);
}

/// Render the status bar (convenience wrapper)
pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    status_bar::render(f, area, app);
}
