// Views module - frame-level rendering
//
// Composes the shell (title bar, content, status bar), the sidebar overlay,
// the active modal and the toast. Dispatches to component render functions;
// no behavior state lives here.

mod modal;

use super::app::App;
use crate::tui::components;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    // Breakpoint decisions key off the width of this frame
    app.last_width = f.area().width;

    // Theme background across the entire frame
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title bar
            Constraint::Min(5),    // content
            Constraint::Length(2), // status bar
        ])
        .split(f.area());

    components::render_title(f, chunks[0], app);

    // Content first, then the sidebar overlays its left edge
    let blink = app.blink_on();
    let content_focused = !app.sidebar.is_open();
    {
        let App {
            content,
            typewriter,
            contact,
            sidebar,
            theme,
            ..
        } = &mut *app;
        content.render(f, chunks[1], theme, typewriter, contact, blink, content_focused);
        sidebar.render(f, chunks[1], theme);
    }

    components::render_status(f, chunks[2], app);

    // Modal overlay (on top of everything)
    // Take modal temporarily to avoid borrow conflict with mutable app
    if let Some(modal_state) = app.modal.take() {
        modal::render(f, &modal_state, app);
        app.modal = Some(modal_state);
    }

    // Toast notification (on top of the modal too)
    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }
}
