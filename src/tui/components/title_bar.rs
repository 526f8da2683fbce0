// Title bar component
//
// Renders the portfolio owner with the menu toggle control. The toggle shows
// its expanded state the way the page control mirrored aria-expanded.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
///
/// Shows:
/// - Menu toggle control with open/closed state
/// - Portfolio owner
/// - Writing indicator while the hero line is still typing out
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let toggle = if app.sidebar.expanded { "▾ menú" } else { "▸ menú" };
    let typing = if app.typewriter.has_text() && !app.typewriter.is_complete() {
        "  ✎ escribiendo…"
    } else {
        ""
    };
    let title_text = format!(
        " {}  │  {} — portfolio{}",
        toggle,
        app.content.portfolio().owner,
        typing
    );

    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(Line::from(" ? ").right_aligned()),
        );

    f.render_widget(title, area);
}
