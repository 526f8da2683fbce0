// Status bar component
//
// Renders key hints and current state at the bottom. Adapts to terminal
// width: narrow terminals get the compact format.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use crate::tui::traits::Interactive;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar with hints and the current section
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);

    let section = app
        .content
        .active_section_id()
        .unwrap_or("—")
        .to_string();

    let status_text = if !bp.at_least(Breakpoint::Wide) {
        // Compact format for narrow terminals
        format!(" m:menú  e:email  ?:ayuda  q:salir │ {}", section)
    } else {
        let hint = app
            .content
            .focus_hint()
            .unwrap_or("↑↓:desplazar");
        format!(
            " m:menú  {}  e:copiar email  t:{}  ?:ayuda  q:salir │ sección: {}",
            hint,
            app.theme.name,
            section
        )
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
