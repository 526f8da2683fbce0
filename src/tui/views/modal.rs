// Modal overlay rendering
//
// Modals are rendered on top of the main content:
// - Help modal: keyboard shortcuts
// - Logs modal: captured log entries
// - Lightbox: enlarged certificate artwork with a focused close control

use crate::logging::LogLevel;
use crate::portfolio::ARTWORK_PLACEHOLDER;
use crate::tui::app::App;
use crate::tui::components::scrollbar::{render_scrollbar_raw, ScrollbarStyle};
use crate::tui::modal::Modal;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render a modal dialog as a centered overlay
pub fn render(f: &mut Frame, modal: &Modal, app: &mut App) {
    match modal {
        Modal::Help => render_help(f, app),
        Modal::Logs => render_logs(f, app),
        Modal::Lightbox(idx) => render_lightbox(f, app, *idx),
    }
}

/// Calculate centered rect for a modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Render the help modal overlay
fn render_help(f: &mut Frame, app: &App) {
    let key_style = Style::default().fg(app.theme.highlight);
    let desc_style = Style::default().fg(app.theme.foreground);
    let header_style = Style::default()
        .fg(app.theme.heading)
        .add_modifier(Modifier::BOLD);

    // Helper to create a keybind line: "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Navegación", header_style)),
        kb("m", "Abrir/cerrar el menú"),
        kb("Tab/↓", "Siguiente enlace (menú abierto)"),
        kb("Shift+Tab/↑", "Enlace anterior (menú abierto)"),
        kb("Enter", "Ir a la sección enfocada"),
        kb("Esc", "Cerrar menú / overlay"),
        Line::raw(""),
        Line::from(Span::styled("  Contenido", header_style)),
        kb("↑/↓, j/k", "Desplazar"),
        kb("RePág/AvPág", "Desplazar por páginas"),
        kb("Inicio/Fin", "Saltar al principio/final"),
        kb("←/→", "Elegir certificado"),
        kb("Enter", "Ver certificado en grande"),
        Line::raw(""),
        Line::from(Span::styled("  Portapapeles", header_style)),
        kb("e", "Copiar email de contacto"),
        kb("y", "Copiar sección actual (texto)"),
        kb("Y", "Copiar certificado (JSON)"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("t", "Cambiar tema"),
        kb("l", "Registro de eventos"),
        kb("?", "Esta ayuda"),
        kb("q", "Salir"),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  Tema: ", desc_style),
            Span::styled(app.theme.name, key_style),
        ]),
    ]);

    let area = centered_rect(46, 30, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.highlight))
                .border_type(app.theme.border_type)
                .title(" Ayuda ")
                .title_bottom(Line::from(" ? o Esc para cerrar ").centered()),
        );
    f.render_widget(paragraph, area);
}

/// Render the captured log entries
fn render_logs(f: &mut Frame, app: &mut App) {
    let entries = app.log_buffer.get_all();

    let area = centered_rect(
        f.area().width.saturating_sub(10).max(40),
        f.area().height.saturating_sub(6).max(8),
        f.area(),
    );
    f.render_widget(Clear, area);

    let viewport = area.height.saturating_sub(2) as usize;
    let max_offset = entries.len().saturating_sub(viewport);
    app.logs_scroll = app.logs_scroll.min(max_offset);

    if app.log_buffer.is_empty() {
        let empty = Paragraph::new("Sin registros todavía")
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.theme.placeholder).bg(app.theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(app.theme.highlight))
                    .border_type(app.theme.border_type)
                    .title(" Registro "),
            );
        f.render_widget(empty, area);
        return;
    }

    let lines: Vec<Line> = entries
        .iter()
        .skip(app.logs_scroll)
        .take(viewport)
        .map(|entry| {
            let color = match entry.level {
                LogLevel::Error => app.theme.log_error,
                LogLevel::Warn => app.theme.log_warn,
                LogLevel::Info => app.theme.log_info,
                LogLevel::Debug | LogLevel::Trace => app.theme.log_debug,
            };
            Line::from(vec![
                Span::styled(
                    format!("[{}] ", entry.timestamp.format("%H:%M:%S")),
                    Style::default().fg(app.theme.status_bar),
                ),
                Span::styled(format!("{:5} ", entry.level.as_str()), Style::default().fg(color)),
                Span::styled(entry.message.clone(), Style::default().fg(app.theme.foreground)),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(Text::from(lines))
        .style(Style::default().bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.highlight))
                .border_type(app.theme.border_type)
                .title(" Registro ")
                .title_bottom(Line::from(" l o Esc para cerrar ").centered()),
        );
    f.render_widget(paragraph, area);
    render_scrollbar_raw(
        f,
        area,
        entries.len(),
        viewport,
        app.logs_scroll,
        ScrollbarStyle::Arrows,
    );
}

/// Render the certificate lightbox
///
/// The overlay shows the artwork at full size with keyboard focus on the
/// close control. The rects recorded here drive click-outside closing.
fn render_lightbox(f: &mut Frame, app: &mut App, cert_idx: usize) {
    let Some(cert) = app.content.certificate(cert_idx) else {
        return;
    };

    // Copy what the render needs so the borrow on content ends here
    let title = cert.title.clone();
    let alt = cert.alt_text().to_string();
    let art = cert.art_text().map(str::to_string);

    let frame_area = f.area();
    let width = (frame_area.width * 3 / 4).max(40).min(frame_area.width);
    let height = (frame_area.height * 3 / 4).max(12).min(frame_area.height);
    let area = centered_rect(width, height, frame_area);

    app.lightbox_area = Some(area);

    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border_focused))
        .border_type(app.theme.border_type)
        .title(format!(" {} ", title))
        .title_bottom(Line::from(" Esc o clic fuera para cerrar ").centered());
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Artwork (or the placeholder presentation), centered
    let mut lines: Vec<Line> = match &art {
        Some(text) => text
            .lines()
            .map(|l| {
                Line::from(Span::styled(
                    l.to_string(),
                    Style::default().fg(app.theme.card),
                ))
            })
            .collect(),
        None => vec![
            Line::raw(""),
            Line::from(Span::styled(
                ARTWORK_PLACEHOLDER.to_string(),
                Style::default().fg(app.theme.placeholder),
            )),
            Line::from(Span::styled(
                alt,
                Style::default()
                    .fg(app.theme.placeholder)
                    .add_modifier(Modifier::ITALIC),
            )),
        ],
    };
    lines.push(Line::raw(""));

    let body_area = Rect {
        x: inner.x,
        y: inner.y,
        width: inner.width,
        height: inner.height.saturating_sub(1),
    };
    let paragraph = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .style(Style::default().bg(app.theme.background));
    f.render_widget(paragraph, body_area);

    // Close control, keyboard-focused while the lightbox is open
    let close_area = Rect {
        x: inner.x,
        y: inner.bottom().saturating_sub(1),
        width: inner.width,
        height: 1,
    };
    app.lightbox_close_area = Some(close_area);

    let close = Paragraph::new("[ ✕ Cerrar ]")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(app.theme.selection_fg)
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(close, close_area);
}
