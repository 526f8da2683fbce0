// Content panel - the scrollable section document
//
// Owns the portfolio document and everything derived from scrolling over it:
// the row layout of sections, smooth-scroll navigation, debounced
// active-section tracking, one-shot reveal animation for cards, lazy artwork
// loading and certificate thumbnail selection. The app only routes input and
// composes render calls.
//
// Layout is a flat list of rows rebuilt when the panel width (or theme)
// changes. Hidden cards still occupy their rows, so revealing them never
// shifts the document.

use crate::portfolio::{Certificate, Portfolio, SectionKind, ARTWORK_PLACEHOLDER};
use crate::theme::Theme;
use crate::tui::components::contact::ContactLink;
use crate::tui::components::scrollbar::{render_scrollbar, ScrollbarStyle};
use crate::tui::components::typewriter::Typewriter;
use crate::tui::layout::Breakpoint;
use crate::tui::markdown::render_markdown;
use crate::tui::scroll::{Debounce, ScrollState, SCROLL_DEBOUNCE};
use crate::tui::traits::{
    Component, ComponentId, Copyable, Handled, Interactive, RenderContext, Scrollable,
};
use crate::util::{display_width, truncate_to_width};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

/// Rows below the viewport top where the reference point for
/// active-section tracking sits
const ACTIVE_LOOKAHEAD: usize = 5;

/// Rows shaved off the bottom of the visible window before a card may
/// reveal - it has to be substantially inside the view, not just peeking
const REVEAL_BOTTOM_MARGIN: usize = 3;

/// Share of a card's rows that must be inside the window to reveal it
const REVEAL_THRESHOLD_PERCENT: usize = 10;

/// How long a card renders dim between hidden and fully visible
const REVEAL_FADE: Duration = Duration::from_millis(400);

/// Rows a certificate thumbnail occupies (borders, preview, separator)
const THUMB_HEIGHT: usize = 6;

/// Inner text width of a thumbnail box
const THUMB_INNER: usize = 30;

/// One row of the laid-out document
enum DocLine {
    Text(Line<'static>),
    /// Card content row, styled by its reveal state at draw time
    Card { line: Line<'static>, card: usize },
    /// Certificate thumbnail row, built at draw time from load state
    Thumb { cert: usize, row: usize },
    /// Hero name row, rendered by the typewriter
    Hero,
    /// Contact email affordance row
    Email,
    Blank,
}

/// Row span of one section
struct SectionSpan {
    section: usize,
    top: usize,
    height: usize,
}

/// Row span of one reveal-animated card
struct CardSpan {
    card: usize,
    top: usize,
    height: usize,
}

/// Top row of one certificate thumbnail
struct ThumbSpan {
    cert: usize,
    top: usize,
}

/// Reveal progression: one-shot, never backwards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reveal {
    Hidden,
    Revealing { until: Instant },
    Visible,
}

pub struct ContentPanel {
    portfolio: Portfolio,
    scroll: ScrollState,
    debounce: Debounce,

    lines: Vec<DocLine>,
    section_spans: Vec<SectionSpan>,
    card_spans: Vec<CardSpan>,
    thumb_spans: Vec<ThumbSpan>,

    /// Flattened card index -> (section, card-in-section)
    card_locs: Vec<(usize, usize)>,
    /// Flattened certificate index -> (section, cert-in-section)
    cert_locs: Vec<(usize, usize)>,

    /// Per flattened card; non-animating sections start Visible
    reveals: Vec<Reveal>,

    /// Width the current layout was built for (0 = no layout yet)
    layout_width: u16,
    layout_theme: &'static str,

    pub active_section: Option<usize>,
    pub selected_cert: Option<usize>,

    /// Thumbnail rects from the last render, for mouse hit-testing
    thumb_areas: Vec<(usize, Rect)>,

    /// Defer artwork reads until thumbnails scroll into view
    lazy: bool,
}

impl ContentPanel {
    pub fn new(mut portfolio: Portfolio, lazy: bool) -> Self {
        if !lazy {
            // Fallback path: load everything up front, correctness over performance
            portfolio.load_all_artwork();
        }

        let mut card_locs = Vec::new();
        let mut cert_locs = Vec::new();
        let mut reveals = Vec::new();
        for (si, section) in portfolio.sections.iter().enumerate() {
            for ci in 0..section.cards.len() {
                card_locs.push((si, ci));
                reveals.push(if section.kind.cards_animate() {
                    Reveal::Hidden
                } else {
                    Reveal::Visible
                });
            }
            for ci in 0..section.certificates.len() {
                cert_locs.push((si, ci));
            }
        }

        Self {
            portfolio,
            scroll: ScrollState::new(),
            debounce: Debounce::new(),
            lines: Vec::new(),
            section_spans: Vec::new(),
            card_spans: Vec::new(),
            thumb_spans: Vec::new(),
            card_locs,
            cert_locs,
            reveals,
            layout_width: 0,
            layout_theme: "",
            active_section: None,
            selected_cert: None,
            thumb_areas: Vec::new(),
            lazy,
        }
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn certificate(&self, idx: usize) -> Option<&Certificate> {
        let (si, ci) = *self.cert_locs.get(idx)?;
        self.portfolio.sections[si].certificates.get(ci)
    }

    /// Force-load a certificate's artwork (the lightbox needs it now)
    pub fn ensure_certificate_loaded(&mut self, idx: usize) {
        if let Some(&(si, ci)) = self.cert_locs.get(idx) {
            self.portfolio.sections[si].certificates[ci].ensure_loaded();
        }
    }

    /// Anchor id of the section currently marked active
    pub fn active_section_id(&self) -> Option<&str> {
        self.active_section
            .and_then(|i| self.portfolio.sections.get(i))
            .map(|s| s.id.as_str())
    }

    // ─────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────

    /// Begin a smooth scroll to a section, keeping the breakpoint's
    /// margin of rows above its first line. Unknown targets are a no-op.
    pub fn scroll_to_section(&mut self, id: &str, bp: Breakpoint) -> bool {
        let Some(index) = self.portfolio.section_index(id) else {
            tracing::warn!("nav target {:?} not in document", id);
            return false;
        };
        let Some(span) = self.section_spans.iter().find(|s| s.section == index) else {
            return false;
        };
        self.scroll
            .animate_to(span.top.saturating_sub(bp.scroll_margin()));
        true
    }

    /// Stamp the debounce after externally driven scrolling (keys, mouse)
    pub fn note_scrolled(&mut self, now: Instant) {
        self.debounce.touch(now);
    }

    /// Advance animations and observers one tick
    pub fn tick(&mut self, now: Instant) {
        if self.lines.is_empty() {
            return; // nothing laid out yet
        }
        if self.scroll.tick() {
            self.debounce.touch(now);
        }
        if self.debounce.fire(now, SCROLL_DEBOUNCE) {
            self.recompute_active();
        }
        self.update_reveals(now);
        if self.lazy {
            self.load_visible_artwork();
        }
    }

    /// Pick the section whose span contains the reference point.
    /// Exactly one link ends up active, or none if no span matches.
    fn recompute_active(&mut self) {
        let reference = self.scroll.offset() + ACTIVE_LOOKAHEAD;
        self.active_section = self
            .section_spans
            .iter()
            .find(|s| reference >= s.top && reference < s.top + s.height)
            .map(|s| s.section);
    }

    // ─────────────────────────────────────────────────────────────
    // Observers (reveal + lazy loading)
    // ─────────────────────────────────────────────────────────────

    fn update_reveals(&mut self, now: Instant) {
        let (start, end) = self.scroll.visible_range();
        let window_end = end.saturating_sub(REVEAL_BOTTOM_MARGIN);

        for span in &self.card_spans {
            match self.reveals[span.card] {
                Reveal::Hidden => {
                    let vis_start = span.top.max(start);
                    let vis_end = (span.top + span.height).min(window_end);
                    let visible_rows = vis_end.saturating_sub(vis_start);
                    let needed =
                        (span.height * REVEAL_THRESHOLD_PERCENT).div_ceil(100).max(1);
                    if visible_rows >= needed {
                        self.reveals[span.card] = Reveal::Revealing {
                            until: now + REVEAL_FADE,
                        };
                    }
                }
                Reveal::Revealing { until } if now >= until => {
                    // One-shot: once visible, observation stops for good
                    self.reveals[span.card] = Reveal::Visible;
                }
                _ => {}
            }
        }
    }

    fn load_visible_artwork(&mut self) {
        let (start, end) = self.scroll.visible_range();
        for span in &self.thumb_spans {
            if span.top < end && span.top + THUMB_HEIGHT > start {
                let (si, ci) = self.cert_locs[span.cert];
                let cert = &mut self.portfolio.sections[si].certificates[ci];
                if cert.is_pending() {
                    cert.ensure_loaded();
                }
            }
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Certificate selection
    // ─────────────────────────────────────────────────────────────

    pub fn select_next_cert(&mut self) {
        if self.cert_locs.is_empty() {
            return;
        }
        self.selected_cert = Some(match self.selected_cert {
            Some(i) => (i + 1).min(self.cert_locs.len() - 1),
            None => 0,
        });
    }

    pub fn select_prev_cert(&mut self) {
        if self.cert_locs.is_empty() {
            return;
        }
        self.selected_cert = Some(match self.selected_cert {
            Some(i) => i.saturating_sub(1),
            None => 0,
        });
    }

    /// Map a mouse position to a thumbnail from the last render
    pub fn thumb_at(&self, column: u16, row: u16) -> Option<usize> {
        self.thumb_areas
            .iter()
            .find(|(_, r)| {
                column >= r.x && column < r.right() && row >= r.y && row < r.bottom()
            })
            .map(|(idx, _)| *idx)
    }

    // ─────────────────────────────────────────────────────────────
    // Layout
    // ─────────────────────────────────────────────────────────────

    /// Rebuild the row layout if width or theme changed
    pub(crate) fn ensure_layout(&mut self, width: u16, theme: &Theme) {
        if self.layout_width == width && self.layout_theme == theme.name {
            return;
        }
        self.rebuild_layout(width, theme);
    }

    fn rebuild_layout(&mut self, width: u16, theme: &Theme) {
        self.lines.clear();
        self.section_spans.clear();
        self.card_spans.clear();
        self.thumb_spans.clear();

        let text_width = width.max(12) as usize;
        let mut card_counter = 0usize;
        let mut cert_counter = 0usize;

        for (si, section) in self.portfolio.sections.iter().enumerate() {
            let top = self.lines.len();

            if si > 0 {
                self.lines.push(DocLine::Blank);
            }

            // Section title with a rule underneath
            self.lines.push(DocLine::Text(Line::from(Span::styled(
                section.title.clone(),
                Style::default()
                    .fg(theme.heading)
                    .add_modifier(Modifier::BOLD),
            ))));
            let rule_width = display_width(&section.title).min(text_width);
            self.lines.push(DocLine::Text(Line::from(Span::styled(
                "─".repeat(rule_width),
                Style::default().fg(theme.border),
            ))));
            self.lines.push(DocLine::Blank);

            if section.kind == SectionKind::Hero {
                self.lines.push(DocLine::Hero);
                self.lines.push(DocLine::Blank);
            }

            if !section.body.is_empty() {
                for line in render_markdown(&section.body, theme, text_width) {
                    self.lines.push(DocLine::Text(line));
                }
                self.lines.push(DocLine::Blank);
            }

            for card in &section.cards {
                let card_top = self.lines.len();
                self.lines.push(DocLine::Card {
                    line: Line::from(vec![
                        Span::styled("▪ ".to_string(), Style::default().fg(theme.highlight)),
                        Span::styled(
                            card.title.clone(),
                            Style::default()
                                .fg(theme.card)
                                .add_modifier(Modifier::BOLD),
                        ),
                    ]),
                    card: card_counter,
                });
                if !card.detail.is_empty() {
                    self.lines.push(DocLine::Card {
                        line: Line::from(Span::styled(
                            format!("  {}", card.detail),
                            Style::default().fg(theme.nav_link),
                        )),
                        card: card_counter,
                    });
                }
                self.card_spans.push(CardSpan {
                    card: card_counter,
                    top: card_top,
                    height: self.lines.len() - card_top,
                });
                self.lines.push(DocLine::Blank);
                card_counter += 1;
            }

            for _ in &section.certificates {
                let thumb_top = self.lines.len();
                for row in 0..THUMB_HEIGHT {
                    self.lines.push(DocLine::Thumb {
                        cert: cert_counter,
                        row,
                    });
                }
                self.thumb_spans.push(ThumbSpan {
                    cert: cert_counter,
                    top: thumb_top,
                });
                cert_counter += 1;
            }

            if section.kind == SectionKind::Contact {
                self.lines.push(DocLine::Email);
                self.lines.push(DocLine::Blank);
            }

            self.section_spans.push(SectionSpan {
                section: si,
                top,
                height: self.lines.len() - top,
            });
        }

        self.layout_width = width;
        self.layout_theme = theme.name;

        // The current section is recomputed immediately on (re)layout
        self.recompute_active();
    }

    /// Build one row of a certificate thumbnail box
    fn thumb_line(&self, cert_idx: usize, row: usize, theme: &Theme) -> Line<'static> {
        let (si, ci) = self.cert_locs[cert_idx];
        let cert = &self.portfolio.sections[si].certificates[ci];
        let selected = self.selected_cert == Some(cert_idx);

        let border_style = if selected {
            Style::default()
                .fg(theme.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.border)
        };

        match row {
            0 => {
                let title = truncate_to_width(&cert.title, THUMB_INNER.saturating_sub(4));
                let fill = "─".repeat(THUMB_INNER.saturating_sub(display_width(title) + 2));
                Line::from(Span::styled(
                    format!("╭─ {} {}╮", title, fill),
                    border_style,
                ))
            }
            r if r == THUMB_HEIGHT - 2 => Line::from(Span::styled(
                format!("╰{}╯", "─".repeat(THUMB_INNER + 2)),
                border_style,
            )),
            r if r == THUMB_HEIGHT - 1 => Line::raw(""),
            r => {
                // Preview rows: artwork excerpt, loading marker, or placeholder
                let (content, style) = match (cert.art_text(), cert.is_pending()) {
                    (Some(text), _) => {
                        let excerpt = text
                            .lines()
                            .filter(|l| !l.trim().is_empty())
                            .nth(r)
                            .unwrap_or("");
                        (
                            truncate_to_width(excerpt, THUMB_INNER).to_string(),
                            Style::default().fg(theme.card),
                        )
                    }
                    (None, true) => (
                        if r == 2 { "…".to_string() } else { String::new() },
                        Style::default().fg(theme.placeholder),
                    ),
                    (None, false) => match r {
                        1 => (
                            ARTWORK_PLACEHOLDER.to_string(),
                            Style::default().fg(theme.placeholder),
                        ),
                        2 => (
                            truncate_to_width(cert.alt_text(), THUMB_INNER).to_string(),
                            Style::default()
                                .fg(theme.placeholder)
                                .add_modifier(Modifier::ITALIC),
                        ),
                        _ => (String::new(), Style::default()),
                    },
                };
                let pad = " ".repeat(THUMB_INNER.saturating_sub(display_width(&content)));
                Line::from(vec![
                    Span::styled("│ ".to_string(), border_style),
                    Span::styled(content, style),
                    Span::styled(format!("{} │", pad), border_style),
                ])
            }
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Render
    // ─────────────────────────────────────────────────────────────

    #[allow(clippy::too_many_arguments)]
    pub fn render(
        &mut self,
        f: &mut Frame,
        area: Rect,
        theme: &Theme,
        typewriter: &Typewriter,
        contact: &mut ContactLink,
        blink_on: bool,
        focused: bool,
    ) {
        let border_color = if focused {
            theme.border_focused
        } else {
            theme.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(border_color))
            .title(format!(" {} ", self.portfolio.owner));
        let inner = block.inner(area);
        f.render_widget(block, area);

        // One column of breathing room on each side
        let padded = Rect {
            x: inner.x + 1,
            y: inner.y,
            width: inner.width.saturating_sub(2),
            height: inner.height,
        };

        self.ensure_layout(padded.width, theme);
        self.scroll
            .update_dimensions(self.lines.len(), padded.height as usize);

        self.thumb_areas.clear();
        contact.last_area = None;

        let (start, end) = self.scroll.visible_range();
        let mut rows: Vec<Line<'static>> = Vec::with_capacity(end - start);

        for (vi, doc_line) in self.lines[start..end].iter().enumerate() {
            let screen_y = padded.y + vi as u16;
            let line = match doc_line {
                DocLine::Text(line) => line.clone(),
                DocLine::Blank => Line::raw(""),
                DocLine::Hero => typewriter.line(theme, blink_on),
                DocLine::Email => {
                    contact.last_area = Some(Rect::new(padded.x, screen_y, padded.width, 1));
                    contact.display_line(theme)
                }
                DocLine::Card { line, card } => match self.reveals[*card] {
                    Reveal::Hidden => Line::raw(""),
                    Reveal::Revealing { .. } => dim_line(line, theme),
                    Reveal::Visible => line.clone(),
                },
                DocLine::Thumb { cert, row } => {
                    let width = ((THUMB_INNER + 4) as u16).min(padded.width);
                    let extends_last =
                        matches!(self.thumb_areas.last(), Some((idx, _)) if idx == cert);
                    if extends_last {
                        if let Some((_, rect)) = self.thumb_areas.last_mut() {
                            rect.height += 1;
                        }
                    } else {
                        self.thumb_areas
                            .push((*cert, Rect::new(padded.x, screen_y, width, 1)));
                    }
                    self.thumb_line(*cert, *row, theme)
                }
            };
            rows.push(line);
        }

        f.render_widget(Paragraph::new(Text::from(rows)), padded);
        render_scrollbar(f, inner, &self.scroll, ScrollbarStyle::Minimal);
    }

    // ─────────────────────────────────────────────────────────────
    // Test access
    // ─────────────────────────────────────────────────────────────

    #[cfg(test)]
    fn section_top(&self, id: &str) -> Option<usize> {
        let index = self.portfolio.section_index(id)?;
        self.section_spans
            .iter()
            .find(|s| s.section == index)
            .map(|s| s.top)
    }

    #[cfg(test)]
    fn reveal_state(&self, card: usize) -> Reveal {
        self.reveals[card]
    }
}

/// Clone a line with every span dimmed to the fade color
fn dim_line(line: &Line<'static>, theme: &Theme) -> Line<'static> {
    Line::from(
        line.spans
            .iter()
            .map(|s| {
                Span::styled(
                    s.content.clone(),
                    Style::default()
                        .fg(theme.card_dim)
                        .add_modifier(Modifier::DIM),
                )
            })
            .collect::<Vec<_>>(),
    )
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait Implementations
// ═══════════════════════════════════════════════════════════════════════════

impl Component for ContentPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Content
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        // Data-free fallback; the app renders through the stateful method
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(ctx.theme.border_type)
            .border_style(Style::default().fg(ctx.theme.border))
            .title(format!(" {} ", self.portfolio.owner));
        f.render_widget(block, area);
    }
}

impl Scrollable for ContentPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Interactive for ContentPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up().into(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down().into(),
            KeyCode::PageUp => self.page_up().into(),
            KeyCode::PageDown => self.page_down().into(),
            KeyCode::Home => self.scroll_to_top().into(),
            KeyCode::End => self.scroll_to_bottom().into(),
            KeyCode::Left => {
                self.select_prev_cert();
                Handled::Yes
            }
            KeyCode::Right => {
                self.select_next_cert();
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:desplazar  ←→:certificado  Enter:abrir")
    }
}

impl Copyable for ContentPanel {
    /// Readable text of the active section
    fn copy_text(&self) -> Option<String> {
        let section = &self.portfolio.sections[self.active_section?];
        let mut out = format!("{}\n\n{}", section.title, section.body);
        for card in &section.cards {
            out.push_str(&format!("\n- {}: {}", card.title, card.detail));
        }
        for cert in &section.certificates {
            out.push_str(&format!("\n- {}", cert.title));
        }
        Some(out)
    }

    /// Selected certificate as JSON
    fn copy_data(&self) -> Option<String> {
        let cert = self.certificate(self.selected_cert?)?;
        serde_json::to_string_pretty(cert).ok()
    }

    fn copy_description(&self) -> String {
        "sección".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::ArtworkState;

    const WIDTH: u16 = 76;
    const VIEWPORT: usize = 18;

    fn panel() -> ContentPanel {
        let mut panel = ContentPanel::new(Portfolio::demo(), true);
        panel.ensure_layout(WIDTH, &Theme::dark());
        let total = panel.lines.len();
        panel.scroll_state_mut().update_dimensions(total, VIEWPORT);
        panel
    }

    fn settle(panel: &mut ContentPanel, mut now: Instant) -> Instant {
        // Run animation plus the debounce quiet period to completion
        for _ in 0..200 {
            now += Duration::from_millis(50);
            panel.tick(now);
        }
        now
    }

    #[test]
    fn layout_gives_every_section_a_span() {
        let panel = panel();
        assert_eq!(panel.section_spans.len(), 6);
        // Spans tile the document without gaps
        for pair in panel.section_spans.windows(2) {
            assert_eq!(pair[0].top + pair[0].height, pair[1].top);
        }
    }

    #[test]
    fn navigation_lands_margin_rows_above_the_section() {
        let mut panel = panel();
        let top = panel.section_top("contacto").unwrap();
        let bp = Breakpoint::from_width(120);

        assert!(panel.scroll_to_section("contacto", bp));
        settle(&mut panel, Instant::now());

        let expected = (top - bp.scroll_margin()).min(
            panel.lines.len() - VIEWPORT, // clamped to document end
        );
        assert_eq!(panel.scroll_offset(), expected);
    }

    #[test]
    fn narrow_margin_differs_from_wide() {
        assert_eq!(Breakpoint::from_width(80).scroll_margin(), 2);
        assert_eq!(Breakpoint::from_width(120).scroll_margin(), 3);
    }

    #[test]
    fn unknown_nav_target_is_a_no_op() {
        let mut panel = panel();
        assert!(!panel.scroll_to_section("no-such-section", Breakpoint::Wide));
        assert!(!panel.scroll_state().is_animating());
    }

    #[test]
    fn active_section_updates_only_after_the_quiet_period() {
        let mut panel = panel();
        let t0 = Instant::now();
        panel.tick(t0); // initial state from layout
        let initial = panel.active_section;

        let target = panel.section_top("educacion").unwrap();
        panel.scroll_state_mut().page_down();
        while panel.scroll_offset() + VIEWPORT < target + ACTIVE_LOOKAHEAD {
            panel.scroll_state_mut().page_down();
        }
        panel.note_scrolled(t0);

        // Inside the quiet period nothing recomputes
        panel.tick(t0 + Duration::from_millis(50));
        assert_eq!(panel.active_section, initial);

        // After it, the section under the reference point wins
        panel.tick(t0 + Duration::from_millis(150));
        assert_ne!(panel.active_section, initial);
    }

    #[test]
    fn exactly_one_section_is_active() {
        let mut panel = panel();
        panel.recompute_active();
        // The reference point can only land inside a single span
        let reference = panel.scroll_offset() + ACTIVE_LOOKAHEAD;
        let matches = panel
            .section_spans
            .iter()
            .filter(|s| reference >= s.top && reference < s.top + s.height)
            .count();
        assert_eq!(matches, 1);
        assert!(panel.active_section.is_some());
    }

    #[test]
    fn cards_reveal_once_and_never_hide_again() {
        let mut panel = panel();
        let t0 = Instant::now();

        // Skills cards sit below the initial viewport
        let skills_card = 0;
        assert_eq!(panel.reveal_state(skills_card), Reveal::Hidden);

        // Scroll the skills section into view
        panel.scroll_to_section("habilidades", Breakpoint::Wide);
        let now = settle(&mut panel, t0);
        assert_eq!(panel.reveal_state(skills_card), Reveal::Visible);

        // Scrolling back never re-hides
        panel.scroll_state_mut().scroll_to_top();
        panel.note_scrolled(now);
        settle(&mut panel, now);
        assert_eq!(panel.reveal_state(skills_card), Reveal::Visible);
    }

    #[test]
    fn cards_below_the_margin_stay_hidden() {
        let mut panel = panel();
        let t0 = Instant::now();
        panel.tick(t0);

        let span = &panel.card_spans[0];
        // Card entirely below the reveal window (inside the bottom margin)
        assert!(span.top >= VIEWPORT.saturating_sub(REVEAL_BOTTOM_MARGIN));
        assert_eq!(panel.reveal_state(0), Reveal::Hidden);
    }

    #[test]
    fn reveal_passes_through_a_fade_interval() {
        let mut panel = panel();
        let t0 = Instant::now();

        panel.scroll_to_section("habilidades", Breakpoint::Wide);
        while panel.scroll_state().is_animating() {
            panel.scroll_state_mut().tick();
        }
        panel.tick(t0);
        assert!(matches!(
            panel.reveal_state(0),
            Reveal::Revealing { .. }
        ));

        panel.tick(t0 + REVEAL_FADE);
        assert_eq!(panel.reveal_state(0), Reveal::Visible);
    }

    #[test]
    fn lazy_artwork_loads_when_scrolled_into_view() {
        let path = std::env::temp_dir().join("folio-content-lazy.txt");
        std::fs::write(&path, "[art]").unwrap();

        let mut portfolio = Portfolio::demo();
        let cert = &mut portfolio.sections[4].certificates[0];
        cert.artwork = Some(path.clone());
        cert.art = ArtworkState::Deferred;

        let mut panel = ContentPanel::new(portfolio, true);
        panel.ensure_layout(WIDTH, &Theme::dark());
        let total = panel.lines.len();
        panel.scroll_state_mut().update_dimensions(total, VIEWPORT);

        assert!(panel.certificate(0).unwrap().is_pending());

        panel.scroll_to_section("certificados", Breakpoint::Wide);
        settle(&mut panel, Instant::now());
        assert_eq!(panel.certificate(0).unwrap().art_text(), Some("[art]"));

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn eager_mode_loads_artwork_at_construction() {
        let mut portfolio = Portfolio::demo();
        let cert = &mut portfolio.sections[4].certificates[0];
        cert.artwork = Some("/nope/missing.txt".into());
        cert.art = ArtworkState::Deferred;

        let panel = ContentPanel::new(portfolio, false);
        // Loaded (and failed) immediately, without any scrolling
        assert!(!panel.certificate(0).unwrap().is_pending());
    }

    #[test]
    fn certificate_selection_clamps_at_both_ends() {
        let mut panel = panel();
        panel.select_prev_cert();
        assert_eq!(panel.selected_cert, Some(0));
        panel.select_next_cert();
        panel.select_next_cert();
        panel.select_next_cert();
        assert_eq!(panel.selected_cert, Some(1)); // demo has 2 certificates
    }

    #[test]
    fn copy_text_covers_the_active_section() {
        let mut panel = panel();
        panel.active_section = panel.portfolio.section_index("habilidades");
        let text = panel.copy_text().unwrap();
        assert!(text.contains("Habilidades"));
        assert!(text.contains("JavaScript"));
    }

    #[test]
    fn copy_data_serializes_the_selected_certificate() {
        let mut panel = panel();
        assert!(panel.copy_data().is_none());
        panel.selected_cert = Some(0);
        let json = panel.copy_data().unwrap();
        assert!(json.contains("\"title\""));
        assert!(json.contains("Desarrollo Web"));
    }
}
