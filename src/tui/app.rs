// TUI application state
//
// App owns the independently constructed behavior components and routes
// between them. Each component owns only the state it manages; App fans the
// tick out and holds the cross-cutting slots (modal, toast). Nothing here
// reaches into a component's internals beyond its public contract.

use crate::config::Config;
use crate::logging::LogBuffer;
use crate::portfolio::Portfolio;
use crate::theme::{Theme, ThemeKind};
use crate::tui::clipboard;
use crate::tui::components::contact::{ContactLink, CopyOutcome};
use crate::tui::components::content::ContentPanel;
use crate::tui::components::sidebar::SidebarPanel;
use crate::tui::components::typewriter::Typewriter;
use crate::tui::components::Toast;
use crate::tui::input::InputHandler;
use crate::tui::layout::Breakpoint;
use crate::tui::modal::Modal;
use crate::tui::traits::{Copyable, Interactive, Scrollable};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

/// Main application state for the TUI
pub struct App {
    pub config: Config,
    pub theme: Theme,
    pub theme_kind: ThemeKind,

    /// Collapsible navigation panel
    pub sidebar: SidebarPanel,

    /// Scrollable section document
    pub content: ContentPanel,

    /// Hero name animation
    pub typewriter: Typewriter,

    /// Copy-email affordance
    pub contact: ContactLink,

    /// Active overlay; captures all input while set
    pub modal: Option<Modal>,

    /// Transient confirmation overlay
    pub toast: Option<Toast>,

    /// Scroll offset of the logs modal
    pub logs_scroll: usize,

    /// Log buffer shared with the tracing layer
    pub log_buffer: LogBuffer,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Terminal width from the last frame; drives breakpoint decisions
    pub last_width: u16,

    /// Animation frame counter (cursor blink)
    pub animation_frame: usize,

    /// Lightbox rects from the last render, for click-outside detection
    pub lightbox_area: Option<Rect>,
    pub lightbox_close_area: Option<Rect>,

    /// Input handler for flexible key behavior
    input_handler: InputHandler,
}

impl App {
    pub fn with_config(
        config: Config,
        portfolio: Portfolio,
        log_buffer: LogBuffer,
        now: Instant,
    ) -> Self {
        let theme_kind = ThemeKind::from_name(&config.theme);

        let mut typewriter = Typewriter::new(
            portfolio.typing_text.clone(),
            Duration::from_millis(config.typing_speed_ms),
            Duration::from_millis(config.typing_delay_ms),
        );
        if typewriter.has_text() {
            typewriter.start(now);
        } else {
            tracing::warn!("document has no typing text, hero animation skipped");
        }

        let contact = ContactLink::new(portfolio.contact_email());
        let sidebar = SidebarPanel::new(&portfolio);
        let content = ContentPanel::new(portfolio, config.lazy_artwork);

        Self {
            config,
            theme: theme_kind.theme(),
            theme_kind,
            sidebar,
            content,
            typewriter,
            contact,
            modal: None,
            toast: None,
            logs_scroll: 0,
            log_buffer,
            should_quit: false,
            last_width: 0,
            animation_frame: 0,
            lightbox_area: None,
            lightbox_close_area: None,
            input_handler: InputHandler::default(),
        }
    }

    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint::from_width(self.last_width)
    }

    /// Advance every timed behavior by one tick
    pub fn tick(&mut self, now: Instant) {
        self.animation_frame = self.animation_frame.wrapping_add(1);

        if self.typewriter.tick(now) {
            tracing::debug!("hero name animation complete");
        }

        self.content.tick(now);
        self.sidebar.set_active(self.content.active_section_id());
        self.contact.tick(now);

        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
        }
    }

    /// Whether blink-styled glyphs are in their visible phase this frame
    pub fn blink_on(&self) -> bool {
        (self.animation_frame / 10) % 2 == 0
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message, Instant::now()));
    }

    // ─────────────────────────────────────────────────────────────
    // Navigation and overlays
    // ─────────────────────────────────────────────────────────────

    /// Navigate to a section: smooth scroll, and on narrow terminals
    /// close the sidebar behind it
    pub fn navigate_to(&mut self, section_id: &str) {
        let bp = self.breakpoint();
        self.content.scroll_to_section(section_id, bp);
        if self.sidebar.is_open() && bp.is_narrow() {
            self.sidebar.close();
        }
    }

    /// Open the lightbox for a certificate. The overlay slot is reused;
    /// opening while open just swaps what it shows (last activation wins).
    pub fn open_lightbox(&mut self, cert: usize) {
        if self.content.certificate(cert).is_none() {
            return;
        }
        self.content.ensure_certificate_loaded(cert);
        self.content.selected_cert = Some(cert);
        self.modal = Some(Modal::lightbox(cert));
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
        self.lightbox_area = None;
        self.lightbox_close_area = None;
    }

    pub fn cycle_theme(&mut self) {
        self.theme_kind = self.theme_kind.next();
        self.theme = self.theme_kind.theme();
    }

    // ─────────────────────────────────────────────────────────────
    // Clipboard affordances
    // ─────────────────────────────────────────────────────────────

    /// The contact link: copy, confirm, or fall back to the mail client
    pub fn copy_email(&mut self, now: Instant) {
        match self.contact.activate(now) {
            CopyOutcome::Copied => {} // the link itself shows the confirmation
            CopyOutcome::FallbackNavigation => self.show_toast("Abriendo cliente de correo…"),
            CopyOutcome::Unavailable => {}
        }
    }

    /// y: copy the active section as readable text
    pub fn copy_section(&mut self) {
        if let Some(text) = self.content.copy_text() {
            if clipboard::copy_to_clipboard(&text).is_ok() {
                self.show_toast(format!("✓ Copiada {}", self.content.copy_description()));
            } else {
                self.show_toast("✗ No se pudo copiar");
            }
        }
    }

    /// Y: copy the selected certificate as JSON
    pub fn copy_certificate(&mut self) {
        if let Some(json) = self.content.copy_data() {
            if clipboard::copy_to_clipboard(&json).is_ok() {
                self.show_toast("✓ Certificado copiado (JSON)");
            } else {
                self.show_toast("✗ No se pudo copiar");
            }
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Input plumbing
    // ─────────────────────────────────────────────────────────────

    /// Handle a key press - returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    /// Handle a key release
    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    /// Route a key to the content panel, stamping the scroll debounce
    /// when the offset actually moved
    pub fn dispatch_to_content(&mut self, key_event: KeyEvent, now: Instant) {
        let before = self.content.scroll_offset();
        self.content.handle_key(key_event);
        if self.content.scroll_offset() != before {
            self.content.note_scrolled(now);
        }
    }

    /// Scroll the content by mouse wheel (blocked while sidebar or modal
    /// is open - that is the scroll lock)
    pub fn wheel_content(&mut self, down: bool, now: Instant) {
        if self.sidebar.is_open() || self.modal.is_some() {
            return;
        }
        let key = if down { KeyCode::Down } else { KeyCode::Up };
        self.dispatch_to_content(KeyEvent::from(key), now);
    }

    pub fn logs_scroll_up(&mut self) {
        self.logs_scroll = self.logs_scroll.saturating_sub(1);
    }

    pub fn logs_scroll_down(&mut self) {
        let max = self.log_buffer.len().saturating_sub(1);
        self.logs_scroll = (self.logs_scroll + 1).min(max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(width: u16) -> App {
        let mut app = App::with_config(
            Config::default(),
            Portfolio::demo(),
            LogBuffer::new(),
            Instant::now(),
        );
        app.last_width = width;
        app
    }

    #[test]
    fn navigating_on_narrow_terminals_closes_the_sidebar() {
        let mut app = app(80);
        app.sidebar.open();
        app.navigate_to("contacto");
        assert!(!app.sidebar.is_open());
    }

    #[test]
    fn navigating_on_wide_terminals_keeps_the_sidebar_open() {
        let mut app = app(120);
        app.sidebar.open();
        app.navigate_to("contacto");
        assert!(app.sidebar.is_open());
    }

    #[test]
    fn opening_the_lightbox_twice_last_activation_wins() {
        let mut app = app(120);
        app.open_lightbox(0);
        app.open_lightbox(1);
        assert_eq!(
            app.modal.as_ref().and_then(|m| m.certificate_index()),
            Some(1)
        );
    }

    #[test]
    fn lightbox_on_unknown_certificate_is_a_no_op() {
        let mut app = app(120);
        app.open_lightbox(99);
        assert!(app.modal.is_none());
    }

    #[test]
    fn wheel_is_locked_while_the_sidebar_is_open() {
        let mut app = app(120);
        app.content.scroll_state_mut().update_dimensions(100, 10);

        // Open sidebar: page scroll is locked
        app.sidebar.open();
        app.wheel_content(true, Instant::now());
        assert_eq!(app.content.scroll_offset(), 0);

        // Closed again: the same wheel input scrolls
        app.sidebar.close();
        app.wheel_content(true, Instant::now());
        assert_eq!(app.content.scroll_offset(), 1);
    }

    #[test]
    fn theme_cycles_through_all_kinds() {
        let mut app = app(120);
        let start = app.theme_kind;
        for _ in 0..ThemeKind::all().len() {
            app.cycle_theme();
        }
        assert_eq!(app.theme_kind, start);
    }
}
