// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard/mouse input, timer ticks)
// - Layered input dispatch: modal → open sidebar → global → content

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod layout;
pub mod markdown;
pub mod modal;
pub mod scroll;
pub mod traits;
pub mod views;

use crate::config::Config;
use crate::logging::LogBuffer;
use crate::portfolio::Portfolio;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::{Modal, ModalAction};
use ratatui::layout::{Position, Rect};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Run the TUI
///
/// This function sets up the terminal, runs the event loop, and cleans up
/// when done. All timed behaviors are driven by the tick inside the loop.
pub async fn run_tui(config: Config, portfolio: Portfolio, log_buffer: LogBuffer) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::with_config(config, portfolio, log_buffer, Instant::now());

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Two event sources multiplexed with tokio::select!:
/// 1. Keyboard/mouse input (navigation and commands)
/// 2. A 50 ms tick driving every timed behavior (typewriter, smooth
///    scroll, reveal fades, debounce, toast expiry)
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(50));

    loop {
        // Draw the UI
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        // Wait for whichever event source fires first
        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            // Periodic tick for animations and deadlines
            _ = tick_interval.tick() => {
                app.tick(Instant::now());
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal → Open sidebar → Global → Content
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Layer 1: Modal captures all input when active
    if handle_modal_input(app, &key_event) {
        return;
    }

    // Layer 2: Open sidebar traps focus (and locks page scrolling)
    if handle_sidebar_input(app, &key_event) {
        return;
    }

    // Layer 3: Global keys (work regardless of focus)
    if handle_global_keys(app, &key_event) {
        return;
    }

    let key = key_event.code;

    // Layer 4: Content panel
    match key_event.kind {
        KeyEventKind::Press => {
            if let KeyCode::Enter | KeyCode::Char(' ') = key {
                if app.handle_key_press(key) {
                    // Enter/Space on the selected thumbnail opens the lightbox
                    if let Some(cert) = app.content.selected_cert {
                        app.open_lightbox(cert);
                    }
                }
                return;
            }

            // Navigation keys - use state tracking for hold-to-repeat
            if !app.handle_key_press(key) {
                return;
            }
            app.dispatch_to_content(key_event, Instant::now());
        }
        KeyEventKind::Release => {
            app.handle_key_release(key);
        }
        _ => {}
    }
}

/// Handle modal input - returns true if the modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(ref mut modal) = app.modal else {
        return false;
    };

    // Always process Release events to keep InputHandler in sync.
    // Without this, keys get stuck in "pressed" state after modal closes.
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return true;
    }
    if key_event.kind != KeyEventKind::Press {
        return true;
    }

    match modal.handle_input(key_event.code) {
        ModalAction::None => {}
        ModalAction::Close => app.close_modal(),
        ModalAction::ScrollUp => app.logs_scroll_up(),
        ModalAction::ScrollDown => app.logs_scroll_down(),
        ModalAction::CopyData => app.copy_certificate(),
    }

    true // Modal absorbed the input
}

/// Handle input while the sidebar is open - returns true if absorbed
///
/// Every key is absorbed: Tab cycles the focus trap, Escape closes, and
/// anything that would scroll the content is swallowed (scroll lock).
fn handle_sidebar_input(app: &mut App, key_event: &KeyEvent) -> bool {
    if !app.sidebar.is_open() {
        return false;
    }

    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return true;
    }
    if key_event.kind != KeyEventKind::Press {
        return true;
    }

    let key = key_event.code;
    if !app.handle_key_press(key) {
        return true;
    }

    match key {
        KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('M') => app.sidebar.close(),
        KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => app.sidebar.focus_next(),
        KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => app.sidebar.focus_prev(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(id) = app.sidebar.focused_section().map(str::to_string) {
                app.navigate_to(&id);
            }
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        _ => {}
    }

    true
}

/// Handle global keys - returns true if handled
/// Uses InputHandler for debounce (StateChange behavior = trigger once per press)
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    if key_event.kind != KeyEventKind::Press {
        return false;
    }

    let key = key_event.code;

    match key {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            if app.handle_key_press(key) {
                app.should_quit = true;
            }
            true
        }
        // Menu toggle
        KeyCode::Char('m') | KeyCode::Char('M') => {
            if app.handle_key_press(key) {
                app.sidebar.toggle();
            }
            true
        }
        // Help modal
        KeyCode::Char('?') => {
            if app.handle_key_press(key) {
                app.modal = Some(Modal::help());
            }
            true
        }
        // Logs modal (opens at the most recent entries)
        KeyCode::Char('l') => {
            if app.handle_key_press(key) {
                app.logs_scroll = app.log_buffer.len();
                app.modal = Some(Modal::logs());
            }
            true
        }
        // Theme cycle
        KeyCode::Char('t') => {
            if app.handle_key_press(key) {
                app.cycle_theme();
            }
            true
        }
        // Copy contact email
        KeyCode::Char('e') => {
            if app.handle_key_press(key) {
                app.copy_email(Instant::now());
            }
            true
        }
        // Copy to clipboard: y = readable section, Y = certificate JSON
        KeyCode::Char('y') => {
            if app.handle_key_press(key) {
                app.copy_section();
            }
            true
        }
        KeyCode::Char('Y') => {
            if app.handle_key_press(key) {
                app.copy_certificate();
            }
            true
        }
        _ => false,
    }
}

/// Handle mouse input
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    match mouse_event.kind {
        MouseEventKind::ScrollUp => {
            if matches!(app.modal, Some(Modal::Logs)) {
                app.logs_scroll_up();
            } else {
                // Blocked while the sidebar or a modal is open (scroll lock)
                app.wheel_content(false, Instant::now());
            }
        }
        MouseEventKind::ScrollDown => {
            if matches!(app.modal, Some(Modal::Logs)) {
                app.logs_scroll_down();
            } else {
                app.wheel_content(true, Instant::now());
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            handle_click(app, mouse_event.column, mouse_event.row);
        }
        _ => {}
    }
}

/// Route a left click through the same layers as the keyboard
fn handle_click(app: &mut App, column: u16, row: u16) {
    // Lightbox: close control or backdrop outside the overlay closes
    if matches!(app.modal, Some(Modal::Lightbox(_))) {
        let on_close = app
            .lightbox_close_area
            .is_some_and(|r| contains(r, column, row));
        let outside = app
            .lightbox_area
            .is_some_and(|r| !contains(r, column, row));
        if on_close || outside {
            app.close_modal();
        }
        return;
    }
    if app.modal.is_some() {
        return;
    }

    // Open sidebar: click a link to navigate, click the backdrop to close
    if app.sidebar.is_open() {
        if let Some(link) = app.sidebar.link_at(column, row) {
            app.sidebar.focused_link = Some(link);
            if let Some(id) = app.sidebar.focused_section().map(str::to_string) {
                app.navigate_to(&id);
            }
        } else if app.sidebar.last_area.is_some_and(|r| !contains(r, column, row)) {
            app.sidebar.close();
        }
        return;
    }

    // Content affordances
    if app.contact.hit(column, row) {
        app.copy_email(Instant::now());
        return;
    }
    if let Some(cert) = app.content.thumb_at(column, row) {
        app.open_lightbox(cert);
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(Position::new(column, row))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::traits::Scrollable;

    fn app() -> App {
        let mut app = App::with_config(
            Config::default(),
            Portfolio::demo(),
            LogBuffer::new(),
            Instant::now(),
        );
        app.last_width = 120;
        // Rects as the previous render would have recorded them
        app.lightbox_area = Some(Rect::new(20, 5, 60, 20));
        app.lightbox_close_area = Some(Rect::new(21, 23, 58, 1));
        app
    }

    #[test]
    fn clicking_the_backdrop_closes_the_lightbox_and_unlocks_scrolling() {
        let mut app = app();
        app.content.scroll_state_mut().update_dimensions(100, 10);
        app.open_lightbox(0);

        // While the overlay is up, the wheel is locked
        app.wheel_content(true, Instant::now());
        assert_eq!(app.content.scroll_offset(), 0);

        // Click outside the overlay: closes
        handle_click(&mut app, 1, 1);
        assert!(app.modal.is_none());

        // Scrolling works again
        app.wheel_content(true, Instant::now());
        assert_eq!(app.content.scroll_offset(), 1);
    }

    #[test]
    fn clicking_inside_the_artwork_keeps_the_lightbox_open() {
        let mut app = app();
        app.open_lightbox(0);
        handle_click(&mut app, 30, 10);
        assert!(app.modal.is_some());
    }

    #[test]
    fn clicking_the_close_control_closes_the_lightbox() {
        let mut app = app();
        app.open_lightbox(0);
        handle_click(&mut app, 40, 23);
        assert!(app.modal.is_none());
    }

    #[test]
    fn clicking_the_sidebar_backdrop_closes_it() {
        let mut app = app();
        app.sidebar.open();
        app.sidebar.last_area = Some(Rect::new(0, 3, 28, 20));
        handle_click(&mut app, 60, 10);
        assert!(!app.sidebar.is_open());
    }

    #[test]
    fn escape_in_an_open_sidebar_closes_it_and_absorbs_the_key() {
        let mut app = app();
        app.sidebar.open();
        let esc = KeyEvent::from(KeyCode::Esc);
        assert!(handle_sidebar_input(&mut app, &esc));
        assert!(!app.sidebar.is_open());
    }
}
