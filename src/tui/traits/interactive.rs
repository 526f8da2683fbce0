//! Interactive trait for components that handle keyboard input
//!
//! Components that can receive and process keyboard events implement
//! this trait. The App routes input to the focused component.

use super::Component;
use crossterm::event::KeyEvent;

/// Result of handling a key event
///
/// Tells the App whether the component consumed the event or
/// if it should bubble up for global handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed by the component
    Yes,
    /// Event was not handled, should bubble up
    No,
}

impl Handled {
    pub fn from_bool(handled: bool) -> Self {
        if handled {
            Self::Yes
        } else {
            Self::No
        }
    }

    #[allow(dead_code)]
    pub fn was_handled(self) -> bool {
        self == Self::Yes
    }
}

impl From<bool> for Handled {
    fn from(handled: bool) -> Self {
        Self::from_bool(handled)
    }
}

/// Trait for components that handle keyboard input
///
/// When a key event arrives, the App routes it to the focused component.
/// The component decides whether to handle it or let it bubble up.
///
/// # Event Flow
///
/// ```text
/// KeyEvent
///    │
///    ▼
/// Modal (absorbs everything while open)
///    │
///    ▼
/// Open sidebar (focus trap: absorbs everything while open)
///    │
///    ▼
/// App (global handlers: ?, q, m, t, e, y)
///    │
///    ▼
/// Focused Component (via Interactive trait)
/// ```
pub trait Interactive: Component {
    /// Handle a key event
    ///
    /// Returns `Handled::Yes` if the component consumed the event,
    /// `Handled::No` if it should bubble up to the App.
    fn handle_key(&mut self, key: KeyEvent) -> Handled;

    /// Whether this component can receive focus
    fn focusable(&self) -> bool {
        true
    }

    /// Hint text for the status bar when this component is focused
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}
