//! Core component trait - the foundation of the UI system
//!
//! Every UI element that can be rendered implements `Component`.
//! This trait provides identity and rendering capability.

use crate::theme::Theme;
use ratatui::{layout::Rect, Frame};

/// Unique identifier for a component
///
/// Used for focus tracking (which component receives input) and
/// event routing.
#[allow(dead_code)] // Non-focusable ids are identity-only infrastructure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    /// Collapsible navigation panel
    Sidebar,
    /// Scrollable section document
    Content,
    /// Hero name animation (non-focusable)
    Typewriter,
    /// Toast notification (non-focusable)
    Toast,
    /// Title bar (non-focusable)
    TitleBar,
    /// Status bar (non-focusable)
    StatusBar,
}

impl ComponentId {
    /// Whether this component can receive focus
    #[allow(dead_code)]
    pub fn is_focusable(&self) -> bool {
        matches!(self, ComponentId::Sidebar | ComponentId::Content)
    }
}

/// Immutable context passed to components during rendering
///
/// Components only see what they need during render - no access to
/// mutable app state, which keeps rendering free of side effects.
#[allow(dead_code)] // Data-carrying panels render via module-level render()
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// Color theme for styling
    pub theme: &'a Theme,

    /// Which component currently has focus
    pub focus: ComponentId,

    /// Animation frame counter (for the blinking cursor)
    pub animation_frame: usize,
}

#[allow(dead_code)]
impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a Theme, focus: ComponentId, animation_frame: usize) -> Self {
        Self {
            theme,
            focus,
            animation_frame,
        }
    }

    /// Check if a component is currently focused
    pub fn is_focused(&self, id: ComponentId) -> bool {
        self.focus == id
    }

    /// Whether blink-styled glyphs are in their visible phase this frame
    pub fn blink_on(&self) -> bool {
        (self.animation_frame / 10) % 2 == 0
    }
}

/// Base trait for all UI components
///
/// A component is anything that can render itself to the terminal.
/// This is the minimum contract - most components will also implement
/// additional traits like `Scrollable` or `Copyable`.
pub trait Component {
    /// Unique identifier for this component
    fn id(&self) -> ComponentId;

    /// Render the component to the given area
    #[allow(dead_code)] // Panels with data dependencies render via module-level render()
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext);
}
