//! Component trait system for the TUI architecture
//!
//! Instead of App knowing how to render/scroll/copy for every panel,
//! components declare their own capabilities through traits. App stays an
//! orchestrator: it routes events to the focused component and composes
//! render calls.
//!
//! # Traits Overview
//!
//! - [`Component`] - Base trait: render + identity
//! - [`Scrollable`] - Components with scrollable content
//! - [`Copyable`] - Components that provide clipboard content
//! - [`Interactive`] - Components that handle keyboard input

mod component;
mod copyable;
mod interactive;
mod scrollable;

pub use component::{Component, ComponentId, RenderContext};
pub use copyable::Copyable;
pub use interactive::{Handled, Interactive};
pub use scrollable::Scrollable;
