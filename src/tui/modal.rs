// Modal system for TUI overlays
//
// Self-contained modal dialogs that handle their own input and return actions.
// App just holds Option<Modal>, input routing acts on returned ModalAction.
// While a modal is open it captures every key, which is also what keeps the
// background from scrolling underneath it.

use crossterm::event::KeyCode;

/// Actions returned by modal input handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    /// Close the modal
    Close,
    /// Scroll up in content
    ScrollUp,
    /// Scroll down in content
    ScrollDown,
    /// Copy the shown certificate (JSON format)
    CopyData,
}

/// Available modal types
#[derive(Debug, Clone)]
pub enum Modal {
    /// Help overlay - shows keyboard shortcuts
    Help,
    /// Captured log entries
    Logs,
    /// Certificate lightbox - enlarged artwork.
    /// Stores the flattened index of the certificate being viewed;
    /// keyboard focus sits on the close control.
    Lightbox(usize),
}

impl Modal {
    /// Create a help modal
    pub fn help() -> Self {
        Modal::Help
    }

    /// Create a logs modal
    pub fn logs() -> Self {
        Modal::Logs
    }

    /// Create a lightbox for the given certificate index
    pub fn lightbox(cert_index: usize) -> Self {
        Modal::Lightbox(cert_index)
    }

    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&mut self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::Logs => match key {
                KeyCode::Esc | KeyCode::Char('l') | KeyCode::Char('q') => ModalAction::Close,
                KeyCode::Up | KeyCode::Char('k') => ModalAction::ScrollUp,
                KeyCode::Down | KeyCode::Char('j') => ModalAction::ScrollDown,
                _ => ModalAction::None,
            },
            // Enter activates the focused close control
            Modal::Lightbox(_) => match key {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => ModalAction::Close,
                KeyCode::Char('Y') => ModalAction::CopyData,
                _ => ModalAction::None,
            },
        }
    }

    /// Get the certificate index if this is a lightbox
    pub fn certificate_index(&self) -> Option<usize> {
        match self {
            Modal::Lightbox(idx) => Some(*idx),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_closes_on_escape_and_question_mark() {
        let mut modal = Modal::help();
        assert_eq!(modal.handle_input(KeyCode::Esc), ModalAction::Close);
        assert_eq!(modal.handle_input(KeyCode::Char('?')), ModalAction::Close);
        assert_eq!(modal.handle_input(KeyCode::Char('x')), ModalAction::None);
    }

    #[test]
    fn lightbox_close_control_responds_to_enter() {
        let mut modal = Modal::lightbox(1);
        assert_eq!(modal.handle_input(KeyCode::Enter), ModalAction::Close);
        assert_eq!(modal.handle_input(KeyCode::Esc), ModalAction::Close);
        assert_eq!(modal.certificate_index(), Some(1));
    }

    #[test]
    fn lightbox_ignores_scroll_keys() {
        // Background scroll stays suppressed while the overlay is up
        let mut modal = Modal::lightbox(0);
        assert_eq!(modal.handle_input(KeyCode::Down), ModalAction::None);
        assert_eq!(modal.handle_input(KeyCode::Up), ModalAction::None);
    }

    #[test]
    fn logs_scrolls_with_arrows() {
        let mut modal = Modal::logs();
        assert_eq!(modal.handle_input(KeyCode::Up), ModalAction::ScrollUp);
        assert_eq!(modal.handle_input(KeyCode::Down), ModalAction::ScrollDown);
        assert_eq!(modal.handle_input(KeyCode::Char('l')), ModalAction::Close);
    }
}
