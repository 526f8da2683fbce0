// Contact link component - copy email to clipboard
//
// Activating the link writes the address to the system clipboard. On success
// the link text flips to a confirmation for exactly two seconds and then
// reverts; on failure the app falls back to normal mail-link navigation by
// handing the mailto: URL to the platform opener.

use crate::theme::Theme;
use crate::tui::clipboard;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use std::process::Command;
use std::time::{Duration, Instant};

/// Confirmation text shown after a successful copy
pub const CONFIRM_TEXT: &str = "✓ Email copiado!";

/// How long the confirmation text stays before reverting
const CONFIRM_DURATION: Duration = Duration::from_millis(2000);

/// Result of activating the link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Address is on the clipboard, confirmation showing
    Copied,
    /// Clipboard failed, mail client launched instead
    FallbackNavigation,
    /// Document has no contact address
    Unavailable,
}

pub struct ContactLink {
    email: Option<String>,

    /// While set, the link renders the confirmation text
    confirm_until: Option<Instant>,

    /// Row occupied at last render, for mouse activation
    pub last_area: Option<Rect>,
}

impl ContactLink {
    pub fn new(email: Option<String>) -> Self {
        if email.is_none() {
            tracing::warn!("document has no contact email, copy affordance disabled");
        }
        Self {
            email,
            confirm_until: None,
            last_area: None,
        }
    }

    /// Activate the link: try the clipboard, fall back to the mail client
    pub fn activate(&mut self, now: Instant) -> CopyOutcome {
        let Some(email) = self.email.clone() else {
            return CopyOutcome::Unavailable;
        };
        match clipboard::copy_to_clipboard(&email) {
            Ok(()) => {
                self.confirm(now);
                CopyOutcome::Copied
            }
            Err(e) => {
                tracing::warn!("clipboard unavailable ({}), opening mail client", e);
                open_mailto(&email);
                CopyOutcome::FallbackNavigation
            }
        }
    }

    /// Start the confirmation window
    pub fn confirm(&mut self, now: Instant) {
        self.confirm_until = Some(now + CONFIRM_DURATION);
    }

    /// Revert the confirmation once its window has passed
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.confirm_until {
            if now >= deadline {
                self.confirm_until = None;
            }
        }
    }

    pub fn is_confirming(&self) -> bool {
        self.confirm_until.is_some()
    }

    /// The link line as currently displayed
    pub fn display_line(&self, theme: &Theme) -> Line<'static> {
        match (&self.email, self.confirm_until) {
            (Some(_), Some(_)) => Line::from(Span::styled(
                CONFIRM_TEXT.to_string(),
                Style::default()
                    .fg(theme.success)
                    .add_modifier(Modifier::BOLD),
            )),
            (Some(email), None) => Line::from(vec![
                Span::styled("✉ ".to_string(), Style::default().fg(theme.highlight)),
                Span::styled(
                    email.clone(),
                    Style::default()
                        .fg(theme.link)
                        .add_modifier(Modifier::UNDERLINED),
                ),
            ]),
            (None, _) => Line::from(Span::raw("")),
        }
    }

    /// Whether a mouse position hits the link row
    pub fn hit(&self, column: u16, row: u16) -> bool {
        self.last_area.is_some_and(|a| {
            row == a.y && column >= a.x && column < a.right()
        })
    }
}

/// Hand the mailto: URL to the platform opener
fn open_mailto(email: &str) {
    let url = format!("mailto:{}", email);

    #[cfg(target_os = "macos")]
    let result = Command::new("open").arg(&url).spawn();
    #[cfg(target_os = "windows")]
    let result = Command::new("cmd").args(["/C", "start", &url]).spawn();
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let result = Command::new("xdg-open").arg(&url).spawn();

    if let Err(e) = result {
        tracing::warn!("could not open mail client for {}: {}", url, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_reverts_after_exactly_two_seconds() {
        let t0 = Instant::now();
        let mut link = ContactLink::new(Some("x@y.com".to_string()));

        link.confirm(t0);
        assert!(link.is_confirming());

        link.tick(t0 + Duration::from_millis(1999));
        assert!(link.is_confirming());

        link.tick(t0 + Duration::from_millis(2000));
        assert!(!link.is_confirming());
    }

    #[test]
    fn display_flips_to_confirmation_and_back() {
        let t0 = Instant::now();
        let theme = Theme::dark();
        let mut link = ContactLink::new(Some("x@y.com".to_string()));

        let normal: String = link
            .display_line(&theme)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert!(normal.contains("x@y.com"));

        link.confirm(t0);
        let confirming: String = link
            .display_line(&theme)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(confirming, CONFIRM_TEXT);

        link.tick(t0 + Duration::from_millis(2000));
        let reverted: String = link
            .display_line(&theme)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(reverted, normal);
    }

    #[test]
    fn missing_email_is_inert() {
        let t0 = Instant::now();
        let mut link = ContactLink::new(None);
        assert_eq!(link.activate(t0), CopyOutcome::Unavailable);
        assert!(!link.is_confirming());
        assert!(link.display_line(&Theme::dark()).spans[0].content.is_empty());
    }
}
