// Theme system for the TUI
//
// Provides customizable color themes that can be switched at runtime.
// Each theme defines colors for all UI elements.

use ratatui::style::Color;
use ratatui::widgets::BorderType;
use serde::{Deserialize, Serialize};

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    Terminal,
}

impl ThemeKind {
    /// Get all available themes
    pub fn all() -> &'static [ThemeKind] {
        &[ThemeKind::Dark, ThemeKind::Light, ThemeKind::Terminal]
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
            ThemeKind::Terminal => "Terminal",
        }
    }

    /// Resolve a theme by its config-file name (case-insensitive).
    /// Unknown names fall back to the default theme.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => ThemeKind::Light,
            "terminal" => ThemeKind::Terminal,
            _ => ThemeKind::Dark,
        }
    }

    /// Get the theme configuration
    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::Terminal => Theme::terminal(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,

    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,
    pub border_type: BorderType,

    // Shell chrome
    pub title: Color,
    pub status_bar: Color,

    // Navigation
    pub nav_link: Color,
    pub nav_active: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,

    // Content
    pub heading: Color,
    pub emphasis: Color,
    pub link: Color,
    pub card: Color,
    pub card_dim: Color,
    pub hero: Color,
    pub cursor: Color,

    // Feedback
    pub success: Color,
    pub highlight: Color,
    pub placeholder: Color,

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "Dark",
            background: Color::Rgb(18, 18, 24),
            foreground: Color::Rgb(220, 220, 225),
            border: Color::Rgb(70, 70, 85),
            border_focused: Color::Cyan,
            border_type: BorderType::Rounded,
            title: Color::Cyan,
            status_bar: Color::Rgb(130, 130, 145),
            nav_link: Color::Rgb(180, 180, 195),
            nav_active: Color::Yellow,
            selection_bg: Color::Rgb(55, 55, 75),
            selection_fg: Color::Yellow,
            heading: Color::Magenta,
            emphasis: Color::White,
            link: Color::Blue,
            card: Color::Rgb(200, 200, 210),
            card_dim: Color::Rgb(95, 95, 110),
            hero: Color::White,
            cursor: Color::Cyan,
            success: Color::Rgb(74, 222, 128),
            highlight: Color::Cyan,
            placeholder: Color::Rgb(110, 110, 125),
            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Green,
            log_debug: Color::DarkGray,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "Light",
            background: Color::Rgb(245, 245, 240),
            foreground: Color::Rgb(40, 40, 45),
            border: Color::Rgb(170, 170, 160),
            border_focused: Color::Blue,
            border_type: BorderType::Rounded,
            title: Color::Blue,
            status_bar: Color::Rgb(120, 120, 115),
            nav_link: Color::Rgb(80, 80, 90),
            nav_active: Color::Rgb(180, 95, 6),
            selection_bg: Color::Rgb(215, 215, 205),
            selection_fg: Color::Rgb(180, 95, 6),
            heading: Color::Rgb(125, 30, 125),
            emphasis: Color::Black,
            link: Color::Blue,
            card: Color::Rgb(55, 55, 60),
            card_dim: Color::Rgb(160, 160, 155),
            hero: Color::Black,
            cursor: Color::Blue,
            success: Color::Rgb(20, 140, 70),
            highlight: Color::Blue,
            placeholder: Color::Rgb(150, 150, 145),
            log_error: Color::Red,
            log_warn: Color::Rgb(180, 120, 0),
            log_info: Color::Rgb(20, 140, 70),
            log_debug: Color::Gray,
        }
    }

    /// Theme that leans entirely on the terminal's own ANSI palette,
    /// for users who configure their terminal colors themselves.
    pub fn terminal() -> Self {
        Self {
            name: "Terminal",
            background: Color::Reset,
            foreground: Color::Reset,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            border_type: BorderType::Plain,
            title: Color::Cyan,
            status_bar: Color::DarkGray,
            nav_link: Color::Gray,
            nav_active: Color::Yellow,
            selection_bg: Color::DarkGray,
            selection_fg: Color::Yellow,
            heading: Color::Magenta,
            emphasis: Color::White,
            link: Color::Blue,
            card: Color::Reset,
            card_dim: Color::DarkGray,
            hero: Color::White,
            cursor: Color::Cyan,
            success: Color::Green,
            highlight: Color::Cyan,
            placeholder: Color::DarkGray,
            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Green,
            log_debug: Color::DarkGray,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_covers_all_themes_and_wraps() {
        let mut kind = ThemeKind::Dark;
        let mut seen = Vec::new();
        for _ in 0..ThemeKind::all().len() {
            seen.push(kind);
            kind = kind.next();
        }
        assert_eq!(seen, ThemeKind::all());
        assert_eq!(kind, ThemeKind::Dark);
    }

    #[test]
    fn from_name_is_case_insensitive_with_fallback() {
        assert_eq!(ThemeKind::from_name("light"), ThemeKind::Light);
        assert_eq!(ThemeKind::from_name("TERMINAL"), ThemeKind::Terminal);
        assert_eq!(ThemeKind::from_name("no-such-theme"), ThemeKind::Dark);
    }
}
