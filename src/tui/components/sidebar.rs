// Sidebar component - collapsible navigation panel
//
// Owns all sidebar state: visibility, the assistive expanded flag, the
// focus trap over nav links, and the active-link marker. While open the
// app routes every key event here, which is also what keeps the content
// panel from scrolling underneath it.
//
// Closing returns keyboard focus to the menu toggle control
// (focused_link = None); opening moves it to the first nav link.

use crate::portfolio::Portfolio;
use crate::theme::Theme;
use crate::tui::traits::{Component, ComponentId, RenderContext};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

/// Panel width in columns when open
const SIDEBAR_WIDTH: u16 = 28;

/// One navigation entry pointing at a section anchor
pub struct NavLink {
    pub section_id: String,
    pub title: String,
}

pub struct SidebarPanel {
    links: Vec<NavLink>,

    visible: bool,

    /// Assistive expanded marker on the toggle control, mirrors visibility
    pub expanded: bool,

    /// Focused link while open; None = focus rests on the menu toggle
    pub focused_link: Option<usize>,

    /// Link highlighted as the current section (at most one)
    active: Option<usize>,

    /// Area occupied at last render, for backdrop click detection
    pub last_area: Option<Rect>,
}

impl SidebarPanel {
    pub fn new(portfolio: &Portfolio) -> Self {
        let links: Vec<NavLink> = portfolio
            .sections
            .iter()
            .map(|s| NavLink {
                section_id: s.id.clone(),
                title: s.title.clone(),
            })
            .collect();

        if links.is_empty() {
            tracing::warn!("document has no sections, navigation disabled");
        }

        Self {
            links,
            visible: false,
            expanded: false,
            focused_link: None,
            active: None,
            last_area: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Open or close depending on current visibility
    pub fn toggle(&mut self) {
        if self.visible {
            self.close();
        } else {
            self.open();
        }
    }

    /// Show the panel and move focus to the first link.
    /// A document without sections leaves this a no-op.
    pub fn open(&mut self) {
        if self.links.is_empty() {
            return;
        }
        self.visible = true;
        self.expanded = true;
        self.focused_link = Some(0);
    }

    /// Hide the panel and return focus to the menu toggle
    pub fn close(&mut self) {
        self.visible = false;
        self.expanded = false;
        self.focused_link = None;
    }

    /// Move focus forward through the links, wrapping from last to first
    pub fn focus_next(&mut self) {
        if let Some(i) = self.focused_link {
            self.focused_link = Some((i + 1) % self.links.len());
        }
    }

    /// Move focus backward through the links, wrapping from first to last
    pub fn focus_prev(&mut self) {
        if let Some(i) = self.focused_link {
            self.focused_link = Some((i + self.links.len() - 1) % self.links.len());
        }
    }

    /// Section id of the focused link
    pub fn focused_section(&self) -> Option<&str> {
        self.focused_link
            .and_then(|i| self.links.get(i))
            .map(|l| l.section_id.as_str())
    }

    /// Mark the link for `section_id` active, clearing all others
    pub fn set_active(&mut self, section_id: Option<&str>) {
        self.active =
            section_id.and_then(|id| self.links.iter().position(|l| l.section_id == id));
    }

    pub fn active_link(&self) -> Option<usize> {
        self.active
    }

    /// Map a mouse position to the link rendered at that row
    pub fn link_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.last_area?;
        if column < area.x || column >= area.right() {
            return None;
        }
        // Links render one per row inside the border
        let first_row = area.y + 1;
        if row < first_row {
            return None;
        }
        let idx = (row - first_row) as usize;
        (idx < self.links.len()).then_some(idx)
    }

    /// Render as an overlay on the left edge of `area`
    pub fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        if !self.visible {
            self.last_area = None;
            return;
        }

        let panel = Rect {
            x: area.x,
            y: area.y,
            width: SIDEBAR_WIDTH.min(area.width),
            height: area.height,
        };
        self.last_area = Some(panel);

        let items: Vec<ListItem> = self
            .links
            .iter()
            .enumerate()
            .map(|(i, link)| {
                let marker = if self.active == Some(i) { "▸ " } else { "  " };
                let style = if self.focused_link == Some(i) {
                    Style::default()
                        .fg(theme.selection_fg)
                        .bg(theme.selection_bg)
                        .add_modifier(Modifier::BOLD)
                } else if self.active == Some(i) {
                    Style::default().fg(theme.nav_active)
                } else {
                    Style::default().fg(theme.nav_link)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker.to_string(), Style::default().fg(theme.nav_active)),
                    Span::styled(link.title.clone(), style),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.border_focused))
                .title(" Navegación ")
                .title_bottom(Line::from(" Esc cierra ").centered()),
        );

        f.render_widget(Clear, panel);
        f.render_widget(list, panel);
    }
}

impl Component for SidebarPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Sidebar
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        // Data-free fallback; the app renders through the stateful method
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(ctx.theme.border_type)
            .border_style(Style::default().fg(ctx.theme.border))
            .title(" Navegación ");
        f.render_widget(block, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::{Portfolio, Section, SectionKind};

    fn panel() -> SidebarPanel {
        SidebarPanel::new(&Portfolio::demo())
    }

    fn single_section_panel() -> SidebarPanel {
        let portfolio = Portfolio {
            owner: "Test".to_string(),
            typing_text: String::new(),
            email: None,
            sections: vec![Section {
                id: "solo".to_string(),
                title: "Solo".to_string(),
                kind: SectionKind::About,
                body: String::new(),
                cards: vec![],
                certificates: vec![],
            }],
        };
        SidebarPanel::new(&portfolio)
    }

    #[test]
    fn toggle_twice_restores_every_observable_attribute() {
        let mut sidebar = panel();
        assert!(!sidebar.is_open());
        assert!(!sidebar.expanded);
        assert_eq!(sidebar.focused_link, None);

        sidebar.toggle();
        assert!(sidebar.is_open());
        assert!(sidebar.expanded);
        assert_eq!(sidebar.focused_link, Some(0));

        sidebar.toggle();
        assert!(!sidebar.is_open());
        assert!(!sidebar.expanded);
        assert_eq!(sidebar.focused_link, None);
    }

    #[test]
    fn focus_trap_wraps_both_directions() {
        let mut sidebar = panel();
        let n = sidebar.link_count();
        assert!(n > 1);

        sidebar.open();
        // Forward from the last link wraps to the first
        for _ in 0..n - 1 {
            sidebar.focus_next();
        }
        assert_eq!(sidebar.focused_link, Some(n - 1));
        sidebar.focus_next();
        assert_eq!(sidebar.focused_link, Some(0));

        // Backward from the first link wraps to the last
        sidebar.focus_prev();
        assert_eq!(sidebar.focused_link, Some(n - 1));
    }

    #[test]
    fn focus_trap_holds_with_a_single_link() {
        let mut sidebar = single_section_panel();
        sidebar.open();
        assert_eq!(sidebar.focused_link, Some(0));
        sidebar.focus_next();
        assert_eq!(sidebar.focused_link, Some(0));
        sidebar.focus_prev();
        assert_eq!(sidebar.focused_link, Some(0));
    }

    #[test]
    fn empty_document_leaves_sidebar_inert() {
        let portfolio = Portfolio {
            owner: "Test".to_string(),
            typing_text: String::new(),
            email: None,
            sections: vec![],
        };
        let mut sidebar = SidebarPanel::new(&portfolio);
        sidebar.open();
        assert!(!sidebar.is_open());
        sidebar.toggle();
        assert!(!sidebar.is_open());
    }

    #[test]
    fn at_most_one_link_is_active() {
        let mut sidebar = panel();
        sidebar.set_active(Some("habilidades"));
        assert_eq!(sidebar.active_link(), Some(2));
        sidebar.set_active(Some("contacto"));
        assert_eq!(sidebar.active_link(), Some(5));
        sidebar.set_active(None);
        assert_eq!(sidebar.active_link(), None);
        sidebar.set_active(Some("missing-id"));
        assert_eq!(sidebar.active_link(), None);
    }

    #[test]
    fn focused_section_follows_the_trap() {
        let mut sidebar = panel();
        sidebar.open();
        assert_eq!(sidebar.focused_section(), Some("inicio"));
        sidebar.focus_next();
        assert_eq!(sidebar.focused_section(), Some("sobre-mi"));
    }
}
