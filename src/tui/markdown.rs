// Markdown rendering for section bodies
//
// Walks pulldown-cmark events and produces styled, pre-wrapped ratatui lines.
// The content panel scrolls by row, so wrapping has to happen here rather
// than in the Paragraph widget - every produced line is one document row.
//
// Supported subset: headings, paragraphs, emphasis/strong, inline code,
// lists, links. Anything fancier renders as plain text.

use crate::theme::Theme;
use crate::util::display_width;
use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Render a markdown body into wrapped, styled lines of at most `width` columns
pub fn render_markdown(text: &str, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let mut out: Vec<Line<'static>> = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();

    let mut bold = false;
    let mut italic = false;
    let mut in_link = false;
    let mut in_heading = false;

    let style = |bold: bool, italic: bool, in_link: bool, in_heading: bool| -> Style {
        let mut s = Style::default().fg(theme.foreground);
        if in_heading {
            s = Style::default()
                .fg(theme.heading)
                .add_modifier(Modifier::BOLD);
        }
        if in_link {
            s = Style::default()
                .fg(theme.link)
                .add_modifier(Modifier::UNDERLINED);
        }
        if bold {
            s = s.fg(theme.emphasis).add_modifier(Modifier::BOLD);
        }
        if italic {
            s = s.add_modifier(Modifier::ITALIC);
        }
        s
    };

    for event in Parser::new(text) {
        match event {
            Event::Start(Tag::Heading { .. }) => {
                flush(&mut spans, &mut out, width);
                in_heading = true;
            }
            Event::End(TagEnd::Heading(_)) => {
                flush(&mut spans, &mut out, width);
                out.push(Line::raw(""));
                in_heading = false;
            }
            Event::End(TagEnd::Paragraph) => {
                flush(&mut spans, &mut out, width);
                out.push(Line::raw(""));
            }
            Event::Start(Tag::Item) => {
                flush(&mut spans, &mut out, width);
                spans.push(Span::styled(
                    "• ".to_string(),
                    Style::default().fg(theme.highlight),
                ));
            }
            Event::End(TagEnd::Item) => {
                flush(&mut spans, &mut out, width);
            }
            Event::End(TagEnd::List(_)) => {
                out.push(Line::raw(""));
            }
            Event::Start(Tag::Strong) => bold = true,
            Event::End(TagEnd::Strong) => bold = false,
            Event::Start(Tag::Emphasis) => italic = true,
            Event::End(TagEnd::Emphasis) => italic = false,
            Event::Start(Tag::Link { .. }) => in_link = true,
            Event::End(TagEnd::Link) => in_link = false,
            Event::Text(t) => {
                spans.push(Span::styled(
                    t.to_string(),
                    style(bold, italic, in_link, in_heading),
                ));
            }
            Event::Code(t) => {
                spans.push(Span::styled(
                    t.to_string(),
                    Style::default().fg(theme.highlight),
                ));
            }
            Event::SoftBreak => {
                spans.push(Span::styled(
                    " ".to_string(),
                    style(bold, italic, in_link, in_heading),
                ));
            }
            Event::HardBreak => {
                flush(&mut spans, &mut out, width);
            }
            _ => {}
        }
    }
    flush(&mut spans, &mut out, width);

    // Drop a trailing blank separator
    while out
        .last()
        .is_some_and(|l| l.spans.iter().all(|s| s.content.is_empty()))
    {
        out.pop();
    }
    out
}

/// Wrap accumulated spans into width-bounded lines and clear the buffer
fn flush(spans: &mut Vec<Span<'static>>, out: &mut Vec<Line<'static>>, width: usize) {
    if spans.is_empty() {
        return;
    }
    out.extend(wrap_spans(std::mem::take(spans), width));
}

/// Word-wrap styled spans to `width` columns, preserving per-span styles
fn wrap_spans(spans: Vec<Span<'static>>, width: usize) -> Vec<Line<'static>> {
    let width = width.max(10);
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut cols = 0usize;

    for span in spans {
        for word in split_keeping_spaces(&span.content) {
            let w = display_width(word);
            if cols + w > width && cols > 0 {
                lines.push(Line::from(std::mem::take(&mut current)));
                cols = 0;
                // No leading whitespace after a wrap
                if word.trim().is_empty() {
                    continue;
                }
            }
            current.push(Span::styled(word.to_string(), span.style));
            cols += w;
        }
    }
    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}

/// Split into alternating word / whitespace chunks
fn split_keeping_spaces(text: &str) -> impl Iterator<Item = &str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut prev_is_space: Option<bool> = None;
    for (i, ch) in text.char_indices() {
        let is_space = ch == ' ';
        if let Some(prev) = prev_is_space {
            if prev != is_space {
                chunks.push(&text[start..i]);
                start = i;
            }
        }
        prev_is_space = Some(is_space);
    }
    if start < text.len() {
        chunks.push(&text[start..]);
    }
    chunks.into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme() -> Theme {
        Theme::dark()
    }

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn paragraphs_are_separated_by_blank_lines() {
        let lines = render_markdown("uno\n\ndos", &theme(), 40);
        let text = plain(&lines);
        assert_eq!(text, vec!["uno", "", "dos"]);
    }

    #[test]
    fn long_paragraphs_wrap_at_word_boundaries() {
        let lines = render_markdown("aaa bbb ccc ddd", &theme(), 10);
        let text = plain(&lines);
        assert_eq!(text[0], "aaa bbb ");
        assert_eq!(text[1], "ccc ddd");
        assert!(lines
            .iter()
            .all(|l| l.spans.iter().map(|s| display_width(&s.content)).sum::<usize>() <= 10));
    }

    #[test]
    fn headings_use_heading_style() {
        let t = theme();
        let lines = render_markdown("# Título", &t, 40);
        let span = &lines[0].spans[0];
        assert_eq!(span.style.fg, Some(t.heading));
    }

    #[test]
    fn list_items_get_bullets() {
        let lines = render_markdown("- uno\n- dos", &theme(), 40);
        let text = plain(&lines);
        assert_eq!(text[0], "• uno");
        assert_eq!(text[1], "• dos");
    }

    #[test]
    fn links_are_underlined_with_link_color() {
        let t = theme();
        let lines = render_markdown("[escríbeme](mailto:x@y.com)", &t, 40);
        let span = &lines[0].spans[0];
        assert_eq!(span.content.as_ref(), "escríbeme");
        assert_eq!(span.style.fg, Some(t.link));
    }

    #[test]
    fn empty_body_renders_nothing() {
        assert!(render_markdown("", &theme(), 40).is_empty());
    }
}
