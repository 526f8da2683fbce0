// Typewriter component - timed character reveal for the hero name
//
// A bounded progression driven by the app tick: the number of visible
// characters is a pure function of elapsed time, so tick cadence affects
// smoothness but never correctness. After the start delay the line is
// empty; one more character appears per speed interval; when the full
// string is out a completion event fires once and, a fixed delay later,
// the cursor glyph goes away for good.
//
// There is no restart: a Typewriter runs exactly once.

use crate::theme::Theme;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use std::time::{Duration, Instant};

/// How long the cursor lingers after the full string is revealed
const CURSOR_HIDE_DELAY: Duration = Duration::from_secs(1);

/// Cursor glyph shown at the end of the typed prefix
const CURSOR_GLYPH: &str = "▌";

pub struct Typewriter {
    text: String,
    /// Byte index just past each character, for prefix slicing
    char_ends: Vec<usize>,
    speed: Duration,
    start_delay: Duration,
    started_at: Option<Instant>,
    visible: usize,
    completed: bool,
    cursor_hidden: bool,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, speed: Duration, start_delay: Duration) -> Self {
        let text = text.into();
        let char_ends = text
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .collect();
        Self {
            text,
            char_ends,
            speed,
            start_delay,
            started_at: None,
            visible: 0,
            completed: false,
            cursor_hidden: false,
        }
    }

    /// Begin the start-delay countdown
    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }

    /// Advance the reveal. Returns true exactly once, when the full
    /// string has just been revealed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(started) = self.started_at else {
            return false;
        };
        let typing_start = started + self.start_delay;
        if now < typing_start {
            return false;
        }

        let len = self.char_ends.len();
        let elapsed = now.duration_since(typing_start);
        let revealed = if self.speed.is_zero() {
            len
        } else {
            (elapsed.as_millis() / self.speed.as_millis()) as usize
        };
        self.visible = revealed.min(len);

        let mut completed_now = false;
        if self.visible == len && !self.completed {
            self.completed = true;
            completed_now = true;
        }

        if self.completed && !self.cursor_hidden {
            let done_at = typing_start + self.speed * len as u32;
            if now.duration_since(done_at) >= CURSOR_HIDE_DELAY {
                self.cursor_hidden = true;
            }
        }

        completed_now
    }

    /// The currently revealed prefix
    pub fn rendered(&self) -> &str {
        match self.visible {
            0 => "",
            n => &self.text[..self.char_ends[n - 1]],
        }
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Build the hero line: typed prefix plus (while shown) the blinking cursor
    pub fn line(&self, theme: &Theme, blink_on: bool) -> Line<'static> {
        let mut spans = vec![Span::styled(
            self.rendered().to_string(),
            Style::default()
                .fg(theme.hero)
                .add_modifier(Modifier::BOLD),
        )];
        if !self.cursor_hidden && blink_on {
            spans.push(Span::styled(
                CURSOR_GLYPH.to_string(),
                Style::default().fg(theme.cursor),
            ));
        }
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "Hola, Soy Mayra Moyano";
    const SPEED: Duration = Duration::from_millis(150);
    const DELAY: Duration = Duration::from_millis(1000);

    fn started(t0: Instant) -> Typewriter {
        let mut tw = Typewriter::new(TEXT, SPEED, DELAY);
        tw.start(t0);
        tw
    }

    #[test]
    fn nothing_shows_before_the_start_delay() {
        let t0 = Instant::now();
        let mut tw = started(t0);
        tw.tick(t0 + Duration::from_millis(999));
        assert_eq!(tw.rendered(), "");
    }

    #[test]
    fn one_character_per_interval_never_more_never_fewer() {
        let t0 = Instant::now();
        let mut tw = started(t0);
        let len = TEXT.chars().count();

        for k in 0..=len {
            // Just before the k-th interval boundary: still k-1 visible
            if k > 0 {
                tw.tick(t0 + DELAY + SPEED * k as u32 - Duration::from_millis(1));
                assert_eq!(tw.rendered().chars().count(), k - 1);
            }
            // At the boundary: exactly k visible
            tw.tick(t0 + DELAY + SPEED * k as u32);
            assert_eq!(tw.rendered().chars().count(), k);
        }
        assert_eq!(tw.rendered(), TEXT);
    }

    #[test]
    fn full_string_lands_after_exactly_length_times_speed() {
        let t0 = Instant::now();
        let mut tw = started(t0);
        let len = TEXT.chars().count() as u32;

        tw.tick(t0 + DELAY + SPEED * len - Duration::from_millis(1));
        assert!(!tw.is_complete());

        let completed = tw.tick(t0 + DELAY + SPEED * len);
        assert!(completed);
        assert_eq!(tw.rendered(), TEXT);

        // Long after the end: no extra characters, no second completion event
        assert!(!tw.tick(t0 + DELAY + SPEED * len + Duration::from_secs(60)));
        assert_eq!(tw.rendered(), TEXT);
    }

    #[test]
    fn completion_event_fires_exactly_once() {
        let t0 = Instant::now();
        let mut tw = started(t0);
        let end = t0 + DELAY + SPEED * TEXT.chars().count() as u32;

        assert!(tw.tick(end));
        assert!(!tw.tick(end + Duration::from_millis(1)));
        assert!(!tw.tick(end + Duration::from_secs(5)));
    }

    #[test]
    fn cursor_hides_a_second_after_completion() {
        let t0 = Instant::now();
        let mut tw = started(t0);
        let theme = Theme::dark();
        let end = t0 + DELAY + SPEED * TEXT.chars().count() as u32;

        tw.tick(end + Duration::from_millis(999));
        assert_eq!(tw.line(&theme, true).spans.len(), 2); // prefix + cursor

        tw.tick(end + Duration::from_millis(1000));
        assert_eq!(tw.line(&theme, true).spans.len(), 1); // cursor gone for good
    }

    #[test]
    fn multibyte_text_slices_on_character_boundaries() {
        let t0 = Instant::now();
        let mut tw = Typewriter::new("Diseño", SPEED, Duration::ZERO);
        tw.start(t0);
        tw.tick(t0 + SPEED * 5);
        assert_eq!(tw.rendered(), "Diseñ");
    }

    #[test]
    fn unstarted_typewriter_stays_empty() {
        let mut tw = Typewriter::new(TEXT, SPEED, DELAY);
        assert!(!tw.tick(Instant::now() + Duration::from_secs(60)));
        assert_eq!(tw.rendered(), "");
    }
}
