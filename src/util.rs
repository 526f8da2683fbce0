//! Shared utility functions

use unicode_width::UnicodeWidthStr;

/// Safely truncate a string to at most `max_bytes` while respecting UTF-8 boundaries.
///
/// If the string is already shorter than `max_bytes`, returns it unchanged.
/// Otherwise, finds the last valid UTF-8 character boundary at or before `max_bytes`
/// and returns a slice up to that point.
///
/// # Examples
///
/// ```
/// use folio::util::truncate_utf8_safe;
///
/// // ASCII: straightforward truncation
/// assert_eq!(truncate_utf8_safe("hello world", 5), "hello");
///
/// // UTF-8: respects character boundaries
/// let s = "cafe\u{0301}";  // 6 bytes total
/// let truncated = truncate_utf8_safe(s, 5);
/// assert!(truncated.len() <= 5);
/// assert!(truncated.is_char_boundary(truncated.len()));
/// ```
pub fn truncate_utf8_safe(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Display width of a string in terminal columns.
///
/// Wraps `unicode-width` so render code has a single import site.
/// Emojis and CJK count as 2 columns, combining marks as 0.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within `max_cols` terminal columns.
///
/// Unlike byte truncation, this accounts for wide characters so a
/// CJK-heavy string never overflows its panel.
pub fn truncate_to_width(s: &str, max_cols: usize) -> &str {
    if display_width(s) <= max_cols {
        return s;
    }
    let mut end = 0;
    let mut cols = 0;
    for (idx, ch) in s.char_indices() {
        let w = UnicodeWidthStr::width(ch.encode_utf8(&mut [0u8; 4]) as &str);
        if cols + w > max_cols {
            break;
        }
        cols += w;
        end = idx + ch.len_utf8();
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_shorter_than_max() {
        assert_eq!(truncate_utf8_safe("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_at_ascii_boundary() {
        assert_eq!(truncate_utf8_safe("hello world", 5), "hello");
    }

    #[test]
    fn test_truncate_at_utf8_boundary() {
        // 3-byte UTF-8 character: "日" = 0xE6 0x97 0xA5
        let s = "日本語";
        assert_eq!(truncate_utf8_safe(s, 4), "日");
        assert_eq!(truncate_utf8_safe(s, 6), "日本");
    }

    #[test]
    fn test_display_width_wide_chars() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("日本"), 4);
    }

    #[test]
    fn test_truncate_to_width_wide_chars() {
        // Each CJK char is 2 columns; 3 columns fits only one
        assert_eq!(truncate_to_width("日本語", 3), "日");
        assert_eq!(truncate_to_width("日本語", 4), "日本");
        assert_eq!(truncate_to_width("hola", 10), "hola");
    }
}
