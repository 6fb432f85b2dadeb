#![forbid(unsafe_code)]

//! Text helpers shared by the notification and overlay layers.
//!
//! Messages arriving from callers (and ultimately from API error bodies) are
//! treated as untrusted text: they are entity-escaped before being handed to
//! any renderer. Width measurement and truncation are grapheme-aware so that
//! combining sequences and wide characters never get split.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Escape markup-significant characters so the result is inert as HTML.
///
/// `&` is replaced first; the output contains only `&amp;`, `&lt;`, `&gt;`,
/// `&quot;`, and `&#39;` entities for the five special characters.
#[must_use]
pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Whether a string is empty or whitespace-only.
#[must_use]
pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

/// Display width of a string in terminal-style cells.
#[must_use]
pub fn display_width(input: &str) -> usize {
    UnicodeWidthStr::width(input)
}

/// Truncate `input` to at most `max_width` display cells, appending an
/// ellipsis when anything was cut.
///
/// Grapheme clusters are never split; a wide grapheme that does not fit is
/// dropped entirely.
#[must_use]
pub fn truncate_with_ellipsis(input: &str, max_width: usize) -> String {
    if display_width(input) <= max_width {
        return input.to_owned();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for grapheme in input.graphemes(true) {
        let w = UnicodeWidthStr::width(grapheme);
        if used + w > budget {
            break;
        }
        used += w;
        out.push_str(grapheme);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_covers_all_specials() {
        assert_eq!(
            escape_text(r#"<b>"a" & 'b'</b>"#),
            "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn escape_is_noop_on_plain_text() {
        assert_eq!(escape_text("Friend request sent!"), "Friend request sent!");
    }

    #[test]
    fn escape_ampersand_is_not_double_escaped() {
        assert_eq!(escape_text("&amp;"), "&amp;amp;");
    }

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("   \t\n"));
        assert!(!is_blank(" x "));
    }

    #[test]
    fn truncate_short_string_untouched() {
        assert_eq!(truncate_with_ellipsis("hello", 10), "hello");
        assert_eq!(truncate_with_ellipsis("hello", 5), "hello");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate_with_ellipsis("hello world", 6), "hello…");
    }

    #[test]
    fn truncate_zero_width_is_empty() {
        assert_eq!(truncate_with_ellipsis("hello", 0), "");
    }

    #[test]
    fn truncate_never_splits_wide_graphemes() {
        // "日" is 2 cells wide; with budget 2 only one fits next to the ellipsis.
        let out = truncate_with_ellipsis("日本語", 3);
        assert_eq!(out, "日…");
        assert!(display_width(&out) <= 3);
    }

    #[test]
    fn width_counts_cells_not_bytes() {
        assert_eq!(display_width("日本"), 4);
        assert_eq!(display_width("ab"), 2);
    }
}
