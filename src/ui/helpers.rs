//! Small rendering helpers shared by the views.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate a string to the given display width, appending an ellipsis when
/// anything was cut. Width is measured in terminal columns, not chars.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "\u{2026}".repeat(max_width.min(1));
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('\u{2026}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_strings_pass_through() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 5), "hello");
    }

    #[test]
    fn long_strings_get_an_ellipsis() {
        assert_eq!(truncate_to_width("hello world", 8), "hello w\u{2026}");
    }

    #[test]
    fn wide_chars_count_double() {
        // Each CJK char is two columns wide.
        let truncated = truncate_to_width("\u{6f22}\u{5b57}\u{6f22}\u{5b57}", 5);
        assert_eq!(truncated, "\u{6f22}\u{5b57}\u{2026}");
    }

    #[test]
    fn tiny_budgets_do_not_panic() {
        assert_eq!(truncate_to_width("hello", 1), "\u{2026}");
        assert_eq!(truncate_to_width("hello", 0), "");
    }
}
