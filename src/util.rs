//! Shared utility functions

use unicode_width::UnicodeWidthChar;

/// Truncate a string to at most `max_width` terminal columns, appending an
/// ellipsis when anything was cut.
///
/// Uses display width rather than byte or char counts, so wide glyphs (CJK,
/// emoji) never push a row past the edge of its widget.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return s.to_string();
    }

    // Reserve one column for the ellipsis
    let budget = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_strings_pass_through() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("", 5), "");
    }

    #[test]
    fn ascii_truncation_appends_ellipsis() {
        assert_eq!(truncate_to_width("hello world", 8), "hello w…");
    }

    #[test]
    fn wide_glyphs_count_two_columns() {
        // Each CJK character is two columns wide
        assert_eq!(truncate_to_width("日本語テスト", 12), "日本語テスト");
        assert_eq!(truncate_to_width("日本語テスト", 7), "日本語…");
    }

    #[test]
    fn exact_fit_is_not_truncated() {
        assert_eq!(truncate_to_width("abcdef", 6), "abcdef");
    }
}
