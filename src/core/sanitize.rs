// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Inside of a `( ... )` pair that wraps the whole (trimmed) string.
pub fn strip_parens(s: &str) -> Option<&str> {
    s.trim().strip_prefix('(')?.strip_suffix(')')
}

/// "(23)" → 23. Anything but digits between the parentheses is rejected.
pub fn parse_level(s: &str) -> Option<u32> {
    let inner = strip_parens(s)?.trim();
    if inner.is_empty() || !inner.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    inner.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ws_collapses_runs() {
        assert_eq!(normalize_ws("  Fire \n\t Ball "), "Fire Ball");
        assert_eq!(normalize_ws(""), "");
    }

    #[test]
    fn strip_parens_needs_both_ends() {
        assert_eq!(strip_parens(" (12) "), Some("12"));
        assert_eq!(strip_parens("(12"), None);
        assert_eq!(strip_parens("12)"), None);
        assert_eq!(strip_parens("()"), Some(""));
    }

    #[test]
    fn parse_level_variants() {
        assert_eq!(parse_level("(23)"), Some(23));
        assert_eq!(parse_level("(1)"), Some(1));
        assert_eq!(parse_level("\n   (20)\n  "), Some(20));
        assert_eq!(parse_level("( 7 )"), Some(7));

        assert_eq!(parse_level("23"), None);
        assert_eq!(parse_level("(abc)"), None);
        assert_eq!(parse_level("(-1)"), None);
        assert_eq!(parse_level("(+1)"), None);
        assert_eq!(parse_level("()"), None);
        assert_eq!(parse_level("(1) extra"), None);
        assert_eq!(parse_level("(99999999999)"), None);
    }
}
