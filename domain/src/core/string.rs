//! String helpers shared by logging and progress output.

/// Shorten `s` to at most `max_chars` characters, appending `…` when cut.
///
/// Counts characters rather than bytes so multi-byte text (room
/// descriptions are often not ASCII) never splits a code point.
pub fn preview(s: &str, max_chars: usize) -> String {
    let mut chars = s.char_indices();
    match chars.nth(max_chars) {
        None => s.to_string(),
        Some((cut, _)) => {
            let keep = s[..cut].trim_end();
            format!("{}…", keep)
        }
    }
}

/// Collapse all runs of whitespace (including newlines) into single spaces.
pub fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_is_unchanged() {
        assert_eq!(preview("sofa", 10), "sofa");
        assert_eq!(preview("sofa", 4), "sofa");
    }

    #[test]
    fn test_preview_cuts_on_chars() {
        assert_eq!(preview("beige and brown", 5), "beige…");
        assert_eq!(preview("غرفة معيشة", 4), "غرفة…");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("  a\n\n b\tc "), "a b c");
    }
}
