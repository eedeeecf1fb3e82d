//! UTF-8 caret helpers for the input's value.

/// Clamp a byte index to the nearest char boundary at or before it.
pub fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Byte index of the char before `i`, or 0.
pub fn prev_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    s[..i].char_indices().last().map(|(idx, _)| idx).unwrap_or(0)
}

/// Byte index after the char at `i`, or `s.len()`.
pub fn next_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    s[i..]
        .chars()
        .next()
        .map(|c| i + c.len_utf8())
        .unwrap_or(s.len())
}

/// Removes CR and LF for single-line inputs.
pub fn strip_newlines(s: &str) -> String {
    s.chars().filter(|&c| c != '\n' && c != '\r').collect()
}

/// Number of visual lines, counting soft wraps at `wrap_columns` chars.
pub fn visual_line_count(s: &str, wrap_columns: Option<usize>) -> usize {
    s.split('\n')
        .map(|line| match wrap_columns {
            Some(cols) if cols > 0 => line.chars().count().div_ceil(cols).max(1),
            _ => 1,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_multibyte() {
        let s = "a€b"; // '€' is 3 bytes
        assert_eq!(clamp_to_char_boundary(s, 2), 1);
        assert_eq!(clamp_to_char_boundary(s, 100), 5);
        assert_eq!(next_boundary(s, 1), 4);
        assert_eq!(next_boundary(s, 5), 5);
        assert_eq!(prev_boundary(s, 4), 1);
        assert_eq!(prev_boundary(s, 0), 0);
    }

    #[test]
    fn test_strip_newlines() {
        assert_eq!(strip_newlines("a\r\nb\nc"), "abc");
    }

    #[test]
    fn test_visual_lines() {
        assert_eq!(visual_line_count("", None), 1);
        assert_eq!(visual_line_count("a\nb\n", None), 3);
        assert_eq!(visual_line_count("abcdefg", Some(3)), 3);
        assert_eq!(visual_line_count("abc\n\nd", Some(3)), 3);
    }
}
