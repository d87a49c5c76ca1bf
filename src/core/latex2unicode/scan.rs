//! Byte-level scanning helpers shared by the Unicode stages.

/// Index of the `}` matching the `{` at `open`, honouring nesting and
/// skipping escaped braces (`\{`, `\}`). `None` if the group never closes.
pub fn matching_brace(text: &str, open: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    debug_assert_eq!(bytes.get(open), Some(&b'{'));

    let mut depth = 0usize;
    let mut i = open;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                i += 2;
                continue;
            }
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Read the ASCII-letter command name starting at `start` (just after a
/// backslash). Returns the name and the index one past it.
pub fn command_name(text: &str, start: usize) -> (&str, usize) {
    let end = text[start..]
        .find(|c: char| !c.is_ascii_alphabetic())
        .map_or(text.len(), |n| start + n);
    (&text[start..end], end)
}

/// A command name only counts when it is not glued to a digit (`\alpha2`).
pub fn at_command_boundary(text: &str, end: usize) -> bool {
    !text[end..]
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit())
}

/// If a brace group opens at `pos`, return its content and the index one
/// past the closing brace.
pub fn braced_group(text: &str, pos: usize) -> Option<(&str, usize)> {
    if text.as_bytes().get(pos) != Some(&b'{') {
        return None;
    }
    let close = matching_brace(text, pos)?;
    Some((&text[pos + 1..close], close + 1))
}

/// Length in bytes of the char starting at `pos`.
pub fn char_len_at(text: &str, pos: usize) -> usize {
    text[pos..].chars().next().map_or(0, char::len_utf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_brace_nested() {
        let text = "{a{b}c}d";
        assert_eq!(matching_brace(text, 0), Some(6));
        assert_eq!(matching_brace(text, 2), Some(4));
    }

    #[test]
    fn test_matching_brace_unterminated() {
        assert_eq!(matching_brace("{a{b}", 0), None);
    }

    #[test]
    fn test_matching_brace_skips_escapes() {
        assert_eq!(matching_brace(r"{\}}", 0), Some(3));
    }

    #[test]
    fn test_command_name_and_boundary() {
        let text = r"\alpha2";
        let (name, end) = command_name(text, 1);
        assert_eq!(name, "alpha");
        assert!(!at_command_boundary(text, end));

        let text = r"\alpha_1";
        let (name, end) = command_name(text, 1);
        assert_eq!(name, "alpha");
        assert!(at_command_boundary(text, end));
    }

    #[test]
    fn test_braced_group() {
        assert_eq!(braced_group("x{ab}c", 1), Some(("ab", 5)));
        assert_eq!(braced_group("x{ab", 1), None);
        assert_eq!(braced_group("xab", 1), None);
    }
}
