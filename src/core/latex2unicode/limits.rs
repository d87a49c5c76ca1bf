//! Big operators with limits: `\int`, `\oint`, `\sum`, `\prod`
//!
//! The operator glyph is followed directly by the lower limit as subscript
//! glyphs and then the upper limit as superscript glyphs, whatever order the
//! two groups were written in (`∑ᵢ₌₁ⁿ`).

use super::scan::{at_command_boundary, char_len_at, command_name};
use super::scripts::{convert_limit_group, Script};
use super::symbols;

const LIMIT_OPERATORS: [&str; 4] = ["int", "oint", "sum", "prod"];

fn operator_glyph(name: &str) -> Option<&'static str> {
    if LIMIT_OPERATORS.contains(&name) {
        symbols::lookup(name)
    } else {
        None
    }
}

fn is_operator_glyph(c: char) -> bool {
    matches!(c, '∫' | '∮' | '∑' | '∏')
}

/// Render an operator with its optional limits.
pub fn render_limits(operator: &str, lower: Option<&str>, upper: Option<&str>) -> String {
    let mut out = String::from(operator);
    if let Some(lower) = lower {
        out.push_str(lower);
    }
    if let Some(upper) = upper {
        out.push_str(upper);
    }
    out
}

/// Read up to one `_{..}` and one `^{..}` group, in either order, at `pos`.
/// Returns (lower, upper, end).
fn read_limit_groups(text: &str, mut pos: usize) -> (Option<String>, Option<String>, usize) {
    let mut lower = None;
    let mut upper = None;

    while let Some(script) = text[pos..].chars().next().and_then(Script::from_marker) {
        let slot = match script {
            Script::Subscript => &mut lower,
            Script::Superscript => &mut upper,
        };
        if slot.is_some() {
            break;
        }
        match convert_limit_group(text, pos + 1, script) {
            Some((rendered, end)) => {
                *slot = Some(rendered);
                pos = end;
            }
            None => break,
        }
    }

    (lower, upper, pos)
}

/// Limits stage. Recognises the operators both as commands and as the
/// glyphs the symbol stage already produced.
pub fn convert_limits(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < text.len() {
        let c = match text[i..].chars().next() {
            Some(c) => c,
            None => break,
        };

        let (operator, after) = if c == '\\' {
            let (name, end) = command_name(text, i + 1);
            if name.is_empty() {
                let next = i + 1 + char_len_at(text, i + 1);
                out.push_str(&text[i..next]);
                i = next;
                continue;
            }
            match operator_glyph(name) {
                Some(glyph) if at_command_boundary(text, end) => (glyph, end),
                _ => {
                    out.push_str(&text[i..end]);
                    i = end;
                    continue;
                }
            }
        } else if is_operator_glyph(c) {
            (&text[i..i + c.len_utf8()], i + c.len_utf8())
        } else {
            out.push(c);
            i += c.len_utf8();
            continue;
        };

        let (lower, upper, end) = read_limit_groups(text, after);
        out.push_str(&render_limits(operator, lower.as_deref(), upper.as_deref()));
        i = end;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_with_limits() {
        assert_eq!(convert_limits(r"\sum_{i=1}^{n}"), "∑ᵢ₌₁ⁿ");
    }

    #[test]
    fn test_limits_order_normalised() {
        assert_eq!(convert_limits(r"\sum^{n}_{i=1}"), "∑ᵢ₌₁ⁿ");
        assert_eq!(convert_limits("∏^{n}_{k=0}"), "∏ₖ₌₀ⁿ");
    }

    #[test]
    fn test_integral_with_unmappable_upper_limit() {
        assert_eq!(convert_limits("∫_{0}^{∞}"), "∫₀^∞");
    }

    #[test]
    fn test_single_limit() {
        assert_eq!(convert_limits(r"\oint_{c}"), "∮_c");
        assert_eq!(convert_limits(r"\int^{1}"), "∫¹");
    }

    #[test]
    fn test_bare_operator() {
        assert_eq!(convert_limits(r"\int f(x) dx"), "∫ f(x) dx");
        assert_eq!(convert_limits(r"\prod"), "∏");
    }

    #[test]
    fn test_other_commands_untouched() {
        assert_eq!(convert_limits(r"\lim_{x} \integral"), r"\lim_{x} \integral");
        assert_eq!(convert_limits(r"\sum2"), r"\sum2");
    }

    #[test]
    fn test_unterminated_limit_left_for_later_stages() {
        assert_eq!(convert_limits(r"\sum_{i"), "∑_{i");
    }

    #[test]
    fn test_bare_script_not_a_limit_group() {
        assert_eq!(convert_limits(r"\sum_i"), "∑_i");
    }
}
