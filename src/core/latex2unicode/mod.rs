//! LaTeX to Unicode text conversion
//!
//! The converter is a fixed sequence of pure `&str -> String` stages:
//!
//! 1. Greek letters
//! 2. Operator, relation, set, arrow, calculus, logic and misc symbols
//! 3. Fractions
//! 4. Big operators with limits
//! 5. Subscripts, then superscripts
//!
//! Anything no stage recognises is passed through unchanged, so the
//! conversion never fails.

pub mod fraction;
pub mod limits;
pub mod scan;
pub mod scripts;
pub mod symbols;

use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::loss::{ConversionReport, LossKind, LossRecord, LossReport};

pub use fraction::{convert_fraction, convert_fractions, vulgar_fraction};
pub use limits::convert_limits;
pub use scripts::{convert_script_at, convert_scripts, render_group, Script, ScriptArg};
pub use symbols::{lookup, lookup_entry, symbols_in, SymbolClass};

use scan::{at_command_boundary, char_len_at, command_name};

lazy_static! {
    static ref DISPLAY_DOLLARS: Regex = Regex::new(r"^\$\$([^$]*)\$\$$").unwrap();
    static ref INLINE_DOLLARS: Regex = Regex::new(r"^\$([^$]*)\$$").unwrap();
    static ref DISPLAY_BRACKETS: Regex = Regex::new(r"(?s)^\\\[(.*)\\\]$").unwrap();
    static ref INLINE_PARENS: Regex = Regex::new(r"(?s)^\\\((.*)\\\)$").unwrap();
}

/// Convert LaTeX math notation to Unicode text.
///
/// ```
/// assert_eq!(hwpmath::latex_to_unicode("x^2"), "x²");
/// assert_eq!(hwpmath::latex_to_unicode(r"\sum_{i=1}^{n}"), "∑ᵢ₌₁ⁿ");
/// ```
pub fn latex_to_unicode(latex: &str) -> String {
    let body = strip_math_delimiters(latex);
    let output = convert_fragment(body);
    tracing::debug!(input = latex, output = %output, "latex to unicode");
    output
}

/// Remove one `$..$`, `$$..$$`, `\[..\]` or `\(..\)` wrapper around the whole
/// input. Anything else, including several wrapped formulas in a row, is
/// returned as is.
pub fn strip_math_delimiters(latex: &str) -> &str {
    let trimmed = latex.trim();
    let wrappers: [(&Regex, &[&str]); 4] = [
        (&*DISPLAY_DOLLARS, &[]),
        (&*INLINE_DOLLARS, &[]),
        (&*DISPLAY_BRACKETS, &[r"\[", r"\]"]),
        (&*INLINE_PARENS, &[r"\(", r"\)"]),
    ];
    for (re, inner_delimiters) in wrappers {
        if let Some(inner) = re.captures(trimmed).and_then(|caps| caps.get(1)) {
            let inner = inner.as_str();
            if inner_delimiters.iter().any(|d| inner.contains(d)) {
                continue;
            }
            return inner;
        }
    }
    latex
}

/// Run every stage in order on `text`. Fraction arguments come back through
/// here, so they see the same pipeline as the top level.
pub(crate) fn convert_fragment(text: &str) -> String {
    convert_fragment_at(text, 0)
}

/// `depth` counts the fractions enclosing `text`.
pub(crate) fn convert_fragment_at(text: &str, depth: usize) -> String {
    let text = convert_greek(text);
    let text = convert_named_symbols(&text);
    let text = fraction::convert_fractions_at(&text, depth);
    let text = convert_limits(&text);
    let text = convert_scripts(&text, Script::Subscript);
    convert_scripts(&text, Script::Superscript)
}

/// Stage 1: Greek letters.
pub fn convert_greek(text: &str) -> String {
    replace_symbols(text, |class| class.is_greek())
}

/// Stage 2: every non-Greek symbol class.
pub fn convert_named_symbols(text: &str) -> String {
    replace_symbols(text, |class| !class.is_greek())
}

/// Replace each `\name` whose entry belongs to a class accepted by `filter`.
/// Unknown names and names glued to a digit stay as written.
fn replace_symbols(text: &str, filter: impl Fn(SymbolClass) -> bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while let Some(rel) = text[i..].find('\\') {
        let start = i + rel;
        out.push_str(&text[i..start]);

        let (name, end) = command_name(text, start + 1);
        if name.is_empty() {
            let next = start + 1 + char_len_at(text, start + 1);
            out.push_str(&text[start..next]);
            i = next;
            continue;
        }

        match lookup_entry(name) {
            Some((class, glyph)) if filter(class) && at_command_boundary(text, end) => {
                out.push_str(glyph);
            }
            _ => out.push_str(&text[start..end]),
        }
        i = end;
    }

    out.push_str(&text[i..]);
    out
}

/// Convert and report every construct that degraded to pass-through.
pub fn latex_to_unicode_with_report(latex: &str) -> ConversionReport {
    let content = latex_to_unicode(latex);
    let losses = collect_losses(&content);
    if !losses.is_empty() {
        tracing::debug!(count = losses.len(), "unicode conversion left constructs unconverted");
    }
    ConversionReport::new(content, LossReport::new("latex", "unicode", losses, Vec::new()))
}

fn collect_losses(output: &str) -> Vec<LossRecord> {
    let mut losses = Vec::new();
    let mut i = 0;

    while i < output.len() {
        let c = match output[i..].chars().next() {
            Some(c) => c,
            None => break,
        };

        match c {
            '\\' => {
                let (name, end) = command_name(output, i + 1);
                if name.is_empty() {
                    i += 1 + char_len_at(output, i + 1);
                    continue;
                }
                let kind = if matches!(name, "frac" | "dfrac" | "tfrac") {
                    LossKind::MalformedFraction
                } else {
                    LossKind::UnknownCommand
                };
                let message = match kind {
                    LossKind::MalformedFraction => "fraction without two brace groups",
                    _ => "no Unicode symbol for command",
                };
                losses.push(LossRecord::new(
                    format!("L{:04}", losses.len() + 1),
                    kind,
                    Some(name.to_string()),
                    message,
                    Some(output[i..end].to_string()),
                    Some(context_around(output, i)),
                ));
                i = end;
            }
            '^' | '_' => {
                let next = i + 1 + char_len_at(output, i + 1);
                if next > i + 1 {
                    losses.push(LossRecord::new(
                        format!("L{:04}", losses.len() + 1),
                        LossKind::UnsupportedScript,
                        None,
                        "character has no Unicode script form",
                        Some(output[i..next].to_string()),
                        Some(context_around(output, i)),
                    ));
                }
                i = next;
            }
            c => i += c.len_utf8(),
        }
    }

    losses
}

fn context_around(text: &str, pos: usize) -> String {
    let start = text[..pos]
        .char_indices()
        .rev()
        .nth(7)
        .map_or(0, |(idx, _)| idx);
    text[start..].chars().take(20).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_delimiters() {
        assert_eq!(strip_math_delimiters("$x^2$"), "x^2");
        assert_eq!(strip_math_delimiters("$$x$$"), "x");
        assert_eq!(strip_math_delimiters(r"\[a+b\]"), "a+b");
        assert_eq!(strip_math_delimiters(r"\(a\)"), "a");
        assert_eq!(strip_math_delimiters("$a$ and $b$"), "$a$ and $b$");
        assert_eq!(strip_math_delimiters("costs $5"), "costs $5");
    }

    #[test]
    fn test_separate_formulas_not_stripped() {
        assert_eq!(strip_math_delimiters(r"\[a\] + \[b\]"), r"\[a\] + \[b\]");
        assert_eq!(strip_math_delimiters(r"\(a\) = \(b\)"), r"\(a\) = \(b\)");
        assert_eq!(latex_to_unicode(r"\[a\] + \[b\]"), r"\[a\] + \[b\]");
    }

    #[test]
    fn test_nested_scripts_render_through_pipeline() {
        assert_eq!(latex_to_unicode("x^{a_1}"), "xᵃ₁");
        assert_eq!(latex_to_unicode("e^{-x_i}"), "e⁻ˣᵢ");
        assert_eq!(latex_to_unicode("x_{i^2}"), "xᵢ²");
    }

    #[test]
    fn test_greek_stage_only_touches_greek() {
        assert_eq!(convert_greek(r"\alpha \leq \Omega"), r"α \leq Ω");
        assert_eq!(convert_named_symbols(r"\alpha \leq \Omega"), r"\alpha ≤ \Omega");
    }

    #[test]
    fn test_symbol_boundary() {
        assert_eq!(convert_greek(r"\alpha2"), r"\alpha2");
        assert_eq!(convert_greek(r"\alpha_1"), "α_1");
        assert_eq!(convert_named_symbols(r"\int\infty"), "∫∞");
        assert_eq!(convert_named_symbols(r"\inn"), r"\inn");
    }

    #[test]
    fn test_escaped_backslash_not_a_command() {
        assert_eq!(convert_greek(r"a \\ \pi"), r"a \\ π");
    }

    #[test]
    fn test_report_lists_unknown_commands() {
        let report = latex_to_unicode_with_report(r"\mathbf{F} + x^{q}");
        assert_eq!(report.content, r"\mathbf{F} + x^q");
        assert_eq!(report.report.losses.len(), 2);
        assert_eq!(report.report.losses[0].name.as_deref(), Some("mathbf"));
        assert!(matches!(
            report.report.losses[1].kind,
            LossKind::UnsupportedScript
        ));
    }

    #[test]
    fn test_report_malformed_fraction() {
        let report = latex_to_unicode_with_report(r"\frac{a}");
        assert!(matches!(
            report.report.losses[0].kind,
            LossKind::MalformedFraction
        ));
    }

    #[test]
    fn test_report_empty_for_clean_input() {
        let report = latex_to_unicode_with_report("x^2 + y_1");
        assert!(report.report.is_empty());
    }
}
