//! `\frac{A}{B}` conversion
//!
//! Small digit fractions with a Unicode vulgar-fraction code point become
//! that glyph; everything else is flattened to `A/B` with both parts run
//! through the pipeline again.

use phf::phf_map;

use super::scan::{braced_group, char_len_at, command_name};

static VULGAR_FRACTIONS: phf::Map<&'static str, &'static str> = phf_map! {
    "1/2" => "½",
    "1/3" => "⅓",
    "2/3" => "⅔",
    "1/4" => "¼",
    "3/4" => "¾",
    "1/5" => "⅕",
    "2/5" => "⅖",
    "3/5" => "⅗",
    "4/5" => "⅘",
    "1/6" => "⅙",
    "5/6" => "⅚",
    "1/7" => "⅐",
    "1/8" => "⅛",
    "3/8" => "⅜",
    "5/8" => "⅝",
    "7/8" => "⅞",
};

const FRACTION_COMMANDS: [&str; 3] = ["frac", "dfrac", "tfrac"];

/// Fractions nested deeper than this are left as written.
const MAX_FRACTION_NESTING: usize = 64;

/// Precomposed glyph for a pair of plain decimal strings, if one exists.
pub fn vulgar_fraction(numerator: &str, denominator: &str) -> Option<&'static str> {
    if !is_plain_integer(numerator) || !is_plain_integer(denominator) {
        return None;
    }
    VULGAR_FRACTIONS
        .get(format!("{}/{}", numerator, denominator).as_str())
        .copied()
}

fn is_plain_integer(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Convert an already extracted argument pair.
pub fn convert_fraction(numerator: &str, denominator: &str) -> String {
    fraction_at(numerator, denominator, 0)
}

fn fraction_at(numerator: &str, denominator: &str, depth: usize) -> String {
    if let Some(glyph) = vulgar_fraction(numerator, denominator) {
        return glyph.to_string();
    }
    format!(
        "{}/{}",
        super::convert_fragment_at(numerator, depth + 1),
        super::convert_fragment_at(denominator, depth + 1)
    )
}

/// Fraction stage: rewrite every well-formed `\frac{..}{..}` in `text`.
/// Malformed ones (missing or unbalanced arguments) are left as written.
pub fn convert_fractions(text: &str) -> String {
    convert_fractions_at(text, 0)
}

pub(super) fn convert_fractions_at(text: &str, depth: usize) -> String {
    if depth >= MAX_FRACTION_NESTING {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while let Some(rel) = text[i..].find('\\') {
        let start = i + rel;
        out.push_str(&text[i..start]);

        let (name, name_end) = command_name(text, start + 1);
        if name.is_empty() {
            // `\\`, `\{` and friends: copy the escape pair as-is.
            let next = start + 1 + char_len_at(text, start + 1);
            out.push_str(&text[start..next]);
            i = next;
            continue;
        }

        if FRACTION_COMMANDS.contains(&name) {
            if let Some((num, den, end)) = fraction_arguments(text, name_end) {
                out.push_str(&fraction_at(num, den, depth));
                i = end;
                continue;
            }
        }

        out.push_str(&text[start..name_end]);
        i = name_end;
    }

    out.push_str(&text[i..]);
    out
}

/// Read `{A}{B}` (whitespace allowed before each group) starting at `pos`.
fn fraction_arguments(text: &str, pos: usize) -> Option<(&str, &str, usize)> {
    let pos = skip_spaces(text, pos);
    let (num, after_num) = braced_group(text, pos)?;
    let pos = skip_spaces(text, after_num);
    let (den, end) = braced_group(text, pos)?;
    Some((num, den, end))
}

fn skip_spaces(text: &str, pos: usize) -> usize {
    text[pos..]
        .find(|c: char| !c.is_whitespace())
        .map_or(text.len(), |n| pos + n)
}
