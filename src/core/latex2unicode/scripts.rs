//! Superscript and subscript conversion
//!
//! `^{...}` / `^x` and `_{...}` / `_x` become Unicode super/subscript glyphs.
//! Characters Unicode has no script form for keep their marker in front
//! (`^§`), so nothing is silently dropped.

use phf::phf_map;

use super::scan::{braced_group, char_len_at, command_name, matching_brace};

static SUPERSCRIPT_MAP: phf::Map<char, char> = phf_map! {
    '0' => '⁰', '1' => '¹', '2' => '²', '3' => '³', '4' => '⁴',
    '5' => '⁵', '6' => '⁶', '7' => '⁷', '8' => '⁸', '9' => '⁹',
    '+' => '⁺', '-' => '⁻', '=' => '⁼', '(' => '⁽', ')' => '⁾',
    'a' => 'ᵃ', 'b' => 'ᵇ', 'c' => 'ᶜ', 'd' => 'ᵈ', 'e' => 'ᵉ',
    'f' => 'ᶠ', 'g' => 'ᵍ', 'h' => 'ʰ', 'i' => 'ⁱ', 'j' => 'ʲ',
    'k' => 'ᵏ', 'l' => 'ˡ', 'm' => 'ᵐ', 'n' => 'ⁿ', 'o' => 'ᵒ',
    'p' => 'ᵖ', 'r' => 'ʳ', 's' => 'ˢ', 't' => 'ᵗ', 'u' => 'ᵘ',
    'v' => 'ᵛ', 'w' => 'ʷ', 'x' => 'ˣ', 'y' => 'ʸ', 'z' => 'ᶻ',
    'α' => 'ᵅ', 'β' => 'ᵝ', 'γ' => 'ᵞ', 'δ' => 'ᵟ', 'θ' => 'ᶿ',
    'φ' => 'ᵠ', 'χ' => 'ᵡ',
};

// No subscript forms exist for b c d f g q w y z.
static SUBSCRIPT_MAP: phf::Map<char, char> = phf_map! {
    '0' => '₀', '1' => '₁', '2' => '₂', '3' => '₃', '4' => '₄',
    '5' => '₅', '6' => '₆', '7' => '₇', '8' => '₈', '9' => '₉',
    '+' => '₊', '-' => '₋', '=' => '₌', '(' => '₍', ')' => '₎',
    'a' => 'ₐ', 'e' => 'ₑ', 'h' => 'ₕ', 'i' => 'ᵢ', 'j' => 'ⱼ',
    'k' => 'ₖ', 'l' => 'ₗ', 'm' => 'ₘ', 'n' => 'ₙ', 'o' => 'ₒ',
    'p' => 'ₚ', 'r' => 'ᵣ', 's' => 'ₛ', 't' => 'ₜ', 'u' => 'ᵤ',
    'v' => 'ᵥ', 'x' => 'ₓ',
    'β' => 'ᵦ', 'γ' => 'ᵧ', 'ρ' => 'ᵨ', 'φ' => 'ᵩ', 'χ' => 'ᵪ',
};

/// Which script a marker introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Superscript,
    Subscript,
}

impl Script {
    pub fn marker(self) -> char {
        match self {
            Script::Superscript => '^',
            Script::Subscript => '_',
        }
    }

    pub fn from_marker(c: char) -> Option<Script> {
        match c {
            '^' => Some(Script::Superscript),
            '_' => Some(Script::Subscript),
            _ => None,
        }
    }

    /// The script glyph for `c`, if Unicode has one.
    pub fn glyph(self, c: char) -> Option<char> {
        match self {
            Script::Superscript => SUPERSCRIPT_MAP.get(&c).copied(),
            Script::Subscript => SUBSCRIPT_MAP.get(&c).copied(),
        }
    }

    fn push_mapped(self, c: char, out: &mut String) {
        match self.glyph(c) {
            Some(g) => out.push(g),
            None => {
                out.push(self.marker());
                out.push(c);
            }
        }
    }
}

/// Outcome of reading a script argument right after its marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptArg {
    /// Rendered glyphs and the byte index one past the consumed argument.
    Converted { text: String, end: usize },
    /// A `{` that never closes.
    Unterminated,
    /// Nothing convertible follows the marker.
    NotApplicable,
}

/// Scripts nested deeper than this inside one group keep their marker.
const MAX_SCRIPT_NESTING: usize = 64;

/// Read the argument at `pos` (immediately after a `^`/`_` marker).
pub fn convert_script_at(text: &str, pos: usize, script: Script) -> ScriptArg {
    script_arg_at(text, pos, script, 0)
}

fn script_arg_at(text: &str, pos: usize, script: Script, depth: usize) -> ScriptArg {
    let Some(c) = text[pos..].chars().next() else {
        return ScriptArg::NotApplicable;
    };

    match c {
        '{' => match braced_group(text, pos) {
            Some((content, end)) => ScriptArg::Converted {
                text: render_group_at(content, script, depth),
                end,
            },
            None => ScriptArg::Unterminated,
        },
        '}' | '^' | '_' | '\\' => ScriptArg::NotApplicable,
        c if c.is_whitespace() => ScriptArg::NotApplicable,
        c => {
            let mut out = String::new();
            script.push_mapped(c, &mut out);
            ScriptArg::Converted {
                text: out,
                end: pos + c.len_utf8(),
            }
        }
    }
}

/// Map the content of a script group character by character.
///
/// Whitespace is kept, inner braces only group, a nested marker maps its own
/// argument through its own glyph map, and a leftover `\command` is kept
/// whole behind the marker.
pub fn render_group(content: &str, script: Script) -> String {
    render_group_at(content, script, 0)
}

fn render_group_at(content: &str, script: Script, depth: usize) -> String {
    let mut out = String::with_capacity(content.len() * 3);
    let mut i = 0;

    while i < content.len() {
        let c = match content[i..].chars().next() {
            Some(c) => c,
            None => break,
        };

        match c {
            '{' | '}' => i += 1,
            '^' | '_' if depth + 1 >= MAX_SCRIPT_NESTING => {
                out.push(c);
                i += 1;
            }
            '^' | '_' => {
                let nested = Script::from_marker(c).unwrap_or(script);
                match script_arg_at(content, i + 1, nested, depth + 1) {
                    ScriptArg::Converted { text, end } => {
                        out.push_str(&text);
                        i = end;
                    }
                    _ => {
                        out.push(c);
                        i += 1;
                    }
                }
            }
            '\\' => {
                let (name, end) = command_name(content, i + 1);
                out.push(script.marker());
                if name.is_empty() {
                    let next = i + 1 + char_len_at(content, i + 1);
                    out.push_str(&content[i..next]);
                    i = next;
                } else {
                    out.push_str(&content[i..end]);
                    i = end;
                }
            }
            c if c.is_whitespace() => {
                out.push(c);
                i += c.len_utf8();
            }
            c => {
                script.push_mapped(c, &mut out);
                i += c.len_utf8();
            }
        }
    }

    out
}

/// Convert every `marker` construct of one script kind in `text`.
///
/// A group of the other script is copied whole, so markers nested inside it
/// are rendered by the stage that owns it. An unterminated group stops
/// conversion: the marker and everything after it are copied unchanged.
pub fn convert_scripts(text: &str, script: Script) -> String {
    let marker = script.marker();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < text.len() {
        let c = match text[i..].chars().next() {
            Some(c) => c,
            None => break,
        };

        if c == '\\' {
            // Escaped characters (`\_`, `\^`) are never markers.
            let next = i + 1 + char_len_at(text, i + 1);
            out.push_str(&text[i..next]);
            i = next;
            continue;
        }

        if c != marker {
            if Script::from_marker(c).is_some() {
                if let Some((_, end)) = braced_group(text, i + 1) {
                    out.push_str(&text[i..end]);
                    i = end;
                    continue;
                }
            }
            out.push(c);
            i += c.len_utf8();
            continue;
        }

        match convert_script_at(text, i + 1, script) {
            ScriptArg::Converted { text: rendered, end } => {
                out.push_str(&rendered);
                i = end;
            }
            ScriptArg::Unterminated => {
                out.push_str(&text[i..]);
                break;
            }
            ScriptArg::NotApplicable => {
                out.push(c);
                i += 1;
            }
        }
    }

    out
}

/// Whether `c` has a glyph in the given script.
pub fn has_glyph(c: char, script: Script) -> bool {
    script.glyph(c).is_some()
}

/// Group-only variant used by the limits stage: reads `{...}` at `pos`.
pub fn convert_limit_group(text: &str, pos: usize, script: Script) -> Option<(String, usize)> {
    if text.as_bytes().get(pos) != Some(&b'{') {
        return None;
    }
    let close = matching_brace(text, pos)?;
    Some((render_group(&text[pos + 1..close], script), close + 1))
}
