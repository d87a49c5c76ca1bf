//! Expression tree → equation text
//!
//! | node         | hwpeqn                  | latex              |
//! |--------------|-------------------------|--------------------|
//! | Fraction     | `{num} over {den}`      | `\frac{num}{den}`  |
//! | Superscript  | `base^{exp}`            | `base^{exp}`       |
//! | Subscript    | `base_{idx}`            | `base_{idx}`       |
//! | Symbol       | keyword                 | `\name`            |
//! | Literal      | verbatim                | verbatim           |
//! | Grouped      | siblings, `{..}` if braced                   |

use hwpmath_ir::{Dialect, Expr};

use super::keywords::hwpeqn_keyword;

/// Serialize a tree in the target dialect.
pub fn decode(tree: &Expr, dialect: Dialect) -> String {
    let mut out = String::new();
    encode_into(tree, dialect, &mut out);
    out
}

fn encode_into(expr: &Expr, dialect: Dialect, out: &mut String) {
    match expr {
        Expr::Literal(text) => out.push_str(text),
        Expr::Symbol(name) => match dialect {
            Dialect::HwpEqn => out.push_str(hwpeqn_keyword(name)),
            Dialect::Latex => {
                out.push('\\');
                out.push_str(name);
            }
        },
        Expr::Superscript { base, exponent } => {
            encode_into(base, dialect, out);
            out.push_str("^{");
            encode_into(exponent, dialect, out);
            out.push('}');
        }
        Expr::Subscript { base, index } => {
            encode_into(base, dialect, out);
            out.push_str("_{");
            encode_into(index, dialect, out);
            out.push('}');
        }
        Expr::Fraction {
            numerator,
            denominator,
        } => match dialect {
            Dialect::HwpEqn => {
                out.push('{');
                encode_into(numerator, dialect, out);
                out.push_str("} over {");
                encode_into(denominator, dialect, out);
                out.push('}');
            }
            Dialect::Latex => {
                out.push_str("\\frac{");
                encode_into(numerator, dialect, out);
                out.push_str("}{");
                encode_into(denominator, dialect, out);
                out.push('}');
            }
        },
        Expr::Grouped { children, braced } => {
            if *braced {
                out.push('{');
            }
            encode_siblings(children, dialect, out);
            if *braced {
                out.push('}');
            }
        }
    }
}

/// Concatenate sibling encodings. A keyword on either side of a boundary
/// gets a single separating space so it cannot glue onto its neighbour
/// (`a` + `over` must not become `aover`); text that was contiguous in the
/// source stays contiguous.
fn encode_siblings(children: &[Expr], dialect: Dialect, out: &mut String) {
    let mut prev: Option<&Expr> = None;

    for child in children {
        let encoded = decode(child, dialect);
        if encoded.is_empty() {
            continue;
        }
        if let Some(prev) = prev {
            let keyword_boundary = ends_with_keyword(prev) || starts_with_keyword(child);
            let spaced = out.ends_with(char::is_whitespace)
                || encoded.starts_with(char::is_whitespace);
            if keyword_boundary && !spaced {
                out.push(' ');
            }
        }
        out.push_str(&encoded);
        prev = Some(child);
    }
}

fn starts_with_keyword(expr: &Expr) -> bool {
    match expr {
        Expr::Symbol(_) => true,
        Expr::Superscript { base, .. } | Expr::Subscript { base, .. } => starts_with_keyword(base),
        Expr::Grouped {
            children,
            braced: false,
        } => children
            .iter()
            .find(|c| !c.is_empty())
            .is_some_and(starts_with_keyword),
        Expr::Literal(_) | Expr::Fraction { .. } | Expr::Grouped { .. } => false,
    }
}

fn ends_with_keyword(expr: &Expr) -> bool {
    match expr {
        Expr::Symbol(_) => true,
        Expr::Grouped {
            children,
            braced: false,
        } => children
            .iter()
            .rev()
            .find(|c| !c.is_empty())
            .is_some_and(ends_with_keyword),
        _ => false,
    }
}
