//! LaTeX to HwpEqn conversion
//!
//! Unlike the Unicode converter this path builds a real expression tree:
//! [`tokenize`] → [`parse_expression`] → [`decode`]. The parser is strict
//! and reports unbalanced braces; [`latex_to_hwpeqn_or_passthrough`] is the
//! lenient entry point that degrades to the original text instead.

pub mod encoder;
pub mod keywords;
pub mod lexer;
pub mod parser;
pub mod token;

pub use encoder::decode;
pub use hwpmath_ir::{Dialect, Expr};
pub use keywords::hwpeqn_keyword;
pub use lexer::{tokenize, Lexer};
pub use parser::{parse_expression, MAX_NESTING};
pub use token::{Token, TokenKind};

use crate::core::latex2unicode::strip_math_delimiters;
use crate::utils::error::ParseError;
use crate::utils::loss::{ConversionReport, LossKind, LossRecord, LossReport};

const SNIPPET_CHARS: usize = 16;

/// Parse `source` in one dialect and write it out in another.
pub fn convert_dialect(source: &str, from: Dialect, to: Dialect) -> Result<String, ParseError> {
    let tree = parse_expression(tokenize(source, from), from)?;
    Ok(decode(&tree, to))
}

/// Convert LaTeX math to HwpEqn.
///
/// Surrounding whitespace and a single math-delimiter wrapper are removed
/// first. Structural errors are returned, not papered over.
///
/// ```
/// assert_eq!(hwpmath::latex_to_hwpeqn(r"\frac{a}{b}").unwrap(), "{a} over {b}");
/// ```
pub fn latex_to_hwpeqn(latex: &str) -> Result<String, ParseError> {
    let body = strip_math_delimiters(latex.trim()).trim();
    let output = convert_dialect(body, Dialect::Latex, Dialect::HwpEqn)?;
    tracing::debug!(input = latex, output = %output, "latex to hwpeqn");
    Ok(output)
}

/// Like [`latex_to_hwpeqn`], but any failure is logged and the original
/// input is returned unchanged.
pub fn latex_to_hwpeqn_or_passthrough(latex: &str) -> String {
    latex_to_hwpeqn_with_report(latex).content
}

/// Lenient conversion that records a parse failure as a loss.
///
/// On failure the content is the original input, the report carries one
/// [`LossKind::ParseError`] record with the offending source text, and a
/// warning says the LaTeX was kept.
pub fn latex_to_hwpeqn_with_report(latex: &str) -> ConversionReport {
    let body = strip_math_delimiters(latex.trim()).trim();
    let (content, losses, warnings) = match latex_to_hwpeqn(latex) {
        Ok(output) => (output, Vec::new(), Vec::new()),
        Err(err) => {
            tracing::warn!(error = %err, "HwpEqn conversion failed, keeping LaTeX source");
            let snippet = body
                .get(err.offset..)
                .map(|rest| rest.chars().take(SNIPPET_CHARS).collect::<String>())
                .filter(|rest| !rest.is_empty());
            let record = LossRecord::new(
                "L0001".to_string(),
                LossKind::ParseError,
                Some(err.kind.to_string()),
                err.to_string(),
                snippet,
                Some(body.to_string()),
            );
            (
                latex.to_string(),
                vec![record],
                vec!["HwpEqn conversion failed; LaTeX source kept".to_string()],
            )
        }
    };
    ConversionReport::new(content, LossReport::new("latex", "hwpeqn", losses, warnings))
}
