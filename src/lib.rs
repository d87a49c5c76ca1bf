//! # hwpmath
//!
//! LaTeX math in two directions it is commonly needed for in Korean
//! document tooling:
//!
//! - **Unicode text**: a best-effort string rewrite (`\alpha` → `α`,
//!   `x^2` → `x²`, `\frac{1}{2}` → `½`) that never fails.
//! - **HwpEqn**: the equation script of Hancom Office, produced by a real
//!   tokenizer, parser and encoder.
//!
//! ## Example
//!
//! ```
//! use hwpmath::{latex_to_hwpeqn, latex_to_unicode};
//!
//! assert_eq!(latex_to_unicode(r"\alpha^2 + \beta"), "α² + β");
//! assert_eq!(latex_to_hwpeqn(r"\frac{a}{b}").unwrap(), "{a} over {b}");
//! ```

pub mod core;
pub mod utils;
pub mod wasm;

pub use crate::core::latex2hwpeqn::{
    convert_dialect, decode, latex_to_hwpeqn, latex_to_hwpeqn_or_passthrough,
    latex_to_hwpeqn_with_report, parse_expression, tokenize, MAX_NESTING, Lexer, Token, TokenKind,
};
pub use crate::core::latex2unicode::{
    latex_to_unicode, latex_to_unicode_with_report, strip_math_delimiters, symbols_in,
    SymbolClass,
};
/// The Unicode entry point under its short name.
pub use crate::core::latex2unicode::latex_to_unicode as convert;
pub use crate::utils::error::{ConversionError, ConversionResult, ErrorKind, ParseError};
#[cfg(not(target_arch = "wasm32"))]
pub use crate::utils::external::{latex_to_hwpeqn_external, ExternalConverterConfig};
pub use crate::utils::loss::{ConversionReport, LossKind, LossRecord, LossReport};
pub use hwpmath_ir::{Dialect, Expr};
