//! Conversion engines
//!
//! - `latex2unicode`: staged string rewriting into Unicode text
//! - `latex2hwpeqn`: tokenizer, parser and encoder for HwpEqn

pub mod latex2hwpeqn;
pub mod latex2unicode;
