//! Expression tree for equation conversion.
//!
//! The parser builds an [`Expr`] from LaTeX (or HwpEqn) tokens and the encoder
//! consumes it. A tree is owned by the single conversion call that built it.

use std::fmt;
use std::str::FromStr;

/// A node of the equation expression tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Verbatim text, whitespace included.
    Literal(String),
    /// `base^{exponent}`
    Superscript {
        base: Box<Expr>,
        exponent: Box<Expr>,
    },
    /// `base_{index}`
    Subscript { base: Box<Expr>, index: Box<Expr> },
    Fraction {
        numerator: Box<Expr>,
        denominator: Box<Expr>,
    },
    /// A sequence of sibling nodes. `braced` is set when the sequence was
    /// written as an explicit `{...}` group in the source.
    Grouped { children: Vec<Expr>, braced: bool },
    /// A named symbol or command, without the leading backslash.
    Symbol(String),
}

impl Expr {
    pub fn literal(s: impl Into<String>) -> Self {
        Expr::Literal(s.into())
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Expr::Symbol(name.into())
    }

    pub fn superscript(base: Expr, exponent: Expr) -> Self {
        Expr::Superscript {
            base: Box::new(base),
            exponent: Box::new(exponent),
        }
    }

    pub fn subscript(base: Expr, index: Expr) -> Self {
        Expr::Subscript {
            base: Box::new(base),
            index: Box::new(index),
        }
    }

    pub fn fraction(numerator: Expr, denominator: Expr) -> Self {
        Expr::Fraction {
            numerator: Box::new(numerator),
            denominator: Box::new(denominator),
        }
    }

    /// An implicit (unbraced) sequence.
    pub fn sequence(children: Vec<Expr>) -> Self {
        Expr::Grouped {
            children,
            braced: false,
        }
    }

    /// An explicit `{...}` group.
    pub fn braced(children: Vec<Expr>) -> Self {
        Expr::Grouped {
            children,
            braced: true,
        }
    }

    /// Returns true for an empty literal or an empty unbraced sequence.
    pub fn is_empty(&self) -> bool {
        match self {
            Expr::Literal(s) => s.is_empty(),
            Expr::Grouped {
                children,
                braced: false,
            } => children.iter().all(Expr::is_empty),
            _ => false,
        }
    }

    /// Height of this subtree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Expr::Literal(_) | Expr::Symbol(_) => 1,
            Expr::Superscript { base, exponent } => 1 + base.depth().max(exponent.depth()),
            Expr::Subscript { base, index } => 1 + base.depth().max(index.depth()),
            Expr::Fraction {
                numerator,
                denominator,
            } => 1 + numerator.depth().max(denominator.depth()),
            Expr::Grouped { children, .. } => {
                1 + children.iter().map(Expr::depth).max().unwrap_or(0)
            }
        }
    }
}

/// Named grammar a token stream is read in or a tree is written out as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    /// LaTeX math source: `\frac{a}{b}`, `\alpha`, `x^{2}`.
    #[default]
    Latex,
    /// Hancom equation editor syntax: `{a} over {b}`, `alpha`, `x^{2}`.
    HwpEqn,
}

impl Dialect {
    pub fn name(self) -> &'static str {
        match self {
            Dialect::Latex => "latex",
            Dialect::HwpEqn => "hwpeqn",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognised dialect name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDialect(pub String);

impl fmt::Display for UnknownDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown dialect '{}' (expected 'latex' or 'hwpeqn')", self.0)
    }
}

impl std::error::Error for UnknownDialect {}

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "latex" | "tex" => Ok(Dialect::Latex),
            "hwpeqn" | "hwp" | "eqn" => Ok(Dialect::HwpEqn),
            _ => Err(UnknownDialect(s.to_string())),
        }
    }
}
