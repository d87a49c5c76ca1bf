//! Token definitions for the HwpEqn path.

use std::fmt;

/// What a token is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A control sequence like `\frac` or `\,`.
    /// The string does NOT include the leading backslash.
    Command(String),

    /// Begin group `{`
    LBrace,

    /// End group `}`
    RBrace,

    /// Superscript marker `^`
    Caret,

    /// Subscript marker `_`
    Underscore,

    /// Maximal run of ordinary characters, whitespace kept verbatim.
    Text(String),

    /// End of input marker
    Eof,
}

/// A token and the byte offset in the source where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// Returns true if this is the end-of-input token
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Command(name) => write!(f, "\\{}", name),
            TokenKind::LBrace => write!(f, "{{"),
            TokenKind::RBrace => write!(f, "}}"),
            TokenKind::Caret => write!(f, "^"),
            TokenKind::Underscore => write!(f, "_"),
            TokenKind::Text(text) => write!(f, "{}", text),
            TokenKind::Eof => Ok(()),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_display() {
        assert_eq!(format!("{}", TokenKind::Command("frac".into())), "\\frac");
        assert_eq!(format!("{}", TokenKind::LBrace), "{");
        assert_eq!(format!("{}", TokenKind::RBrace), "}");
        assert_eq!(format!("{}", TokenKind::Text("a + b".into())), "a + b");
        assert_eq!(format!("{}", TokenKind::Eof), "");
    }

    #[test]
    fn test_token_accessors() {
        let token = Token::new(TokenKind::Command("alpha".into()), 3);
        assert!(!token.is_eof());
        assert!(Token::new(TokenKind::Eof, 9).is_eof());
    }
}
