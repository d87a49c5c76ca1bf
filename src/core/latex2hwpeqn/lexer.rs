//! Equation Lexer/Tokenizer
//!
//! Converts equation source into a stream of tokens:
//! - Control sequence recognition (LaTeX dialect only)
//! - Brace and script markers
//! - Maximal text runs with whitespace preserved
//! - Space swallowing after alphabetic control sequences

use hwpmath_ir::Dialect;

use super::token::{Token, TokenKind};

/// Tokenize `source` in the given dialect.
///
/// The returned lexer is lazy and owns all of its scanning state, so every
/// call starts from scratch. It yields exactly one `Eof` token last.
pub fn tokenize(source: &str, dialect: Dialect) -> Lexer<'_> {
    Lexer::new(source, dialect)
}

/// The lexer that converts source text to tokens
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    dialect: Dialect,
    /// Track if we just emitted a control sequence (for space swallowing)
    after_cs: bool,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input
    pub fn new(source: &'a str, dialect: Dialect) -> Self {
        Lexer {
            source,
            chars: source.char_indices().peekable(),
            dialect,
            after_cs: false,
            finished: false,
        }
    }

    /// Peek at the next character without consuming it
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn offset(&mut self) -> usize {
        self.chars.peek().map_or(self.source.len(), |(i, _)| *i)
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().is_some_and(char::is_whitespace) {
            self.chars.next();
        }
    }

    fn is_special(&self, c: char) -> bool {
        match c {
            '{' | '}' | '^' | '_' => true,
            '\\' => self.dialect == Dialect::Latex,
            _ => false,
        }
    }

    /// Read a control sequence name (letters only, or single non-letter).
    /// The backslash has already been consumed.
    fn read_control_seq(&mut self) -> Option<String> {
        let c = self.peek_char()?;
        let mut name = String::new();

        if c.is_ascii_alphabetic() {
            while let Some(c) = self.peek_char() {
                if !c.is_ascii_alphabetic() {
                    break;
                }
                name.push(c);
                self.chars.next();
            }
            self.after_cs = true;
        } else {
            name.push(c);
            self.chars.next();
        }

        Some(name)
    }

    fn read_text(&mut self) -> String {
        let mut text = String::new();
        while let Some(c) = self.peek_char() {
            if self.is_special(c) {
                break;
            }
            text.push(c);
            self.chars.next();
        }
        text
    }

    /// Read the next token
    fn next_token(&mut self) -> Token {
        if self.after_cs {
            self.skip_whitespace();
            self.after_cs = false;
        }

        let offset = self.offset();
        let Some(c) = self.peek_char() else {
            return Token::new(TokenKind::Eof, offset);
        };

        let kind = match c {
            '{' => {
                self.chars.next();
                TokenKind::LBrace
            }
            '}' => {
                self.chars.next();
                TokenKind::RBrace
            }
            '^' => {
                self.chars.next();
                TokenKind::Caret
            }
            '_' => {
                self.chars.next();
                TokenKind::Underscore
            }
            '\\' if self.dialect == Dialect::Latex => {
                self.chars.next();
                match self.read_control_seq() {
                    Some(name) => TokenKind::Command(name),
                    // Lone backslash at end of input
                    None => TokenKind::Text("\\".to_string()),
                }
            }
            _ => TokenKind::Text(self.read_text()),
        };

        Token::new(kind, offset)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is_eof() {
            self.finished = true;
        }
        Some(token)
    }
}
