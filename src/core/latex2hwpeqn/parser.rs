//! Recursive-descent equation parser
//!
//! Grammar, loosest to tightest:
//!
//! ```text
//! sequence := { postfix }
//! postfix  := atom { ("^" | "_") argument }      left-associative
//! atom     := "{" sequence "}" | fraction | COMMAND | TEXT
//! fraction := FRAC argument argument
//! argument := "{" sequence "}" | one character of TEXT | COMMAND
//! ```
//!
//! A text run in front of a script marker gives up only its last character
//! (LaTeX) or trailing word (HwpEqn) as the base.

use hwpmath_ir::{Dialect, Expr};

use super::token::{Token, TokenKind};
use crate::utils::error::{ErrorKind, ParseError};

const LATEX_FRACTION_COMMANDS: [&str; 3] = ["frac", "dfrac", "tfrac"];

/// Deepest tree the parser builds before giving up with
/// [`ErrorKind::NestingTooDeep`].
pub const MAX_NESTING: usize = 128;

/// Parse a token stream into an expression tree.
///
/// The root is always an unbraced [`Expr::Grouped`] sequence.
pub fn parse_expression<I>(tokens: I, dialect: Dialect) -> Result<Expr, ParseError>
where
    I: IntoIterator<Item = Token>,
{
    let mut parser = Parser::new(tokens.into_iter().collect(), dialect);
    let children = parser.parse_sequence(None)?;
    Ok(Expr::sequence(children))
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    dialect: Dialect,
    depth: usize,
}

impl Parser {
    fn new(mut tokens: Vec<Token>, dialect: Dialect) -> Self {
        if !tokens.last().is_some_and(Token::is_eof) {
            let end = tokens
                .last()
                .map_or(0, |t| t.offset + t.kind.to_string().len());
            tokens.push(Token::new(TokenKind::Eof, end));
        }
        Self {
            tokens,
            pos: 0,
            dialect,
            depth: 0,
        }
    }

    fn peek(&self) -> &Token {
        // The constructor guarantees a trailing Eof, and `advance` never
        // moves past it.
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !token.is_eof() {
            self.pos += 1;
        }
        token
    }

    /// Enter a group or fraction opened at `offset`.
    fn descend(&mut self, offset: usize) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_NESTING {
            return Err(ParseError::new(ErrorKind::NestingTooDeep, offset));
        }
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }

    fn is_fraction_command(&self, name: &str) -> bool {
        self.dialect == Dialect::Latex && LATEX_FRACTION_COMMANDS.contains(&name)
    }

    /// Parse siblings until end of input (`open == None`) or the `}` closing
    /// the group opened at `open`.
    fn parse_sequence(&mut self, open: Option<usize>) -> Result<Vec<Expr>, ParseError> {
        if let Some(open) = open {
            self.descend(open)?;
        }
        let mut nodes = Vec::new();

        loop {
            let token = self.peek().clone();
            match token.kind {
                TokenKind::Eof => {
                    if let Some(open) = open {
                        return Err(ParseError::new(ErrorKind::UnbalancedBraces, open));
                    }
                    break;
                }
                TokenKind::RBrace => {
                    if open.is_none() {
                        return Err(ParseError::new(
                            ErrorKind::UnexpectedClosingBrace,
                            token.offset,
                        ));
                    }
                    self.advance();
                    break;
                }
                TokenKind::Caret | TokenKind::Underscore => {
                    let marker = self.advance();
                    let base = self.take_base(&mut nodes);
                    let argument = self.parse_argument(marker.offset)?;
                    let node = match marker.kind {
                        TokenKind::Caret => Expr::superscript(base, argument),
                        _ => Expr::subscript(base, argument),
                    };
                    // Chained scripts deepen the tree without recursing here.
                    if self.depth + node.depth() > MAX_NESTING {
                        return Err(ParseError::new(ErrorKind::NestingTooDeep, marker.offset));
                    }
                    nodes.push(node);
                }
                _ => {
                    let atom = self.parse_atom()?;
                    nodes.push(atom);
                }
            }
        }

        if open.is_some() {
            self.ascend();
        }
        Ok(nodes)
    }

    /// Detach the base of a script from the end of `nodes`.
    fn take_base(&self, nodes: &mut Vec<Expr>) -> Expr {
        match nodes.pop() {
            None => Expr::literal(""),
            Some(Expr::Literal(text)) => {
                let trimmed = text.trim_end();
                if trimmed.is_empty() {
                    nodes.push(Expr::Literal(text));
                    return Expr::literal("");
                }
                let split = self.base_split(trimmed);
                if split > 0 {
                    nodes.push(Expr::literal(&trimmed[..split]));
                }
                Expr::literal(&trimmed[split..])
            }
            Some(node) => node,
        }
    }

    /// Byte index where the base starts inside a (right-trimmed) text run.
    fn base_split(&self, text: &str) -> usize {
        let last = text
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i);
        match self.dialect {
            Dialect::Latex => last,
            Dialect::HwpEqn => {
                if !text[last..].starts_with(|c: char| c.is_ascii_alphanumeric()) {
                    return last;
                }
                text.char_indices()
                    .rev()
                    .take_while(|(_, c)| c.is_ascii_alphanumeric())
                    .last()
                    .map_or(last, |(i, _)| i)
            }
        }
    }

    /// Parse the argument of a script marker or fraction command at `owner`.
    fn parse_argument(&mut self, owner: usize) -> Result<Expr, ParseError> {
        let token = self.peek().clone();
        match token.kind {
            TokenKind::LBrace => {
                self.advance();
                let children = self.parse_sequence(Some(token.offset))?;
                Ok(unwrap_single(children))
            }
            TokenKind::Text(text) => {
                let trimmed = text.trim_start();
                if trimmed.is_empty() {
                    self.advance();
                    return self.parse_argument(owner);
                }
                let skipped = text.len() - trimmed.len();
                let first_len = trimmed.chars().next().map_or(0, char::len_utf8);
                let first = &trimmed[..first_len];
                let rest = &trimmed[first_len..];
                if rest.is_empty() {
                    self.advance();
                } else {
                    self.tokens[self.pos] = Token::new(
                        TokenKind::Text(rest.to_string()),
                        token.offset + skipped + first_len,
                    );
                }
                Ok(Expr::literal(first))
            }
            TokenKind::Command(_) => self.parse_atom(),
            TokenKind::Caret | TokenKind::Underscore | TokenKind::RBrace | TokenKind::Eof => {
                Err(ParseError::new(ErrorKind::MissingArgument, owner))
            }
        }
    }

    fn parse_atom(&mut self) -> Result<Expr, ParseError> {
        let token = self.advance();
        match token.kind {
            TokenKind::LBrace => {
                let children = self.parse_sequence(Some(token.offset))?;
                Ok(Expr::braced(children))
            }
            TokenKind::Command(name) if self.is_fraction_command(&name) => {
                self.descend(token.offset)?;
                let numerator = self.parse_argument(token.offset)?;
                let denominator = self.parse_argument(token.offset)?;
                self.ascend();
                Ok(Expr::fraction(numerator, denominator))
            }
            TokenKind::Command(name) => Ok(Expr::Symbol(name)),
            TokenKind::Text(text) => Ok(Expr::Literal(text)),
            TokenKind::RBrace => Err(ParseError::new(
                ErrorKind::UnexpectedClosingBrace,
                token.offset,
            )),
            TokenKind::Caret | TokenKind::Underscore | TokenKind::Eof => {
                Err(ParseError::new(ErrorKind::MissingArgument, token.offset))
            }
        }
    }
}

fn unwrap_single(mut children: Vec<Expr>) -> Expr {
    if children.len() == 1 {
        children.remove(0)
    } else {
        Expr::sequence(children)
    }
}
