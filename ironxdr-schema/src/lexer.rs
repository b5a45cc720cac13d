//! Lexical analysis for XDR sources.
//!
//! Keywords are returned as identifiers; the parser tells them apart.

use crate::error::ParseError;
use std::fmt;

/// Token kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifier or keyword.
    Ident(String),
    /// Integer literal, kept as written (sign included).
    Number(String),
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `<`
    LeftAngle,
    /// `>`
    RightAngle,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `=`
    Equals,
    /// `*`
    Star,
    /// End of input.
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(s) => write!(f, "'{s}'"),
            Self::Number(s) => write!(f, "number {s}"),
            Self::LeftBrace => f.write_str("'{'"),
            Self::RightBrace => f.write_str("'}'"),
            Self::LeftParen => f.write_str("'('"),
            Self::RightParen => f.write_str("')'"),
            Self::LeftBracket => f.write_str("'['"),
            Self::RightBracket => f.write_str("']'"),
            Self::LeftAngle => f.write_str("'<'"),
            Self::RightAngle => f.write_str("'>'"),
            Self::Semicolon => f.write_str("';'"),
            Self::Comma => f.write_str("','"),
            Self::Colon => f.write_str("':'"),
            Self::Equals => f.write_str("'='"),
            Self::Star => f.write_str("'*'"),
            Self::Eof => f.write_str("end of input"),
        }
    }
}

/// A token with its source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Kind and payload.
    pub kind: TokenKind,
    /// Line (1-based).
    pub line: usize,
    /// Column (1-based).
    pub column: usize,
}

/// Scanner over XDR source text.
pub struct Lexer<'a> {
    /// Remaining source characters.
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    /// Current line number (1-indexed).
    line: usize,
    /// Current column number (1-indexed).
    column: usize,
    /// True until a non-blank character is seen on the current line.
    at_line_start: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer over `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            line: 1,
            column: 1,
            at_line_start: true,
        }
    }

    /// Scans the whole input.
    ///
    /// The returned vector always ends with an [`TokenKind::Eof`] token.
    ///
    /// # Errors
    /// Returns `ParseError` on an invalid character or unterminated comment.
    pub fn tokenize(mut self) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
            self.at_line_start = true;
        } else {
            self.column += 1;
            if !c.is_whitespace() {
                self.at_line_start = false;
            }
        }
        Some(c)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn skip_line(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn skip_block_comment(&mut self, start_line: usize) -> Result<(), ParseError> {
        let mut prev = '\0';
        while let Some(c) = self.advance() {
            if prev == '*' && c == '/' {
                return Ok(());
            }
            prev = c;
        }
        Err(ParseError::UnterminatedComment { line: start_line })
    }

    /// Skips whitespace, comments and `%` passthrough lines.
    fn skip_trivia(&mut self) -> Result<(), ParseError> {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.advance();
                }
                Some('%') if self.at_line_start => self.skip_line(),
                Some('/') => {
                    let mut lookahead = self.chars.clone();
                    lookahead.next();
                    match lookahead.next() {
                        Some('/') => self.skip_line(),
                        Some('*') => {
                            let line = self.line;
                            self.advance();
                            self.advance();
                            self.skip_block_comment(line)?;
                        }
                        _ => return Ok(()),
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn next_token(&mut self) -> Result<Token, ParseError> {
        self.skip_trivia()?;
        let line = self.line;
        let column = self.column;
        let token = |kind| Token { kind, line, column };

        let Some(c) = self.advance() else {
            return Ok(token(TokenKind::Eof));
        };

        let kind = match c {
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            '<' => TokenKind::LeftAngle,
            '>' => TokenKind::RightAngle,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            '=' => TokenKind::Equals,
            '*' => TokenKind::Star,
            '-' if self.peek().is_some_and(|n| n.is_ascii_digit()) => {
                TokenKind::Number(self.scan_word(c))
            }
            c if c.is_ascii_digit() => TokenKind::Number(self.scan_word(c)),
            c if c.is_ascii_alphabetic() || c == '_' => TokenKind::Ident(self.scan_word(c)),
            ch => return Err(ParseError::InvalidCharacter { line, column, ch }),
        };
        Ok(token(kind))
    }

    /// Scans the rest of an identifier or number starting with `first`.
    fn scan_word(&mut self, first: char) -> String {
        let mut word = String::from(first);
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                word.push(c);
                self.advance();
            } else {
                break;
            }
        }
        word
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        Lexer::new(src)
            .tokenize()
            .expect("tokenize")
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_punctuation_and_words() {
        assert_eq!(
            kinds("const MAX = 0x10;"),
            vec![
                TokenKind::Ident("const".into()),
                TokenKind::Ident("MAX".into()),
                TokenKind::Equals,
                TokenKind::Number("0x10".into()),
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_negative_number() {
        assert_eq!(
            kinds("A = -1"),
            vec![
                TokenKind::Ident("A".into()),
                TokenKind::Equals,
                TokenKind::Number("-1".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_comments_and_passthrough() {
        let src = "%#include \"x.h\"\n/* block\n comment */ int // trailing\n x;";
        assert_eq!(
            kinds(src),
            vec![
                TokenKind::Ident("int".into()),
                TokenKind::Ident("x".into()),
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_positions() {
        let tokens = Lexer::new("a\n  b").tokenize().expect("tokenize");
        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
        assert_eq!((tokens[1].line, tokens[1].column), (2, 3));
    }

    #[test]
    fn test_unterminated_comment() {
        let err = Lexer::new("int /* open").tokenize().unwrap_err();
        assert!(matches!(err, ParseError::UnterminatedComment { line: 1 }));
    }

    #[test]
    fn test_invalid_character() {
        let err = Lexer::new("int $x;").tokenize().unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidCharacter { ch: '$', column: 5, .. }
        ));
    }
}
