//! Lexical analysis for Go source files.
//!
//! Converts source text into a vector of [`Token`]s, applying Go's
//! automatic semicolon insertion so the parser can treat newlines and
//! explicit `;` alike. Comments are dropped but recorded as separating
//! whitespace, which lets the parser reproduce type expressions with
//! their original spacing.
//!
//! # Example
//!
//! ```
//! use rpcgen_syntax::{TokenKind, tokenize};
//!
//! let tokens = tokenize("arith.go", "package arith\n").unwrap();
//! assert_eq!(tokens[1].text, "arith");
//! assert_eq!(tokens[2].kind, TokenKind::Semicolon { implicit: true });
//! assert!(tokens[3].is_eof());
//! ```

use crate::token::{Keyword, Span, Token, TokenKind};
use rpcgen_core::{Error, Result, SourcePosition};
use std::iter::Peekable;
use std::str::CharIndices;

/// Operators and delimiters, longest first so that maximal munch works
/// by taking the first prefix match.
const PUNCTUATION: &[&str] = &[
    "<<=", ">>=", "&^=", "...", "&&", "||", "<-", "++", "--", "==", "!=", "<=", ">=", ":=", "<<",
    ">>", "&^", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "+", "-", "*", "/", "%", "&", "|",
    "^", "<", ">", "=", "!", "~", "(", ")", "[", "]", "{", "}", ",", ".", ":",
];

/// Accepted, and skipped, only as the first character of a file.
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Tokenizes a whole source file.
///
/// The returned vector always ends with a [`TokenKind::Eof`] token.
///
/// # Errors
///
/// Returns [`Error::ParseError`] for unterminated literals or comments
/// and for characters that cannot start a Go token.
pub fn tokenize(file: &str, source: &str) -> Result<Vec<Token>> {
    Lexer::new(file, source).run()
}

struct Lexer<'src> {
    file: &'src str,
    source: &'src str,
    chars: Peekable<CharIndices<'src>>,
    position: usize,
    line: u32,
    column: u32,
    tokens: Vec<Token>,
    space_before: bool,
}

impl<'src> Lexer<'src> {
    fn new(file: &'src str, source: &'src str) -> Self {
        Self {
            file,
            source,
            chars: source.char_indices().peekable(),
            position: 0,
            line: 1,
            column: 1,
            tokens: Vec::new(),
            space_before: false,
        }
    }

    fn run(mut self) -> Result<Vec<Token>> {
        if let Some(&(_, BYTE_ORDER_MARK)) = self.chars.peek() {
            self.chars.next();
            self.position = BYTE_ORDER_MARK.len_utf8();
        }

        loop {
            let Some(c) = self.peek_char() else {
                self.newline_semicolon();
                let span = self.span_from(self.position, self.line, self.column);
                self.push(TokenKind::Eof, String::new(), span);
                return Ok(self.tokens);
            };

            match c {
                '\n' => {
                    self.newline_semicolon();
                    self.advance();
                    self.space_before = true;
                }
                ' ' | '\t' | '\r' => {
                    self.advance();
                    self.space_before = true;
                }
                '/' if self.peek_char_n(1) == Some('/') => self.line_comment(),
                '/' if self.peek_char_n(1) == Some('*') => self.block_comment()?,
                c if c == '_' || c.is_alphabetic() => self.identifier(),
                c if c.is_ascii_digit() => self.number(),
                '.' if self.peek_char_n(1).is_some_and(|n| n.is_ascii_digit()) => self.number(),
                '"' => self.interpreted_string()?,
                '`' => self.raw_string()?,
                '\'' => self.rune()?,
                ';' => {
                    let (start, line, column) = self.mark();
                    self.advance();
                    let span = self.span_from(start, line, column);
                    self.push(TokenKind::Semicolon { implicit: false }, ";".to_string(), span);
                }
                _ => self.punctuation()?,
            }
        }
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    fn peek_char_n(&self, n: usize) -> Option<char> {
        self.chars.clone().nth(n).map(|(_, c)| c)
    }

    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.position = pos + c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek_char().is_some_and(&predicate) {
            self.advance();
        }
    }

    fn mark(&mut self) -> (usize, u32, u32) {
        let start = self.chars.peek().map_or(self.source.len(), |&(pos, _)| pos);
        (start, self.line, self.column)
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "source files over 4GB are not supported"
    )]
    const fn span_from(&self, start: usize, line: u32, column: u32) -> Span {
        Span::new(start as u32, self.position as u32, line, column)
    }

    fn error_at(&self, line: u32, column: u32, message: impl Into<String>) -> Error {
        Error::ParseError {
            position: SourcePosition::new(self.file, line, column),
            message: message.into(),
        }
    }

    fn push(&mut self, kind: TokenKind, text: String, span: Span) {
        self.tokens.push(Token {
            kind,
            text,
            span,
            space_before: std::mem::take(&mut self.space_before),
        });
    }

    /// Inserts an implicit semicolon if the previous token ends a line.
    fn newline_semicolon(&mut self) {
        if self.tokens.last().is_some_and(Token::triggers_semicolon) {
            let span = self.span_from(self.position, self.line, self.column);
            let token = Token {
                kind: TokenKind::Semicolon { implicit: true },
                text: ";".to_string(),
                span,
                space_before: false,
            };
            self.tokens.push(token);
        }
    }

    fn line_comment(&mut self) {
        self.advance_while(|c| c != '\n');
        self.space_before = true;
    }

    fn block_comment(&mut self) -> Result<()> {
        let (_, line, column) = self.mark();
        self.advance();
        self.advance();
        let mut saw_newline = false;
        loop {
            match self.advance() {
                None => return Err(self.error_at(line, column, "comment not terminated")),
                Some('*') if self.peek_char() == Some('/') => {
                    self.advance();
                    break;
                }
                Some('\n') => saw_newline = true,
                Some(_) => {}
            }
        }
        // A general comment spanning lines acts like a newline.
        if saw_newline {
            self.newline_semicolon();
        }
        self.space_before = true;
        Ok(())
    }

    fn identifier(&mut self) {
        let (start, line, column) = self.mark();
        self.advance_while(|c| c == '_' || c.is_alphanumeric());
        let source = self.source;
        let text = &source[start..self.position];
        let kind = Keyword::from_ident(text).map_or(TokenKind::Ident, TokenKind::Keyword);
        let span = self.span_from(start, line, column);
        self.push(kind, text.to_string(), span);
    }

    fn number(&mut self) {
        let (start, line, column) = self.mark();
        let mut prev = '\0';
        while let Some(c) = self.peek_char() {
            let exponent_sign = (c == '+' || c == '-') && matches!(prev, 'e' | 'E' | 'p' | 'P');
            if c.is_ascii_alphanumeric() || c == '_' || c == '.' || exponent_sign {
                prev = c;
                self.advance();
            } else {
                break;
            }
        }
        let span = self.span_from(start, line, column);
        self.push(
            TokenKind::Number,
            self.source[start..self.position].to_string(),
            span,
        );
    }

    fn interpreted_string(&mut self) -> Result<()> {
        self.quoted('"', TokenKind::String, "string literal not terminated")
    }

    fn rune(&mut self) -> Result<()> {
        self.quoted('\'', TokenKind::Char, "rune literal not terminated")
    }

    fn quoted(&mut self, quote: char, kind: TokenKind, unterminated: &str) -> Result<()> {
        let (start, line, column) = self.mark();
        self.advance();
        loop {
            match self.advance() {
                None | Some('\n') => return Err(self.error_at(line, column, unterminated)),
                Some('\\') => {
                    self.advance();
                }
                Some(c) if c == quote => break,
                Some(_) => {}
            }
        }
        let span = self.span_from(start, line, column);
        self.push(kind, self.source[start..self.position].to_string(), span);
        Ok(())
    }

    fn raw_string(&mut self) -> Result<()> {
        let (start, line, column) = self.mark();
        self.advance();
        loop {
            match self.advance() {
                None => {
                    return Err(self.error_at(line, column, "raw string literal not terminated"));
                }
                Some('`') => break,
                Some(_) => {}
            }
        }
        let span = self.span_from(start, line, column);
        self.push(
            TokenKind::String,
            self.source[start..self.position].to_string(),
            span,
        );
        Ok(())
    }

    fn punctuation(&mut self) -> Result<()> {
        let (start, line, column) = self.mark();
        let source = self.source;
        let rest = &source[start..];
        let Some(op) = PUNCTUATION.iter().find(|op| rest.starts_with(**op)) else {
            let c = rest.chars().next().unwrap_or('\0');
            return Err(self.error_at(line, column, format!("invalid character {c:?}")));
        };
        for _ in 0..op.chars().count() {
            self.advance();
        }
        let span = self.span_from(start, line, column);
        self.push(TokenKind::Punct, (*op).to_string(), span);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(source: &str) -> Vec<String> {
        tokenize("test.go", source)
            .unwrap()
            .into_iter()
            .filter(|t| !t.is_eof())
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_package_clause() {
        assert_eq!(texts("package arith\n"), vec!["package", "arith", ";"]);
    }

    #[test]
    fn test_leading_byte_order_mark_skipped() {
        let tokens = tokenize("test.go", "\u{feff}package arith\n").unwrap();
        assert_eq!(tokens[0].text, "package");
        assert_eq!((tokens[0].span.line, tokens[0].span.column), (1, 1));

        assert!(tokenize("test.go", "package \u{feff}arith\n").is_err());
    }

    #[test]
    fn test_semicolon_inserted_at_eof() {
        let tokens = tokenize("test.go", "package arith").unwrap();
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[2].kind, TokenKind::Semicolon { implicit: true });
    }

    #[test]
    fn test_no_semicolon_after_open_brace() {
        assert_eq!(
            texts("interface {\n}\n"),
            vec!["interface", "{", "}", ";"]
        );
    }

    #[test]
    fn test_comments_are_whitespace() {
        let tokens = tokenize("test.go", "a /* note */b // trailing\nc").unwrap();
        assert_eq!(tokens[0].text, "a");
        assert_eq!(tokens[1].text, "b");
        assert!(tokens[1].space_before);
        assert!(tokens[2].is_semicolon());
        assert_eq!(tokens[3].text, "c");
    }

    #[test]
    fn test_multiline_block_comment_acts_as_newline() {
        let tokens = tokenize("test.go", "a /*\n*/ b").unwrap();
        assert!(tokens[1].is_semicolon());
    }

    #[test]
    fn test_longest_operator_match() {
        assert_eq!(texts("...<-:="), vec!["...", "<-", ":="]);
    }

    #[test]
    fn test_literals() {
        let tokens = tokenize("test.go", r#""a\"b" `raw
text` 'x' 1.5e+3 0x1F"#)
        .unwrap();
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].text, r#""a\"b""#);
        assert_eq!(tokens[1].kind, TokenKind::String);
        assert_eq!(tokens[2].kind, TokenKind::Char);
        assert_eq!(tokens[3].text, "1.5e+3");
        assert_eq!(tokens[4].text, "0x1F");
    }

    #[test]
    fn test_positions() {
        let tokens = tokenize("test.go", "package p\n\ntype  T int\n").unwrap();
        let ty = tokens.iter().find(|t| t.text == "T").unwrap();
        assert_eq!(ty.span.line, 3);
        assert_eq!(ty.span.column, 7);
    }

    #[test]
    fn test_keywords_classified() {
        let tokens = tokenize("test.go", "func error").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Keyword(Keyword::Func));
        assert_eq!(tokens[1].kind, TokenKind::Ident);
    }

    #[test]
    fn test_unterminated_string() {
        let err = tokenize("test.go", "x := \"abc\n").unwrap_err();
        assert!(err.is_parse_error());
        assert!(err.to_string().starts_with("test.go:1:6"));
    }

    #[test]
    fn test_unterminated_comment() {
        assert!(tokenize("test.go", "/* never closed").is_err());
    }

    #[test]
    fn test_invalid_character() {
        let err = tokenize("test.go", "a @ b").unwrap_err();
        assert!(err.to_string().contains("invalid character"));
    }
}
