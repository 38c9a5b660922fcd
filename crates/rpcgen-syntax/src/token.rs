//! Tokens produced by the lexer.

/// A region of source text with the line and column of its first byte.
///
/// # Examples
///
/// ```
/// use rpcgen_syntax::Span;
///
/// let span = Span::new(4, 9, 1, 5);
/// assert_eq!(span.len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Start byte offset
    pub start: u32,
    /// End byte offset (exclusive)
    pub end: u32,
    /// 1-based line of `start`
    pub line: u32,
    /// 1-based column of `start`, counted in characters
    pub column: u32,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: u32, end: u32, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Length of the span in bytes.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.end - self.start
    }

    /// Returns true if the span covers no bytes.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Span from the start of `self` to the end of `other`.
    #[must_use]
    pub const fn to(self, other: Self) -> Self {
        Self {
            start: self.start,
            end: other.end,
            line: self.line,
            column: self.column,
        }
    }
}

/// Go keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Keyword {
    Break,
    Case,
    Chan,
    Const,
    Continue,
    Default,
    Defer,
    Else,
    Fallthrough,
    For,
    Func,
    Go,
    Goto,
    If,
    Import,
    Interface,
    Map,
    Package,
    Range,
    Return,
    Select,
    Struct,
    Switch,
    Type,
    Var,
}

impl Keyword {
    /// Looks up a keyword by spelling.
    #[must_use]
    pub fn from_ident(s: &str) -> Option<Self> {
        let kw = match s {
            "break" => Self::Break,
            "case" => Self::Case,
            "chan" => Self::Chan,
            "const" => Self::Const,
            "continue" => Self::Continue,
            "default" => Self::Default,
            "defer" => Self::Defer,
            "else" => Self::Else,
            "fallthrough" => Self::Fallthrough,
            "for" => Self::For,
            "func" => Self::Func,
            "go" => Self::Go,
            "goto" => Self::Goto,
            "if" => Self::If,
            "import" => Self::Import,
            "interface" => Self::Interface,
            "map" => Self::Map,
            "package" => Self::Package,
            "range" => Self::Range,
            "return" => Self::Return,
            "select" => Self::Select,
            "struct" => Self::Struct,
            "switch" => Self::Switch,
            "type" => Self::Type,
            "var" => Self::Var,
            _ => return None,
        };
        Some(kw)
    }

    /// Keywords after which a newline ends the statement.
    const fn terminates_line(self) -> bool {
        matches!(
            self,
            Self::Break | Self::Continue | Self::Fallthrough | Self::Return
        )
    }
}

/// Token classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Identifier, including predeclared names like `error` and `int`
    Ident,
    /// Reserved word
    Keyword(Keyword),
    /// Integer, float, or imaginary literal
    Number,
    /// Rune literal
    Char,
    /// Interpreted or raw string literal
    String,
    /// Operator or delimiter
    Punct,
    /// `;` written in source, or `implicit` when inserted at a line end
    Semicolon {
        /// Inserted by the automatic semicolon rule
        implicit: bool,
    },
    /// End of input
    Eof,
}

/// A lexed token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Classification
    pub kind: TokenKind,
    /// Source text (`;` for implicit semicolons, empty at end of input)
    pub text: String,
    /// Source location
    pub span: Span,
    /// Whitespace or a comment separates this token from the previous one
    pub space_before: bool,
}

impl Token {
    /// Returns true if this is the punctuation `p`.
    #[must_use]
    pub fn is_punct(&self, p: &str) -> bool {
        self.kind == TokenKind::Punct && self.text == p
    }

    /// Returns true if this is the keyword `kw`.
    #[must_use]
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        self.kind == TokenKind::Keyword(kw)
    }

    /// Returns true for explicit or implicit semicolons.
    #[must_use]
    pub const fn is_semicolon(&self) -> bool {
        matches!(self.kind, TokenKind::Semicolon { .. })
    }

    /// Returns true at end of input.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Returns true if a newline directly after this token ends a statement.
    #[must_use]
    pub fn triggers_semicolon(&self) -> bool {
        match self.kind {
            TokenKind::Ident | TokenKind::Number | TokenKind::Char | TokenKind::String => true,
            TokenKind::Keyword(kw) => kw.terminates_line(),
            TokenKind::Punct => matches!(self.text.as_str(), ")" | "]" | "}" | "++" | "--"),
            TokenKind::Semicolon { .. } | TokenKind::Eof => false,
        }
    }

    /// Human-readable description for diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "EOF".to_string(),
            TokenKind::Semicolon { implicit: true } => "newline".to_string(),
            _ => format!("'{}'", self.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(kind: TokenKind, text: &str) -> Token {
        Token {
            kind,
            text: text.to_string(),
            span: Span::default(),
            space_before: false,
        }
    }

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(Keyword::from_ident("interface"), Some(Keyword::Interface));
        assert_eq!(Keyword::from_ident("error"), None);
    }

    #[test]
    fn test_semicolon_triggers() {
        assert!(tok(TokenKind::Ident, "x").triggers_semicolon());
        assert!(tok(TokenKind::Punct, ")").triggers_semicolon());
        assert!(tok(TokenKind::Keyword(Keyword::Return), "return").triggers_semicolon());
        assert!(!tok(TokenKind::Punct, "(").triggers_semicolon());
        assert!(!tok(TokenKind::Keyword(Keyword::Func), "func").triggers_semicolon());
    }

    #[test]
    fn test_describe() {
        assert_eq!(tok(TokenKind::Eof, "").describe(), "EOF");
        assert_eq!(tok(TokenKind::Punct, "{").describe(), "'{'");
        assert_eq!(
            tok(TokenKind::Semicolon { implicit: true }, ";").describe(),
            "newline"
        );
    }

    #[test]
    fn test_span_to() {
        let a = Span::new(0, 3, 1, 1);
        let b = Span::new(10, 12, 2, 4);
        let merged = a.to(b);
        assert_eq!(merged.start, 0);
        assert_eq!(merged.end, 12);
        assert_eq!(merged.line, 1);
    }
}
