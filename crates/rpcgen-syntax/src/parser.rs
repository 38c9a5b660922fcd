//! Recursive-descent parser for Go declarations.
//!
//! Parses the package clause, imports, and type declarations in full,
//! down to interface method signatures. Function bodies and `var` /
//! `const` declarations are skipped by bracket matching: the generator
//! never needs their contents.
//!
//! # Example
//!
//! ```
//! use rpcgen_syntax::{TypeExpr, parse_file};
//!
//! let source = "package arith\n\ntype Arith interface {\n\tAdd(a, b int) (sum int, err error)\n}\n";
//! let file = parse_file("arith.go", source).unwrap();
//!
//! assert_eq!(file.package.name, "arith");
//! let spec = file.type_specs().next().unwrap();
//! let TypeExpr::Interface(iface) = &spec.ty else { panic!("not an interface") };
//! let add = iface.methods().next().unwrap();
//! assert_eq!(add.signature.params.fields[0].ty.text, "int");
//! ```

use crate::ast::{
    Decl, Field, FieldList, FuncDecl, Ident, ImportSpec, InterfaceElem, InterfaceType, MethodSpec,
    Signature, SourceFile, TypeExpr, TypeSpec, TypeText, ValueDecl,
};
use crate::lexer::tokenize;
use crate::token::{Keyword, Span, Token, TokenKind};
use rpcgen_core::{Error, Result, SourcePosition};

/// Parses a Go source file into a declaration tree.
///
/// # Errors
///
/// Returns [`Error::ParseError`] with the file position of the first
/// lexical or syntax error.
pub fn parse_file(file_name: &str, source: &str) -> Result<SourceFile> {
    let tokens = tokenize(file_name, source)?;
    tracing::trace!("{file_name}: {} tokens", tokens.len());
    let file = Parser::new(file_name, tokens).parse_source_file()?;
    tracing::debug!(
        "{file_name}: package {}, {} imports, {} declarations",
        file.package.name,
        file.imports.len(),
        file.decls.len()
    );
    Ok(file)
}

/// One comma-separated entry of a parameter list, before grouping.
enum ParamEntry {
    /// `name Type`
    Named { name: Ident, ty: TypeText },
    /// A lone type; `ident` is set when that type is a bare identifier
    /// and may turn out to be a name in a group like `a, b int`.
    Unnamed { ty: TypeText, ident: Option<Ident> },
}

struct Parser<'a> {
    file: &'a str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'a> Parser<'a> {
    const fn new(file: &'a str, tokens: Vec<Token>) -> Self {
        Self {
            file,
            tokens,
            pos: 0,
        }
    }

    // ------------------------------------------------------------------
    // Token access
    // ------------------------------------------------------------------

    fn peek(&self) -> &Token {
        self.peek_n(0)
    }

    fn peek_n(&self, n: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + n).min(last)]
    }

    fn bump(&mut self) -> Token {
        let token = self.peek().clone();
        if !token.is_eof() {
            self.pos += 1;
        }
        token
    }

    fn error_at(&self, span: Span, message: impl Into<String>) -> Error {
        Error::ParseError {
            position: SourcePosition::new(self.file, span.line, span.column),
            message: message.into(),
        }
    }

    fn expected(&self, what: &str) -> Error {
        let found = self.peek();
        self.error_at(
            found.span,
            format!("expected {what}, found {}", found.describe()),
        )
    }

    fn expect_punct(&mut self, p: &str) -> Result<Token> {
        if self.peek().is_punct(p) {
            Ok(self.bump())
        } else {
            Err(self.expected(&format!("'{p}'")))
        }
    }

    fn expect_keyword(&mut self, kw: Keyword, spelling: &str) -> Result<Token> {
        if self.peek().is_keyword(kw) {
            Ok(self.bump())
        } else {
            Err(self.expected(&format!("'{spelling}'")))
        }
    }

    fn expect_ident(&mut self) -> Result<Ident> {
        if self.peek().kind == TokenKind::Ident {
            let token = self.bump();
            Ok(Ident {
                name: token.text,
                span: token.span,
            })
        } else {
            Err(self.expected("identifier"))
        }
    }

    fn skip_semicolons(&mut self) {
        while self.peek().is_semicolon() {
            self.bump();
        }
    }

    /// Accepts the end of a declaration: `;`, end of input, or a closing
    /// delimiter (which Go allows to stand in for the final `;`).
    fn expect_decl_end(&mut self) -> Result<()> {
        let token = self.peek();
        if token.is_semicolon() {
            self.bump();
            Ok(())
        } else if token.is_eof() || token.is_punct(")") || token.is_punct("}") {
            Ok(())
        } else {
            Err(self.expected("';' or newline"))
        }
    }

    fn is_open(token: &Token) -> bool {
        token.kind == TokenKind::Punct && matches!(token.text.as_str(), "(" | "[" | "{")
    }

    fn is_close(token: &Token) -> bool {
        token.kind == TokenKind::Punct && matches!(token.text.as_str(), ")" | "]" | "}")
    }

    /// Skips from an opening bracket to its matching close, inclusive.
    fn skip_balanced(&mut self) -> Result<()> {
        let open = self.peek().clone();
        let mut depth = 0usize;
        loop {
            if self.peek().is_eof() {
                return Err(self.error_at(
                    open.span,
                    format!("'{}' is never closed", open.text),
                ));
            }
            let token = self.bump();
            if Self::is_open(&token) {
                depth += 1;
            } else if Self::is_close(&token) {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Ok(());
                }
            }
        }
    }

    /// Skips to the `;` (or end of input) that ends the current
    /// declaration, stepping over bracketed regions as a whole.
    fn skip_to_decl_end(&mut self) -> Result<()> {
        loop {
            let token = self.peek();
            if token.is_eof() || token.is_semicolon() {
                return Ok(());
            }
            if Self::is_close(token) {
                return Err(self.error_at(token.span, format!("unexpected '{}'", token.text)));
            }
            if Self::is_open(token) {
                self.skip_balanced()?;
            } else {
                self.bump();
            }
        }
    }

    /// Rebuilds the source text of `tokens[start..end]`.
    fn text_between(&self, start: usize, end: usize) -> TypeText {
        let mut text = String::new();
        for (i, token) in self.tokens[start..end].iter().enumerate() {
            if i > 0 && token.space_before {
                text.push(' ');
            }
            text.push_str(&token.text);
        }
        let first = self.tokens[start].span;
        let last = self.tokens[end.max(start + 1) - 1].span;
        TypeText {
            text,
            span: first.to(last),
        }
    }

    // ------------------------------------------------------------------
    // Declarations
    // ------------------------------------------------------------------

    fn parse_source_file(mut self) -> Result<SourceFile> {
        self.skip_semicolons();
        self.expect_keyword(Keyword::Package, "package")?;
        let package = self.expect_ident()?;
        self.expect_decl_end()?;

        let mut imports = Vec::new();
        let mut decls = Vec::new();

        loop {
            self.skip_semicolons();
            match self.peek().kind {
                TokenKind::Eof => break,
                TokenKind::Keyword(Keyword::Import) => {
                    if !decls.is_empty() {
                        return Err(self.error_at(
                            self.peek().span,
                            "imports must appear before other declarations",
                        ));
                    }
                    self.parse_import_decl(&mut imports)?;
                }
                TokenKind::Keyword(Keyword::Type) => self.parse_type_decl(&mut decls)?,
                TokenKind::Keyword(Keyword::Func) => {
                    decls.push(Decl::Func(self.parse_func_decl()?));
                }
                TokenKind::Keyword(Keyword::Var | Keyword::Const) => {
                    decls.push(Decl::Value(self.parse_value_decl()?));
                }
                _ => {
                    return Err(self.error_at(
                        self.peek().span,
                        format!(
                            "non-declaration statement outside function body: {}",
                            self.peek().describe()
                        ),
                    ));
                }
            }
            self.expect_decl_end()?;
        }

        Ok(SourceFile {
            file_name: self.file.to_string(),
            package,
            imports,
            decls,
        })
    }

    fn parse_import_decl(&mut self, imports: &mut Vec<ImportSpec>) -> Result<()> {
        self.bump();
        if !self.peek().is_punct("(") {
            imports.push(self.parse_import_spec()?);
            return Ok(());
        }
        self.bump();
        loop {
            self.skip_semicolons();
            if self.peek().is_punct(")") {
                self.bump();
                return Ok(());
            }
            imports.push(self.parse_import_spec()?);
            if self.peek().is_semicolon() {
                self.bump();
            } else if !self.peek().is_punct(")") {
                return Err(self.expected("';' or ')'"));
            }
        }
    }

    fn parse_import_spec(&mut self) -> Result<ImportSpec> {
        let span = self.peek().span;
        let name = if self.peek().kind == TokenKind::Ident || self.peek().is_punct(".") {
            Some(self.bump().text)
        } else {
            None
        };
        if self.peek().kind != TokenKind::String {
            return Err(self.expected("import path"));
        }
        let literal = self.bump().text;
        let path = literal
            .get(1..literal.len() - 1)
            .unwrap_or_default()
            .to_string();
        Ok(ImportSpec { name, path, span })
    }

    fn parse_type_decl(&mut self, decls: &mut Vec<Decl>) -> Result<()> {
        self.bump();
        if !self.peek().is_punct("(") {
            decls.push(Decl::Type(self.parse_type_spec()?));
            return Ok(());
        }
        self.bump();
        loop {
            self.skip_semicolons();
            if self.peek().is_punct(")") {
                self.bump();
                return Ok(());
            }
            decls.push(Decl::Type(self.parse_type_spec()?));
            if self.peek().is_semicolon() {
                self.bump();
            } else if !self.peek().is_punct(")") {
                return Err(self.expected("';' or ')'"));
            }
        }
    }

    fn parse_type_spec(&mut self) -> Result<TypeSpec> {
        let name = self.expect_ident()?;

        let type_params = if self.peek().is_punct("[") && self.looks_like_type_params() {
            let start = self.pos;
            self.skip_balanced()?;
            Some(self.text_between(start, self.pos))
        } else {
            None
        };

        let is_alias = self.peek().is_punct("=");
        if is_alias {
            self.bump();
        }

        let ty = if self.peek().is_keyword(Keyword::Interface) {
            TypeExpr::Interface(self.parse_interface_type()?)
        } else {
            TypeExpr::Other(self.parse_type()?)
        };

        Ok(TypeSpec {
            name,
            type_params,
            is_alias,
            ty,
        })
    }

    /// Distinguishes `type T[P any] ...` from the array type `type T [N]E`.
    fn looks_like_type_params(&self) -> bool {
        let first = self.peek_n(1);
        let second = self.peek_n(2);
        first.kind == TokenKind::Ident
            && (matches!(
                second.kind,
                TokenKind::Ident
                    | TokenKind::Keyword(
                        Keyword::Interface
                            | Keyword::Func
                            | Keyword::Map
                            | Keyword::Chan
                            | Keyword::Struct
                    )
            ) || second.is_punct(",")
                || second.is_punct("~")
                || second.is_punct("[")
                || (second.is_punct("*") && self.star_constraint_is_type_params()))
    }

    /// `[P *C]` is an array length expression unless `C` can only be a
    /// type or the list carries a comma, as in `[P *C,]`.
    fn star_constraint_is_type_params(&self) -> bool {
        let operand = self.peek_n(3);
        if operand.is_punct("[")
            || matches!(
                operand.kind,
                TokenKind::Keyword(
                    Keyword::Interface | Keyword::Func | Keyword::Map | Keyword::Chan | Keyword::Struct
                )
            )
        {
            return true;
        }

        let mut depth = 0usize;
        for token in &self.tokens[self.pos..] {
            if token.is_eof() {
                return false;
            }
            if Self::is_open(token) {
                depth += 1;
            } else if Self::is_close(token) {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return false;
                }
            } else if depth == 1 && token.is_punct(",") {
                return true;
            }
        }
        false
    }

    fn parse_func_decl(&mut self) -> Result<FuncDecl> {
        self.bump();
        let is_method = self.peek().is_punct("(");
        if is_method {
            self.skip_balanced()?;
        }
        let name = self.expect_ident()?;
        self.skip_to_decl_end()?;
        Ok(FuncDecl { name, is_method })
    }

    fn parse_value_decl(&mut self) -> Result<ValueDecl> {
        let keyword = self.bump();
        self.skip_to_decl_end()?;
        Ok(ValueDecl {
            keyword: keyword.text,
            span: keyword.span,
        })
    }

    // ------------------------------------------------------------------
    // Interfaces and signatures
    // ------------------------------------------------------------------

    fn parse_interface_type(&mut self) -> Result<InterfaceType> {
        let keyword = self.bump();
        self.expect_punct("{")?;

        let mut elems = Vec::new();
        loop {
            self.skip_semicolons();
            if self.peek().is_punct("}") {
                self.bump();
                break;
            }
            if self.peek().is_eof() {
                return Err(self.expected("'}'"));
            }

            let elem = if self.peek().kind == TokenKind::Ident && self.peek_n(1).is_punct("(") {
                let name = self.expect_ident()?;
                let signature = self.parse_signature()?;
                InterfaceElem::Method(MethodSpec { name, signature })
            } else {
                InterfaceElem::Embedded(self.parse_embedded_elem()?)
            };
            elems.push(elem);

            if self.peek().is_semicolon() {
                self.bump();
            } else if !self.peek().is_punct("}") {
                return Err(self.expected("';' or '}'"));
            }
        }

        Ok(InterfaceType {
            span: keyword.span,
            elems,
        })
    }

    /// Parses an embedded element such as `io.Closer` or `~int | ~string`.
    fn parse_embedded_elem(&mut self) -> Result<TypeText> {
        let start = self.pos;
        loop {
            if self.peek().is_punct("~") {
                self.bump();
            }
            self.skip_type()?;
            if self.peek().is_punct("|") {
                self.bump();
            } else {
                break;
            }
        }
        Ok(self.text_between(start, self.pos))
    }

    fn parse_signature(&mut self) -> Result<Signature> {
        let params = self.parse_parameters()?;
        let results = if self.peek().is_punct("(") {
            self.parse_parameters()?
        } else if self.at_type_start() {
            let ty = self.parse_type()?;
            FieldList {
                fields: vec![Field {
                    names: Vec::new(),
                    span: ty.span,
                    ty,
                }],
            }
        } else {
            FieldList::default()
        };
        Ok(Signature { params, results })
    }

    fn at_type_start(&self) -> bool {
        let token = self.peek();
        match token.kind {
            TokenKind::Ident => true,
            TokenKind::Keyword(kw) => matches!(
                kw,
                Keyword::Func | Keyword::Map | Keyword::Chan | Keyword::Struct | Keyword::Interface
            ),
            TokenKind::Punct => matches!(token.text.as_str(), "*" | "[" | "<-"),
            _ => false,
        }
    }

    fn parse_parameters(&mut self) -> Result<FieldList> {
        self.expect_punct("(")?;
        let mut entries = Vec::new();
        while !self.peek().is_punct(")") {
            entries.push(self.parse_param_entry()?);
            if self.peek().is_punct(",") {
                self.bump();
            } else if !self.peek().is_punct(")") {
                return Err(self.expected("',' or ')'"));
            }
        }
        self.bump();
        self.group_params(entries)
    }

    fn parse_param_entry(&mut self) -> Result<ParamEntry> {
        let start = self.pos;
        let first = self.parse_param_type()?;

        let start_token = &self.tokens[start];
        let ident = (self.pos - start == 1 && start_token.kind == TokenKind::Ident).then(|| Ident {
            name: start_token.text.clone(),
            span: start_token.span,
        });

        if self.peek().is_punct(",") || self.peek().is_punct(")") {
            return Ok(ParamEntry::Unnamed { ty: first, ident });
        }

        let Some(name) = ident else {
            return Err(self.error_at(first.span, "expected parameter name"));
        };
        let ty = self.parse_param_type()?;
        Ok(ParamEntry::Named { name, ty })
    }

    fn parse_param_type(&mut self) -> Result<TypeText> {
        if self.peek().is_punct("...") {
            let start = self.pos;
            self.bump();
            self.skip_type()?;
            return Ok(self.text_between(start, self.pos));
        }
        self.parse_type()
    }

    /// Folds `a, b int, c string` into groups; a list without any
    /// `name Type` entry is a list of unnamed types.
    fn group_params(&self, entries: Vec<ParamEntry>) -> Result<FieldList> {
        let any_named = entries
            .iter()
            .any(|entry| matches!(entry, ParamEntry::Named { .. }));

        if !any_named {
            let fields = entries
                .into_iter()
                .map(|entry| match entry {
                    ParamEntry::Unnamed { ty, .. } | ParamEntry::Named { ty, .. } => Field {
                        names: Vec::new(),
                        span: ty.span,
                        ty,
                    },
                })
                .collect();
            return Ok(FieldList { fields });
        }

        let mut fields = Vec::new();
        let mut pending: Vec<Ident> = Vec::new();
        for entry in entries {
            match entry {
                ParamEntry::Unnamed {
                    ident: Some(ident), ..
                } => pending.push(ident),
                ParamEntry::Unnamed { ty, ident: None } => {
                    return Err(self.error_at(ty.span, "mixed named and unnamed parameters"));
                }
                ParamEntry::Named { name, ty } => {
                    let mut names = std::mem::take(&mut pending);
                    names.push(name);
                    let span = names[0].span;
                    fields.push(Field { names, ty, span });
                }
            }
        }

        if let Some(dangling) = pending.first() {
            return Err(self.error_at(dangling.span, "mixed named and unnamed parameters"));
        }

        Ok(FieldList { fields })
    }

    // ------------------------------------------------------------------
    // Types
    // ------------------------------------------------------------------

    fn parse_type(&mut self) -> Result<TypeText> {
        let start = self.pos;
        self.skip_type()?;
        Ok(self.text_between(start, self.pos))
    }

    fn skip_type(&mut self) -> Result<()> {
        let token = self.peek().clone();
        match token.kind {
            TokenKind::Ident => {
                self.bump();
                if self.peek().is_punct(".") {
                    self.bump();
                    self.expect_ident()?;
                }
                // Type arguments hug the name: `List[int]`, not `a [4]int`.
                let next = self.peek();
                if next.is_punct("[") && !next.space_before && !self.peek_n(1).is_punct("]") {
                    self.skip_balanced()?;
                }
                Ok(())
            }
            TokenKind::Keyword(Keyword::Map) => {
                self.bump();
                self.expect_punct("[")?;
                self.skip_type()?;
                self.expect_punct("]")?;
                self.skip_type()
            }
            TokenKind::Keyword(Keyword::Chan) => {
                self.bump();
                if self.peek().is_punct("<-") {
                    self.bump();
                }
                self.skip_type()
            }
            TokenKind::Keyword(Keyword::Func) => {
                self.bump();
                self.parse_signature().map(|_| ())
            }
            TokenKind::Keyword(Keyword::Struct | Keyword::Interface) => {
                self.bump();
                if !self.peek().is_punct("{") {
                    return Err(self.expected("'{'"));
                }
                self.skip_balanced()
            }
            TokenKind::Punct => match token.text.as_str() {
                "*" => {
                    self.bump();
                    self.skip_type()
                }
                "[" => {
                    if self.peek_n(1).is_punct("]") {
                        self.bump();
                        self.bump();
                    } else {
                        self.skip_balanced()?;
                    }
                    self.skip_type()
                }
                "(" => {
                    self.bump();
                    self.skip_type()?;
                    self.expect_punct(")").map(|_| ())
                }
                "<-" => {
                    self.bump();
                    self.expect_keyword(Keyword::Chan, "chan")?;
                    self.skip_type()
                }
                _ => Err(self.expected("type")),
            },
            _ => Err(self.expected("type")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> SourceFile {
        parse_file("test.go", source).unwrap()
    }

    fn interface(file: &SourceFile, name: &str) -> InterfaceType {
        let spec = file.type_specs().find(|s| s.name.name == name).unwrap();
        match &spec.ty {
            TypeExpr::Interface(iface) => iface.clone(),
            TypeExpr::Other(text) => panic!("{name} is {}", text.text),
        }
    }

    fn names(field: &Field) -> Vec<&str> {
        field.names.iter().map(|n| n.name.as_str()).collect()
    }

    #[test]
    fn test_package_and_imports() {
        let file = parse(
            "package svc\n\nimport \"fmt\"\n\nimport (\n\t\"net/rpc\"\n\tctx \"context\"\n\t. `strings`\n)\n",
        );
        assert_eq!(file.package.name, "svc");
        let paths: Vec<_> = file.imports.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, vec!["fmt", "net/rpc", "context", "strings"]);
        assert_eq!(file.imports[2].name.as_deref(), Some("ctx"));
        assert_eq!(file.imports[3].name.as_deref(), Some("."));
    }

    #[test]
    fn test_grouped_parameters() {
        let file = parse("package a\ntype Arith interface {\n\tAdd(a, b int) (sum int, err error)\n}\n");
        let iface = interface(&file, "Arith");
        let add = iface.methods().next().unwrap();
        assert_eq!(add.name.name, "Add");
        assert_eq!(add.signature.params.len(), 1);
        assert_eq!(names(&add.signature.params.fields[0]), vec!["a", "b"]);
        assert_eq!(add.signature.params.fields[0].ty.text, "int");
        assert_eq!(add.signature.results.len(), 2);
        assert_eq!(names(&add.signature.results.fields[1]), vec!["err"]);
        assert_eq!(add.signature.results.fields[1].ty.text, "error");
    }

    #[test]
    fn test_unnamed_parameters() {
        let file = parse("package a\ntype I interface {\n\tDo(int, string) error\n}\n");
        let iface = interface(&file, "I");
        let method = iface.methods().next().unwrap();
        assert_eq!(method.signature.params.len(), 2);
        assert!(method.signature.params.fields[0].names.is_empty());
        assert_eq!(method.signature.params.fields[1].ty.text, "string");
        assert_eq!(method.signature.results.len(), 1);
        assert!(method.signature.results.fields[0].names.is_empty());
    }

    #[test]
    fn test_no_results() {
        let file = parse("package a\ntype I interface {\n\tPing()\n}\n");
        let iface = interface(&file, "I");
        let method = iface.methods().next().unwrap();
        assert!(method.signature.params.is_empty());
        assert!(method.signature.results.is_empty());
    }

    #[test]
    fn test_complex_type_text() {
        let file = parse(concat!(
            "package a\n",
            "type Store interface {\n",
            "\tPut(ctx context.Context, items map[string][]*Item, opts ...Option) (n int, err error)\n",
            "\tWatch(done <-chan struct{}, cb func(key string, v interface{}) error) (err error)\n",
            "\tGet(keys [4]string, page List[int]) (err error)\n",
            "}\n",
        ));
        let iface = interface(&file, "Store");
        let methods: Vec<_> = iface.methods().collect();
        let put = &methods[0].signature.params.fields;
        assert_eq!(put[0].ty.text, "context.Context");
        assert_eq!(put[1].ty.text, "map[string][]*Item");
        assert_eq!(put[2].ty.text, "...Option");

        let watch = &methods[1].signature.params.fields;
        assert_eq!(watch[0].ty.text, "<-chan struct{}");
        assert_eq!(watch[1].ty.text, "func(key string, v interface{}) error");

        let get = &methods[2].signature.params.fields;
        assert_eq!(get[0].ty.text, "[4]string");
        assert_eq!(get[1].ty.text, "List[int]");
    }

    #[test]
    fn test_comments_dropped_from_type_text() {
        let file = parse(
            "package a\ntype I interface {\n\t// Doc comment.\n\tDo(m map[string] /* keys */ int) (err error) // trailing\n}\n",
        );
        let iface = interface(&file, "I");
        let method = iface.methods().next().unwrap();
        assert_eq!(method.signature.params.fields[0].ty.text, "map[string] int");
    }

    #[test]
    fn test_embedded_elements() {
        let file = parse(
            "package a\ntype I interface {\n\tio.Closer\n\t~int | ~string\n\tDo() error\n}\n",
        );
        let iface = interface(&file, "I");
        assert_eq!(iface.elems.len(), 3);
        assert!(matches!(&iface.elems[0], InterfaceElem::Embedded(t) if t.text == "io.Closer"));
        assert!(matches!(&iface.elems[1], InterfaceElem::Embedded(t) if t.text == "~int | ~string"));
        assert_eq!(iface.methods().count(), 1);
    }

    #[test]
    fn test_skips_functions_and_values() {
        let file = parse(concat!(
            "package a\n",
            "var x = map[string]int{\"a\": 1}\n",
            "const (\n\tA = iota\n\tB\n)\n",
            "func (s *S) Method() { if true { return } }\n",
            "func helper(a int) (int, error) {\n\treturn a, nil\n}\n",
            "type Arith interface { Add(a int) (err error) }\n",
        ));
        assert_eq!(file.decls.len(), 5);
        assert!(matches!(&file.decls[2], Decl::Func(f) if f.is_method && f.name.name == "Method"));
        assert!(matches!(&file.decls[3], Decl::Func(f) if !f.is_method && f.name.name == "helper"));
        assert_eq!(interface(&file, "Arith").methods().count(), 1);
    }

    #[test]
    fn test_grouped_type_declarations() {
        let file = parse(
            "package a\ntype (\n\tID int64\n\tSvc interface {\n\t\tGet(id ID) (err error)\n\t}\n)\n",
        );
        let specs: Vec<_> = file.type_specs().map(|s| s.name.name.as_str()).collect();
        assert_eq!(specs, vec!["ID", "Svc"]);
        assert!(matches!(&file.type_specs().next().unwrap().ty, TypeExpr::Other(t) if t.text == "int64"));
    }

    #[test]
    fn test_type_params_and_alias() {
        let file = parse(
            "package a\ntype Repo[T any] interface { Get(id int) (v T, err error) }\ntype Buf [16]byte\ntype Alias = Repo[int]\n",
        );
        let specs: Vec<_> = file.type_specs().collect();
        assert_eq!(specs[0].type_params.as_ref().unwrap().text, "[T any]");
        assert!(specs[1].type_params.is_none());
        assert!(matches!(&specs[1].ty, TypeExpr::Other(t) if t.text == "[16]byte"));
        assert!(specs[2].is_alias);
    }

    #[test]
    fn test_pointer_constraint_disambiguation() {
        let file = parse(
            "package a\ntype A[P *C,] interface { M() (err error) }\ntype B[P *[]int] interface { M() (err error) }\ntype C [N * M]int\n",
        );
        let specs: Vec<_> = file.type_specs().collect();
        assert_eq!(specs[0].type_params.as_ref().unwrap().text, "[P *C,]");
        assert!(matches!(specs[0].ty, TypeExpr::Interface(_)));
        assert_eq!(specs[1].type_params.as_ref().unwrap().text, "[P *[]int]");
        assert!(specs[2].type_params.is_none());
        assert!(matches!(&specs[2].ty, TypeExpr::Other(t) if t.text == "[N * M]int"));
    }

    #[test]
    fn test_method_positions() {
        let file = parse("package a\n\ntype I interface {\n\tAdd(a int) (err error)\n}\n");
        let iface = interface(&file, "I");
        let add = iface.methods().next().unwrap();
        assert_eq!(file.position(add.name.span).to_string(), "test.go:4:2");
        assert_eq!(
            file.position(add.signature.params.fields[0].span).to_string(),
            "test.go:4:6"
        );
    }

    #[test]
    fn test_missing_package_clause() {
        let err = parse_file("test.go", "type I interface{}\n").unwrap_err();
        assert!(err.is_parse_error());
        assert!(err.to_string().contains("expected 'package'"));
    }

    #[test]
    fn test_unclosed_interface() {
        let err = parse_file("test.go", "package a\ntype I interface {\n\tDo() error\n").unwrap_err();
        assert!(err.to_string().contains("expected '}'"), "{err}");
    }

    #[test]
    fn test_mixed_named_and_unnamed() {
        let err = parse_file(
            "test.go",
            "package a\ntype I interface {\n\tDo(a int, []string) error\n}\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("mixed named and unnamed"), "{err}");
    }

    #[test]
    fn test_statement_outside_function() {
        let err = parse_file("test.go", "package a\nx := 1\n").unwrap_err();
        assert!(err.to_string().contains("non-declaration statement"));
    }

    #[test]
    fn test_import_after_declaration() {
        let err = parse_file("test.go", "package a\ntype T int\nimport \"fmt\"\n").unwrap_err();
        assert!(err.to_string().contains("imports must appear before"));
    }
}
