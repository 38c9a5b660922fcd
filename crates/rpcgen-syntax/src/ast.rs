//! Declaration tree for Go source files.
//!
//! Only the shape the stub generator needs is modeled in detail:
//! package clause, imports, and type declarations down to interface
//! method signatures. Function and value declarations are recorded by
//! name and skipped; type expressions other than interfaces are kept as
//! source text.

use crate::token::Span;
use rpcgen_core::SourcePosition;

/// An identifier with its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    /// Identifier spelling
    pub name: String,
    /// Source location
    pub span: Span,
}

/// A type expression reproduced from source.
///
/// Tokens are joined with a single space wherever the source separated
/// them by whitespace or comments, so `map[string]int` stays compact and
/// `func(a int) error` keeps its spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeText {
    /// Normalized source text
    pub text: String,
    /// Source location of the first token
    pub span: Span,
}

/// A parsed source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// File name used in diagnostics
    pub file_name: String,
    /// Package clause
    pub package: Ident,
    /// Import declarations in source order
    pub imports: Vec<ImportSpec>,
    /// Top-level declarations in source order
    pub decls: Vec<Decl>,
}

impl SourceFile {
    /// Converts a span into a diagnostic position in this file.
    #[must_use]
    pub fn position(&self, span: Span) -> SourcePosition {
        SourcePosition::new(self.file_name.clone(), span.line, span.column)
    }

    /// Iterates over top-level type declarations in source order.
    pub fn type_specs(&self) -> impl Iterator<Item = &TypeSpec> {
        self.decls.iter().filter_map(|decl| match decl {
            Decl::Type(spec) => Some(spec),
            Decl::Func(_) | Decl::Value(_) => None,
        })
    }
}

/// One import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    /// Local name (`.`, `_`, or an identifier) if given
    pub name: Option<String>,
    /// Import path without quotes
    pub path: String,
    /// Source location
    pub span: Span,
}

/// Top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    /// `type Name ...` (each spec of a grouped declaration is one `Decl`)
    Type(TypeSpec),
    /// `func ...`, body skipped
    Func(FuncDecl),
    /// `var ...` or `const ...`, skipped
    Value(ValueDecl),
}

/// A type specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpec {
    /// Declared name
    pub name: Ident,
    /// Type parameter list text, including brackets
    pub type_params: Option<TypeText>,
    /// `type A = B`
    pub is_alias: bool,
    /// The declared type
    pub ty: TypeExpr,
}

/// A type on the right-hand side of a type specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// `interface { ... }`
    Interface(InterfaceType),
    /// Any other type, as text
    Other(TypeText),
}

/// An interface type body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceType {
    /// Location of the `interface` keyword
    pub span: Span,
    /// Elements in declaration order
    pub elems: Vec<InterfaceElem>,
}

impl InterfaceType {
    /// Iterates over the explicit methods, skipping embedded elements.
    pub fn methods(&self) -> impl Iterator<Item = &MethodSpec> {
        self.elems.iter().filter_map(|elem| match elem {
            InterfaceElem::Method(method) => Some(method),
            InterfaceElem::Embedded(_) => None,
        })
    }
}

/// One element of an interface body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterfaceElem {
    /// `Name(params) results`
    Method(MethodSpec),
    /// Embedded interface or type-set term, as text
    Embedded(TypeText),
}

/// An interface method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSpec {
    /// Method name
    pub name: Ident,
    /// Parameters and results
    pub signature: Signature,
}

/// A function signature.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Signature {
    /// Parameter groups
    pub params: FieldList,
    /// Result groups; a bare result type is one unnamed field
    pub results: FieldList,
}

/// Parameter or result groups.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldList {
    /// Groups in declaration order
    pub fields: Vec<Field>,
}

impl FieldList {
    /// Returns true if the list declares nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

/// One parameter or result group: names sharing a type.
///
/// `names` is empty for unnamed parameters such as `func(int, string)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Declared names, possibly none
    pub names: Vec<Ident>,
    /// Shared type
    pub ty: TypeText,
    /// Location of the first name, or of the type when unnamed
    pub span: Span,
}

/// A function or method declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    /// Function name
    pub name: Ident,
    /// Declared with a receiver
    pub is_method: bool,
}

/// A `var` or `const` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueDecl {
    /// `var` or `const`
    pub keyword: String,
    /// Location of the keyword
    pub span: Span,
}
