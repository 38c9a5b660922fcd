//! Go declaration parser for rpcgen.
//!
//! Reads a single Go source file far enough to describe its interface
//! types precisely: every method, its parameter and result groups, the
//! names in each group, and the source text of each type. Everything
//! else in the file is tokenized and skipped.
//!
//! # Architecture
//!
//! - [`tokenize`] turns source text into tokens with automatic semicolons
//! - [`parse_file`] builds a [`SourceFile`] declaration tree
//!
//! Both report problems as [`rpcgen_core::Error::ParseError`] carrying a
//! `file:line:column` position.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod ast;
mod lexer;
mod parser;
mod token;

pub use ast::{
    Decl, Field, FieldList, FuncDecl, Ident, ImportSpec, InterfaceElem, InterfaceType, MethodSpec,
    Signature, SourceFile, TypeExpr, TypeSpec, TypeText, ValueDecl,
};
pub use lexer::tokenize;
pub use parser::parse_file;
pub use token::{Keyword, Span, Token, TokenKind};
