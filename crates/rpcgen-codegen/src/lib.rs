//! net/rpc stub generation for Go interfaces.
//!
//! Given a Go source file and the name of an interface declared in it,
//! produces a Go file with:
//!
//! - a server wrapper (`<I>Service`) that adapts an implementation of
//!   the interface to `net/rpc` dispatch, plus a registration function
//! - a client wrapper (`<I>Client`) whose methods mirror the interface
//!   and forward through `(*rpc.Client).Call`
//!
//! # Pipeline
//!
//! 1. [`rpcgen_syntax::parse_file`] parses the source
//! 2. [`walker::DeclarationIndex`] locates the interface by name
//! 3. [`builder::MethodModelBuilder`] validates and models each method
//! 4. [`view::StubView`] precomputes every fragment with [`field_list`]
//! 5. [`template_engine::TemplateEngine`] renders the Go file
//!
//! [`StubGenerator`] runs all of it and returns the text without writing.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod builder;
pub mod field_list;
pub mod generator;
pub mod naming;
pub mod target;
pub mod template_engine;
pub mod view;
pub mod walker;

pub use generator::{GeneratedStubs, StubGenerator};
pub use target::{default_target, resolve_target};
