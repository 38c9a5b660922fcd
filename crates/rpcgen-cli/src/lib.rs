//! rpcgen command-line library.
//!
//! Exposes the argument definitions, configuration file support, summary
//! formatters, and command implementations behind the `rpcgen` binary so
//! they can be tested directly.
//!
//! # Examples
//!
//! ```bash
//! # Writes arithrpc.go next to arith.go
//! rpcgen --source=arith.go --type=Arith
//!
//! # Explicit target, extra imports, no formatter
//! rpcgen --source=svc/kv.go --type=Store --target=kvrpc/stubs.go \
//!     --package=kvrpc --imports=time --no-format
//! ```

#![deny(unsafe_code)]
#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod formatters;
pub mod runner;

pub use cli::Cli;
