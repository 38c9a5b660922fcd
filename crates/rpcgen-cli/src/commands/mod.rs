//! Command implementations for the rpcgen CLI.
//!
//! `generate` is the default action; `completions` runs instead when
//! `--completions` is given.

pub mod completions;
pub mod generate;
