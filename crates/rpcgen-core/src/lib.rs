//! Core types, configuration, and errors for rpcgen.
//!
//! This crate provides the foundational types shared by the parser,
//! the stub generator, and the command-line driver.
//!
//! # Architecture
//!
//! The core consists of:
//! - The method model (`Field`, `Method`, `GenerationContext`) handed to the renderer
//! - Source positions used by every diagnostic
//! - Error hierarchy with contextual information
//! - Generator configuration, built once per run
//! - CLI value types (`ExitCode`, `OutputFormat`)

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod cli;
mod config;
mod error;
mod model;
mod position;

pub use config::{
    DEFAULT_IMPORT, DEFAULT_RPC_CLIENT_TYPE, DEFAULT_TARGET_SUFFIX, FormatterConfig,
    GeneratorConfig, GeneratorConfigBuilder,
};
pub use error::{Error, Result};
pub use model::{Field, GenerationContext, Method};
pub use position::SourcePosition;
