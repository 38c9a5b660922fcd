//! Command-line arguments.

use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// rpcgen - net/rpc stubs from Go interfaces.
///
/// Reads a Go source file, finds the named interface, and writes a Go
/// file with two types: `<Type>Service`, which adapts an implementation
/// of the interface to net/rpc, and `<Type>Client`, which calls a remote
/// implementation through an `*rpc.Client`.
///
/// Every method must name all of its parameters and results and return
/// `error` last.
#[derive(Parser, Debug)]
#[command(name = "rpcgen")]
#[command(version, about, long_about = None)]
#[command(after_help = "Example:\n  rpcgen --source=arith.go --type=Arith\n\n  \
    writes arithrpc.go with ArithService and ArithClient.")]
pub struct Cli {
    /// Source file to parse the RPC interface from
    #[arg(long, value_name = "FILE", required_unless_present = "completions")]
    pub source: Option<PathBuf>,

    /// Interface type to generate stubs for
    #[arg(long = "type", value_name = "NAME", required_unless_present = "completions")]
    pub interface: Option<String>,

    /// Target file to write stubs to
    /// (default: source name with "rpc" before the extension)
    #[arg(long, value_name = "FILE")]
    pub target: Option<PathBuf>,

    /// Comma-separated list of imports to add (net/rpc is always included)
    #[arg(long, value_name = "LIST", value_delimiter = ',')]
    pub imports: Option<Vec<String>>,

    /// Package to export under (default: the source file's package)
    #[arg(long, value_name = "NAME")]
    pub package: Option<String>,

    /// Type to use for the RPC client handle (default: *rpc.Client)
    #[arg(long = "rpc_client_type", alias = "rpc-client-type", value_name = "TYPE")]
    pub rpc_client_type: Option<String>,

    /// Configuration file (default: <config dir>/rpcgen/config.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Do not run the formatter on the generated file
    #[arg(long)]
    pub no_format: bool,

    /// Print the generated code to stdout instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Summary output format (json, text, pretty)
    #[arg(long = "format", value_name = "FORMAT")]
    pub format: Option<String>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL", exclusive = true)]
    pub completions: Option<Shell>,
}
