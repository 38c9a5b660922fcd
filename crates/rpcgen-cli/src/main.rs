//! rpcgen - generates net/rpc client and server stubs for a Go interface.

use clap::Parser;
use rpcgen_cli::{Cli, runner};

fn main() {
    let cli = Cli::parse();

    let exit_code = runner::run(&cli).unwrap_or_else(|err| {
        eprintln!("rpcgen: error: {err:#}");
        runner::exit_code_for(&err)
    });

    std::process::exit(exit_code.as_i32());
}
