//! `quill` executable
//!
//! See the cli module documentation for usage.

use std::process::ExitCode;

use clap::Parser;
use quill_cli::cli::{Args, init_tracing, run_cli};

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    init_tracing(&args.log_level);
    run_cli(args)
}
