//! Capacity Service - Entry Point
//!
//! ```text
//! capacity register --name Backend --description "Server side" --technologies 1,2,3
//! capacity check 1 2 3
//! capacity list --sort-by technology_count --sort-direction desc
//! ```

use capacity::cli::{Cli, run};
use clap::Parser;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    run(cli).await
}
