//! laq CLI - command line tool for inspecting LA air quality views.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "laq-cli",
    version,
    about = "Los Angeles air quality dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: laq_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    laq_cmd::run(cli.command)
}
