mod boundary;
mod cli;
mod commands;
mod download;
mod gpkg_binary;
mod logging;
mod naming;
mod readers;
mod storefile;
mod writers;

use cli::{Cli, Commands};

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match &cli.command {
        Commands::Convert(args) => commands::convert::run(&cli, args),
        Commands::Package(args) => commands::package::run(&cli, args),
        Commands::Validate(args) => commands::validate::run(&cli, args),
        Commands::Ls(args) => commands::ls::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> {
    run()
}
