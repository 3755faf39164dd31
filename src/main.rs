use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use env_logger::Env;

use biostrap::{commands, utils::banner};

#[derive(Parser)]
#[clap(name = "biostrap")]
#[clap(about = "biostrap client installer")]
#[clap(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[clap(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Download and extract the current client version
    Install {
        /// Ignored; only the first argument selects the command
        #[clap(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        rest: Vec<String>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    banner::print_banner();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            if let Some(arg) = std::env::args().nth(1) {
                println!("Argument: {arg}");
            }
            log::debug!("Argument parsing failed: {e}");
            println!("Invalid argument. Valid arguments: install");
            return Ok(());
        }
    };

    let Some(command) = cli.command else {
        println!("Couldn't detect any arguments provided.. exiting");
        println!("Usage: biostrap install");
        return Ok(());
    };

    let result = match command {
        Commands::Install { rest } => {
            println!("Argument: install");
            if !rest.is_empty() {
                log::debug!("Ignoring extra arguments: {rest:?}");
            }
            commands::install::install().map_err(|e| anyhow::anyhow!(e))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
