use std::{error::Error, process::ExitCode};

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};
use colored::Colorize;
use log::debug;

/// Command line front end for the tutorial utilities
#[derive(Parser, Debug)]
#[command(name = "tutorial", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    verbose: Verbosity<ErrorLevel>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the smallest and largest of the given integers
    MinMax {
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Greet a user, or the world when no username is given
    Greet {
        username: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    match run(cli.command) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{}", format!("error: {e}").red());
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<String, Box<dyn Error>> {
    debug!("Running {command:?}");

    match command {
        Command::MinMax { values } => {
            let (min, max) = tutorial::min_max(values)?;
            Ok(format!("{min} {max}"))
        },
        Command::Greet { username } => Ok(tutorial::greet(username.as_deref()))
    }
}
