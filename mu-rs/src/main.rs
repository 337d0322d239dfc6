//! Main entry point for the mu-rs CLI

mod cli;
mod commands;

use clap::CommandFactory;
use clap::Parser;
use clap_complete::{Generator, generate};
use std::io;
use std::process::ExitCode;

use crate::cli::{Cli, Commands};

/// Exit code for files that could not be read or written.
const EXIT_IO: u8 = 3;
/// Exit code for inputs that are not recognized terrain assets.
const EXIT_UNKNOWN_MAGIC: u8 = 4;
/// Exit code for assets that failed to decrypt.
const EXIT_DECRYPT: u8 = 5;

fn main() -> ExitCode {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Parse command line arguments
    let cli = Cli::parse();

    // Set verbosity
    if cli.verbose > 0 {
        log::set_max_level(match cli.verbose {
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        });
    } else if cli.quiet {
        log::set_max_level(log::LevelFilter::Error);
    }

    // Execute command
    let result = match cli.command {
        Commands::Terrain { command } => commands::terrain::execute(command),

        Commands::Completions { shell } => {
            print_completions(shell, &mut Cli::command());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

/// Maps a failure to its documented exit code.
fn exit_code(err: &anyhow::Error) -> u8 {
    for cause in err.chain() {
        if let Some(terrain_err) = cause.downcast_ref::<mu_terrain::Error>() {
            return match terrain_err {
                mu_terrain::Error::UnknownMagic { .. } => EXIT_UNKNOWN_MAGIC,
                mu_terrain::Error::TooShort { .. } | mu_terrain::Error::KeySchedule { .. } => {
                    EXIT_DECRYPT
                }
                mu_terrain::Error::Io(_) => EXIT_IO,
            };
        }
        if cause.downcast_ref::<io::Error>().is_some() {
            return EXIT_IO;
        }
    }
    1
}

fn print_completions<G: Generator>(generator: G, cmd: &mut clap::Command) {
    generate(
        generator,
        cmd,
        cmd.get_name().to_string(),
        &mut io::stdout(),
    );
}
