// Entrypoint for the CLI application.
// - Makes sure a config file exists, then dispatches the subcommand.
// - Errors from any layer end up here, are printed once and exit with 1.

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use std::process::ExitCode;
use study_recorder::commands::{add_study, edit_config};
use study_recorder::config::{ConfigStore, APP_NAME};
use study_recorder::editor::editor_command;

#[derive(Parser, Debug)]
#[command(name = APP_NAME, version, about = "CLI for My Study")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// add a new study
    #[command(visible_alias = "a")]
    Add,

    /// edit config
    #[command(visible_alias = "c")]
    Config,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {:#}", program_name(), e);
            ExitCode::FAILURE
        }
    }
}

/// argv[0] as given, which need not be UTF-8.
fn program_name() -> String {
    std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| APP_NAME.into())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let store = ConfigStore::user_default().context("locating config")?;
    store.ensure_exists().context("preparing config")?;

    match cli.command {
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
        Some(Commands::Add) => {
            let config = store.load_or_init().context("loading config")?;
            let editor = editor_command();
            add_study(&config, &editor, &mut std::io::stdout().lock())?;
            Ok(())
        }
        Some(Commands::Config) => {
            edit_config(&store, &editor_command())?;
            Ok(())
        }
    }
}
