use std::{
    path::{Path, PathBuf},
    process::exit,
};

use clap::{CommandFactory, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

use crate::{
    ast::Printer,
    config::{CONFIG_FILE, Config, DEFAULT_CONFIG_TOML, Style, load_config_file},
    driver::{check_file, demo_tree, run_file},
    error::Res,
    util::write_file,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub(super) struct Cli {
    /// Path to config file
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    pub(super) config: PathBuf,

    #[command(subcommand)]
    pub(super) command: Option<Command>,
}

#[derive(Subcommand)]
pub(super) enum Command {
    /// Print the tree for '3 * 2 + 5' in postfix order
    Demo,
    /// Render a tree file
    Print {
        file: PathBuf,
        /// Render style (postfix|infix|outline)
        #[arg(long)]
        style: Option<Style>,
    },
    /// Check that every node in a tree file has the right number of children
    Check { file: PathBuf },
    /// Create a default config file
    Init,
}

pub fn run() {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        return;
    };

    let res = load_config_file(&cli.config).and_then(|config| {
        init_logger(&config);
        info!("Using config: {:?}", config);
        run_command(command, &config, &cli.config)
    });

    let (out, status) = outcome(res);
    print!("{}", out);
    if status != 0 {
        exit(status);
    }
}

/// Text to print and exit status for the result of a command.
pub(super) fn outcome(res: Res<String>) -> (String, i32) {
    match res {
        Ok(out) => (out, 0),
        Err(err) => (format!("{}\n", err), 1),
    }
}

/// Default log level when RUST_LOG is not set. Visited nodes are logged at
/// debug level.
pub(super) fn log_level(config: &Config) -> LevelFilter {
    if config.debug_mode {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    }
}

fn init_logger(config: &Config) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(log_level(config).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .without_time()
        .compact()
        .init();
}

/// Run command and return its output.
pub(super) fn run_command(
    command: Command,
    config: &Config,
    config_path: &Path,
) -> Res<String> {
    match command {
        Command::Demo => Ok(Printer::to_string(&demo_tree()?)),
        Command::Print { file, style } => run_file(&file, style, config),
        Command::Check { file } => {
            check_file(&file)?;
            Ok("ok\n".into())
        }
        Command::Init => astwalk_init(config_path),
    }
}

fn astwalk_init(path: &Path) -> Res<String> {
    if path.exists() {
        return Ok(format!("File {} already exists\n", path.display()));
    }

    write_file(path, DEFAULT_CONFIG_TOML)?;
    Ok(format!("Created {}\n", path.display()))
}
