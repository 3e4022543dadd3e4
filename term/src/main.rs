use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use minesweeper_alpha_core::{
    ConfigError, ConfigErrorKind, Game, GameConfig, RandomSeedGenerator, Seed, SeedGenerator,
};
use thiserror::Error;

mod session;

/// Terminal Minesweeper, played from a seed file.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Play the mine field described by this seed file
    #[arg(long, value_name = "PATH", required_unless_present = "gen", conflicts_with = "gen")]
    seed: Option<PathBuf>,

    /// Write a random seed file instead of playing
    #[arg(
        long = "gen",
        id = "gen",
        num_args = 4,
        value_names = ["PATH", "ROWS", "COLS", "MINES"],
        allow_negative_numbers = true
    )]
    generate: Option<Vec<String>>,

    /// Force the generator's random seed instead of a random one
    #[arg(long, value_name = "N", requires = "gen", conflicts_with = "seed")]
    rng_seed: Option<u64>,
}

#[derive(Error, Debug)]
#[error("Unable to interpret supplied command-line arguments: {0}")]
struct UsageError(String);

/// Process exit status.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Exit {
    Success = 0,
    Usage = 1,
    SeedUnreadable = 2,
    SeedValue = 3,
    SeedFormat = 4,
}

impl From<ConfigErrorKind> for Exit {
    fn from(kind: ConfigErrorKind) -> Self {
        match kind {
            ConfigErrorKind::Unreadable => Exit::SeedUnreadable,
            ConfigErrorKind::Format => Exit::SeedFormat,
            ConfigErrorKind::Value => Exit::SeedValue,
        }
    }
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit as u8)
    }
}

impl Exit {
    fn for_error(err: &anyhow::Error) -> Self {
        if let Some(config) = err.downcast_ref::<ConfigError>() {
            config.kind().into()
        } else if err.downcast_ref::<io::Error>().is_some() {
            Exit::SeedUnreadable
        } else {
            Exit::Usage
        }
    }
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // a failed write to stderr has nowhere else to go
            let _ = err.print();
            let exit = if err.use_stderr() {
                Exit::Usage
            } else {
                Exit::Success
            };
            return exit.into();
        }
    };

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .parse_default_env()
        .init();
    log::debug!("{:?}", args);

    match run(args) {
        Ok(()) => Exit::Success.into(),
        Err(err) => {
            report(&err);
            Exit::for_error(&err).into()
        }
    }
}

fn report(err: &anyhow::Error) {
    let heading = match err.downcast_ref::<ConfigError>().map(ConfigError::kind) {
        Some(ConfigErrorKind::Unreadable) => "Seedfile Not Found Error",
        Some(ConfigErrorKind::Format) => "Seedfile Format Error",
        Some(ConfigErrorKind::Value) => "Seedfile Value Error",
        None => "Error",
    };
    eprintln!("{heading}: {err:#}");
}

fn run(args: Args) -> anyhow::Result<()> {
    if args.seed.is_some() && args.rng_seed.is_some() {
        return Err(UsageError("--rng-seed only applies to --gen".into()).into());
    }
    match (args.seed, args.generate) {
        (None, Some(request)) => generate(&request, args.rng_seed),
        (Some(path), None) => play(&path),
        _ => Err(UsageError("expected exactly one of --seed or --gen".into()).into()),
    }
}

fn play(path: &Path) -> anyhow::Result<()> {
    let seed = Seed::from_path(path)?;
    let mut game = Game::new(&seed);

    let end = session::run(
        &mut game,
        io::stdin().lock(),
        io::stdout().lock(),
        io::stderr().lock(),
    )?;
    log::debug!("{:?}", end);
    Ok(())
}

fn generate(request: &[String], rng_seed: Option<u64>) -> anyhow::Result<()> {
    let [path, rows, cols, mines] = request else {
        return Err(UsageError(format!("--gen takes 4 values, got {}", request.len())).into());
    };
    let config = GameConfig::new(
        integer(rows, "ROWS")?,
        integer(cols, "COLS")?,
        integer(mines, "MINES")?,
    )?;

    let generator =
        rng_seed.map_or_else(RandomSeedGenerator::from_entropy, RandomSeedGenerator::new);
    log::info!("generating {} with rng seed {}", path, generator.rng_seed());
    let seed = generator.generate(config);

    fs::write(path, seed.to_string()).with_context(|| format!("cannot write seed file {path}"))?;
    Ok(())
}

fn integer(value: &str, name: &str) -> Result<i64, UsageError> {
    value
        .parse()
        .map_err(|_| UsageError(format!("{name} must be an integer, got {value:?}")))
}
