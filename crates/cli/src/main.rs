//! AnyCore parameter derivation CLI.
//!
//! This binary builds a core configuration and prints it. It supports:
//! 1. **Dump:** Every primary and derived parameter in derivation order, as text or JSON.
//! 2. **Get:** Selected parameters by name.
//! 3. **Check:** Validation only; the exit status reports whether the parameters are legal.
//!
//! Primary parameters come from a JSON file (`--params`) or the built-in defaults.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::ser::{Serialize, Serializer};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use anycore_params::{Configuration, PrimaryParams};

#[derive(Parser, Debug)]
#[command(
    name = "anycfg",
    author,
    version,
    about = "Derive AnyCore core parameters",
    long_about = "Validate AnyCore primary parameters and print every derived constant.\n\nExamples:\n  anycfg dump\n  anycfg dump --params core.json --json\n  anycfg get active_list_log dcache_tag_bits --params core.json\n  anycfg check --params core.json"
)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every parameter in derivation order.
    Dump {
        #[command(flatten)]
        source: ParamSource,

        /// Print a JSON object instead of `NAME = VALUE` lines.
        #[arg(long)]
        json: bool,
    },

    /// Print the named parameters.
    Get {
        /// Parameter names, e.g. `active_list_log`.
        #[arg(required = true)]
        names: Vec<String>,

        #[command(flatten)]
        source: ParamSource,
    },

    /// Validate the parameters without printing them.
    Check {
        #[command(flatten)]
        source: ParamSource,
    },
}

#[derive(Args, Debug)]
struct ParamSource {
    /// JSON file of primary parameters; omitted fields take their defaults.
    #[arg(short, long, value_name = "FILE")]
    params: Option<PathBuf>,
}

impl ParamSource {
    fn load(&self) -> Result<PrimaryParams> {
        match &self.params {
            Some(path) => PrimaryParams::from_json_file(path)
                .with_context(|| format!("could not load `{}`", path.display())),
            None => {
                tracing::debug!("no parameter file, using defaults");
                Ok(PrimaryParams::default())
            }
        }
    }

    fn build(&self) -> Result<Configuration> {
        let params = self.load()?;
        let config = Configuration::build(&params).context("parameters are not a legal core")?;
        Ok(config)
    }
}

/// Serializes as one JSON object, keys in derivation order.
struct OrderedDump<'a>(&'a Configuration);

impl Serialize for OrderedDump<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli.command, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Executes one subcommand, writing its report to `out`.
///
/// An unknown name in `get` is an error, so the process exits with status 1.
fn run(command: Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Dump { source, json } => {
            let config = source.build()?;
            if json {
                serde_json::to_writer_pretty(&mut *out, &OrderedDump(&config))?;
                writeln!(out)?;
            } else {
                for (name, value) in config.iter() {
                    writeln!(out, "{name} = {value}")?;
                }
            }
        }
        Command::Get { names, source } => {
            let config = source.build()?;
            let values = config.get_many(names.iter().map(String::as_str))?;
            for (name, value) in values {
                writeln!(out, "{name} = {value}")?;
            }
        }
        Command::Check { source } => {
            let config = source.build()?;
            writeln!(
                out,
                "ok: {} parameters, {} memory",
                config.len(),
                config.primary().memory.name()
            )?;
        }
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
