//! CLI Argument Parsing
//!
//! Global flags (--root, --json, --color, --verbose) are inherited by all
//! subcommands. Running without a subcommand builds the archive.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// modpack - stamp the mod version and build the release archive
#[derive(Parser, Debug)]
#[command(name = "modpack")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "The version is read from the VERSION environment variable.")]
pub struct Cli {
    /// Project root containing modinfo.ini
    #[arg(short = 'C', long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Stamp the version into modinfo.ini and build the zip archive
    Build(BuildArgs),

    /// List the entries of a built archive
    Inspect {
        /// Archive to inspect (default: the configured output archive)
        archive: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildArgs {
    /// Keep the stamped modinfo.ini even if packaging fails
    #[arg(long)]
    pub no_rollback: bool,
}

impl Cli {
    /// The subcommand to run, `build` when none was given
    pub fn command(&self) -> Commands {
        match &self.command {
            Some(Commands::Build(args)) => Commands::Build(args.clone()),
            Some(Commands::Inspect { archive }) => Commands::Inspect {
                archive: archive.clone(),
            },
            None => Commands::Build(BuildArgs::default()),
        }
    }

    /// Tracing filter directive for the `-v` count
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
