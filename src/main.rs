//! modpack CLI
//!
//! Usage: modpack [OPTIONS] [COMMAND]
//!
//! Commands:
//!   build    Stamp the version and build the archive (default)
//!   inspect  List the entries of a built archive

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use modpack::cli::{BuildArgs, Cli, Commands};
use modpack::error::EXIT_IO;
use modpack::ui::{detect_capabilities, ConsoleEventSink, ConsoleStyle};
use modpack::{ConfigWarning, JsonEventSink, PackConfig, PackError, PackEventSink, Packager};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    let caps = detect_capabilities();
    let style = ConsoleStyle::new(caps.use_color(cli.color), caps.supports_unicode);

    match run(&cli, style) {
        Ok(code) => code,
        Err(err) => {
            report_error(&cli, style, &err);
            let code = err
                .downcast_ref::<PackError>()
                .map_or(EXIT_IO, PackError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("modpack={}", default_level)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

fn run(cli: &Cli, style: ConsoleStyle) -> Result<ExitCode> {
    let (config, warnings) = PackConfig::load_for_root(&cli.root)?;
    print_config_warnings(style, &warnings);
    let config = config.with_env_overrides();
    tracing::debug!(?config, root = %cli.root.display(), "resolved configuration");

    match cli.command() {
        Commands::Build(args) => cmd_build(cli, config, &args, style),
        Commands::Inspect { archive } => cmd_inspect(cli, &config, archive.as_deref(), style),
    }
}

fn cmd_build(cli: &Cli, mut config: PackConfig, args: &BuildArgs, style: ConsoleStyle) -> Result<ExitCode> {
    if args.no_rollback {
        config.build.rollback = false;
    }

    let sink: Box<dyn PackEventSink> = if cli.json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::stdout(style))
    };

    let packager = Packager::new(&cli.root, config, sink.as_ref());
    let report = packager.run_from_env()?;
    tracing::info!(
        version = %report.version,
        bytes = report.archive.bytes,
        "build complete"
    );

    if cli.json {
        let output = serde_json::json!({
            "event": "complete",
            "command": "build",
            "status": "success",
            "version": report.version.as_str(),
            "archive": report.archive.path.display().to_string(),
            "bytes": report.archive.bytes,
            "sha256": report.archive.sha256,
        });
        println!("{}", serde_json::to_string(&output)?);
    }

    Ok(ExitCode::SUCCESS)
}

fn cmd_inspect(
    cli: &Cli,
    config: &PackConfig,
    archive: Option<&Path>,
    style: ConsoleStyle,
) -> Result<ExitCode> {
    let report = modpack::inspect(&cli.root, config, archive)?;

    if cli.json {
        let entries: Vec<_> = report
            .entries
            .iter()
            .map(|e| {
                serde_json::json!({
                    "name": e.name,
                    "size": e.size,
                    "compressed_size": e.compressed_size,
                })
            })
            .collect();
        let output = serde_json::json!({
            "event": "inspect",
            "path": report.path.display().to_string(),
            "entries": entries,
            "missing": report.missing,
            "unexpected": report.unexpected,
            "matches_layout": report.matches_layout(),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", report.path.display());
        for entry in &report.entries {
            println!(
                "  {:>10} {:>10}  {}",
                entry.size, entry.compressed_size, entry.name
            );
        }
        println!();
        for name in &report.missing {
            println!("{}", style.warning(&format!("Missing entry: {}", name)));
        }
        for name in &report.unexpected {
            println!("{}", style.warning(&format!("Unexpected entry: {}", name)));
        }
        if report.matches_layout() {
            println!(
                "{}",
                style.success(&format!("{} entries match the layout", report.entries.len()))
            );
        }
    }

    if report.matches_layout() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

fn print_config_warnings(style: ConsoleStyle, warnings: &[ConfigWarning]) {
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };
        eprintln!("{}", style.warning(&format!("Unknown config key '{}' in {}", w.key, location)));

        if let Some(suggestion) = &w.suggestion {
            eprintln!("{}", style.detail(&format!("Did you mean '{}'?", suggestion)));
        }
    }
}

fn report_error(cli: &Cli, style: ConsoleStyle, err: &anyhow::Error) {
    if cli.json {
        let kind = match err.downcast_ref::<PackError>() {
            Some(e) if e.is_configuration() => "configuration",
            _ => "io",
        };
        let output = serde_json::json!({
            "event": "error",
            "kind": kind,
            "message": err.to_string(),
        });
        println!("{}", output);
    }

    eprintln!("{}", style.error(&format!("Error: {}", err)));
}
