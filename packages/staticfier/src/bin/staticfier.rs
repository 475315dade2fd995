/*
 * Staticfier CLI
 *
 * Usage:
 *   staticfier check src/            report convertible methods (exit 1 if any)
 *   staticfier fix src/ Foo.java     rewrite files in place
 *   staticfier diff src/             print old and new method headers
 *
 * Options:
 *   --config staticfier.yaml         YAML configuration (version: 1)
 *   --json                           machine-readable report
 *   -v / -vv                         debug / trace logging (or STATICFIER_LOG)
 */

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use staticfier::config::StaticfierConfig;
use staticfier::pipeline::{process_paths, write_changes, BatchReport, FileStatus};
use staticfier::StaticfierRecipe;

#[derive(Debug, Parser)]
#[command(name = "staticfier", version, about = "Makes private methods that use no instance data static")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Report methods that would be converted; exit code 1 when there are any
    Check(Targets),
    /// Convert methods and write the files back
    Fix(Targets),
    /// Print the modifier lists that would change
    Diff(Targets),
}

#[derive(Debug, Args)]
struct Targets {
    /// Files or directories
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Override the number of recipe runs per file
    #[arg(long)]
    passes: Option<usize>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env("STATICFIER_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>, passes: Option<usize>) -> anyhow::Result<StaticfierConfig> {
    let config = match path {
        Some(path) => StaticfierConfig::from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => StaticfierConfig::default(),
    };
    Ok(match passes {
        Some(passes) => {
            let config = config.max_passes(passes);
            staticfier::config::Validatable::validate(&config)?;
            config
        }
        None => config,
    })
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let (targets, mode) = match &cli.command {
        Command::Check(t) => (t, Mode::Check),
        Command::Fix(t) => (t, Mode::Fix),
        Command::Diff(t) => (t, Mode::Diff),
    };
    let config = load_config(cli.config.as_ref(), targets.passes)?;
    tracing::debug!(recipe = StaticfierRecipe::default().display_name(), ?mode, "starting");

    let report = process_paths(&targets.paths, &config);

    match mode {
        Mode::Fix => {
            let written = write_changes(&report).context("writing rewritten files")?;
            tracing::info!(written, "files updated");
        }
        Mode::Diff if !cli.json => print_diff(&report),
        _ => {}
    }

    if cli.json {
        println!("{}", report.to_json()?);
    } else if mode != Mode::Diff {
        print_summary(&report, mode);
    }

    let pending = mode == Mode::Check && report.has_changes();
    Ok(if pending { ExitCode::from(1) } else { ExitCode::SUCCESS })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Check,
    Fix,
    Diff,
}

fn print_summary(report: &BatchReport, mode: Mode) {
    for file in &report.files {
        match &file.status {
            FileStatus::Changed => {
                for method in &file.converted {
                    let verb = if mode == Mode::Fix { "made static" } else { "can be static" };
                    println!(
                        "{}:{}: {}.{} {verb}",
                        file.path.display(),
                        method.line,
                        method.type_name,
                        method.method
                    );
                }
            }
            FileStatus::Skipped { reason } => println!("{}: skipped ({reason})", file.path.display()),
            FileStatus::Failed { error } => println!("{}: failed ({error})", file.path.display()),
            FileStatus::Unchanged => {}
        }
    }
    let totals = &report.totals;
    println!(
        "{} files scanned, {} changed, {} skipped, {} failed; {} methods converted, {} rejected",
        totals.files_scanned,
        totals.files_changed,
        totals.files_skipped,
        totals.files_failed,
        totals.methods_converted,
        totals.methods_rejected
    );
}

fn print_diff(report: &BatchReport) {
    for file in report.changed_files() {
        println!("--- {}", file.path.display());
        println!("+++ {}", file.path.display());
        for method in &file.converted {
            println!("@@ line {} {}.{} @@", method.line, method.type_name, method.method);
            println!("-{}", method.before);
            println!("+{}", method.after);
        }
    }
}
