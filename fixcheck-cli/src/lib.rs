//! Library side of the `fixcheck` binary: argument parsing, config merge and command dispatch.
//!
//! The binary only installs logging and hands `std::env::args_os()` and stdout to [`run_from`].

pub mod config;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use config::ConfigMerger;
use fixcheck_domain::{validate_target, FsTarget, CHECK_CATALOG};
use fixcheck_render::{render_missing_target, render_report};
use std::ffi::OsString;
use std::io::Write;
use tracing::{debug, info};

#[derive(Debug, Parser)]
#[command(
    name = "fixcheck",
    version,
    about = "Verify that layout ratios come from SettingsManager defaults instead of hardcoded values.",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Command>,

    #[command(flatten)]
    check: CheckArgs,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Inspect the target file and report each check (default).
    Check(CheckArgs),
    /// List all checks with their patterns.
    ListChecks(ListChecksArgs),
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// File to inspect (default: the layout component two levels above this executable).
    #[arg(long)]
    target: Option<Utf8PathBuf>,

    /// Directory holding a fixcheck.toml to read. No config file is read without it.
    #[arg(long)]
    config_dir: Option<Utf8PathBuf>,
}

#[derive(Debug, Args)]
struct ListChecksArgs {
    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Parse `args`, run the selected command and return the process exit code.
///
/// Reports go to `out`. Usage errors are printed to stderr and yield 1; `--help` and
/// `--version` are written to `out` and yield 0.
pub fn run_from<I, T>(args: I, out: &mut dyn Write) -> anyhow::Result<u8>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            eprint!("{}", e);
            return Ok(1);
        }
        Err(e) => {
            write!(out, "{}", e).context("write help")?;
            return Ok(0);
        }
    };

    match cli.cmd {
        None => cmd_check(cli.check, out),
        Some(Command::Check(args)) => cmd_check(args, out),
        Some(Command::ListChecks(args)) => cmd_list_checks(args, out).map(|()| 0),
    }
}

fn cmd_check(args: CheckArgs, out: &mut dyn Write) -> anyhow::Result<u8> {
    let file_config = match &args.config_dir {
        Some(dir) => config::load_or_default(dir).context("load fixcheck.toml config")?,
        None => config::FixcheckConfig::default(),
    };
    let anchor = config::default_anchor()?;
    let merged = ConfigMerger::new(file_config).merge_check_args(
        args.target.as_deref(),
        args.config_dir.as_deref(),
        &anchor,
    );
    debug!("target {} (from {:?})", merged.target, merged.origin);

    let target = FsTarget::new(merged.target.clone());
    match validate_target(&target) {
        Ok(validation) => {
            write!(out, "{}", render_report(&merged.target, &validation))
                .context("write report")?;
            info!(
                all_fixes_applied = validation.all_fixes_applied(),
                no_old_code = validation.no_old_code(),
                failed = validation.failed().count(),
                "verification finished"
            );
            Ok(validation.exit_code())
        }
        Err(e) if e.is_missing_target() => {
            write!(out, "{}", render_missing_target(e.path())).context("write report")?;
            Ok(e.exit_code())
        }
        Err(e) => Err(e).with_context(|| format!("verify {}", merged.target)),
    }
}

fn cmd_list_checks(args: ListChecksArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    match args.format {
        OutputFormat::Text => {
            writeln!(out, "Checks:\n")?;
            writeln!(out, "  {:<26} {:<10} PATTERNS", "ID", "KIND")?;
            writeln!(out, "  {:<26} {:<10} --------", "--", "----")?;
            for check in CHECK_CATALOG {
                writeln!(
                    out,
                    "  {:<26} {:<10} {}",
                    check.id,
                    check.kind.label(),
                    check
                        .patterns
                        .iter()
                        .map(|p| format!("\"{}\"", p))
                        .collect::<Vec<_>>()
                        .join(" | ")
                )?;
            }
            writeln!(out)?;
            writeln!(
                out,
                "Required patterns must all be present; forbidden patterns must all be absent."
            )?;
        }
        OutputFormat::Json => {
            let checks: Vec<_> = CHECK_CATALOG
                .iter()
                .map(|c| {
                    serde_json::json!({
                        "id": c.id,
                        "title": c.title,
                        "kind": c.kind,
                        "patterns": c.patterns,
                    })
                })
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&checks)?)?;
        }
    }
    Ok(())
}
