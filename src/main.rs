mod commands;
mod core;
mod prdoc;
mod ui;

use clap::{Parser, Subcommand};
use core::error::{PrdocError, print_error};
use std::path::PathBuf;

/// Validate PRDoc change records and compute per-crate release bumps
#[derive(Parser)]
#[command(name = "prdoc")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct PrdocCli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Validate all records in a directory
  Check {
    /// Directory of .prdoc files
    #[arg(long, default_value = "prdoc")]
    dir: PathBuf,
    /// Output results in JSON format
    #[arg(long)]
    json: bool,
    /// Treat schema violations as errors (exit code 3)
    #[arg(long)]
    strict: bool,
  },

  /// Show the maximum bump level per crate across all records
  Bumps {
    /// Directory of .prdoc files
    #[arg(long, default_value = "prdoc")]
    dir: PathBuf,
    /// Output results in JSON format
    #[arg(long)]
    json: bool,
    /// Fail on the first malformed record instead of skipping it
    #[arg(long)]
    strict: bool,
  },

  /// List doc entries addressed to an audience
  Audience {
    /// Audience label (e.g. "Runtime Dev")
    label: String,
    /// Directory of .prdoc files
    #[arg(long, default_value = "prdoc")]
    dir: PathBuf,
    /// Output results in JSON format
    #[arg(long)]
    json: bool,
  },

  /// Render a changelog grouped by audience
  #[command(disable_version_flag = true)]
  Changelog {
    /// Directory of .prdoc files
    #[arg(long, default_value = "prdoc")]
    dir: PathBuf,
    /// Version heading for the changelog (default: Unreleased)
    #[arg(long)]
    version: Option<String>,
    /// Output JSON instead of Markdown
    #[arg(long)]
    json: bool,
  },

  /// Propose next versions for the crates of this workspace
  Version {
    /// Directory of .prdoc files
    #[arg(long, default_value = "prdoc")]
    dir: PathBuf,
    /// Output results in JSON format
    #[arg(long)]
    json: bool,
    /// Actually rewrite Cargo.toml versions (default: dry-run)
    #[arg(long)]
    apply: bool,
  },
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = PrdocCli::parse();

  let result = match cli.command {
    Commands::Check { dir, json, strict } => commands::run_check(&dir, json, strict),
    Commands::Bumps { dir, json, strict } => commands::run_bumps(&dir, json, strict),
    Commands::Audience { label, dir, json } => commands::run_audience(&label, &dir, json),
    Commands::Changelog { dir, version, json } => commands::run_changelog(&dir, version, json),
    Commands::Version { dir, json, apply } => commands::run_version(&dir, json, apply),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: PrdocError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
