//! Changelog command implementation
//!
//! Renders all valid records as a versioned changelog grouped by audience.

use crate::commands::check::scan_with_progress;
use crate::core::error::{PrdocError, PrdocResult};
use crate::prdoc::changelog::{Changelog, ChangelogFormat};
use std::path::Path;

/// Run the changelog command
pub fn run_changelog(dir: &Path, version: Option<String>, json: bool) -> PrdocResult<()> {
  let scan = scan_with_progress(dir, json)?;

  let version = version.unwrap_or_else(|| "Unreleased".to_string());
  let date = chrono::Utc::now().format("%Y-%m-%d").to_string();

  let mut changelog = Changelog::new(version, date);
  for record in scan.change_records() {
    changelog.add_record(record);
  }

  let format = if json {
    ChangelogFormat::Json
  } else {
    ChangelogFormat::Markdown
  };
  let rendered = changelog.render(format).map_err(PrdocError::message)?;
  println!("{}", rendered);

  if !json && !scan.is_clean() {
    eprintln!("⚠️  {} malformed record(s) were skipped:", scan.issues.len());
    for issue in &scan.issues {
      eprintln!("   {}: {}", issue.path.display(), issue.error);
    }
  }

  Ok(())
}
