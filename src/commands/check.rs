//! Check command implementation
//!
//! Validates every record in a directory against the PRDoc schema.
//! Partial-failure semantics: all files are examined, every violation is
//! reported with its source path, and only `--strict` turns violations
//! into a non-zero exit.

use crate::core::error::PrdocResult;
use crate::prdoc::store::{self, ScanReport};
use crate::ui::progress::ScanProgress;
use serde::Serialize;
use std::path::Path;

/// JSON-serializable check report
#[derive(Debug, Serialize)]
pub struct CheckReport {
  pub total_files: usize,
  pub valid: usize,
  pub invalid: usize,
  pub issues: Vec<CheckIssue>,
}

#[derive(Debug, Serialize)]
pub struct CheckIssue {
  pub path: String,
  pub error: String,
}

impl CheckReport {
  /// Build the serializable report from a scan
  pub fn from_scan(scan: &ScanReport) -> Self {
    Self {
      total_files: scan.total_files(),
      valid: scan.records.len(),
      invalid: scan.issues.len(),
      issues: scan
        .issues
        .iter()
        .map(|issue| CheckIssue {
          path: issue.path.display().to_string(),
          error: issue.error.to_string(),
        })
        .collect(),
    }
  }
}

/// Run the check command
pub fn run_check(dir: &Path, json: bool, strict: bool) -> PrdocResult<()> {
  let scan = scan_with_progress(dir, json)?;
  let report = CheckReport::from_scan(&scan);

  if json {
    println!("{}", serde_json::to_string_pretty(&report)?);
  } else {
    print_check_report(&report);
  }

  // Exit with error in strict mode if issues found
  if strict && report.invalid > 0 {
    std::process::exit(crate::core::error::ExitCode::Validation.as_i32());
  }

  Ok(())
}

/// Scan a directory, showing a progress bar in human mode
pub fn scan_with_progress(dir: &Path, json: bool) -> PrdocResult<ScanReport> {
  if json {
    return store::load_all(dir);
  }

  let files = store::list_record_files(dir)?;
  let progress = ScanProgress::new(files.len(), format!("Scanning {}", dir.display()));
  store::load_all_with_progress(dir, Some(&progress))
}

fn print_check_report(report: &CheckReport) {
  if report.total_files == 0 {
    println!("⚠️  No .prdoc files found");
    return;
  }

  if report.invalid == 0 {
    println!("✅ {} record(s) valid", report.valid);
    return;
  }

  println!(
    "⚠️  {} of {} record(s) failed validation",
    report.invalid, report.total_files
  );
  println!();

  for issue in &report.issues {
    println!("📄 {}", issue.path);
    println!("   {}", issue.error);
    println!();
  }

  println!("To fail CI on these issues:");
  println!("  prdoc check --strict");
}
