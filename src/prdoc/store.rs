//! Record store: scan a directory of `*.prdoc` files into validated records
//!
//! One bad record never aborts the batch: it is reported as a schema issue
//! attributed to its source path and the scan continues. Files are parsed in
//! parallel but results keep lexicographic path order, so every downstream
//! query is deterministic.

use crate::core::error::{PrdocError, PrdocResult, ResultExt, SchemaError};
use crate::prdoc::schema::ChangeRecord;
use crate::ui::progress::ScanProgress;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// File extension of change records
pub const PRDOC_EXTENSION: &str = "prdoc";

/// A validated record together with the file it came from
#[derive(Debug, Clone)]
pub struct SourcedRecord {
  pub path: PathBuf,
  pub record: ChangeRecord,
}

/// A schema violation attributed to its source file
#[derive(Debug, Clone)]
pub struct ScanIssue {
  pub path: PathBuf,
  pub error: SchemaError,
}

impl ScanIssue {
  /// Convert into a full error for strict-mode propagation
  pub fn into_error(self) -> PrdocError {
    PrdocError::Schema {
      path: self.path,
      error: self.error,
    }
  }
}

/// Outcome of scanning a record directory
#[derive(Debug, Default)]
pub struct ScanReport {
  /// Successfully parsed records, in lexicographic path order
  pub records: Vec<SourcedRecord>,
  /// Per-file schema violations, in lexicographic path order
  pub issues: Vec<ScanIssue>,
}

impl ScanReport {
  /// Total number of files examined
  pub fn total_files(&self) -> usize {
    self.records.len() + self.issues.len()
  }

  /// True when every file parsed cleanly
  pub fn is_clean(&self) -> bool {
    self.issues.is_empty()
  }

  /// Iterate over the parsed records themselves
  pub fn change_records(&self) -> impl Iterator<Item = &ChangeRecord> {
    self.records.iter().map(|r| &r.record)
  }
}

/// Scan a directory for `*.prdoc` files and parse them all
pub fn load_all(dir: &Path) -> PrdocResult<ScanReport> {
  load_all_with_progress(dir, None)
}

/// Scan with an optional progress bar (skipped for JSON/pipeline output)
pub fn load_all_with_progress(dir: &Path, progress: Option<&ScanProgress>) -> PrdocResult<ScanReport> {
  let files = list_record_files(dir)?;

  // Parallel parse; collect preserves input order
  let results: Vec<Result<SourcedRecord, ScanIssue>> = files
    .par_iter()
    .map(|path| {
      let result = parse_file(path);
      if let Some(progress) = progress {
        progress.inc();
      }
      result
    })
    .collect();

  let mut report = ScanReport::default();
  for result in results {
    match result {
      Ok(record) => report.records.push(record),
      Err(issue) => report.issues.push(issue),
    }
  }

  Ok(report)
}

/// List record files in deterministic (lexicographic) order
pub fn list_record_files(dir: &Path) -> PrdocResult<Vec<PathBuf>> {
  if !dir.is_dir() {
    return Err(PrdocError::with_help(
      format!("Record directory not found: {}", dir.display()),
      "Pass the directory of .prdoc files with --dir",
    ));
  }

  let mut files = Vec::new();
  let entries = std::fs::read_dir(dir).with_context(|| format!("Failed to read directory {}", dir.display()))?;
  for entry in entries {
    let entry = entry.with_context(|| format!("Failed to read directory {}", dir.display()))?;
    let path = entry.path();
    if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(PRDOC_EXTENSION) {
      files.push(path);
    }
  }

  files.sort();
  Ok(files)
}

fn parse_file(path: &Path) -> Result<SourcedRecord, ScanIssue> {
  let text = std::fs::read_to_string(path).map_err(|e| ScanIssue {
    path: path.to_path_buf(),
    error: SchemaError::Malformed {
      message: format!("unreadable file: {}", e),
    },
  })?;

  match ChangeRecord::parse(&text) {
    Ok(record) => Ok(SourcedRecord {
      path: path.to_path_buf(),
      record,
    }),
    Err(error) => Err(ScanIssue {
      path: path.to_path_buf(),
      error,
    }),
  }
}
