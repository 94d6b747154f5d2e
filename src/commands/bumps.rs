//! Bumps command implementation
//!
//! Aggregates per-crate version-bump obligations across all records:
//! each crate resolves to the maximum bump level observed.

use crate::commands::check::scan_with_progress;
use crate::core::error::PrdocResult;
use crate::prdoc::aggregate::aggregate_bumps;
use crate::prdoc::schema::BumpLevel;
use crate::prdoc::store::ScanIssue;
use std::collections::BTreeMap;
use std::path::Path;

/// Run the bumps command
pub fn run_bumps(dir: &Path, json: bool, strict: bool) -> PrdocResult<()> {
  let mut scan = scan_with_progress(dir, json)?;

  // Aggregation assumes validated input; in strict mode a bad record is fatal
  if strict && !scan.is_clean() {
    let issue = scan.issues.remove(0);
    return Err(issue.into_error());
  }

  let bumps = aggregate_bumps(scan.change_records());

  if json {
    println!("{}", serde_json::to_string_pretty(&bumps)?);
  } else {
    print_bumps(&bumps, &scan.issues);
  }

  Ok(())
}

fn print_bumps(bumps: &BTreeMap<String, BumpLevel>, skipped: &[ScanIssue]) {
  if bumps.is_empty() {
    println!("⚠️  No crate bumps recorded");
    return;
  }

  println!("📦 Aggregated bumps ({} crate(s))", bumps.len());
  println!();

  let width = bumps.keys().map(|name| name.len()).max().unwrap_or(0);
  for (name, bump) in bumps {
    let icon = match bump {
      BumpLevel::Major => "🔴",
      BumpLevel::Minor => "🟡",
      BumpLevel::Patch => "🟢",
    };
    println!("  {} {:width$}  {}", icon, name, bump);
  }

  if !skipped.is_empty() {
    println!();
    println!("⚠️  {} malformed record(s) skipped:", skipped.len());
    for issue in skipped {
      println!("   {}: {}", issue.path.display(), issue.error);
    }
  }
}
