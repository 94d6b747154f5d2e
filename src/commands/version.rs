//! Version command implementation
//!
//! Combines the aggregated bump obligations with the current versions of the
//! surrounding Cargo workspace and proposes the next version per crate.
//! Dry-run by default; `--apply` rewrites each affected Cargo.toml losslessly.

use crate::commands::check::scan_with_progress;
use crate::core::error::{PrdocError, PrdocResult, ResultExt};
use crate::prdoc::aggregate::aggregate_bumps;
use crate::prdoc::schema::BumpLevel;
use cargo_metadata::MetadataCommand;
use serde::Serialize;
use std::path::Path;

/// Proposed next version for one workspace crate
#[derive(Debug, Serialize)]
pub struct VersionPlan {
  pub name: String,
  pub bump: BumpLevel,
  pub current_version: String,
  pub proposed_version: String,
  #[serde(skip)]
  manifest_path: std::path::PathBuf,
}

/// JSON-serializable version report
#[derive(Debug, Serialize)]
pub struct VersionReport {
  pub plans: Vec<VersionPlan>,
  /// Crates named by records but absent from the workspace
  pub unknown_crates: Vec<String>,
}

/// Run the version command
pub fn run_version(dir: &Path, json: bool, apply: bool) -> PrdocResult<()> {
  let scan = scan_with_progress(dir, json)?;
  let bumps = aggregate_bumps(scan.change_records());

  let workspace_root = std::env::current_dir()?;
  let metadata = MetadataCommand::new()
    .current_dir(&workspace_root)
    .exec()
    .map_err(|e| PrdocError::message(format!("Failed to load workspace metadata: {}", e)))?;

  let mut plans = Vec::new();
  let mut unknown_crates = Vec::new();

  for (name, bump) in &bumps {
    let Some(pkg) = metadata
      .workspace_packages()
      .into_iter()
      .find(|pkg| pkg.name == name.as_str())
    else {
      unknown_crates.push(name.clone());
      continue;
    };

    plans.push(VersionPlan {
      name: name.clone(),
      bump: *bump,
      current_version: pkg.version.to_string(),
      proposed_version: bump.apply(&pkg.version).to_string(),
      manifest_path: pkg.manifest_path.clone().into_std_path_buf(),
    });
  }

  let report = VersionReport { plans, unknown_crates };

  if json {
    println!("{}", serde_json::to_string_pretty(&report)?);
  } else {
    print_version_report(&report, apply);
  }

  if apply {
    for plan in &report.plans {
      update_crate_version(&plan.manifest_path, &plan.proposed_version)?;
      if !json {
        println!("   Updated {} → {}", plan.name, plan.proposed_version);
      }
    }
  }

  Ok(())
}

/// Update version in a crate's Cargo.toml, preserving formatting
fn update_crate_version(manifest_path: &Path, version: &str) -> PrdocResult<()> {
  let content = std::fs::read_to_string(manifest_path)
    .with_context(|| format!("Failed to read {}", manifest_path.display()))?;

  let mut doc: toml_edit::DocumentMut = content
    .parse()
    .map_err(|e| PrdocError::message(format!("Failed to parse {}: {}", manifest_path.display(), e)))?;

  if let Some(package) = doc.get_mut("package").and_then(|p| p.as_table_mut()) {
    package["version"] = toml_edit::value(version);
  } else {
    return Err(PrdocError::message(format!(
      "No [package] section in {}",
      manifest_path.display()
    )));
  }

  std::fs::write(manifest_path, doc.to_string())
    .with_context(|| format!("Failed to write {}", manifest_path.display()))?;

  Ok(())
}

fn print_version_report(report: &VersionReport, apply: bool) {
  if report.plans.is_empty() && report.unknown_crates.is_empty() {
    println!("✅ No version changes required");
    return;
  }

  println!("📋 Version Plan");
  println!();

  for plan in &report.plans {
    let icon = match plan.bump {
      BumpLevel::Major => "🔴",
      BumpLevel::Minor => "🟡",
      BumpLevel::Patch => "🟢",
    };
    println!("{} {}", icon, plan.name);
    println!("   Current:  {}", plan.current_version);
    println!("   Proposed: {} ({})", plan.proposed_version, plan.bump);
    println!();
  }

  if !report.unknown_crates.is_empty() {
    println!("⚠️  Named by records but not in this workspace:");
    for name in &report.unknown_crates {
      println!("   - {}", name);
    }
    println!();
  }

  if !apply && !report.plans.is_empty() {
    println!("🔍 Dry-run mode (no changes applied)");
    println!("To apply these versions:");
    println!("  prdoc version --apply");
  }
}
