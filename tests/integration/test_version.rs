//! Integration tests for `prdoc version`

use crate::helpers::{TestWorkspace, run_prdoc, valid_record};
use anyhow::Result;

#[test]
fn test_version_plan_dry_run() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.add_crate("pallet-staking", "1.2.3")?;
  ws.add_record("pr_0001.prdoc", &valid_record("Breaking rework", "pallet-staking", "major"))?;

  let output = run_prdoc(&ws.path, &["version", "--json"])?;
  let json: serde_json::Value = serde_json::from_str(&String::from_utf8_lossy(&output.stdout))?;

  assert_eq!(json["plans"][0]["name"], "pallet-staking");
  assert_eq!(json["plans"][0]["bump"], "major");
  assert_eq!(json["plans"][0]["current_version"], "1.2.3");
  assert_eq!(json["plans"][0]["proposed_version"], "2.0.0");

  // Dry-run: manifest untouched
  let manifest = ws.read_file("crates/pallet-staking/Cargo.toml")?;
  assert!(manifest.contains("version = \"1.2.3\""));

  Ok(())
}

#[test]
fn test_version_apply_rewrites_manifest() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.add_crate("pallet-staking", "1.2.3")?;
  ws.add_record("pr_0001.prdoc", &valid_record("Add feature", "pallet-staking", "minor"))?;

  run_prdoc(&ws.path, &["version", "--apply"])?;

  let manifest = ws.read_file("crates/pallet-staking/Cargo.toml")?;
  assert!(manifest.contains("version = \"1.3.0\""));
  // Lossless edit keeps workspace inheritance lines
  assert!(manifest.contains("edition.workspace = true"));

  Ok(())
}

#[test]
fn test_version_reports_unknown_crates() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.add_crate("pallet-staking", "1.2.3")?;
  ws.add_record("pr_0001.prdoc", &valid_record("Fix", "pallet-staking", "patch"))?;
  ws.add_record("pr_0002.prdoc", &valid_record("External", "some-other-crate", "major"))?;

  let output = run_prdoc(&ws.path, &["version", "--json"])?;
  let json: serde_json::Value = serde_json::from_str(&String::from_utf8_lossy(&output.stdout))?;

  assert_eq!(json["plans"].as_array().unwrap().len(), 1);
  assert_eq!(json["unknown_crates"][0], "some-other-crate");

  Ok(())
}

#[test]
fn test_version_max_bump_across_records() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.add_crate("pallet-staking", "1.2.3")?;
  ws.add_record("pr_0001.prdoc", &valid_record("Fix", "pallet-staking", "patch"))?;
  ws.add_record("pr_0002.prdoc", &valid_record("Feature", "pallet-staking", "minor"))?;

  let output = run_prdoc(&ws.path, &["version", "--json"])?;
  let json: serde_json::Value = serde_json::from_str(&String::from_utf8_lossy(&output.stdout))?;

  assert_eq!(json["plans"][0]["bump"], "minor");
  assert_eq!(json["plans"][0]["proposed_version"], "1.3.0");

  Ok(())
}
