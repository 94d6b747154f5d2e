//! Integration tests for `prdoc changelog`

use crate::helpers::{TestWorkspace, run_prdoc, valid_record};
use anyhow::Result;

#[test]
fn test_changelog_markdown() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.add_record("pr_0001.prdoc", &valid_record("Fix payouts", "pallet-staking", "patch"))?;
  ws.add_record(
    "pr_0002.prdoc",
    r#"title: New RPC method
doc:
  - audience: Node Dev
    description: Adds chain_getFinalizedHead.
crates:
  - name: polkadot-rpc
    bump: minor
"#,
  )?;

  let output = run_prdoc(&ws.path, &["changelog", "--version", "1.5.0"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("## [1.5.0]"));
  assert!(stdout.contains("### Runtime Dev"));
  assert!(stdout.contains("**Fix payouts**"));
  assert!(stdout.contains("### Node Dev"));
  assert!(stdout.contains("**New RPC method**"));

  Ok(())
}

#[test]
fn test_changelog_defaults_to_unreleased() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.add_record("pr_0001.prdoc", &valid_record("Fix payouts", "pallet-staking", "patch"))?;

  let output = run_prdoc(&ws.path, &["changelog"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("## [Unreleased]"));

  Ok(())
}

#[test]
fn test_changelog_json() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.add_record("pr_0001.prdoc", &valid_record("Fix payouts", "pallet-staking", "patch"))?;

  let output = run_prdoc(&ws.path, &["changelog", "--version", "1.5.0", "--json"])?;
  let json: serde_json::Value = serde_json::from_str(&String::from_utf8_lossy(&output.stdout))?;

  assert_eq!(json["version"], "1.5.0");
  assert_eq!(json["total_records"], 1);
  assert_eq!(json["sections"][0]["audience"], "Runtime Dev");
  assert_eq!(json["sections"][0]["entries"][0]["title"], "Fix payouts");

  Ok(())
}

#[test]
fn test_changelog_skips_malformed_records() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.add_record("pr_0001.prdoc", &valid_record("Good", "pallet-staking", "patch"))?;
  ws.add_record("pr_0002.prdoc", "title: Broken\n")?;

  let output = run_prdoc(&ws.path, &["changelog", "--version", "1.5.0"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);
  let stderr = String::from_utf8_lossy(&output.stderr);

  assert!(stdout.contains("**Good**"));
  assert!(stderr.contains("pr_0002.prdoc"), "Skipped record should be reported");

  Ok(())
}
