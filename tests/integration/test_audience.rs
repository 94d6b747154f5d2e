//! Integration tests for `prdoc audience`

use crate::helpers::{TestWorkspace, run_prdoc, run_prdoc_unchecked, valid_record};
use anyhow::Result;

#[test]
fn test_audience_filters_entries() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.add_record("pr_0001.prdoc", &valid_record("Runtime change", "pallet-staking", "patch"))?;
  ws.add_record(
    "pr_0002.prdoc",
    r#"title: Node-side change
doc:
  - audience: Node Operator
    description: Restart required after upgrade.
crates:
  - name: polkadot-service
    bump: minor
"#,
  )?;

  let output = run_prdoc(&ws.path, &["audience", "Node Operator", "--json"])?;
  let json: serde_json::Value = serde_json::from_str(&String::from_utf8_lossy(&output.stdout))?;

  let entries = json.as_array().unwrap();
  assert_eq!(entries.len(), 1);
  assert_eq!(entries[0]["title"], "Node-side change");
  assert!(entries[0]["description"].as_str().unwrap().contains("Restart required"));

  Ok(())
}

#[test]
fn test_audience_matches_membership_in_list() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.add_record(
    "pr_0001.prdoc",
    r#"title: Shared change
doc:
  - audience: [Runtime Dev, Node Dev]
    description: Relevant to both audiences.
crates:
  - name: sp-io
    bump: minor
"#,
  )?;

  for label in ["Runtime Dev", "Node Dev"] {
    let output = run_prdoc(&ws.path, &["audience", label, "--json"])?;
    let json: serde_json::Value = serde_json::from_str(&String::from_utf8_lossy(&output.stdout))?;
    assert_eq!(json.as_array().unwrap().len(), 1, "Entry should match '{}'", label);
  }

  let output = run_prdoc(&ws.path, &["audience", "Node Operator", "--json"])?;
  let json: serde_json::Value = serde_json::from_str(&String::from_utf8_lossy(&output.stdout))?;
  assert!(json.as_array().unwrap().is_empty());

  Ok(())
}

#[test]
fn test_audience_preserves_record_order() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.add_record("pr_0001.prdoc", &valid_record("First", "a", "patch"))?;
  ws.add_record("pr_0002.prdoc", &valid_record("Second", "b", "patch"))?;
  ws.add_record("pr_0003.prdoc", &valid_record("Third", "c", "patch"))?;

  let output = run_prdoc(&ws.path, &["audience", "Runtime Dev", "--json"])?;
  let json: serde_json::Value = serde_json::from_str(&String::from_utf8_lossy(&output.stdout))?;

  let titles: Vec<&str> = json
    .as_array()
    .unwrap()
    .iter()
    .map(|e| e["title"].as_str().unwrap())
    .collect();
  assert_eq!(titles, vec!["First", "Second", "Third"]);

  Ok(())
}

#[test]
fn test_audience_unknown_label() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.add_record("pr_0001.prdoc", &valid_record("First", "a", "patch"))?;

  let output = run_prdoc_unchecked(&ws.path, &["audience", "Superfan"])?;
  assert!(!output.status.success());
  assert_eq!(output.status.code(), Some(1), "User errors exit with 1");

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("Superfan"));
  assert!(stderr.contains("Runtime Dev"), "Help should list valid audiences");

  Ok(())
}
