//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A test workspace with a prdoc directory and optional member crates
pub struct TestWorkspace {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestWorkspace {
  /// Create a new test workspace with an empty prdoc directory
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();

    std::fs::create_dir(path.join("prdoc"))?;

    // Minimal workspace manifest so `prdoc version` has metadata to read
    std::fs::write(
      path.join("Cargo.toml"),
      r#"[workspace]
members = ["crates/*"]
resolver = "2"

[workspace.package]
edition = "2021"
license = "MIT"
"#,
    )?;

    Ok(Self { _root: root, path })
  }

  /// Write a record file into the prdoc directory
  pub fn add_record(&self, name: &str, content: &str) -> Result<()> {
    std::fs::write(self.path.join("prdoc").join(name), content)?;
    Ok(())
  }

  /// Add a dependency-free crate to the workspace
  pub fn add_crate(&self, name: &str, version: &str) -> Result<PathBuf> {
    let crate_path = self.path.join("crates").join(name);
    std::fs::create_dir_all(crate_path.join("src"))?;

    std::fs::write(
      crate_path.join("Cargo.toml"),
      format!(
        r#"[package]
name = "{}"
version = "{}"
edition.workspace = true
license.workspace = true
"#,
        name, version
      ),
    )?;

    std::fs::write(crate_path.join("src/lib.rs"), "pub fn noop() {}\n")?;

    Ok(crate_path)
  }

  /// Read a file relative to the workspace root
  pub fn read_file(&self, path: &str) -> Result<String> {
    Ok(std::fs::read_to_string(self.path.join(path))?)
  }
}

/// A well-formed record used across tests
pub fn valid_record(title: &str, crate_name: &str, bump: &str) -> String {
  format!(
    r#"title: {}

doc:
  - audience: Runtime Dev
    description: |
      {} description body.

crates:
  - name: {}
    bump: {}
"#,
    title, title, crate_name, bump
  )
}

/// Run the prdoc CLI, failing the test on a non-zero exit
pub fn run_prdoc(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = run_prdoc_unchecked(cwd, args)?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    anyhow::bail!(
      "prdoc command failed: prdoc {}\nstdout: {}\nstderr: {}",
      args.join(" "),
      stdout,
      stderr
    );
  }

  Ok(output)
}

/// Run the prdoc CLI without asserting on the exit status
pub fn run_prdoc_unchecked(cwd: &Path, args: &[&str]) -> Result<Output> {
  let prdoc_bin = env!("CARGO_BIN_EXE_prdoc");

  Command::new(prdoc_bin)
    .current_dir(cwd)
    .args(args)
    .output()
    .context("Failed to run prdoc")
}
