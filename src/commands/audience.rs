//! Audience command implementation
//!
//! Lists doc entries addressed to a given audience, in record order then
//! entry order within a record.

use crate::commands::check::scan_with_progress;
use crate::core::error::{PrdocError, PrdocResult};
use crate::prdoc::aggregate::by_audience;
use crate::prdoc::schema::Audience;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct AudienceEntry<'a> {
  source: String,
  title: &'a str,
  description: &'a str,
}

/// Run the audience command
pub fn run_audience(label: &str, dir: &Path, json: bool) -> PrdocResult<()> {
  let audience = Audience::from_label(label).ok_or_else(|| {
    PrdocError::with_help(
      format!("Unknown audience: '{}'", label),
      format!(
        "Valid audiences: {}",
        Audience::ALL.iter().map(|a| a.as_label()).collect::<Vec<_>>().join(", ")
      ),
    )
  })?;

  let scan = scan_with_progress(dir, json)?;

  // Flatten per-record so the output can cite the source file alongside
  // the entry; ordering matches by_audience
  let mut entries = Vec::new();
  for sourced in &scan.records {
    for entry in by_audience(std::iter::once(&sourced.record), audience) {
      entries.push(AudienceEntry {
        source: sourced.path.display().to_string(),
        title: &sourced.record.title,
        description: &entry.description,
      });
    }
  }

  if json {
    println!("{}", serde_json::to_string_pretty(&entries)?);
  } else {
    print_entries(audience, &entries);
  }

  Ok(())
}

fn print_entries(audience: Audience, entries: &[AudienceEntry<'_>]) {
  if entries.is_empty() {
    println!("⚠️  No entries for audience '{}'", audience);
    return;
  }

  println!("📚 {} entr(ies) for '{}'", entries.len(), audience);
  println!();

  for entry in entries {
    println!("📄 {} ({})", entry.title, entry.source);
    for line in entry.description.trim_end().lines() {
      println!("   {}", line);
    }
    println!();
  }
}
