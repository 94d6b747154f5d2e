//! Changelog generation from validated change records
//!
//! Groups doc entries by audience and renders a deterministic, versioned
//! changelog in Markdown or JSON.

use crate::prdoc::schema::{Audience, ChangeRecord};
use std::collections::BTreeMap;

/// Changelog output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangelogFormat {
  /// Markdown format (default)
  Markdown,
  /// JSON format for programmatic use
  Json,
}

/// One rendered changelog line: the record's title plus the entry text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
  pub title: String,
  pub description: String,
}

/// Generated changelog
#[derive(Debug, Clone)]
pub struct Changelog {
  /// Version for this changelog
  pub version: String,
  /// Date of the release (ISO 8601)
  pub date: String,
  /// Doc entries grouped by audience
  pub entries_by_audience: BTreeMap<Audience, Vec<ChangelogEntry>>,
  /// Number of records folded in
  pub total_records: usize,
}

impl Changelog {
  /// Create a new changelog
  pub fn new(version: String, date: String) -> Self {
    Self {
      version,
      date,
      entries_by_audience: BTreeMap::new(),
      total_records: 0,
    }
  }

  /// Fold a record into the changelog
  ///
  /// An entry addressed to several audiences appears under each of them.
  pub fn add_record(&mut self, record: &ChangeRecord) {
    self.total_records += 1;
    for entry in &record.doc {
      for audience in &entry.audience {
        self.entries_by_audience.entry(*audience).or_default().push(ChangelogEntry {
          title: record.title.clone(),
          description: entry.description.clone(),
        });
      }
    }
  }

  /// Render as markdown
  pub fn to_markdown(&self) -> String {
    let mut output = String::new();

    // Header
    output.push_str(&format!("## [{}] - {}\n\n", self.version, self.date));

    // Audience sections in display order
    for audience in &Audience::ALL {
      if let Some(entries) = self.entries_by_audience.get(audience) {
        if entries.is_empty() {
          continue;
        }

        output.push_str(&format!("### {}\n\n", audience.as_label()));

        for entry in entries {
          output.push_str(&format!("- **{}**\n", entry.title));
          for line in entry.description.trim_end().lines() {
            if line.trim().is_empty() {
              output.push('\n');
            } else {
              output.push_str(&format!("  {}\n", line));
            }
          }
        }

        output.push('\n');
      }
    }

    output
  }

  /// Render as JSON
  pub fn to_json(&self) -> Result<String, serde_json::Error> {
    use serde::Serialize;

    #[derive(Serialize)]
    struct ChangelogJson<'a> {
      version: &'a str,
      date: &'a str,
      sections: Vec<Section<'a>>,
      total_records: usize,
    }

    #[derive(Serialize)]
    struct Section<'a> {
      audience: &'static str,
      entries: Vec<EntryJson<'a>>,
    }

    #[derive(Serialize)]
    struct EntryJson<'a> {
      title: &'a str,
      description: &'a str,
    }

    let sections: Vec<Section> = self
      .entries_by_audience
      .iter()
      .map(|(audience, entries)| Section {
        audience: audience.as_label(),
        entries: entries
          .iter()
          .map(|e| EntryJson {
            title: &e.title,
            description: &e.description,
          })
          .collect(),
      })
      .collect();

    let json_output = ChangelogJson {
      version: &self.version,
      date: &self.date,
      sections,
      total_records: self.total_records,
    };

    serde_json::to_string_pretty(&json_output)
  }

  /// Render in the specified format
  pub fn render(&self, format: ChangelogFormat) -> Result<String, String> {
    match format {
      ChangelogFormat::Markdown => Ok(self.to_markdown()),
      ChangelogFormat::Json => self.to_json().map_err(|e| e.to_string()),
    }
  }
}
