//! PRDoc record schema: typed model plus parse-time validation
//!
//! A record is parsed in two stages: serde_yaml into a permissive raw shape,
//! then field-by-field validation into the typed model. This keeps schema
//! violations precise (which field, which value) instead of surfacing a
//! serde trace for everything.

use crate::core::error::SchemaError;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

/// Semantic-version increment level, ordered so that `max` picks the
/// strongest obligation (major > minor > patch)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BumpLevel {
  /// Patch version bump (bug fixes)
  Patch,
  /// Minor version bump (new features)
  Minor,
  /// Major version bump (breaking changes)
  Major,
}

impl BumpLevel {
  /// Parse a bump level from its record spelling
  pub fn from_value(s: &str) -> Option<Self> {
    match s {
      "patch" => Some(BumpLevel::Patch),
      "minor" => Some(BumpLevel::Minor),
      "major" => Some(BumpLevel::Major),
      _ => None,
    }
  }

  /// Record spelling of this bump level
  pub fn as_str(&self) -> &'static str {
    match self {
      BumpLevel::Patch => "patch",
      BumpLevel::Minor => "minor",
      BumpLevel::Major => "major",
    }
  }

  /// Apply bump to a semver version
  pub fn apply(&self, version: &semver::Version) -> semver::Version {
    match self {
      BumpLevel::Major => semver::Version::new(version.major + 1, 0, 0),
      BumpLevel::Minor => semver::Version::new(version.major, version.minor + 1, 0),
      BumpLevel::Patch => semver::Version::new(version.major, version.minor, version.patch + 1),
    }
  }
}

impl fmt::Display for BumpLevel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Controlled vocabulary of documentation audiences
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Audience {
  /// Developers building on top of the node
  #[serde(rename = "Node Dev")]
  NodeDev,
  /// Developers building runtimes
  #[serde(rename = "Runtime Dev")]
  RuntimeDev,
  /// People operating node infrastructure
  #[serde(rename = "Node Operator")]
  NodeOperator,
  /// End users of a deployed runtime
  #[serde(rename = "Runtime User")]
  RuntimeUser,
  /// Placeholder for records still awaiting triage
  #[serde(rename = "Todo")]
  Todo,
}

impl Audience {
  /// All known audiences, in display order
  pub const ALL: [Audience; 5] = [
    Audience::NodeDev,
    Audience::RuntimeDev,
    Audience::NodeOperator,
    Audience::RuntimeUser,
    Audience::Todo,
  ];

  /// Parse an audience from its record spelling
  pub fn from_label(label: &str) -> Option<Self> {
    match label {
      "Node Dev" => Some(Audience::NodeDev),
      "Runtime Dev" => Some(Audience::RuntimeDev),
      "Node Operator" => Some(Audience::NodeOperator),
      "Runtime User" => Some(Audience::RuntimeUser),
      "Todo" => Some(Audience::Todo),
      _ => None,
    }
  }

  /// Record spelling of this audience
  pub fn as_label(&self) -> &'static str {
    match self {
      Audience::NodeDev => "Node Dev",
      Audience::RuntimeDev => "Runtime Dev",
      Audience::NodeOperator => "Node Operator",
      Audience::RuntimeUser => "Runtime User",
      Audience::Todo => "Todo",
    }
  }
}

impl fmt::Display for Audience {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_label())
  }
}

/// One documentation entry addressed to one or more audiences
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocEntry {
  /// Scalar audiences serialize back as a scalar, matching upstream records
  #[serde(serialize_with = "serialize_audience")]
  pub audience: Vec<Audience>,
  pub description: String,
}

impl DocEntry {
  /// Check whether this entry addresses the given audience
  pub fn addresses(&self, audience: Audience) -> bool {
    self.audience.contains(&audience)
  }
}

/// A semver obligation for one affected crate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrateBump {
  pub name: String,
  pub bump: BumpLevel,
}

/// A single PRDoc change record
///
/// Immutable once authored: the store only ever reads these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeRecord {
  pub title: String,
  pub doc: Vec<DocEntry>,
  pub crates: Vec<CrateBump>,
}

impl ChangeRecord {
  /// Parse and validate a record from its YAML text
  pub fn parse(text: &str) -> Result<Self, SchemaError> {
    let raw: RawRecord = serde_yaml::from_str(text).map_err(|e| SchemaError::Malformed {
      message: e.to_string(),
    })?;
    raw.validate()
  }

  /// Serialize back to YAML
  pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(self)
  }
}

fn serialize_audience<S>(audience: &[Audience], serializer: S) -> Result<S::Ok, S::Error>
where
  S: Serializer,
{
  if audience.len() == 1 {
    audience[0].serialize(serializer)
  } else {
    audience.serialize(serializer)
  }
}

// Raw shapes: everything optional, audiences and bumps as plain strings.
// Unknown extra fields are tolerated; upstream records have drifted over
// schema versions and strictness here would reject valid history.

#[derive(Deserialize)]
struct RawRecord {
  #[serde(default)]
  title: Option<String>,
  #[serde(default)]
  doc: Option<Vec<RawDocEntry>>,
  #[serde(default)]
  crates: Option<Vec<RawCrateBump>>,
}

#[derive(Deserialize)]
struct RawDocEntry {
  #[serde(default)]
  audience: Option<OneOrMany>,
  #[serde(default)]
  description: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
  One(String),
  Many(Vec<String>),
}

#[derive(Deserialize)]
struct RawCrateBump {
  #[serde(default)]
  name: Option<String>,
  #[serde(default)]
  bump: Option<String>,
}

impl RawRecord {
  fn validate(self) -> Result<ChangeRecord, SchemaError> {
    let title = require_text(self.title, "title")?;

    let raw_doc = self.doc.ok_or_else(|| SchemaError::MissingField {
      field: "doc".to_string(),
    })?;
    if raw_doc.is_empty() {
      return Err(SchemaError::EmptyField {
        field: "doc".to_string(),
      });
    }

    let mut doc = Vec::with_capacity(raw_doc.len());
    for (i, entry) in raw_doc.into_iter().enumerate() {
      doc.push(entry.validate(i)?);
    }

    let raw_crates = self.crates.ok_or_else(|| SchemaError::MissingField {
      field: "crates".to_string(),
    })?;
    if raw_crates.is_empty() {
      return Err(SchemaError::EmptyField {
        field: "crates".to_string(),
      });
    }

    let mut seen = HashSet::new();
    let mut crates = Vec::with_capacity(raw_crates.len());
    for (i, entry) in raw_crates.into_iter().enumerate() {
      let bump = entry.validate(i)?;
      if !seen.insert(bump.name.clone()) {
        return Err(SchemaError::DuplicateCrate { name: bump.name });
      }
      crates.push(bump);
    }

    Ok(ChangeRecord { title, doc, crates })
  }
}

impl RawDocEntry {
  fn validate(self, index: usize) -> Result<DocEntry, SchemaError> {
    let labels = match self.audience {
      None => {
        return Err(SchemaError::MissingField {
          field: format!("doc[{}].audience", index),
        });
      }
      Some(OneOrMany::One(label)) => vec![label],
      Some(OneOrMany::Many(labels)) => labels,
    };

    if labels.is_empty() {
      return Err(SchemaError::EmptyField {
        field: format!("doc[{}].audience", index),
      });
    }

    let mut audience = Vec::with_capacity(labels.len());
    for label in labels {
      let parsed = Audience::from_label(&label).ok_or(SchemaError::UnknownAudience { label })?;
      audience.push(parsed);
    }

    let description = require_text(self.description, &format!("doc[{}].description", index))?;

    Ok(DocEntry { audience, description })
  }
}

impl RawCrateBump {
  fn validate(self, index: usize) -> Result<CrateBump, SchemaError> {
    let name = require_text(self.name, &format!("crates[{}].name", index))?;

    let bump_value = self.bump.ok_or_else(|| SchemaError::MissingField {
      field: format!("crates[{}].bump", index),
    })?;
    let bump = BumpLevel::from_value(&bump_value).ok_or(SchemaError::InvalidBump { value: bump_value })?;

    Ok(CrateBump { name, bump })
  }
}

fn require_text(value: Option<String>, field: &str) -> Result<String, SchemaError> {
  let value = value.ok_or_else(|| SchemaError::MissingField {
    field: field.to_string(),
  })?;
  if value.trim().is_empty() {
    return Err(SchemaError::EmptyField {
      field: field.to_string(),
    });
  }
  Ok(value)
}
