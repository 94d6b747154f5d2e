//! Error types for prdoc with contextual messages and exit codes
//!
//! This module provides a unified error type that categorizes errors and provides
//! contextual help messages to users. Schema violations are always attributable
//! to a single source record.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for prdoc
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (invalid args, missing files, unknown labels)
  User = 1,
  /// System error (I/O, cargo metadata)
  System = 2,
  /// Validation failure (schema violations in strict mode)
  Validation = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for prdoc
#[derive(Debug)]
pub enum PrdocError {
  /// A record failed schema validation, attributed to its source file
  Schema { path: PathBuf, error: SchemaError },

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl PrdocError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    PrdocError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Create an error with help text
  pub fn with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    PrdocError::Message {
      message: msg.into(),
      context: None,
      help: Some(help.into()),
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      PrdocError::Message { message, context, help } => PrdocError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      PrdocError::Schema { .. } => ExitCode::Validation,
      PrdocError::Io(_) => ExitCode::System,
      PrdocError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      PrdocError::Schema { error, .. } => error.help_message(),
      PrdocError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for PrdocError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PrdocError::Schema { path, error } => {
        write!(f, "{}: {}", path.display(), error)
      }
      PrdocError::Io(e) => write!(f, "I/O error: {}", e),
      PrdocError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for PrdocError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      PrdocError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for PrdocError {
  fn from(err: io::Error) -> Self {
    PrdocError::Io(err)
  }
}

impl From<String> for PrdocError {
  fn from(msg: String) -> Self {
    PrdocError::message(msg)
  }
}

impl From<&str> for PrdocError {
  fn from(msg: &str) -> Self {
    PrdocError::message(msg)
  }
}

impl From<serde_json::Error> for PrdocError {
  fn from(err: serde_json::Error) -> Self {
    PrdocError::message(format!("JSON error: {}", err))
  }
}

impl From<cargo_metadata::Error> for PrdocError {
  fn from(err: cargo_metadata::Error) -> Self {
    PrdocError::message(format!("Cargo metadata error: {}", err))
  }
}

impl From<toml_edit::TomlError> for PrdocError {
  fn from(err: toml_edit::TomlError) -> Self {
    PrdocError::message(format!("TOML parse error: {}", err))
  }
}

impl From<semver::Error> for PrdocError {
  fn from(err: semver::Error) -> Self {
    PrdocError::message(format!("Version parse error: {}", err))
  }
}

impl From<anyhow::Error> for PrdocError {
  fn from(err: anyhow::Error) -> Self {
    PrdocError::message(err.to_string())
  }
}

/// Schema violations for a single change record
///
/// Every variant maps to exactly one authoring mistake, so the message can
/// point at the offending field or value rather than a serde trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
  /// The text is not well-formed YAML (or a field has the wrong shape)
  Malformed { message: String },

  /// A required top-level or entry field is absent
  MissingField { field: String },

  /// A required field is present but empty
  EmptyField { field: String },

  /// Audience label outside the controlled vocabulary
  UnknownAudience { label: String },

  /// Bump value outside {patch, minor, major}
  InvalidBump { value: String },

  /// The same crate named twice within one record
  DuplicateCrate { name: String },
}

impl SchemaError {
  fn help_message(&self) -> Option<String> {
    match self {
      SchemaError::UnknownAudience { .. } => Some(format!(
        "Valid audiences: {}",
        crate::prdoc::schema::Audience::ALL
          .iter()
          .map(|a| a.as_label())
          .collect::<Vec<_>>()
          .join(", ")
      )),
      SchemaError::InvalidBump { .. } => Some("Valid bump levels: patch, minor, major".to_string()),
      SchemaError::DuplicateCrate { name } => Some(format!(
        "Merge the duplicate entries for '{}' into one, keeping the higher bump",
        name
      )),
      _ => None,
    }
  }
}

impl fmt::Display for SchemaError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SchemaError::Malformed { message } => {
        write!(f, "malformed record: {}", message)
      }
      SchemaError::MissingField { field } => {
        write!(f, "missing required field: {}", field)
      }
      SchemaError::EmptyField { field } => {
        write!(f, "field must not be empty: {}", field)
      }
      SchemaError::UnknownAudience { label } => {
        write!(f, "unknown audience: '{}'", label)
      }
      SchemaError::InvalidBump { value } => {
        write!(f, "invalid bump level: '{}'", value)
      }
      SchemaError::DuplicateCrate { name } => {
        write!(f, "crate listed more than once: '{}'", name)
      }
    }
  }
}

impl std::error::Error for SchemaError {}

/// Result type alias for prdoc
pub type PrdocResult<T> = Result<T, PrdocError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> PrdocResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> PrdocResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<PrdocError>,
{
  fn context(self, ctx: impl Into<String>) -> PrdocResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> PrdocResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &PrdocError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
