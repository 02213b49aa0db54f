//! Types for the build-file configuration store.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::project;

/// Identity-comparable handle to a candidate build-definition document.
///
/// Identity is the normalized absolute path; two handles naming the same file
/// through different spellings compare equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BuildFile {
  path: PathBuf,
}

impl BuildFile {
  /// Create a handle from a path, normalizing it to its identity form.
  pub fn from_path(path: impl AsRef<Path>) -> Self {
    Self {
      path: project::normalize(path.as_ref()),
    }
  }

  /// The identity path of the file.
  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Human-readable location string for messages and listings.
  pub fn presentable(&self) -> String {
    self.path.display().to_string()
  }
}

/// A build file registered in the project configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildFileEntry {
  /// Identity path of the registered file.
  pub path: PathBuf,
  /// Display name taken from the definition's `name` attribute, when present.
  pub name: Option<String>,
}

impl BuildFileEntry {
  /// Label shown in panel listings: the display name, or the location.
  pub fn label(&self) -> String {
    match &self.name {
      Some(name) => name.clone(),
      None => self.path.display().to_string(),
    }
  }
}

/// Rejection returned by [`BuildConfig::add`](super::BuildConfig::add) for
/// files the store refuses to register.
///
/// This is the only error kind modeled at the registration boundary; it is
/// returned by value and recovered by the caller, never fatal. An absent
/// reason means "excluded by policy" and callers substitute the fixed
/// excluded-directories message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("build file not eligible: {}", .file.presentable())]
pub struct NotEligible {
  /// Human-readable rejection reason, used verbatim when present.
  pub reason: Option<String>,
  /// The offending file.
  pub file: BuildFile,
}
