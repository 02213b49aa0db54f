//! Selection context handed to the engine by the host.
//!
//! A selection carries zero or more multi-selected files plus an optional
//! single active file. Candidates for registration are the set union of
//! both, deduplicated by identity; enablement additionally requires that the
//! context designates exactly one file.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::config::BuildFile;

/// The files designated by the current host selection.
#[derive(Debug, Clone, Default)]
pub struct SelectionContext {
  files: Vec<PathBuf>,
  active_file: Option<PathBuf>,
}

impl SelectionContext {
  /// An empty selection.
  pub fn new() -> Self {
    Self::default()
  }

  /// A selection consisting of the given multi-selected files.
  pub fn from_files(files: Vec<PathBuf>) -> Self {
    Self {
      files,
      active_file: None,
    }
  }

  /// Set the active file.
  pub fn with_active(mut self, path: impl Into<PathBuf>) -> Self {
    self.active_file = Some(path.into());
    self
  }

  /// The multi-selected files, in selection order.
  pub fn files(&self) -> &[PathBuf] {
    &self.files
  }

  /// The active file, if any.
  pub fn active_file(&self) -> Option<&Path> {
    self.active_file.as_deref()
  }

  /// Union of the multi-selection and the active file, deduplicated by
  /// identity. Order is not significant; an empty result is valid.
  pub fn candidates(&self) -> BTreeSet<BuildFile> {
    let mut set: BTreeSet<BuildFile> = self.files.iter().map(BuildFile::from_path).collect();
    if let Some(active) = &self.active_file {
      set.insert(BuildFile::from_path(active));
    }
    set
  }

  /// The single file this context designates, if it designates exactly one.
  ///
  /// The active file qualifies only when the multi-selection names no other
  /// file; multi-selections never yield a single file.
  pub fn single_file(&self) -> Option<&Path> {
    let active = self.active_file.as_deref()?;
    let identity = BuildFile::from_path(active);
    if self.files.iter().any(|f| BuildFile::from_path(f) != identity) {
      return None;
    }
    Some(active)
  }
}
