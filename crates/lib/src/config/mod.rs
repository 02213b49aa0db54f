//! Project-scoped build-file configuration store.
//!
//! The store is the registry of build-definition files recognized for one
//! project. Entries are keyed by file identity and live for the project
//! session; the store itself is owned by the hosting context and handed to
//! the engine explicitly.
//!
//! # Eligibility at the store boundary
//!
//! [`BuildConfig::add`] refuses, in order: files already registered, files
//! under an excluded directory (policy), and files that are not
//! `project`-rooted markup documents. Rejections are data
//! ([`NotEligible`]), never faults; one bad file must not abort a batch.

mod types;

pub use types::*;

use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::debug;

use crate::consts;
use crate::document::BuildDocument;
use crate::project::ProjectContext;

/// The project-scoped registry of recognized build-definition files.
#[derive(Debug, Clone)]
pub struct BuildConfig {
  project: ProjectContext,
  /// Registered entries, keyed by file identity for deterministic order.
  entries: BTreeMap<PathBuf, BuildFileEntry>,
}

impl BuildConfig {
  /// Create an empty configuration for the given project.
  pub fn new(project: ProjectContext) -> Self {
    Self {
      project,
      entries: BTreeMap::new(),
    }
  }

  /// The project this configuration belongs to.
  pub fn project(&self) -> &ProjectContext {
    &self.project
  }

  /// Whether the file is already a registered build-file entry.
  pub fn is_registered(&self, file: &BuildFile) -> bool {
    self.entries.contains_key(file.path())
  }

  /// Registered entries in identity order.
  pub fn entries(&self) -> impl Iterator<Item = &BuildFileEntry> {
    self.entries.values()
  }

  /// Number of registered entries.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Whether no build files are registered.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Attempt to register a candidate file.
  ///
  /// On success the entry is recorded and later visible via [`entries`]
  /// (`Self::entries`). Refusals return [`NotEligible`] by value:
  /// - already registered → reason names the file;
  /// - under an excluded directory → reason absent (callers substitute the
  ///   fixed excluded-directories message);
  /// - unreadable, unparseable, rootless, or rooted at a tag other than
  ///   `project` → reason names the file.
  pub fn add(&mut self, file: BuildFile) -> Result<(), NotEligible> {
    if self.is_registered(&file) {
      debug!(file = %file.presentable(), "rejected: already registered");
      return Err(NotEligible {
        reason: Some(format!("build file is already registered: {}", file.presentable())),
        file,
      });
    }

    if self.project.is_excluded(file.path()) {
      debug!(file = %file.presentable(), "rejected: excluded by policy");
      return Err(NotEligible { reason: None, file });
    }

    let document = match BuildDocument::load(file.path()) {
      Ok(document) => document,
      Err(e) => {
        debug!(file = %file.presentable(), error = %e, "rejected: unreadable candidate");
        return Err(not_a_build_file(file));
      }
    };

    match document.root_name() {
      Some(consts::BUILD_FILE_ROOT_TAG) => {}
      _ => {
        debug!(file = %file.presentable(), "rejected: not a build definition");
        return Err(not_a_build_file(file));
      }
    }

    let entry = BuildFileEntry {
      path: file.path().to_path_buf(),
      name: document.display_name().map(str::to_string),
    };
    debug!(file = %file.presentable(), name = entry.name.as_deref().unwrap_or("-"), "registered build file");
    self.entries.insert(file.path().to_path_buf(), entry);
    Ok(())
  }
}

fn not_a_build_file(file: BuildFile) -> NotEligible {
  NotEligible {
    reason: Some(format!("{} is not a build definition file", file.presentable())),
    file,
  }
}
