//! Action enablement predicate.
//!
//! Hosts evaluate this on every refresh tick to decide whether the
//! registration action is offered. The predicate is pure and cheap; nothing
//! is cached between evaluations and enablement is strictly binary.

use serde::Serialize;
use thiserror::Error;

use crate::config::{BuildConfig, BuildFile};
use crate::consts;
use crate::document::BuildDocument;
use crate::selection::SelectionContext;

/// The first check that failed when a context was found ineligible.
///
/// Checks are evaluated short-circuit in the declared order; the first
/// failure decides the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ineligibility {
  /// No project context could be resolved.
  #[error("no project context")]
  NoProject,

  /// The context does not designate exactly one active file.
  #[error("no single active file")]
  NoSingleFile,

  /// The file is not well-formed markup.
  #[error("file is not a markup document")]
  NotMarkup,

  /// The document has no root element.
  #[error("document has no root element")]
  NoRootElement,

  /// The root element is not named `project`.
  #[error("root element is not '{}'", consts::BUILD_FILE_ROOT_TAG)]
  RootTagMismatch,

  /// The file is already registered with the project configuration.
  #[error("build file is already registered")]
  AlreadyRegistered,
}

/// Evaluate the enablement checks, naming the first failure.
///
/// `config` is `None` when the host could not resolve a project context;
/// the store always exists once a project does.
pub fn check_eligibility(config: Option<&BuildConfig>, selection: &SelectionContext) -> Result<(), Ineligibility> {
  let config = config.ok_or(Ineligibility::NoProject)?;
  let path = selection.single_file().ok_or(Ineligibility::NoSingleFile)?;

  let document = BuildDocument::load(path).map_err(|_| Ineligibility::NotMarkup)?;
  let root = document.root_name().ok_or(Ineligibility::NoRootElement)?;
  if root != consts::BUILD_FILE_ROOT_TAG {
    return Err(Ineligibility::RootTagMismatch);
  }

  if config.is_registered(&BuildFile::from_path(path)) {
    return Err(Ineligibility::AlreadyRegistered);
  }

  Ok(())
}

/// Whether the registration action should be enabled for this context.
pub fn is_eligible(config: Option<&BuildConfig>, selection: &SelectionContext) -> bool {
  check_eligibility(config, selection).is_ok()
}
