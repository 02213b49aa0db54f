//! Batch registration of candidate build files.
//!
//! [`register_all`] attempts every candidate against the store and collects
//! rejections as display strings; [`execute`] is the full action a host
//! invokes on a user gesture: select, register, warn once, activate the
//! panel. Rejections never abort the batch and never escape as faults.

use serde::Serialize;
use tracing::{debug, info};

use crate::config::{BuildConfig, BuildFile};
use crate::consts;
use crate::host::{PanelActivator, PresentationSurface};
use crate::selection::SelectionContext;

/// Result of a registration batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegistrationOutcome {
  /// Number of files registered by this batch.
  pub added: usize,
  /// One display message per rejected file, in iteration order.
  pub errors: Vec<String>,
}

impl RegistrationOutcome {
  /// Whether every candidate was registered.
  pub fn is_clean(&self) -> bool {
    self.errors.is_empty()
  }
}

/// Attempt to register every candidate, collecting per-file rejections.
///
/// A rejection with a reason contributes the reason verbatim; a rejection
/// without one (policy exclusion) contributes the fixed template naming the
/// file's location. Messages are joined with newlines for display, not
/// parsed.
pub fn register_all(config: &mut BuildConfig, files: impl IntoIterator<Item = BuildFile>) -> RegistrationOutcome {
  let mut outcome = RegistrationOutcome::default();

  for file in files {
    match config.add(file) {
      Ok(()) => outcome.added += 1,
      Err(rejection) => {
        let message = match rejection.reason {
          Some(reason) if !reason.is_empty() => reason,
          _ => format!(
            "cannot add build files from excluded directories: {}",
            rejection.file.presentable()
          ),
        };
        outcome.errors.push(message);
      }
    }
  }

  info!(added = outcome.added, rejected = outcome.errors.len(), "registration batch finished");
  outcome
}

/// Run the registration action for the given selection.
///
/// An empty selection is a no-op: the store is never touched and neither
/// side effect fires. Otherwise all candidates are registered; rejections
/// surface as one aggregated warning, and the build-file panel is activated
/// if at least one file was added. Partial success produces both effects.
pub fn execute(
  config: &mut BuildConfig,
  selection: &SelectionContext,
  surface: &mut dyn PresentationSurface,
  panels: &mut dyn PanelActivator,
) -> RegistrationOutcome {
  let candidates = selection.candidates();
  if candidates.is_empty() {
    debug!("empty selection, nothing to register");
    return RegistrationOutcome::default();
  }

  let outcome = register_all(config, candidates);

  if !outcome.errors.is_empty() {
    surface.show_warning(&outcome.errors.join("\n"), consts::ADD_FAILURE_TITLE);
  }
  if outcome.added > 0 {
    panels.activate(consts::BUILD_PANEL_ID);
  }

  outcome
}
