//! Implementation of the `breg add` command.
//!
//! This is the registration action end to end: the file arguments play the
//! role of the host selection, rejected files surface as one aggregated
//! warning on stderr, and panel activation is rendered as the
//! registered-files listing.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use buildreg_lib::config::BuildConfig;
use buildreg_lib::project::ProjectContext;
use buildreg_lib::registrar;
use buildreg_lib::selection::SelectionContext;

use crate::output::{self, OutputFormat, print_info, print_stat};
use crate::surface::{ConsoleSurface, PanelFlag, QuietSurface};

/// Execute the add command.
///
/// Registers the given files with the project configuration. An empty file
/// list is a valid no-op. Exits non-zero only when every candidate was
/// rejected.
pub fn cmd_add(files: &[PathBuf], project_dir: Option<&Path>, exclude: Vec<PathBuf>, format: OutputFormat) -> Result<()> {
  let project = ProjectContext::discover(project_dir)
    .context("failed to resolve project directory")?
    .with_excluded(exclude);
  let mut config = BuildConfig::new(project);

  debug!(files = files.len(), project = %config.project().root().display(), "running add");

  let selection = SelectionContext::from_files(files.to_vec());
  let mut panel = PanelFlag::default();

  let outcome = if format.is_json() {
    registrar::execute(&mut config, &selection, &mut QuietSurface, &mut panel)
  } else {
    registrar::execute(&mut config, &selection, &mut ConsoleSurface, &mut panel)
  };

  if selection.candidates().is_empty() {
    // Empty selection: no store calls, no output, no activation.
    return Ok(());
  }

  if format.is_json() {
    let entries: Vec<_> = config.entries().collect();
    output::print_json(&serde_json::json!({
      "added": outcome.added,
      "errors": outcome.errors,
      "panel_activated": panel.activated().is_some(),
      "entries": entries,
    }))?;
  } else {
    println!();
    print_stat("Registered", &outcome.added.to_string());
    print_stat("Rejected", &outcome.errors.len().to_string());

    if panel.activated().is_some() {
      println!();
      println!("Build Files:");
      for entry in config.entries() {
        print_info(&entry.label());
      }
    }
  }

  if outcome.added == 0 && !outcome.errors.is_empty() {
    std::process::exit(1);
  }

  Ok(())
}
