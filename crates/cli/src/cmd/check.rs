//! Implementation of the `breg check` command.
//!
//! Evaluates the enablement predicate for a single file and mirrors the
//! binary enabled/disabled verdict in the exit code.

use std::path::{Path, PathBuf};

use anyhow::Result;

use buildreg_lib::config::BuildConfig;
use buildreg_lib::eligibility;
use buildreg_lib::project::ProjectContext;
use buildreg_lib::selection::SelectionContext;

use crate::output::{self, OutputFormat, print_error, print_success};

/// Execute the check command.
///
/// An unresolvable project is a verdict (`no project context`), not a
/// command failure; only the eligible case exits zero.
pub fn cmd_check(file: &Path, project_dir: Option<&Path>, exclude: Vec<PathBuf>, format: OutputFormat) -> Result<()> {
  let config = ProjectContext::discover(project_dir).map(|p| BuildConfig::new(p.with_excluded(exclude)));
  let selection = SelectionContext::new().with_active(file);

  let verdict = eligibility::check_eligibility(config.as_ref(), &selection);

  if format.is_json() {
    output::print_json(&serde_json::json!({
      "file": file,
      "eligible": verdict.is_ok(),
      "reason": verdict.err(),
    }))?;
  } else {
    match &verdict {
      Ok(()) => print_success(&format!("{} is an eligible build definition", file.display())),
      Err(reason) => print_error(&format!("{} is not eligible: {}", file.display(), reason)),
    }
  }

  if verdict.is_err() {
    std::process::exit(1);
  }

  Ok(())
}
