//! Implementation of the `breg info` command.

use std::path::Path;

use anyhow::Result;

use buildreg_lib::project::ProjectContext;

use crate::output::{print_info, print_stat};

/// Print tool version and the resolved project context.
pub fn cmd_info(project_dir: Option<&Path>) -> Result<()> {
  print_info(&format!("buildreg v{}", env!("CARGO_PKG_VERSION")));
  println!();

  match ProjectContext::discover(project_dir) {
    Some(project) => {
      print_stat("Project", &project.root().display().to_string());
      print_stat("Excluded dirs", &project.excluded().len().to_string());
    }
    None => {
      print_stat("Project", "none resolved");
    }
  }

  Ok(())
}
