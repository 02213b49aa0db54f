//! Terminal implementations of the engine's host seams.
//!
//! The warning dialog becomes an aggregated block on stderr; panel
//! activation is recorded and rendered by the command after the batch
//! completes, as the registered-files listing.

use buildreg_lib::host::{PanelActivator, PresentationSurface};

use crate::output::print_warning;

/// Shows warnings on stderr in the terminal's warning style.
pub struct ConsoleSurface;

impl PresentationSurface for ConsoleSurface {
  fn show_warning(&mut self, message: &str, title: &str) {
    print_warning(&format!("{}:", title));
    for line in message.lines() {
      print_warning(&format!("  {}", line));
    }
  }
}

/// Swallows warnings; used for JSON output, where the outcome already
/// carries every rejection message.
pub struct QuietSurface;

impl PresentationSurface for QuietSurface {
  fn show_warning(&mut self, _message: &str, _title: &str) {}
}

/// Records panel activation so the command can render the panel once the
/// registration borrow on the store has ended.
#[derive(Default)]
pub struct PanelFlag {
  activated: Option<String>,
}

impl PanelFlag {
  /// The activated panel id, if any activation was requested.
  pub fn activated(&self) -> Option<&str> {
    self.activated.as_deref()
  }
}

impl PanelActivator for PanelFlag {
  fn activate(&mut self, panel_id: &str) {
    self.activated = Some(panel_id.to_string());
  }
}
