//! Host integration seams.
//!
//! The engine renders no UI of its own. Hosts inject these collaborators into
//! [`registrar::execute`](crate::registrar::execute); the engine only decides
//! *when* a warning is shown or the panel is activated.

/// Receives user-facing warnings.
pub trait PresentationSurface {
  /// Show a single aggregated warning with the given title.
  fn show_warning(&mut self, message: &str, title: &str);
}

/// Activates host panels by identifier.
pub trait PanelActivator {
  /// Bring the identified panel to the foreground.
  fn activate(&mut self, panel_id: &str);
}
