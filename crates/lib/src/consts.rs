//! Fixed identifiers shared between the engine and its hosts.

/// Root element tag that marks a markup document as a build definition.
pub const BUILD_FILE_ROOT_TAG: &str = "project";

/// Identifier of the panel listing registered build files.
pub const BUILD_PANEL_ID: &str = "build-files";

/// Title of the aggregated warning shown when registrations are rejected.
pub const ADD_FAILURE_TITLE: &str = "Cannot Add Build File";
