//! Project context: the root directory a registration session belongs to,
//! plus the exclusion policy applied by the configuration store.
//!
//! The context is owned by the host and handed to the engine; the engine
//! never resolves it from ambient state.

use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

/// The project a build-file configuration belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
  /// Project root directory (normalized).
  root: PathBuf,
  /// Directories whose contents are excluded from registration.
  excluded: Vec<PathBuf>,
}

impl ProjectContext {
  /// Create a context rooted at the given directory.
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self {
      root: normalize(&root.into()),
      excluded: Vec::new(),
    }
  }

  /// Resolve a project context from an explicit directory, or fall back to
  /// the current directory.
  ///
  /// Returns `None` when no project can be resolved: the explicit directory
  /// does not exist, or the current directory is unavailable.
  pub fn discover(dir: Option<&Path>) -> Option<Self> {
    let root = match dir {
      Some(dir) if dir.is_dir() => dir.to_path_buf(),
      Some(_) => return None,
      None => env::current_dir().ok()?,
    };

    debug!(root = %root.display(), "resolved project context");
    Some(Self::new(root))
  }

  /// Extend the exclusion policy with additional directories.
  pub fn with_excluded(mut self, dirs: impl IntoIterator<Item = PathBuf>) -> Self {
    self.excluded.extend(dirs.into_iter().map(|d| normalize(&d)));
    self
  }

  /// The project root directory.
  pub fn root(&self) -> &Path {
    &self.root
  }

  /// Directories excluded from registration.
  pub fn excluded(&self) -> &[PathBuf] {
    &self.excluded
  }

  /// Whether the given path falls under an excluded directory.
  pub fn is_excluded(&self, path: &Path) -> bool {
    let path = normalize(path);
    self.excluded.iter().any(|dir| path.starts_with(dir))
  }
}

/// Normalize a path to a stable identity.
///
/// Canonicalizes when the path exists; otherwise the path is kept as given
/// (a handle to a missing file still needs an identity).
pub(crate) fn normalize(path: &Path) -> PathBuf {
  dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
