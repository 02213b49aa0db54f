//! Candidate document access.
//!
//! The engine never walks markup trees itself; this module is the one seam
//! through which candidate files are read and inspected. Only what the
//! registration contract needs is extracted: the root element's tag name and,
//! for panel listings, its `name` attribute.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Errors that can occur while reading a candidate document.
#[derive(Debug, Error)]
pub enum DocumentError {
  /// Failed to read the file from disk.
  #[error("failed to read '{path}': {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// The file is not well-formed markup.
  #[error("failed to parse '{path}' as markup: {source}")]
  Parse {
    path: PathBuf,
    #[source]
    source: roxmltree::Error,
  },
}

/// A parsed view of a candidate build-definition document.
///
/// A document can be well-formed yet have no root element (e.g. comments
/// only); that case parses successfully and reports `root_name() == None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildDocument {
  root_tag: Option<String>,
  display_name: Option<String>,
}

impl BuildDocument {
  /// Read and parse the document at `path`.
  pub fn load(path: &Path) -> Result<Self, DocumentError> {
    let text = fs::read_to_string(path).map_err(|e| DocumentError::Read {
      path: path.to_path_buf(),
      source: e,
    })?;
    Self::parse(&text, path)
  }

  /// Parse document text, with `path` used for error reporting only.
  pub fn parse(text: &str, path: &Path) -> Result<Self, DocumentError> {
    match roxmltree::Document::parse(text) {
      Ok(doc) => {
        let root = doc.root_element();
        let parsed = Self {
          root_tag: Some(root.tag_name().name().to_string()),
          display_name: root.attribute("name").map(str::to_string),
        };
        debug!(path = %path.display(), root = parsed.root_name().unwrap_or("-"), "parsed candidate document");
        Ok(parsed)
      }
      Err(roxmltree::Error::NoRootNode) => Ok(Self {
        root_tag: None,
        display_name: None,
      }),
      Err(e) => Err(DocumentError::Parse {
        path: path.to_path_buf(),
        source: e,
      }),
    }
  }

  /// Tag name of the root element, if the document has one.
  pub fn root_name(&self) -> Option<&str> {
    self.root_tag.as_deref()
  }

  /// The root element's `name` attribute, used as a display name.
  pub fn display_name(&self) -> Option<&str> {
    self.display_name.as_deref()
  }
}
