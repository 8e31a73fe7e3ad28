//! Domain models for selected files.

use serde::{Deserialize, Serialize};

/// Metadata handle for a file selected by the user.
///
/// The handle carries only what the host runtime reports about the file; the
/// content itself stays with the host and is never read by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHandle {
    pub name: String,
    /// MIME type as reported by the host; empty when the host could not
    /// determine one.
    pub mime_type: String,
    pub size: u64,
}

impl FileHandle {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
        }
    }
}

/// Identifies which entry (or entries) a removal targets.
///
/// `Name` removes every entry with that exact name, not just the first;
/// `Index` removes a single position and ignores out-of-range values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSelector {
    Index(usize),
    Name(String),
}

impl From<usize> for FileSelector {
    fn from(index: usize) -> Self {
        FileSelector::Index(index)
    }
}

impl From<&str> for FileSelector {
    fn from(name: &str) -> Self {
        FileSelector::Name(name.to_owned())
    }
}

impl From<String> for FileSelector {
    fn from(name: String) -> Self {
        FileSelector::Name(name)
    }
}
