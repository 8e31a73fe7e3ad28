//! The file selection controller and its derived views.

use crate::app::format::format_bytes_with;
use crate::domain::errors::UsageError;
use crate::domain::model::{FileHandle, FileSelector};
use crate::infra::config::ControllerConfig;
use crate::infra::events::FileEvent;

/// Tracks the active file selection and keeps its derived views consistent.
///
/// The derived views (`file_names`, `file_types`, the size totals) are
/// recomputed before every mutating call returns, so any read observes a
/// state where they agree with `files`. Mutations take `&mut self`; a
/// controller belongs to exactly one owning context.
#[derive(Debug, Clone)]
pub struct FileSetController {
    config: ControllerConfig,
    files: Vec<FileHandle>,
    file_names: Vec<String>,
    file_types: Vec<String>,
    total_size_bytes: u64,
    total_size_human: String,
}

impl FileSetController {
    /// Create an empty controller with default formatting precision.
    pub fn new() -> Self {
        Self::with_config(ControllerConfig::default())
    }

    /// Create an empty controller with explicit configuration.
    pub fn with_config(config: ControllerConfig) -> Self {
        let mut controller = Self {
            config,
            files: Vec::new(),
            file_names: Vec::new(),
            file_types: Vec::new(),
            total_size_bytes: 0,
            total_size_human: String::new(),
        };
        controller.recompute();
        controller
    }

    /// Returns the number of selected files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns whether the selection is empty.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Access the current selection in insertion order.
    pub fn files(&self) -> &[FileHandle] {
        &self.files
    }

    /// File names, index-aligned with [`files`](Self::files).
    pub fn file_names(&self) -> &[String] {
        &self.file_names
    }

    /// MIME types, index-aligned with [`files`](Self::files).
    pub fn file_types(&self) -> &[String] {
        &self.file_types
    }

    /// Sum of the selected files' sizes in bytes.
    pub fn total_size_bytes(&self) -> u64 {
        self.total_size_bytes
    }

    /// The size total rendered for display, e.g. `"1.5 KB"`.
    pub fn total_size_human(&self) -> &str {
        &self.total_size_human
    }

    /// Replace the selection with the file list carried by `event`.
    ///
    /// An event carrying no file list is reported on the warn channel and
    /// leaves the selection unchanged.
    pub fn replace_files(&mut self, event: &FileEvent) {
        let Some(extracted) = event.file_list() else {
            tracing::warn!(error = %UsageError::UnrecognizedSource, "replace_files ignored");
            return;
        };
        self.files = extracted.to_vec();
        self.recompute();
    }

    /// Append the file list carried by `event` to the end of the selection.
    ///
    /// Same extraction and error behavior as [`replace_files`](Self::replace_files).
    pub fn append_files(&mut self, event: &FileEvent) {
        let Some(extracted) = event.file_list() else {
            tracing::warn!(error = %UsageError::UnrecognizedSource, "append_files ignored");
            return;
        };
        self.files.extend_from_slice(extracted);
        self.recompute();
    }

    /// Remove entries from the selection.
    ///
    /// A name selector removes every entry with that exact name. An index
    /// selector removes one position; out-of-range indices are a no-op.
    pub fn remove_file(&mut self, selector: impl Into<FileSelector>) {
        match selector.into() {
            FileSelector::Name(name) => {
                self.files.retain(|file| file.name != name);
            }
            FileSelector::Index(index) => {
                if index >= self.files.len() {
                    return;
                }
                self.files.remove(index);
            }
        }
        self.recompute();
    }

    /// Drop the entire selection.
    pub fn clear_all_files(&mut self) {
        self.files.clear();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.file_names = self.files.iter().map(|file| file.name.clone()).collect();
        self.file_types = self
            .files
            .iter()
            .map(|file| file.mime_type.clone())
            .collect();
        self.total_size_bytes = self.files.iter().map(|file| file.size).sum();
        self.total_size_human =
            format_bytes_with(self.total_size_bytes as f64, self.config.decimals);
    }
}

impl Default for FileSetController {
    fn default() -> Self {
        Self::new()
    }
}
