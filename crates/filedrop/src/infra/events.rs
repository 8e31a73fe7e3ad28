//! Value models of the host events the controller consumes.
//!
//! A host UI runtime hands the controller either a file-input change event or
//! a drag-and-drop event. [`FileEvent`] models both shapes: an input event
//! carries its file list directly, a drop event carries it inside a transfer
//! payload. Extraction checks the input list first and the payload second,
//! never reading both.

use crate::domain::model::FileHandle;

/// The transfer half of a drop event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropPayload {
    pub files: Vec<FileHandle>,
}

/// Event-like input from the host runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileEvent {
    input_files: Option<Vec<FileHandle>>,
    payload: Option<DropPayload>,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl FileEvent {
    /// An event shaped like a file-input change.
    pub fn from_input(files: Vec<FileHandle>) -> Self {
        Self {
            input_files: Some(files),
            ..Self::default()
        }
    }

    /// An event shaped like a drop, with the file list in its payload.
    pub fn from_drop(files: Vec<FileHandle>) -> Self {
        Self {
            payload: Some(DropPayload { files }),
            ..Self::default()
        }
    }

    /// An event carrying no file list at all, as a malformed caller would
    /// produce.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Extract the carried file list: input list first, drop payload second.
    ///
    /// Returns `None` when neither is present, including a drop event whose
    /// payload is missing.
    pub fn file_list(&self) -> Option<&[FileHandle]> {
        if let Some(files) = &self.input_files {
            return Some(files);
        }
        self.payload.as_ref().map(|payload| payload.files.as_slice())
    }

    /// Mark the host's default action as suppressed.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Stop the event from propagating further in the host.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Drag-over handler for a drop target: suppresses the host's default action
/// so dragging files over the page does not navigate away. Touches no
/// selection state.
pub fn handle_drag_over(event: &mut FileEvent) {
    event.stop_propagation();
    event.prevent_default();
}
