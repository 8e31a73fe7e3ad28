pub mod app;
pub mod domain;
pub mod infra;

pub use app::controller::FileSetController;
pub use app::format::{format_bytes, format_bytes_with};
pub use domain::model::{FileHandle, FileSelector};
pub use infra::config::ControllerConfig;
pub use infra::events::{DropPayload, FileEvent, handle_drag_over};

pub fn init() {
    tracing_subscriber::fmt::init();
}
