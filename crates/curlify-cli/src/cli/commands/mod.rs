//! CLI command handlers. Each command is in its own file.

mod completions;
mod har;
mod request;

pub use completions::run_completions;
pub use har::run_har;
pub use request::{run_request, RequestArgs};
