//! Error handling middleware for transforming errors into responses.

mod handlers;
mod panic;

pub use handlers::{ErrorFormat, ResponseFut, handle_error, handle_error_json};
pub use panic::catch_panic;
