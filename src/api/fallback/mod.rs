pub mod handler;

pub use handler::fallback_handler;
