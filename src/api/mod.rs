// HTTP surface of the service

pub mod fallback;
pub mod status;
