// Adapters layer: concrete implementations for external systems (file, http).

pub mod file;
pub mod http;
