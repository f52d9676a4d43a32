//! User-facing adapters around the application layer.

pub mod shell;
