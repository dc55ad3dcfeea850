/// Minimal string-backed error used during configuration bootstrap.
pub mod custom_error;
