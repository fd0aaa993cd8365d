pub mod errors;
pub mod format;
