//! CLI command implementations

pub mod play;
pub mod records;

pub use play::run_play;
pub use records::run_records;
