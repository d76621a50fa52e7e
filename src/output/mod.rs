//! Terminal output

pub mod display;

pub use display::{print_banner, print_records, sorted_descending};
