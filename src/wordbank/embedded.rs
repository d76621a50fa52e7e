//! Word list embedded at compile time
//!
//! The build script compiles `data/words.txt` into a const array so the
//! binary needs no files at run time.

include!(concat!(env!("OUT_DIR"), "/words.rs"));
