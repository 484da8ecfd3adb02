//! Command implementations
//!
//! - `diff`: Compares two files and prints the rendered edit script

pub mod diff;
