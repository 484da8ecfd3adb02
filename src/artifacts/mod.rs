//! Diff engine data structures and algorithms
//!
//! - `core`: Shared utilities (logging setup, pager wrapper)
//! - `diff`: Edit scripts, diff algorithms and the replace merger
//! - `render`: Side-by-side and unified formatting of edit scripts

pub mod core;
pub mod diff;
pub mod render;
