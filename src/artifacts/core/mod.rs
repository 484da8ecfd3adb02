//! Core utilities and shared types
//!
//! - `logging`: Subscriber setup for the binary
//! - `pager`: Output sink that is either stdout or the minus pager

pub mod logging;
pub mod pager;
