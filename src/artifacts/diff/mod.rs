//! Line diffing
//!
//! This module implements the text-differencing engine:
//!
//! - `edit`: Edit scripts and helpers to replay them
//! - `algorithm`: The `DiffAlgorithm` trait and engine selection
//! - `myers`: Myers' O(N·D) shortest edit script
//! - `lcs`: O(N·M) longest common subsequence table
//! - `replace`: Pairing of similar deletions and insertions into replacements
//! - `diff_target`: One side of a comparison, loaded from a file or from nothing
//!
//! Engines only see line slices; reading files happens in `diff_target`.

pub mod algorithm;
pub mod diff_target;
pub mod edit;
pub mod lcs;
pub mod myers;
pub mod replace;
