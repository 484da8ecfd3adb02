use crate::artifacts::diff::edit::Edit;
use crate::artifacts::diff::lcs::LcsDiff;
use crate::artifacts::diff::myers::MyersDiff;

/// A line diff engine.
///
/// Every implementation must return a script that [`apply_edits`] turns back
/// into `b`, for any pair of inputs including empty ones.
///
/// [`apply_edits`]: crate::artifacts::diff::edit::apply_edits
pub trait DiffAlgorithm {
    /// Identifier used in logs and diagnostics.
    fn name(&self) -> &'static str;

    fn compute(&self, a: &[&str], b: &[&str]) -> anyhow::Result<Vec<Edit>>;

    /// Diffs owned lines, as read from a file.
    fn compute_lines(&self, a: &[String], b: &[String]) -> anyhow::Result<Vec<Edit>> {
        let a = a.iter().map(String::as_str).collect::<Vec<_>>();
        let b = b.iter().map(String::as_str).collect::<Vec<_>>();
        self.compute(&a, &b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Algorithm {
    /// O(N·D) shortest edit script
    #[default]
    Myers,
    /// O(N·M) longest common subsequence table
    Lcs,
}

impl Algorithm {
    pub fn engine(self) -> Box<dyn DiffAlgorithm> {
        match self {
            Algorithm::Myers => Box::new(MyersDiff),
            Algorithm::Lcs => Box::new(LcsDiff::default()),
        }
    }
}
