use crate::artifacts::diff::edit::Edit;
use std::fmt::Display;

/// Unchanged runs longer than this many lines are collapsed by default.
pub const DEFAULT_COMPRESSION_THRESHOLD: usize = 6;

/// What a renderer draws: either an edit, or a marker standing in for a run
/// of unchanged lines that was left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'e> {
    Edit(&'e Edit),
    Collapsed { hidden: usize },
}

impl Display for Segment<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Segment::Edit(edit) => write!(f, "{edit}"),
            Segment::Collapsed { hidden: 1 } => write!(f, "@@ 1 unchanged line @@"),
            Segment::Collapsed { hidden } => write!(f, "@@ {hidden} unchanged lines @@"),
        }
    }
}

/// Replaces every run of more than `threshold` consecutive `Equal` edits with
/// a [`Segment::Collapsed`] marker, keeping up to `context` lines visible on
/// each side of it. Everything else passes through untouched.
pub fn compress_unchanged(edits: &[Edit], threshold: usize, context: usize) -> Vec<Segment<'_>> {
    let mut segments = Vec::with_capacity(edits.len());
    let mut start = 0;

    while start < edits.len() {
        if edits[start].is_change() {
            segments.push(Segment::Edit(&edits[start]));
            start += 1;
            continue;
        }

        let end = edits[start..]
            .iter()
            .position(Edit::is_change)
            .map_or(edits.len(), |offset| start + offset);
        let run = &edits[start..end];

        if run.len() > threshold {
            let keep = context.min((run.len() - 1) / 2);
            let hidden = run.len() - 2 * keep;

            segments.extend(run[..keep].iter().map(Segment::Edit));
            segments.push(Segment::Collapsed { hidden });
            segments.extend(run[run.len() - keep..].iter().map(Segment::Edit));

            tracing::trace!(start, hidden, "collapsed unchanged run");
        } else {
            segments.extend(run.iter().map(Segment::Edit));
        }

        start = end;
    }

    segments
}
