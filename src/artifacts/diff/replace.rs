//! Pairing of deleted and inserted lines into `Replace` edits
//!
//! A diff engine reports an edited line as a deletion plus an insertion. For
//! display it reads better as one in-place replacement, so this pass looks for
//! a similar insertion near every deletion and fuses the two.
//!
//! Similarity is a heuristic driven by the constants below. They are tunable,
//! and changing any of them changes which lines get merged.

use crate::artifacts::diff::edit::Edit;

/// How many positions around an edit are searched for its partner.
pub const SIMILARITY_WINDOW: usize = 50;

/// Minimum share of the shorter line that the common prefix must cover.
pub const MIN_PREFIX_RATIO: f64 = 0.7;

/// Maximum difference of the two suffix lengths, relative to the longer one.
pub const MAX_SUFFIX_DELTA_RATIO: f64 = 0.3;

/// Whether two lines look like the same line edited in place.
///
/// Lengths are counted in chars. A long shared prefix is required first, then
/// the remainders after that prefix must be of comparable length.
pub fn are_similar_lines(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }

    let prefix = a
        .chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .count();
    let (a_len, b_len) = (a.chars().count(), b.chars().count());

    if (prefix as f64) < MIN_PREFIX_RATIO * a_len.min(b_len) as f64 {
        return false;
    }

    let (a_suffix, b_suffix) = (a_len - prefix, b_len - prefix);
    let longest = a_suffix.max(b_suffix);
    if longest == 0 {
        return true;
    }

    a_suffix.abs_diff(b_suffix) as f64 <= MAX_SUFFIX_DELTA_RATIO * longest as f64
}

/// Fuses similar `Delete`/`Insert` pairs into `Replace` edits.
///
/// Every deletion looks for a similar insertion within [`SIMILARITY_WINDOW`]
/// positions, forward first, then backward. Insertions still unpaired after
/// that look for a deletion the same way. Edits left without a partner are
/// kept as they are.
///
/// The result is ordered by B-side index, or A-side index for deletions, so
/// [`apply_edits`](super::edit::apply_edits) still rebuilds B. A pair that
/// reaches across other edits can move a deletion out of A order.
pub fn merge_replacements(edits: &[Edit]) -> Vec<Edit> {
    let pairing = Pairing::new(edits);

    let mut merged = edits
        .iter()
        .enumerate()
        .filter_map(|(pos, edit)| match (edit, pairing.partner[pos]) {
            (Edit::Insert { .. }, Some(_)) => None,
            (Edit::Delete { a_index, line }, Some(insert)) => match &edits[insert] {
                Edit::Insert {
                    b_index,
                    line: new_line,
                } => Some(Edit::Replace {
                    a_index: *a_index,
                    b_index: *b_index,
                    old_line: line.clone(),
                    new_line: new_line.clone(),
                }),
                _ => Some(edit.clone()),
            },
            _ => Some(edit.clone()),
        })
        .collect::<Vec<_>>();
    merged.sort_by_key(|edit| edit.b_index().or(edit.a_index()));

    tracing::debug!(
        before = edits.len(),
        after = merged.len(),
        replacements = edits.len() - merged.len(),
        "merged replacements"
    );

    merged
}

/// Partner of every edit in a script, by position.
struct Pairing<'e> {
    edits: &'e [Edit],
    partner: Vec<Option<usize>>,
}

impl<'e> Pairing<'e> {
    fn new(edits: &'e [Edit]) -> Self {
        let mut pairing = Self {
            edits,
            partner: vec![None; edits.len()],
        };

        for pos in 0..edits.len() {
            if matches!(edits[pos], Edit::Delete { .. }) && pairing.partner[pos].is_none() {
                if let Some(insert) = pairing.find_partner(pos, |edit| {
                    matches!(edit, Edit::Insert { .. })
                }) {
                    pairing.link(pos, insert);
                }
            }
        }

        // an insertion may sit before its deletion
        for pos in 0..edits.len() {
            if matches!(edits[pos], Edit::Insert { .. }) && pairing.partner[pos].is_none() {
                if let Some(delete) = pairing.find_partner(pos, |edit| {
                    matches!(edit, Edit::Delete { .. })
                }) {
                    pairing.link(delete, pos);
                }
            }
        }

        pairing
    }

    fn link(&mut self, delete: usize, insert: usize) {
        self.partner[delete] = Some(insert);
        self.partner[insert] = Some(delete);
    }

    /// Searches forward, then backward, for an unpaired similar edit.
    fn find_partner(&self, pos: usize, wanted: impl Fn(&Edit) -> bool) -> Option<usize> {
        let line = self.edits[pos].content();
        let forward = (pos + 1)..(pos + 1 + SIMILARITY_WINDOW).min(self.edits.len());
        let backward = (pos.saturating_sub(SIMILARITY_WINDOW)..pos).rev();

        forward.chain(backward).find(|&candidate| {
            let edit = &self.edits[candidate];
            self.partner[candidate].is_none()
                && wanted(edit)
                && are_similar_lines(line, edit.content())
        })
    }
}
