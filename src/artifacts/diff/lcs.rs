use crate::artifacts::diff::algorithm::DiffAlgorithm;
use crate::artifacts::diff::edit::Edit;
use derive_new::new;

/// Largest table [`LcsDiff`] builds by default, in cells.
pub const DEFAULT_MAX_TABLE_CELLS: usize = 1 << 24;

/// Longest-common-subsequence diff over a full `(N+1)×(M+1)` table.
///
/// O(N·M) in both time and memory, so inputs whose table would exceed
/// `max_cells` are rejected instead of allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct LcsDiff {
    max_cells: usize,
}

impl Default for LcsDiff {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TABLE_CELLS)
    }
}

impl LcsDiff {
    /// `table[i][j]` is the LCS length of `a[i..]` and `b[j..]`.
    fn suffix_table(a: &[&str], b: &[&str]) -> Vec<Vec<usize>> {
        let (n, m) = (a.len(), b.len());
        let mut table = vec![vec![0; m + 1]; n + 1];

        for i in (0..n).rev() {
            for j in (0..m).rev() {
                table[i][j] = if a[i] == b[j] {
                    table[i + 1][j + 1] + 1
                } else {
                    table[i + 1][j].max(table[i][j + 1])
                };
            }

            #[cfg(feature = "debug_trace")]
            tracing::trace!(row = i, lengths = ?table[i], "lcs row");
        }

        table
    }
}

impl DiffAlgorithm for LcsDiff {
    fn name(&self) -> &'static str {
        "LCS"
    }

    fn compute(&self, a: &[&str], b: &[&str]) -> anyhow::Result<Vec<Edit>> {
        tracing::debug!(algorithm = self.name(), a = a.len(), b = b.len(), "computing diff");

        let cells = (a.len() + 1).saturating_mul(b.len() + 1);
        if cells > self.max_cells {
            anyhow::bail!(
                "inputs of {} and {} lines need a {cells}-cell LCS table, above the limit of {}",
                a.len(),
                b.len(),
                self.max_cells
            );
        }

        let table = Self::suffix_table(a, b);
        let mut edits = Vec::with_capacity(a.len().max(b.len()));
        let (mut i, mut j) = (0, 0);

        while i < a.len() && j < b.len() {
            if a[i] == b[j] {
                edits.push(Edit::Equal {
                    a_index: i,
                    b_index: j,
                    line: a[i].to_string(),
                });
                i += 1;
                j += 1;
            } else if table[i + 1][j] >= table[i][j + 1] {
                edits.push(Edit::Delete {
                    a_index: i,
                    line: a[i].to_string(),
                });
                i += 1;
            } else {
                edits.push(Edit::Insert {
                    b_index: j,
                    line: b[j].to_string(),
                });
                j += 1;
            }
        }

        edits.extend((i..a.len()).map(|a_index| Edit::Delete {
            a_index,
            line: a[a_index].to_string(),
        }));
        edits.extend((j..b.len()).map(|b_index| Edit::Insert {
            b_index,
            line: b[b_index].to_string(),
        }));

        tracing::debug!(lcs = table[0][0], edits = edits.len(), "lcs walk finished");

        Ok(edits)
    }
}
