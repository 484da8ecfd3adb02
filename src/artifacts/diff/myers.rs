use crate::artifacts::diff::algorithm::DiffAlgorithm;
use crate::artifacts::diff::edit::Edit;

/// Furthest reach on every diagonal, one snapshot per edit distance.
type Trace = Vec<Vec<isize>>;

/// A single move through the edit graph: `(prev_x, prev_y, x, y)`.
type Step = (isize, isize, isize, isize);

/// Myers' O(N·D) shortest edit script.
///
/// The reach array is snapshotted before every round so the path can be
/// walked back without recursion. Memory is O(D·(N+M)), fine for source
/// files but not for very large inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MyersDiff;

impl MyersDiff {
    fn shortest_edit(a: &[&str], b: &[&str]) -> Trace {
        let (n, m) = (a.len() as isize, b.len() as isize);
        let offset = (n + m) as usize;

        let mut v = vec![0; 2 * offset + 1];
        let mut trace = Vec::new();

        for d in 0..=(n + m) {
            trace.push(v.clone());

            for k in (-d..=d).step_by(2) {
                let idx = (offset as isize + k) as usize;

                let mut x = if k == -d {
                    // only reachable from k+1, an insertion
                    v[idx + 1]
                } else if k == d {
                    // only reachable from k-1, a deletion
                    v[idx - 1] + 1
                } else {
                    let x_del = v[idx - 1] + 1;
                    let x_ins = v[idx + 1];
                    if x_del > x_ins { x_del } else { x_ins }
                };

                let mut y = x - k;
                while x < n && y < m && a[x as usize] == b[y as usize] {
                    // snake
                    x += 1;
                    y += 1;
                }

                v[idx] = x;

                if x >= n && y >= m {
                    tracing::debug!(distance = d, "myers reached the end of both sequences");
                    return trace;
                }
            }

            #[cfg(feature = "debug_trace")]
            tracing::trace!(d, reach = ?v, "myers round");
        }

        trace
    }

    fn backtrack(a: &[&str], b: &[&str], trace: &Trace) -> Vec<Step> {
        let (mut x, mut y) = (a.len() as isize, b.len() as isize);
        let offset = x + y;
        let mut path = Vec::new();

        for (d, v) in trace.iter().enumerate().rev() {
            let d = d as isize;
            let k = x - y;

            let prev_k = if k == -d {
                k + 1
            } else if k == d {
                k - 1
            } else if v[(offset + k - 1) as usize] + 1 > v[(offset + k + 1) as usize] {
                k - 1
            } else {
                k + 1
            };

            let prev_x = v[(offset + prev_k) as usize];
            let prev_y = prev_x - prev_k;

            while x > prev_x && y > prev_y {
                path.push((x - 1, y - 1, x, y));
                x -= 1;
                y -= 1;
            }

            if d > 0 {
                path.push((prev_x, prev_y, x, y));
            }

            (x, y) = (prev_x, prev_y);
        }

        path
    }
}

impl DiffAlgorithm for MyersDiff {
    fn name(&self) -> &'static str {
        "Myers"
    }

    fn compute(&self, a: &[&str], b: &[&str]) -> anyhow::Result<Vec<Edit>> {
        tracing::debug!(algorithm = self.name(), a = a.len(), b = b.len(), "computing diff");

        if a.is_empty() && b.is_empty() {
            return Ok(Vec::new());
        }

        let trace = Self::shortest_edit(a, b);
        let path = Self::backtrack(a, b, &trace);

        let mut edits = path
            .into_iter()
            .map(|(prev_x, prev_y, x, y)| {
                let (a_index, b_index) = (prev_x as usize, prev_y as usize);
                if x == prev_x {
                    Edit::Insert {
                        b_index,
                        line: b[b_index].to_string(),
                    }
                } else if y == prev_y {
                    Edit::Delete {
                        a_index,
                        line: a[a_index].to_string(),
                    }
                } else {
                    Edit::Equal {
                        a_index,
                        b_index,
                        line: a[a_index].to_string(),
                    }
                }
            })
            .collect::<Vec<_>>();

        edits.reverse();
        Ok(edits)
    }
}
