//! Longest common subsequence (LCS): length, one optimal subsequence, and
//! every distinct optimal subsequence.
//!
//! `table[i][j]` holds the LCS length of the length-`i` prefix of `a` and the
//! length-`j` prefix of `b`:
//!
//! ```text
//!                 0                                   if i == 0 or j == 0
//! table[i][j] = { table[i-1][j-1] + 1                 if a[i-1] == b[j-1]
//!                 max(table[i][j-1], table[i-1][j])   otherwise
//! ```

use std::collections::HashSet;
use std::hash::Hash;

use log::{debug, trace};

use crate::error::{Error, Result};

/// Returns the length of the longest common subsequence (LCS) between `a` and `b`.
///
/// Only two rows of the table are kept, so memory is bounded by the shorter
/// of the two strings.
///
/// # Examples
///
/// ```
/// use subseq::cs::dynamic::longest_common_subsequence::lcs_length;
///
/// assert_eq!(lcs_length("abcdefg", "bcdgk"), 4); // "bcdg"
/// assert_eq!(lcs_length("", "abc"), 0);
/// ```
pub fn lcs_length(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    lcs_length_of(&a_chars, &b_chars)
}

/// Returns the LCS length of two arbitrary slices.
///
/// # Examples
///
/// ```
/// use subseq::cs::dynamic::longest_common_subsequence::lcs_length_of;
///
/// assert_eq!(lcs_length_of(&[1, 2, 3, 4], &[2, 4, 5]), 2);
/// ```
pub fn lcs_length_of<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    // The shorter sequence runs along the columns.
    let (rows, cols) = if b.len() > a.len() { (b, a) } else { (a, b) };

    let mut prev_row = vec![0_usize; cols.len() + 1];
    let mut curr_row = vec![0_usize; cols.len() + 1];

    for x in rows {
        for (j, y) in cols.iter().enumerate() {
            curr_row[j + 1] = if x == y {
                prev_row[j] + 1
            } else {
                curr_row[j].max(prev_row[j + 1])
            };
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[cols.len()]
}

/// The full LCS table for a pair of sequences.
///
/// Cells are stored row-major; row `i` covers the length-`i` prefix of the
/// first sequence. Row 0 and column 0 are all zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsTable {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl LcsTable {
    /// Builds the `(a.len() + 1) x (b.len() + 1)` table.
    ///
    /// # Examples
    ///
    /// ```
    /// use subseq::cs::dynamic::longest_common_subsequence::LcsTable;
    ///
    /// let a: Vec<char> = "AGCAT".chars().collect();
    /// let b: Vec<char> = "GAC".chars().collect();
    /// let table = LcsTable::build(&a, &b);
    /// assert_eq!(table.dimensions(), (6, 4));
    /// assert_eq!(table.length(), 2);
    /// assert_eq!(table.get(3, 3), 2); // "AGC" vs "GAC"
    /// ```
    pub fn build<T: PartialEq>(a: &[T], b: &[T]) -> Self {
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        let mut cells = vec![0_usize; rows * cols];

        for i in 1..rows {
            for j in 1..cols {
                cells[i * cols + j] = if a[i - 1] == b[j - 1] {
                    cells[(i - 1) * cols + (j - 1)] + 1
                } else {
                    cells[i * cols + (j - 1)].max(cells[(i - 1) * cols + j])
                };
            }
        }

        debug!("built {}x{} LCS table", rows, cols);
        Self { rows, cols, cells }
    }

    /// LCS length of the length-`i` prefix of `a` and the length-`j` prefix of `b`.
    ///
    /// # Panics
    ///
    /// Panics if `i > a.len()` or `j > b.len()`.
    pub fn get(&self, i: usize, j: usize) -> usize {
        assert!(i < self.rows && j < self.cols, "cell ({i}, {j}) is outside the table");
        self.cells[i * self.cols + j]
    }

    /// Number of rows and columns, i.e. `(a.len() + 1, b.len() + 1)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// LCS length of the complete sequences.
    pub fn length(&self) -> usize {
        self.cells[self.rows * self.cols - 1]
    }

    /// Walks back from the bottom-right cell and returns one optimal subsequence.
    ///
    /// Matching elements are taken diagonally. Otherwise the walk moves left
    /// when the cell above is strictly smaller than the cell to the left, and
    /// up in every other case.
    fn read_one<T: PartialEq + Clone>(&self, a: &[T], b: &[T]) -> Vec<T> {
        let mut i = a.len();
        let mut j = b.len();
        let mut subsequence = Vec::with_capacity(self.length());

        while i > 0 && j > 0 {
            if a[i - 1] == b[j - 1] {
                subsequence.push(a[i - 1].clone());
                i -= 1;
                j -= 1;
            } else if self.get(i - 1, j) < self.get(i, j - 1) {
                j -= 1;
            } else {
                i -= 1;
            }
        }

        // Collected back to front.
        subsequence.reverse();
        subsequence
    }

    /// Marks every cell the backward walk can visit from the bottom-right.
    ///
    /// A mismatch branches left when `table[i-1][j] <= table[i][j-1]` and up
    /// when `table[i-1][j] >= table[i][j-1]`; equal neighbours take both.
    fn reachable_cells<T: PartialEq>(&self, a: &[T], b: &[T]) -> Vec<bool> {
        let mut reachable = vec![false; self.cells.len()];
        let mut stack = vec![(a.len(), b.len())];

        while let Some((i, j)) = stack.pop() {
            let cell = i * self.cols + j;
            if reachable[cell] {
                continue;
            }
            reachable[cell] = true;

            if i == 0 || j == 0 {
                continue;
            }
            if a[i - 1] == b[j - 1] {
                stack.push((i - 1, j - 1));
                continue;
            }

            let up = self.get(i - 1, j);
            let left = self.get(i, j - 1);
            if up <= left {
                stack.push((i, j - 1));
            }
            if up >= left {
                stack.push((i - 1, j));
            }
        }

        reachable
    }

    /// Distinct optimal subsequences, in the order a recursive left-then-up
    /// walk first produces them.
    ///
    /// Each reachable cell keeps its own deduplicated list, built from its
    /// neighbours in row-major order, so converging paths are expanded once.
    /// Every distinct list entry of a reachable cell extends to a distinct
    /// solution at the bottom-right, so `None` is returned as soon as any
    /// cell holds more than `limit` entries.
    fn distinct_solutions<T>(&self, a: &[T], b: &[T], limit: Option<usize>) -> Option<Vec<Vec<T>>>
    where
        T: Eq + Hash + Clone,
    {
        let reachable = self.reachable_cells(a, b);
        let mut memo: Vec<Vec<Vec<T>>> = Vec::new();
        memo.resize_with(self.cells.len(), Vec::new);
        let mut visited = 0_usize;

        for i in 0..self.rows {
            for j in 0..self.cols {
                let cell = i * self.cols + j;
                if !reachable[cell] {
                    continue;
                }
                visited += 1;

                let solutions = if i == 0 || j == 0 {
                    vec![Vec::new()]
                } else if a[i - 1] == b[j - 1] {
                    memo[(i - 1) * self.cols + (j - 1)]
                        .iter()
                        .map(|prefix| {
                            let mut extended = prefix.clone();
                            extended.push(a[i - 1].clone());
                            extended
                        })
                        .collect()
                } else {
                    let up = self.get(i - 1, j);
                    let left = self.get(i, j - 1);
                    let mut branches = Vec::with_capacity(2);
                    if up <= left {
                        branches.push(cell - 1);
                    }
                    if up >= left {
                        branches.push(cell - self.cols);
                    }

                    let mut seen: HashSet<&[T]> = HashSet::new();
                    let mut merged = Vec::new();
                    for branch in branches {
                        for candidate in &memo[branch] {
                            if seen.insert(candidate.as_slice()) {
                                merged.push(candidate.clone());
                            }
                        }
                    }
                    merged
                };

                if limit.is_some_and(|max| solutions.len() > max) {
                    debug!("cell ({}, {}) holds {} solutions, over the limit", i, j, solutions.len());
                    return None;
                }
                trace!("cell ({}, {}) holds {} solutions", i, j, solutions.len());
                memo[cell] = solutions;
            }
        }

        debug!("expanded {} reachable cells", visited);
        let last = memo.len() - 1;
        Some(std::mem::take(&mut memo[last]))
    }
}

/// Reconstructs and returns one actual LCS (Longest Common Subsequence)
/// between `a` and `b`.
///
/// If there are multiple subsequences with the same length, this returns
/// just one of them. Returns an empty string if there's no common subsequence.
///
/// # Examples
///
/// ```
/// use subseq::cs::dynamic::longest_common_subsequence::lcs_sequence;
///
/// assert_eq!(lcs_sequence("abcdefg", "bcdgk"), "bcdg");
/// assert_eq!(lcs_sequence("AGCAT", "GAC"), "AC");
/// ```
pub fn lcs_sequence(a: &str, b: &str) -> String {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    lcs_subsequence(&a_chars, &b_chars).into_iter().collect()
}

/// Returns one longest common subsequence of two arbitrary slices.
pub fn lcs_subsequence<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    LcsTable::build(a, b).read_one(a, b)
}

/// Returns every distinct LCS of `a` and `b`.
///
/// Solutions are listed in the order the backward walk discovers them, with
/// repeats removed. When the strings share nothing, the result holds the
/// empty string alone. The number of solutions can grow exponentially with
/// the input; see [`lcs_all_with_config`] for a bounded variant.
///
/// # Examples
///
/// ```
/// use subseq::cs::dynamic::longest_common_subsequence::lcs_all;
///
/// assert_eq!(lcs_all("AGCAT", "GAC"), vec!["GA", "GC", "AC"]);
/// assert_eq!(lcs_all("abc", "xyz"), vec![""]);
/// ```
pub fn lcs_all(a: &str, b: &str) -> Vec<String> {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    lcs_all_subsequences(&a_chars, &b_chars)
        .into_iter()
        .map(|chars| chars.into_iter().collect())
        .collect()
}

/// Returns every distinct longest common subsequence of two arbitrary slices.
pub fn lcs_all_subsequences<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<Vec<T>> {
    let table = LcsTable::build(a, b);
    let solutions = table.distinct_solutions(a, b, None).unwrap_or_default();
    debug!("found {} distinct subsequences of length {}", solutions.len(), table.length());
    solutions
}

/// Options for enumerating all optimal subsequences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LcsEnumerationConfig {
    /// Maximum number of distinct solutions to return; `None` means no limit.
    pub max_solutions: Option<usize>,
}

impl LcsEnumerationConfig {
    /// A configuration that fails once more than `max` solutions exist.
    pub fn with_max_solutions(max: usize) -> Self {
        Self {
            max_solutions: Some(max),
        }
    }
}

/// Like [`lcs_all`], but gives up once the solution count passes the
/// configured limit.
///
/// # Errors
///
/// Returns [`Error::TooManySolutions`] when there are more than
/// `config.max_solutions` distinct optimal subsequences.
///
/// # Examples
///
/// ```
/// use subseq::cs::dynamic::longest_common_subsequence::{lcs_all_with_config, LcsEnumerationConfig};
/// use subseq::Error;
///
/// let config = LcsEnumerationConfig::with_max_solutions(2);
/// assert_eq!(
///     lcs_all_with_config("AGCAT", "GAC", &config),
///     Err(Error::TooManySolutions { limit: 2 })
/// );
///
/// let unbounded = LcsEnumerationConfig::default();
/// assert_eq!(lcs_all_with_config("AGCAT", "GAC", &unbounded).unwrap().len(), 3);
/// ```
pub fn lcs_all_with_config(a: &str, b: &str, config: &LcsEnumerationConfig) -> Result<Vec<String>> {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let table = LcsTable::build(&a_chars, &b_chars);

    let Some(solutions) = table.distinct_solutions(&a_chars, &b_chars, config.max_solutions) else {
        // Only a configured limit can stop the enumeration.
        let limit = config.max_solutions.unwrap_or(usize::MAX);
        return Err(Error::TooManySolutions { limit });
    };

    Ok(solutions
        .into_iter()
        .map(|chars| chars.into_iter().collect())
        .collect())
}

/// Length of the shortest string that has both `a` and `b` as subsequences.
///
/// # Examples
///
/// ```
/// use subseq::cs::dynamic::longest_common_subsequence::shortest_common_supersequence_length;
///
/// assert_eq!(shortest_common_supersequence_length("abac", "cab"), 5); // "cabac"
/// ```
pub fn shortest_common_supersequence_length(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    a_chars.len() + b_chars.len() - lcs_length_of(&a_chars, &b_chars)
}

/// Edit distance between `a` and `b` when only insertions and deletions are allowed.
///
/// # Examples
///
/// ```
/// use subseq::cs::dynamic::longest_common_subsequence::indel_distance;
///
/// assert_eq!(indel_distance("kitten", "sitting"), 5);
/// ```
pub fn indel_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    a_chars.len() + b_chars.len() - 2 * lcs_length_of(&a_chars, &b_chars)
}
