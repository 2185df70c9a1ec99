//! Longest strictly increasing subsequence in O(n log n).

use log::debug;

/// Returns the length of the Longest Increasing Subsequence (LIS) in `numbers`.
///
/// Equal values never extend a subsequence.
///
/// # Examples
///
/// ```
/// use subseq::cs::dynamic::longest_increasing_subsequence::longest_increasing_subsequence_length;
///
/// let arr = vec![10, 9, 2, 5, 3, 7, 101, 18];
/// assert_eq!(longest_increasing_subsequence_length(&arr), 4);
/// // One possible LIS is [2, 5, 7, 101]
/// assert_eq!(longest_increasing_subsequence_length(&[5, 5, 5]), 1);
/// ```
pub fn longest_increasing_subsequence_length<T: Ord>(numbers: &[T]) -> usize {
    // tails[k] is the smallest tail of any increasing run of length k + 1.
    let mut tails: Vec<&T> = Vec::with_capacity(numbers.len());

    for num in numbers {
        let pos = tails.partition_point(|&tail| tail < num);
        if pos == tails.len() {
            tails.push(num);
        } else {
            tails[pos] = num;
        }
    }
    tails.len()
}

/// Returns the indices of one longest strictly increasing subsequence of `numbers`.
///
/// The scan keeps `tails`, where `numbers[tails[k]]` is the smallest value
/// that ends an increasing subsequence of length `k + 1` seen so far, and
/// `prev`, the predecessor of each index in the subsequence it ended when
/// placed. The values behind `tails` are strictly increasing, so placement is
/// a binary search.
///
/// If there are multiple LIS with the same length, this returns just one of them.
/// Floating-point input needs a totally ordered wrapper (for example one
/// comparing with `f64::total_cmp`).
///
/// # Examples
///
/// ```
/// use subseq::cs::dynamic::longest_increasing_subsequence::longest_increasing_subsequence;
///
/// let arr = [1, 9, 3, 8, 11, 4];
/// assert_eq!(longest_increasing_subsequence(&arr), vec![0, 2, 3, 4]); // 1 3 8 11
/// assert!(longest_increasing_subsequence::<i32>(&[]).is_empty());
/// ```
pub fn longest_increasing_subsequence<T: Ord>(numbers: &[T]) -> Vec<usize> {
    if numbers.is_empty() {
        return Vec::new();
    }

    let mut tails = Vec::with_capacity(numbers.len());
    let mut prev: Vec<Option<usize>> = vec![None; numbers.len()];
    tails.push(0);

    for (i, num) in numbers.iter().enumerate().skip(1) {
        let last = tails[tails.len() - 1];
        if *num > numbers[last] {
            prev[i] = Some(last);
            tails.push(i);
            continue;
        }

        // Leftmost tail that is not smaller than `num`.
        let left = tails.partition_point(|&k| numbers[k] < *num);
        if *num < numbers[tails[left]] {
            tails[left] = i;
            if left > 0 {
                prev[i] = Some(tails[left - 1]);
            }
        }
    }

    // Walk back from the last tail through the predecessors.
    let mut lis = Vec::with_capacity(tails.len());
    let mut curr = tails.last().copied();
    while let Some(idx) = curr {
        lis.push(idx);
        curr = prev[idx];
    }
    lis.reverse();

    debug!("LIS of {} elements has length {}", numbers.len(), lis.len());
    lis
}

/// Returns the values of one longest strictly increasing subsequence.
///
/// # Examples
///
/// ```
/// use subseq::cs::dynamic::longest_increasing_subsequence::longest_increasing_subsequence_values;
///
/// assert_eq!(longest_increasing_subsequence_values(&[1, 9, 3, 8, 11, 4]), vec![1, 3, 8, 11]);
/// ```
pub fn longest_increasing_subsequence_values<T: Ord + Clone>(numbers: &[T]) -> Vec<T> {
    longest_increasing_subsequence(numbers)
        .into_iter()
        .map(|i| numbers[i].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lis_length_empty() {
        assert_eq!(longest_increasing_subsequence_length::<i32>(&[]), 0);
    }

    #[test]
    fn test_lis_sequence_empty() {
        let seq = longest_increasing_subsequence::<i32>(&[]);
        assert_eq!(seq.len(), 0);
    }

    #[test]
    fn test_lis_length_basic() {
        // Example from LeetCode 300: [10,9,2,5,3,7,101,18] -> length is 4
        let nums = [10, 9, 2, 5, 3, 7, 101, 18];
        assert_eq!(longest_increasing_subsequence_length(&nums), 4);

        let nums2 = [0, 1, 0, 3, 2, 3];
        assert_eq!(longest_increasing_subsequence_length(&nums2), 4);
    }

    #[test]
    fn test_lis_known_answer() {
        let nums = [1, 9, 3, 8, 11, 4];
        assert_eq!(longest_increasing_subsequence(&nums), vec![0, 2, 3, 4]);
        assert_eq!(longest_increasing_subsequence_values(&nums), vec![1, 3, 8, 11]);
    }

    #[test]
    fn test_lis_sequence_basic() {
        let nums = [10, 9, 2, 5, 3, 7, 101, 18];
        let seq = longest_increasing_subsequence_values(&nums);
        // There's more than one correct LIS, but length must be 4
        assert_eq!(seq.len(), 4);

        // Quick check that seq is strictly increasing
        for win in seq.windows(2) {
            assert!(win[0] < win[1]);
        }
    }

    #[test]
    fn test_lis_all_equal() {
        assert_eq!(longest_increasing_subsequence(&[5, 5, 5]), vec![0]);
        assert_eq!(longest_increasing_subsequence_length(&[5, 5, 5]), 1);
    }

    #[test]
    fn test_lis_ties_do_not_extend() {
        let nums = [1, 2, 2, 3];
        assert_eq!(longest_increasing_subsequence(&nums), vec![0, 1, 3]);
    }

    #[test]
    fn test_lis_ordered_and_reversed() {
        assert_eq!(longest_increasing_subsequence(&[0, 1, 2, 3]), vec![0, 1, 2, 3]);
        assert_eq!(longest_increasing_subsequence(&[3, 2, 1, 0]), vec![3]);
    }

    #[test]
    fn test_lis_additional() {
        let nums = [3, 1, 2, 1, 8, 6, 7];
        let length = longest_increasing_subsequence_length(&nums);
        assert_eq!(length, 4);
        let idx = longest_increasing_subsequence(&nums);
        assert_eq!(idx.len(), 4);
        for w in idx.windows(2) {
            assert!(w[0] < w[1]);
            assert!(nums[w[0]] < nums[w[1]]);
        }
    }

    /// `f64` ordered by `total_cmp`; positive NaN sorts above every number.
    #[derive(Debug, Clone, Copy)]
    struct TotalF64(f64);

    impl PartialEq for TotalF64 {
        fn eq(&self, other: &Self) -> bool {
            self.cmp(other) == std::cmp::Ordering::Equal
        }
    }

    impl Eq for TotalF64 {}

    impl PartialOrd for TotalF64 {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for TotalF64 {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.total_cmp(&other.0)
        }
    }

    fn floats(values: &[f64]) -> Vec<TotalF64> {
        values.iter().copied().map(TotalF64).collect()
    }

    #[test]
    fn test_lis_floats() {
        let nums = floats(&[2.5, 0.5, 1.5, 1.5, 3.0]);
        assert_eq!(longest_increasing_subsequence(&nums), vec![1, 2, 4]);
    }

    #[test]
    fn test_lis_floats_with_nan() {
        let leading = floats(&[f64::NAN, 1.0, 2.0, 3.0]);
        assert_eq!(longest_increasing_subsequence(&leading), vec![1, 2, 3]);
        assert_eq!(longest_increasing_subsequence_length(&leading), 3);

        // NaN sorts last, so 3.0 takes its place as the smaller tail.
        let middle = floats(&[1.0, 2.0, f64::NAN, 3.0]);
        assert_eq!(longest_increasing_subsequence(&middle), vec![0, 1, 3]);
        assert_eq!(longest_increasing_subsequence_length(&middle), 3);
    }
}
