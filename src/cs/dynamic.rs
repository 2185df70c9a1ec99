pub mod longest_common_subsequence;
pub mod longest_increasing_subsequence;

// Re-export subsequence algorithms with descriptive names
pub use longest_common_subsequence::{
    indel_distance, lcs_all, lcs_all_subsequences, lcs_all_with_config, lcs_length, lcs_length_of,
    lcs_sequence, lcs_subsequence, shortest_common_supersequence_length, LcsEnumerationConfig,
    LcsTable,
};
pub use longest_increasing_subsequence::{
    longest_increasing_subsequence, longest_increasing_subsequence_length,
    longest_increasing_subsequence_values,
};
