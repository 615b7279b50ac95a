/// Longest-common-subsequence ratio in [0, 1]: `2·LCS(a,b) / (|a| + |b|)`
/// over chars. 1.0 for identical strings, 0.0 when either side is empty.
pub(crate) fn lcs_ratio(a: &str, b: &str) -> f64 {
    let left: Vec<char> = a.chars().collect();
    let right: Vec<char> = b.chars().collect();
    if left.is_empty() || right.is_empty() {
        return 0.0;
    }

    let mut prev = vec![0usize; right.len() + 1];
    let mut curr = vec![0usize; right.len() + 1];
    for lc in &left {
        curr[0] = 0;
        for (j, rc) in right.iter().enumerate() {
            curr[j + 1] = if lc == rc {
                prev[j] + 1
            } else {
                curr[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let lcs = prev[right.len()] as f64;
    (2.0 * lcs) / (left.len() + right.len()) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_one() {
        assert_eq!(lcs_ratio("milch", "milch"), 1.0);
    }

    #[test]
    fn disjoint_strings_score_zero() {
        assert_eq!(lcs_ratio("abc", "xyz"), 0.0);
    }

    #[test]
    fn empty_side_scores_zero() {
        assert_eq!(lcs_ratio("", "milch"), 0.0);
        assert_eq!(lcs_ratio("milch", ""), 0.0);
    }

    #[test]
    fn transposition_scores_high() {
        // "milhc" shares the subsequence "milh" (or "milc") with "milch".
        let score = lcs_ratio("milhc", "milch");
        assert!(score >= 0.8, "got {score}");
    }

    #[test]
    fn ratio_is_symmetric() {
        assert_eq!(lcs_ratio("brot", "brotchen"), lcs_ratio("brotchen", "brot"));
    }
}
