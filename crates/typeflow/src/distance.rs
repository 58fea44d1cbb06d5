//! One-shot Levenshtein distance and the similarity score derived from it.

/// Compute the Levenshtein edit distance between two strings.
///
/// Characters are compared as Unicode scalar values, so a multi-byte
/// character counts as a single edit. Uses the two-row dynamic programming
/// form over the shorter string: O(|a| * |b|) time, O(min(|a|, |b|)) space.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein_chars(&a, &b)
}

/// [`levenshtein`] over already decoded character sequences.
pub fn levenshtein_chars(a: &[char], b: &[char]) -> usize {
    // Distance is symmetric; keep the rows as short as possible.
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return long.len();
    }

    let mut prev_row: Vec<usize> = (0..=short.len()).collect();
    let mut curr_row = vec![0; short.len() + 1];

    for (i, &lc) in long.iter().enumerate() {
        fill_row(&prev_row, &mut curr_row, i + 1, lc, short);
        std::mem::swap(&mut prev_row, &mut curr_row);
    }
    prev_row[short.len()]
}

/// Fill one row of the cost table.
///
/// `prev` is row `row - 1`, `curr` receives row `row`, `ch` is the source
/// character at position `row - 1`. Both slices are `target.len() + 1` long.
#[inline]
pub(crate) fn fill_row(prev: &[usize], curr: &mut [usize], row: usize, ch: char, target: &[char]) {
    debug_assert_eq!(prev.len(), target.len() + 1);
    debug_assert_eq!(curr.len(), target.len() + 1);

    curr[0] = row;
    for (j, &tc) in target.iter().enumerate() {
        curr[j + 1] = if ch == tc {
            prev[j]
        } else {
            1 + prev[j] // substitution
                .min(prev[j + 1]) // deletion
                .min(curr[j]) // insertion
        };
    }
}

/// Similarity score in `[0, 1]`: `1 - distance / max(a_len, b_len)`.
///
/// Lengths are character counts. Two empty strings are identical and score 1.0.
pub fn similarity(distance: usize, a_len: usize, b_len: usize) -> f64 {
    let den = a_len.max(b_len);
    if den == 0 {
        return 1.0;
    }
    1.0 - distance as f64 / den as f64
}
