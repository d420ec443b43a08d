//! Substring matching primitives for string rewriting.
//!
//! All three operations use the same overlapping left-to-right scan: after a
//! match at byte offset `i`, scanning resumes at `i + 1`, so
//! `occurrence_count("aaa", "aa")` is 2. Occurrence indices produced by
//! [`occurrence_count`] and consumed by [`nth_occurrence_start`] /
//! [`apply_at`] therefore agree with each other.
//!
//! The scan is byte-oriented. A valid UTF-8 pattern can only match at
//! character boundaries, so byte windows are exact and every splice produced
//! by [`apply_at`] is again valid UTF-8.

use itertools::Itertools;

/// Counts the occurrences of `pattern` in `s`, overlapping matches included.
///
/// # Arguments
///
/// * `s` - The string to scan
/// * `pattern` - The non-empty pattern to look for
///
/// # Returns
///
/// Returns the number of byte offsets at which `pattern` matches
pub fn occurrence_count(s: &str, pattern: &str) -> usize {
    debug_assert!(!pattern.is_empty(), "rule find patterns are never empty");
    s.as_bytes()
        .windows(pattern.len())
        .filter(|window| *window == pattern.as_bytes())
        .count()
}

/// Byte offset of the 0-indexed `n`-th occurrence of `pattern` in `s`,
/// under the same overlapping scan as [`occurrence_count`].
///
/// Panics when fewer than `n + 1` occurrences exist. Callers bound `n` by a
/// prior [`occurrence_count`] on the same `(s, pattern)`, so a panic here is
/// a defect in the caller, not bad input.
pub fn nth_occurrence_start(s: &str, pattern: &str, n: usize) -> usize {
    debug_assert!(!pattern.is_empty(), "rule find patterns are never empty");
    s.as_bytes()
        .windows(pattern.len())
        .positions(|window| window == pattern.as_bytes())
        .nth(n)
        .unwrap_or_else(|| panic!("no occurrence {n} of {pattern:?} in {s:?}"))
}

/// Returns `s` with its `n`-th occurrence of `pattern` replaced by
/// `replacement`.
///
/// The result has length `s.len() - pattern.len() + replacement.len()`;
/// the match found by [`nth_occurrence_start`] guarantees `pattern` fits in
/// `s`, so the length never underflows.
pub fn apply_at(s: &str, pattern: &str, replacement: &str, n: usize) -> String {
    let start = nth_occurrence_start(s, pattern, n);
    let mut rewritten = String::with_capacity(s.len() - pattern.len() + replacement.len());
    rewritten.push_str(&s[..start]);
    rewritten.push_str(replacement);
    rewritten.push_str(&s[start + pattern.len()..]);
    rewritten
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Offsets checked one by one, the definition the scan must agree with.
    fn brute_force_count(s: &str, pattern: &str) -> usize {
        let (s, pattern) = (s.as_bytes(), pattern.as_bytes());
        if pattern.len() > s.len() {
            return 0;
        }
        (0..=s.len() - pattern.len())
            .filter(|&i| &s[i..i + pattern.len()] == pattern)
            .count()
    }

    #[test]
    fn counts_overlapping_occurrences() {
        assert_eq!(occurrence_count("aaa", "aa"), 2);
        assert_eq!(occurrence_count("aaaa", "aa"), 3);
        assert_eq!(occurrence_count("0011", "01"), 1);
        assert_eq!(occurrence_count("abc", "d"), 0);
        assert_eq!(occurrence_count("ab", "abc"), 0);
    }

    #[test]
    fn count_agrees_with_brute_force() {
        let cases = [
            ("aaa", "aa"),
            ("abababa", "aba"),
            ("0011", "01"),
            ("101010101000010", "101"),
            ("", "x"),
            ("xyz", "xyz"),
        ];
        for (s, pattern) in cases {
            assert_eq!(
                occurrence_count(s, pattern),
                brute_force_count(s, pattern),
                "count mismatch for {pattern:?} in {s:?}"
            );
        }
    }

    #[test]
    fn locates_nth_overlapping_occurrence() {
        assert_eq!(nth_occurrence_start("aaa", "aa", 0), 0);
        assert_eq!(nth_occurrence_start("aaa", "aa", 1), 1);
        assert_eq!(nth_occurrence_start("abcabc", "bc", 0), 1);
        assert_eq!(nth_occurrence_start("abcabc", "bc", 1), 4);
    }

    #[test]
    #[should_panic(expected = "no occurrence")]
    fn missing_occurrence_is_a_defect() {
        nth_occurrence_start("aaa", "aa", 2);
    }

    #[test]
    fn replacing_an_occurrence_with_itself_is_identity() {
        let cases = [("aaa", "aa"), ("0011", "01"), ("abababa", "aba")];
        for (s, pattern) in cases {
            for n in 0..occurrence_count(s, pattern) {
                assert_eq!(apply_at(s, pattern, pattern, n), s);
            }
        }
    }

    #[test]
    fn applies_at_requested_occurrence() {
        assert_eq!(apply_at("0011", "01", "10", 0), "0101");
        assert_eq!(apply_at("aaa", "aa", "b", 0), "ba");
        assert_eq!(apply_at("aaa", "aa", "b", 1), "ab");
        assert_eq!(apply_at("abc", "b", "", 0), "ac");
    }

    #[test]
    fn result_length_is_adjusted_by_the_replacement() {
        let rewritten = apply_at("101010", "101", "0", 0);
        assert_eq!(rewritten.len(), "101010".len() - "101".len() + "0".len());
        assert_eq!(rewritten, "0010");
    }
}
