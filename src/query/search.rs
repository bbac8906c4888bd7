// SPDX-FileCopyrightText: 2026 Iris Authors
// SPDX-License-Identifier: LicenseRef-Iris-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Iris and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Case-insensitive substring search producing match spans for highlighting.

use memchr::memmem;

use super::MatchSpan;

/// Upper bound on matches per call. Keeps a pathological query (say, one that
/// hits every character of a huge document) from stalling the interaction
/// thread; matches beyond the cap are simply not reported.
pub const SEARCH_MATCH_CAP: usize = 5000;

/// All non-overlapping, case-insensitive occurrences of `query` in `text`,
/// left to right, as char-offset spans. An empty query disables search and
/// yields no matches.
pub fn find_matches(text: &str, query: &str) -> Vec<MatchSpan> {
    find_matches_capped(text, query, SEARCH_MATCH_CAP)
}

pub(crate) fn find_matches_capped(text: &str, query: &str, cap: usize) -> Vec<MatchSpan> {
    if query.is_empty() || cap == 0 {
        return Vec::new();
    }

    if text.is_ascii() && query.is_ascii() {
        find_matches_ascii(text, query, cap)
    } else {
        find_matches_folded(text, query, cap)
    }
}

/// ASCII fast path: byte offsets and char offsets coincide, so the lowered
/// buffers can go straight through a substring searcher.
fn find_matches_ascii(text: &str, query: &str, cap: usize) -> Vec<MatchSpan> {
    let haystack = text.to_ascii_lowercase();
    let needle = query.to_ascii_lowercase();

    let mut spans = Vec::new();
    for start in memmem::find_iter(haystack.as_bytes(), needle.as_bytes()) {
        spans.push(MatchSpan::new(start, start + needle.len()));
        if spans.len() >= cap {
            break;
        }
    }
    spans
}

/// Unicode path: fold each char to the first char of its lowercase mapping so
/// offsets stay one-to-one with the input chars, then scan.
fn find_matches_folded(text: &str, query: &str, cap: usize) -> Vec<MatchSpan> {
    let haystack: Vec<char> = text.chars().map(fold_char).collect();
    let needle: Vec<char> = query.chars().map(fold_char).collect();

    let mut spans = Vec::new();
    let mut at = 0;
    while at + needle.len() <= haystack.len() {
        if haystack[at..at + needle.len()] == needle[..] {
            spans.push(MatchSpan::new(at, at + needle.len()));
            if spans.len() >= cap {
                break;
            }
            at += needle.len();
        } else {
            at += 1;
        }
    }
    spans
}

fn fold_char(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

#[cfg(test)]
mod tests {
    use super::{find_matches, find_matches_capped};
    use crate::query::MatchSpan;

    #[test]
    fn empty_query_yields_nothing() {
        assert!(find_matches("anything at all", "").is_empty());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let spans = find_matches("Hello hello HELLO", "hello");
        assert_eq!(
            spans,
            vec![MatchSpan::new(0, 5), MatchSpan::new(6, 11), MatchSpan::new(12, 17)]
        );
    }

    #[test]
    fn matches_do_not_overlap() {
        // "aaaa" contains three overlapping "aa"s but only two non-overlapping ones.
        assert_eq!(find_matches("aaaa", "aa"), vec![MatchSpan::new(0, 2), MatchSpan::new(2, 4)]);
    }

    #[test]
    fn cap_bounds_the_result() {
        let text = "a".repeat(20);
        assert_eq!(find_matches_capped(&text, "a", 5).len(), 5);
    }

    #[test]
    fn unicode_offsets_are_char_based() {
        // The two-char prefix "αβ" shifts byte offsets but not char offsets.
        let spans = find_matches("αβ FOO αβ foo", "foo");
        assert_eq!(spans, vec![MatchSpan::new(3, 6), MatchSpan::new(10, 13)]);
    }

    #[test]
    fn no_match_when_query_longer_than_text() {
        assert!(find_matches("ab", "abc").is_empty());
    }
}
