//! Property tests for chunk-boundary independence of the line splitter

use chunklines_core::{compare, split_whole, Equivalence, LineSplitter};
use proptest::prelude::*;

/// Feed `text` split at the given char positions and collect every line
fn split_at(text: &str, mut cuts: Vec<usize>) -> Vec<String> {
    let boundaries: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    cuts.retain(|&c| c < boundaries.len());
    let mut offsets: Vec<usize> = cuts.into_iter().map(|c| boundaries[c]).collect();
    offsets.sort_unstable();
    offsets.dedup();

    let mut splitter = LineSplitter::new();
    let mut lines = Vec::new();
    let mut start = 0;
    for offset in offsets {
        lines.extend(splitter.feed(&text[start..offset]));
        start = offset;
    }
    lines.extend(splitter.feed(&text[start..]));
    lines.extend(splitter.finish());
    lines
}

fn reference(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = split_whole(text).collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

fn text_strategy() -> impl Strategy<Value = String> {
    // Newline-heavy alphabet so boundaries land on terminators often
    proptest::string::string_regex("[ab\\n\\r é日]{0,64}").unwrap()
}

proptest! {
    #[test]
    fn prop_any_partition_matches_reference(
        text in text_strategy(),
        cuts in proptest::collection::vec(0usize..64, 0..16),
    ) {
        prop_assert_eq!(split_at(&text, cuts), reference(&text));
    }

    #[test]
    fn prop_single_char_chunks_match_one_chunk(text in text_strategy()) {
        let all_cuts: Vec<usize> = (0..text.chars().count()).collect();
        prop_assert_eq!(split_at(&text, all_cuts), split_at(&text, Vec::new()));
    }

    #[test]
    fn prop_no_data_loss(
        text in text_strategy(),
        cuts in proptest::collection::vec(0usize..64, 0..16),
    ) {
        let lines = split_at(&text, cuts);
        let mut rebuilt = lines.join("\n");
        if text.ends_with('\n') {
            rebuilt.push('\n');
        }
        prop_assert_eq!(rebuilt, text);
    }

    #[test]
    fn prop_streamed_is_consistent_with_whole(
        text in text_strategy(),
        cuts in proptest::collection::vec(0usize..64, 0..16),
    ) {
        let streamed = split_at(&text, cuts);
        let whole: Vec<&str> = split_whole(&text).collect();
        let verdict = compare(&streamed, &whole);
        if text.is_empty() || text.ends_with('\n') {
            prop_assert_eq!(verdict, Equivalence::TrailingEmptySegment);
        } else {
            prop_assert_eq!(verdict, Equivalence::Identical);
        }
    }
}

#[test]
fn test_scenario_two_empty_lines() {
    let mut splitter = LineSplitter::new();
    let lines = splitter.feed("\n\n");
    assert_eq!(lines, vec!["", ""]);
    assert_eq!(splitter.finish(), None);
}

#[test]
fn test_large_line_across_many_chunks() {
    let long_line = "x".repeat(10_000);
    let text = format!("{long_line}\nend");

    let mut splitter = LineSplitter::new();
    let mut lines = Vec::new();
    for chunk in text.as_bytes().chunks(7) {
        lines.extend(splitter.feed(std::str::from_utf8(chunk).unwrap()));
    }
    assert_eq!(splitter.stats().peak_pending, long_line.len());
    lines.extend(splitter.finish());

    assert_eq!(lines, vec![long_line, "end".to_string()]);
}
