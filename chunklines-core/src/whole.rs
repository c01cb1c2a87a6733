//! Whole-text reference split

use core::str::Split;

use crate::NEWLINE;

/// Split a complete text into lines in one pass
///
/// Every segment between newlines is a line, including the empty segment
/// after a trailing `\n`. Empty text therefore yields a single empty line.
/// This differs from [`LineSplitter`](crate::LineSplitter), which drops that
/// trailing empty segment.
pub fn split_whole(text: &str) -> Split<'_, char> {
    text.split(NEWLINE)
}
