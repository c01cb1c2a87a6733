//! Equivalence check between streamed and whole-text output

use alloc::string::{String, ToString};
use core::fmt;

/// Outcome of comparing streamed lines with the whole-text split
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Equivalence {
    /// Both sequences hold the same lines in the same order
    Identical,
    /// The whole-text split has exactly one extra empty segment at the end
    ///
    /// This is the expected difference for input ending in `\n` (or empty
    /// input): the streaming splitter does not emit the empty final segment.
    TrailingEmptySegment,
    /// The sequences disagree at `index`
    Diverged {
        /// Position of the first differing line
        index: usize,
        /// Streamed line at that position, if any
        streamed: Option<String>,
        /// Whole-text line at that position, if any
        whole: Option<String>,
    },
}

impl Equivalence {
    /// True unless the outputs genuinely diverged
    pub fn is_consistent(&self) -> bool {
        !matches!(self, Equivalence::Diverged { .. })
    }
}

impl fmt::Display for Equivalence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Equivalence::Identical => write!(f, "identical"),
            Equivalence::TrailingEmptySegment => {
                write!(f, "equivalent except for the trailing empty segment")
            }
            Equivalence::Diverged {
                index,
                streamed,
                whole,
            } => write!(
                f,
                "diverged at line {}: streamed {:?}, whole {:?}",
                index + 1,
                streamed,
                whole
            ),
        }
    }
}

/// Compare streamed lines against the whole-text reference
///
/// The trailing empty segment produced only by the whole-text split is
/// reported as [`Equivalence::TrailingEmptySegment`], never silently ignored.
pub fn compare<S, W>(streamed: &[S], whole: &[W]) -> Equivalence
where
    S: AsRef<str>,
    W: AsRef<str>,
{
    let common = streamed.len().min(whole.len());
    if let Some(index) =
        (0..common).find(|&i| streamed[i].as_ref() != whole[i].as_ref())
    {
        return Equivalence::Diverged {
            index,
            streamed: Some(streamed[index].as_ref().to_string()),
            whole: Some(whole[index].as_ref().to_string()),
        };
    }

    match whole.len().checked_sub(streamed.len()) {
        Some(0) => Equivalence::Identical,
        Some(1) if whole[common].as_ref().is_empty() => Equivalence::TrailingEmptySegment,
        _ => Equivalence::Diverged {
            index: common,
            streamed: streamed.get(common).map(|line| line.as_ref().to_string()),
            whole: whole.get(common).map(|line| line.as_ref().to_string()),
        },
    }
}
