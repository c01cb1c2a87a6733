//! Incremental line splitting over arbitrarily chunked text
//!
//! This crate holds the one piece of the workspace with a real correctness
//! contract: turning a sequence of text chunks, whose boundaries may fall
//! anywhere relative to line terminators, into the exact sequence of logical
//! lines the concatenated text contains.
//!
//! # Components
//!
//! - [`LineSplitter`]: the streaming splitter. Memory stays proportional to
//!   the longest line, not to the input size.
//! - [`split_whole`]: the whole-text reference split used by the non-streaming
//!   strategy. It keeps a trailing empty segment when the text ends with `\n`.
//! - [`compare`]: checks streamed output against the whole-text reference and
//!   names the trailing-empty-segment difference explicitly.
//!
//! Only `\n` is recognised as a line terminator. A `\r` before it stays part
//! of the line.
//!
//! # Example
//!
//! ```rust
//! use chunklines_core::LineSplitter;
//!
//! let mut splitter = LineSplitter::new();
//! assert_eq!(splitter.feed("a\nb"), vec!["a"]);
//! assert_eq!(splitter.feed(" \nc"), vec!["b "]);
//! assert_eq!(splitter.finish(), Some("c".to_string()));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod compare;
pub mod splitter;
pub mod whole;

pub use compare::{compare, Equivalence};
pub use splitter::{LineSplitter, SplitterStats};
pub use whole::split_whole;

/// The only recognised line terminator
pub const NEWLINE: char = '\n';
