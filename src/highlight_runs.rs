//! Module with the run-length encoded highlighting of a source.
//!
//! A [`HighlightRuns`] value is a sequence of `(color, length)` pairs. The runs are contiguous and
//! start at offset 0. The last run has a length that reaches up to [`REST_OF_INPUT`] so a renderer
//! never needs the length of the source to paint the tail. [`HighlightRuns::spans`] clamps the runs
//! to the real source length.

use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::HighlightColor;

/// The length of the last run. Sources must not be longer than this.
pub const REST_OF_INPUT: usize = i32::MAX as usize;

/// A run of bytes that share one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HighlightRun {
    /// The color of the run.
    pub color: HighlightColor,
    /// The number of bytes in the run.
    pub length: usize,
}

impl HighlightRun {
    /// Creates a new run.
    pub fn new(color: HighlightColor, length: usize) -> Self {
        Self { color, length }
    }
}

/// The colored runs of a source, with a cursor for renderers that walk them one by one.
///
/// The cursor starts before the first run. [`HighlightRuns::next_run`] moves it forward, the
/// `run_*` accessors read the run under it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HighlightRuns {
    runs: Vec<HighlightRun>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pointer: Option<usize>,
}

impl HighlightRuns {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            runs: Vec::with_capacity(capacity),
            pointer: None,
        }
    }

    pub(crate) fn push(&mut self, color: HighlightColor, length: usize) {
        self.runs.push(HighlightRun::new(color, length));
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        self.runs.shrink_to_fit();
    }

    /// Moves the cursor before the first run.
    pub fn rewind(&mut self) {
        self.pointer = None;
    }

    /// Moves the cursor to the next run. Returns false if there is none.
    pub fn next_run(&mut self) -> bool {
        if self.has_next() {
            self.pointer = Some(self.pointer.map_or(0, |p| p + 1));
            true
        } else {
            false
        }
    }

    /// Checks if there is a run after the cursor.
    pub fn has_next(&self) -> bool {
        self.pointer.map_or(0, |p| p + 1) < self.runs.len()
    }

    /// The index of the run under the cursor, `None` before the first call to
    /// [`HighlightRuns::next_run`].
    pub fn run_index(&self) -> Option<usize> {
        self.pointer
    }

    fn current(&self) -> Option<&HighlightRun> {
        self.pointer.and_then(|p| self.runs.get(p))
    }

    /// The length of the run under the cursor, 0 if the cursor is before the first run.
    pub fn run_length(&self) -> usize {
        self.current().map_or(0, |run| run.length)
    }

    /// The color of the run under the cursor, [`HighlightColor::Default`] if the cursor is before
    /// the first run.
    pub fn run_color(&self) -> HighlightColor {
        self.current().map_or(HighlightColor::Default, |run| run.color)
    }

    /// Iterates over all runs regardless of the cursor.
    pub fn iter(&self) -> std::slice::Iter<'_, HighlightRun> {
        self.runs.iter()
    }

    /// The runs as a slice.
    pub fn runs(&self) -> &[HighlightRun] {
        &self.runs
    }

    /// The number of runs.
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Checks if there are no runs. An encoded source always has at least one run.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Iterates over the runs as byte ranges of a source with the given length.
    /// The last run is cut at the end of the source and runs past it are skipped.
    pub fn spans(&self, source_len: usize) -> HighlightSpans<'_> {
        HighlightSpans {
            runs: self.runs.iter(),
            offset: 0,
            source_len,
        }
    }
}

impl<'a> IntoIterator for &'a HighlightRuns {
    type Item = &'a HighlightRun;
    type IntoIter = std::slice::Iter<'a, HighlightRun>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.iter()
    }
}

/// A colored byte range of a source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HighlightSpan {
    /// The color of the range.
    pub color: HighlightColor,
    /// The byte range in the source.
    pub range: Range<usize>,
}

/// An iterator over the colored ranges of a source, see [`HighlightRuns::spans`].
#[derive(Debug, Clone)]
pub struct HighlightSpans<'a> {
    runs: std::slice::Iter<'a, HighlightRun>,
    offset: usize,
    source_len: usize,
}

impl Iterator for HighlightSpans<'_> {
    type Item = HighlightSpan;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.offset >= self.source_len {
                return None;
            }
            let run = self.runs.next()?;
            let start = self.offset;
            let end = start.saturating_add(run.length).min(self.source_len);
            self.offset = end;
            if start < end {
                return Some(HighlightSpan {
                    color: run.color,
                    range: start..end,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runs(pairs: &[(HighlightColor, usize)]) -> HighlightRuns {
        let mut runs = HighlightRuns::with_capacity(pairs.len());
        for (color, length) in pairs {
            runs.push(*color, *length);
        }
        runs
    }

    #[test]
    fn test_cursor() {
        let mut runs = runs(&[
            (HighlightColor::Keywords, 3),
            (HighlightColor::Default, REST_OF_INPUT - 3),
        ]);
        assert_eq!(runs.run_index(), None);
        assert_eq!(runs.run_length(), 0);
        assert!(runs.has_next());
        assert!(runs.next_run());
        assert_eq!(runs.run_index(), Some(0));
        assert_eq!(runs.run_color(), HighlightColor::Keywords);
        assert_eq!(runs.run_length(), 3);
        assert!(runs.next_run());
        assert_eq!(runs.run_color(), HighlightColor::Default);
        assert!(!runs.has_next());
        assert!(!runs.next_run());
        assert_eq!(runs.run_index(), Some(1));
        runs.rewind();
        assert_eq!(runs.run_index(), None);
        assert!(runs.next_run());
        assert_eq!(runs.run_length(), 3);
    }

    #[test]
    fn test_empty_runs_cursor() {
        let mut runs = HighlightRuns::default();
        assert!(runs.is_empty());
        assert!(!runs.has_next());
        assert!(!runs.next_run());
        assert_eq!(runs.run_color(), HighlightColor::Default);
    }

    #[test]
    fn test_spans_are_clamped() {
        let runs = runs(&[
            (HighlightColor::Default, 0),
            (HighlightColor::Keywords, 6),
            (HighlightColor::Default, 1),
            (HighlightColor::Numbers, REST_OF_INPUT - 7),
        ]);
        let spans: Vec<_> = runs.spans(9).collect();
        assert_eq!(
            spans,
            vec![
                HighlightSpan {
                    color: HighlightColor::Keywords,
                    range: 0..6
                },
                HighlightSpan {
                    color: HighlightColor::Default,
                    range: 6..7
                },
                HighlightSpan {
                    color: HighlightColor::Numbers,
                    range: 7..9
                },
            ]
        );
        assert_eq!(runs.spans(0).count(), 0);
        assert_eq!(runs.spans(4).count(), 1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_runs_serialization() {
        let runs = runs(&[(HighlightColor::Comments, 4), (HighlightColor::Default, 9)]);
        let serialized = serde_json::to_string(&runs).unwrap();
        assert_eq!(
            serialized,
            r#"{"runs":[{"color":"Comments","length":4},{"color":"Default","length":9}]}"#
        );
        let deserialized: HighlightRuns = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, runs);
    }
}
