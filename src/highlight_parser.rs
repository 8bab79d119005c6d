//! Module with the highlight parser and the run encoder.
//!
//! The encoder walks the finished tokens of a source and merges consecutive tokens of the same
//! color into one run. Whitespace and everything else between two tokens is colored like the
//! token before it. The first run starts at offset 0 and has the color of the first token.

use log::{debug, trace};

use crate::{
    HighlightColor, HighlightRuns, Language, Result, Scanner, SourceBuffer, TokenBuffer,
    REST_OF_INPUT,
};

/// The minimum number of runs reserved for a non-empty token buffer.
const MIN_RUN_CAPACITY: usize = 128;

/// Encodes the tokens of a source as colored runs.
///
/// The result has at least one run. The lengths of all runs add up to [`REST_OF_INPUT`].
/// Token starts are expected in ascending order. A start before the current run, or beyond
/// [`REST_OF_INPUT`], is clamped and yields a run of length 0.
pub fn encode(tokens: &TokenBuffer) -> HighlightRuns {
    let mut iter = tokens.iter();
    let Some(first) = iter.next() else {
        let mut runs = HighlightRuns::with_capacity(1);
        runs.push(HighlightColor::Default, REST_OF_INPUT);
        return runs;
    };
    let capacity = MIN_RUN_CAPACITY.max(tokens.len() * 3 / 4);
    let mut runs = HighlightRuns::with_capacity(capacity);
    let mut run_start = 0;
    let mut color = first.kind().color();
    for token in iter {
        let next_color = token.kind().color();
        if next_color != color {
            let start = token.start().clamp(run_start, REST_OF_INPUT);
            trace!("Run {} {}..{}", color, run_start, start);
            runs.push(color, start - run_start);
            color = next_color;
            run_start = start;
        }
    }
    trace!("Run {} {}..", color, run_start);
    runs.push(color, REST_OF_INPUT - run_start);
    runs.shrink_to_fit();
    debug!("Encoded {} tokens as {} runs", tokens.len(), runs.len());
    runs
}

/// Turns source code into colored runs.
///
/// A parser owns its [`Scanner`] and can be used for any number of sources.
///
/// # Example
/// ```rust
/// use hlscan::{HighlightColor, HighlightParser, Language, SourceBuffer};
///
/// let parser = HighlightParser::new(Language::Java);
/// let source = "return 42;";
/// let runs = parser.parse(&SourceBuffer::from(source)).unwrap();
/// let colors: Vec<_> = runs.spans(source.len()).map(|span| span.color).collect();
/// assert_eq!(
///     colors,
///     vec![HighlightColor::Keywords, HighlightColor::Numbers, HighlightColor::Default]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct HighlightParser {
    scanner: Scanner,
}

impl HighlightParser {
    /// Creates a parser for a built-in language, using the dictionary of the global registry.
    pub fn new(language: Language) -> Self {
        Self {
            scanner: Scanner::new(language),
        }
    }

    /// Creates a parser that uses the given scanner.
    pub fn from_scanner(scanner: Scanner) -> Self {
        Self { scanner }
    }

    /// The scanner of the parser.
    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    /// Scans the source and encodes the tokens as colored runs.
    /// The cursor of the result is rewound.
    pub fn parse(&self, source: &SourceBuffer) -> Result<HighlightRuns> {
        let tokens = self.scanner.tokenize(source)?;
        Ok(encode(&tokens))
    }
}
