#![forbid(missing_docs)]
//! # `hlscan`
//! The `hlscan` crate is a library that provides a fast lexical scanner for syntax highlighting
//! of C-family source code.
//! It is designed to be used in text editors, code viewers or any other tool that has to color
//! source code quickly while the user types.
//! The scanner classifies every token of a source in a single pass over its bytes and
//! looks up identifiers in the keyword and datatype sets of a language. The highlight parser then
//! merges consecutive tokens of the same color into runs that a renderer can paint directly.
//!
//! Built-in word sets exist for C, Java and GLSL. Other languages with a C-like lexical structure
//! can be added with a [`LanguageDefinition`].
//!
//! # Example
//! ```rust
//! use hlscan::{HighlightParser, Language, SourceBuffer};
//!
//! const INPUT: &str = r#"
//! // Entry point
//! public static void main(String[] args) {
//!     int answer = 0x2A;
//!     System.out.println("answer: " + answer);
//! }
//! "#;
//!
//! fn main() {
//!     let parser = HighlightParser::new(Language::Java);
//!     let runs = parser
//!         .parse(&SourceBuffer::from(INPUT))
//!         .expect("Highlighting error");
//!     for span in runs.spans(INPUT.len()) {
//!         println!("{:>9}: {:?}", span.color, &INPUT[span.range]);
//!     }
//! }
//! ```
//!
//! The tokens themselves are available from a [`Scanner`]:
//! ```rust
//! use hlscan::{ScannerBuilder, Language, SourceBuffer, TokenKind};
//!
//! let scanner = ScannerBuilder::new()
//!     .language(Language::C)
//!     .build()
//!     .expect("ScannerBuilder error");
//! let tokens = scanner.tokenize(&SourceBuffer::from("unsigned x >>= 2;")).unwrap();
//! let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind()).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Datatype,
//!         TokenKind::Identifier,
//!         TokenKind::Assignment,
//!         TokenKind::IntegerDecimal,
//!         TokenKind::Semicolon,
//!     ]
//! );
//! ```
//!
//! # Crate features
//! The crate has the following features:
//! - `serde`: Enabled by default. Serialization of tokens, runs, configurations and language
//!   definitions. Language definitions can be read from JSON.
//!
//! - `dot_writer`: Enabled by default. Rendering of language dictionaries in graphviz dot format
//!   for debugging.

/// Module with the dictionary trait and the language dictionary
mod dictionary;
pub use dictionary::{Dictionary, LanguageDictionary};

/// Module with the dictionary registry
mod dictionary_registry;
pub use dictionary_registry::DictionaryRegistry;

/// Module with error definitions
mod errors;
pub use errors::{HlError, HlErrorKind, Result};

/// Module that provides the highlight colors
mod highlight_color;
pub use highlight_color::HighlightColor;

/// The module with the highlight parser.
mod highlight_parser;
pub use highlight_parser::{encode, HighlightParser};

/// Module that provides the colored runs
mod highlight_runs;
pub use highlight_runs::{HighlightRun, HighlightRuns, HighlightSpan, HighlightSpans, REST_OF_INPUT};

/// The module with internal implementation details.
mod internal;

/// Module with the built-in languages
mod language;
pub use language::{Language, LanguageDefinition};

/// The module with the scanner.
mod scanner;
pub use scanner::{tokenize, Scanner};

/// The module with the scanner builder.
mod scanner_builder;
pub use scanner_builder::ScannerBuilder;

/// The module with the scanner configuration.
mod scanner_config;
pub use scanner_config::{NonAsciiPolicy, ScannerConfig};

/// Module that provides a SourceBuffer type
mod source_buffer;
pub use source_buffer::SourceBuffer;

/// Module that provides a Token type
mod token;
pub use token::Token;

/// Module that provides the token buffer
mod token_buffer;
pub use token_buffer::TokenBuffer;

/// Module that provides the token kinds
mod token_kind;
pub use token_kind::{TokenClass, TokenKind};

/// Module with the prefix tree
mod trie;
pub use trie::Trie;
