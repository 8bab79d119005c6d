/// Module with the byte categories the scanner dispatches on.
mod byte_class;

/// Module with conversion to graphviz dot format
#[cfg(feature = "dot_writer")]
pub(crate) mod dot;

/// Module with the states of the scanner.
mod scan_state;
pub(crate) use scan_state::ScanState;

/// Module that provides functions and types related to scanner implementations.
pub(crate) mod scanner_impl;
pub(crate) use scanner_impl::{tokenize_with, ScannerImpl};
