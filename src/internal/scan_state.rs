/// The states of the scanner.
///
/// The scanner starts in [`ScanState::NextToken`]. Each state consumes bytes of the current
/// token and names the state to continue with. Every token ends by returning to
/// [`ScanState::NextToken`], which closes the token and dispatches on the first byte of the next
/// one. [`ScanState::Done`] is reached at the end of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanState {
    /// Close the current token, skip whitespace and dispatch on the next byte.
    NextToken,
    /// Consume identifier characters.
    Letters,
    /// Classify the identifier just consumed.
    Identifier,
    /// Consume the integer part of a number.
    Numerals,
    /// Continue a number after `.`.
    Decimal,
    /// Continue a number after `0x`.
    Hexadecimal,
    /// Continue a number after `0b`.
    Binary,
    /// Continue a number after `e`.
    Exponential,
    /// Operators starting with a byte in 33 to 47.
    SymbolsA,
    /// Operators starting with a byte in 58 to 64.
    SymbolsB,
    /// Operators starting with a byte in 91 to 96.
    SymbolsC,
    /// Operators starting with a byte in 123 to 127.
    SymbolsD,
    /// Consume a string literal.
    String,
    /// Consume a char literal.
    Char,
    /// Consume a comment up to the end of the line.
    LineComment,
    /// Consume a comment up to `*/`.
    BlockComment,
    /// The input is exhausted.
    Done,
}
