//! Module with the source buffer type.
//! The source buffer is a read-only view on the raw bytes of the text to highlight.

/// A read-only, fixed-length sequence of bytes that is scanned for tokens.
///
/// The buffer borrows the text from the caller. It is never mutated or grown by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceBuffer<'s> {
    bytes: &'s [u8],
}

impl<'s> SourceBuffer<'s> {
    /// Create a new source buffer from raw bytes.
    pub fn new(bytes: &'s [u8]) -> Self {
        Self { bytes }
    }

    /// Get the byte at the given offset.
    ///
    /// # Panics
    /// Panics if the offset is out of bounds.
    #[inline]
    pub fn get(&self, offset: usize) -> u8 {
        self.bytes[offset]
    }

    /// Get the length of the buffer in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Get the underlying bytes.
    #[inline]
    pub fn as_bytes(&self) -> &'s [u8] {
        self.bytes
    }

    /// Get the text in the given byte range.
    /// Bytes that are not valid UTF-8 are replaced, the range is clamped to the buffer.
    pub fn text(&self, start: usize, end: usize) -> std::borrow::Cow<'s, str> {
        let end = end.min(self.bytes.len());
        let start = start.min(end);
        String::from_utf8_lossy(&self.bytes[start..end])
    }
}

impl<'s> From<&'s str> for SourceBuffer<'s> {
    fn from(text: &'s str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl<'s> From<&'s [u8]> for SourceBuffer<'s> {
    fn from(bytes: &'s [u8]) -> Self {
        Self::new(bytes)
    }
}

impl<'s> From<&'s String> for SourceBuffer<'s> {
    fn from(text: &'s String) -> Self {
        Self::new(text.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_buffer() {
        let source = SourceBuffer::from("int a;");
        assert_eq!(source.len(), 6);
        assert!(!source.is_empty());
        assert_eq!(source.get(0), b'i');
        assert_eq!(source.text(4, 5), "a");
        assert_eq!(source.text(4, 100), "a;");
        assert_eq!(source.text(9, 100), "");
    }
}
