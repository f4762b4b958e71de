//! Line scanner with SIMD-accelerated newline detection.
//!
//! The renderer works strictly one physical line at a time, so the
//! lexer is a thin zero-copy iterator over lines. It uses `memchr` for
//! fast newline scanning (SIMD on supported platforms).
//!
//! A trailing newline terminates the final line rather than opening a
//! phantom empty one: `"   \n"` yields exactly one line.

use memchr::memchr;

/// A single line from the input with its source line index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// The line text (without trailing newline or carriage return).
    pub text: &'a str,
    /// Zero-based line index in the input.
    ///
    /// This is the stable key carried by the block rendered from this
    /// line.
    pub index: usize,
}

impl<'a> Line<'a> {
    /// Check if this line contains only whitespace.
    #[inline(always)]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Get the line text with leading/trailing whitespace removed.
    #[inline(always)]
    pub fn trimmed(&self) -> &'a str {
        self.text.trim()
    }
}

/// Zero-copy line iterator for the renderer.
pub struct Lexer<'a> {
    /// The complete input text.
    input: &'a str,
    /// Input as bytes for efficient scanning.
    bytes: &'a [u8],
    /// Current byte offset.
    offset: usize,
    /// Index of the next line to be read.
    index: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            offset: 0,
            index: 0,
        }
    }

    /// Consume and return the next line.
    ///
    /// Returns `None` once all input has been consumed. Uses
    /// SIMD-accelerated newline scanning via `memchr`.
    #[inline]
    pub fn next_line(&mut self) -> Option<Line<'a>> {
        if self.offset >= self.bytes.len() {
            return None;
        }

        let start = self.offset;

        let end = match memchr(b'\n', &self.bytes[start..]) {
            Some(pos) => start + pos,
            None => self.bytes.len(),
        };

        // Handle CRLF: check byte before newline is CR
        let text_end = if end > start && self.bytes[end - 1] == b'\r' {
            end - 1
        } else {
            end
        };

        // Advance past newline
        self.offset = if end < self.bytes.len() { end + 1 } else { end };

        let index = self.index;
        self.index += 1;

        Some(Line {
            // SAFETY: Input is valid UTF-8 (guaranteed by &str). We slice at byte
            // positions `start` (previous offset, always valid) and `text_end`
            // (either at a newline/CR, which are single-byte ASCII, or at input
            // end). Both are valid UTF-8 char boundaries since newlines and CRs
            // cannot appear mid-character in UTF-8.
            text: unsafe { self.input.get_unchecked(start..text_end) },
            index,
        })
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Line<'a>;

    #[inline]
    fn next(&mut self) -> Option<Line<'a>> {
        self.next_line()
    }
}
