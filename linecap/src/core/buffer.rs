//! The fixed-size, zero-filled buffer that backs each line read.

/// Total buffer size in bytes, including the terminator slot.
pub const CAPACITY: usize = 1024;

/// Largest number of line bytes a single read may store. The final slot is
/// never written by a fill, so a full line is still followed by a zero.
pub const MAX_LINE_BYTES: usize = CAPACITY - 1;

/// A bounded, reusable byte buffer holding the most recently read line.
///
/// Invariant: every byte at and beyond the line length is zero. The backing
/// array starts zeroed, fills only extend the line over already-zero bytes,
/// and [`LineBuffer::reset`] re-zeroes the entire array. The sentinel
/// comparison in [`crate::core::sentinel`] leans on that invariant: it scans
/// [`LineBuffer::raw`] up to the first zero byte, so exact lines are
/// detected without tracking lengths.
#[derive(Debug, Clone)]
pub struct LineBuffer {
    bytes: [u8; CAPACITY],
    len: usize,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self {
            bytes: [0; CAPACITY],
            len: 0,
        }
    }

    /// Bytes of the current line: exactly what fills have stored since the
    /// last reset, trailing newline included when one was read.
    pub fn line(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// The whole backing array, zero fill included.
    pub fn raw(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Payload capacity left for the current line.
    pub fn spare(&self) -> usize {
        MAX_LINE_BYTES - self.len
    }

    /// Append at most [`LineBuffer::spare`] bytes from `chunk`, returning
    /// how many were copied.
    pub(crate) fn push_bytes(&mut self, chunk: &[u8]) -> usize {
        let take = chunk.len().min(self.spare());
        self.bytes[self.len..self.len + take].copy_from_slice(&chunk[..take]);
        self.len += take;
        take
    }

    /// Zero the entire backing array, not just the used prefix.
    pub fn reset(&mut self) {
        self.bytes.fill(0);
        self.len = 0;
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_zeroed_and_empty() {
        let buf = LineBuffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.spare(), MAX_LINE_BYTES);
        assert!(buf.raw().iter().all(|&b| b == 0));
        assert_eq!(buf.raw().len(), CAPACITY);
    }

    #[test]
    fn push_stores_line_and_leaves_tail_zeroed() {
        let mut buf = LineBuffer::new();
        let copied = buf.push_bytes(b"hello\n");
        assert_eq!(copied, 6);
        assert_eq!(buf.line(), b"hello\n");
        assert_eq!(buf.len(), 6);
        assert!(buf.raw()[6..].iter().all(|&b| b == 0));
    }

    #[test]
    fn push_caps_at_payload_capacity() {
        let mut buf = LineBuffer::new();
        let big = vec![b'a'; CAPACITY + 500];

        let copied = buf.push_bytes(&big);
        assert_eq!(copied, MAX_LINE_BYTES);
        assert_eq!(buf.spare(), 0);
        // The terminator slot stays zero even when the line is full.
        assert_eq!(buf.raw()[MAX_LINE_BYTES], 0);

        // A full buffer accepts nothing more.
        assert_eq!(buf.push_bytes(b"more"), 0);
        assert_eq!(buf.len(), MAX_LINE_BYTES);
    }

    #[test]
    fn push_appends_across_calls() {
        let mut buf = LineBuffer::new();
        buf.push_bytes(b"he");
        buf.push_bytes(b"llo\n");
        assert_eq!(buf.line(), b"hello\n");
    }

    #[test]
    fn reset_rezeroes_the_whole_array() {
        let mut buf = LineBuffer::new();
        buf.push_bytes(&[b'x'; MAX_LINE_BYTES]);
        buf.reset();
        assert!(buf.is_empty());
        assert!(buf.raw().iter().all(|&b| b == 0));
    }
}
