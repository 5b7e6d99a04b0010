//! Sentinel detection with terminator-scan comparison semantics.
//!
//! The stop line is matched by a comparison that walks both operands in
//! lockstep and stops at the first position where either byte is zero or
//! the bytes differ. That is deliberately *not* whole-slice equality: bytes
//! past the first zero never participate, so two operands that agree up to
//! a shared zero byte compare equal even when they differ afterwards. The
//! capture loop keeps the check exact anyway, because it always compares
//! the line buffer's zero-filled backing array, where a read of `quit\n` is
//! followed only by zeros. Callers that need true byte equality should not
//! reach for this function.

/// The input line that stops the capture: `quit` plus a newline.
pub const SENTINEL: &[u8] = b"quit\n";

/// Compare two byte strings, treating a zero byte (or the end of a slice)
/// as a terminator.
///
/// Scans `a` and `b` in lockstep and stops at the first position where
/// either operand terminates or the bytes differ. Returns the signed
/// difference of the byte values at the stop position; zero means both
/// operands held the same bytes and terminated at the same offset. Only
/// the zero/nonzero distinction is load-bearing for the capture loop.
pub fn nul_terminated_cmp(a: &[u8], b: &[u8]) -> i32 {
    let mut i = 0;
    loop {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        if x == 0 || y == 0 || x != y {
            return i32::from(x) - i32::from(y);
        }
        i += 1;
    }
}

/// True when `line` holds exactly the sentinel, optionally followed by a
/// zero terminator (the line buffer's zero fill).
pub fn is_sentinel(line: &[u8]) -> bool {
    nul_terminated_cmp(line, SENTINEL) == 0
}
