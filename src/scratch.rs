//! Single growable byte arena used to assemble string and output bytes.
//!
//! Both the parser (decoding string escapes) and the generator (writing
//! output) append bytes here instead of allocating per-fragment. The C
//! shape of this component is `push(n)` returning a writable region and
//! `pop(n)` returning the most recently pushed region; the safe-Rust
//! equivalent used here is `mark()`/`pop_to(mark)`, built on `Vec::split_off`.

use alloc::string::String;
use alloc::vec::Vec;

/// A single-owner, single-threaded append buffer.
///
/// Reset to empty between top-level parse/stringify calls simply by being
/// constructed fresh for each one — there is no shared or reused instance.
#[derive(Debug, Default)]
pub struct Scratch {
    buf: Vec<u8>,
}

impl Scratch {
    /// Create an empty scratch buffer. No allocation happens until the first push.
    pub fn new() -> Self {
        Scratch { buf: Vec::new() }
    }

    /// Number of bytes currently held (the C `top` cursor).
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True if nothing has been pushed (or everything pushed has been popped).
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Append one byte, growing the backing allocation as needed.
    pub fn push_byte(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    /// Append a slice of bytes verbatim.
    pub fn push_slice(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Append a `str`'s UTF-8 bytes verbatim.
    pub fn push_str(&mut self, s: &str) {
        self.buf.extend_from_slice(s.as_bytes());
    }

    /// Snapshot the current length, to later `pop_to` back to this point.
    pub fn mark(&self) -> usize {
        self.buf.len()
    }

    /// Remove and return everything pushed since `mark`, in push order.
    ///
    /// Panics if `mark` is past the current length — the same contract as
    /// the C `pop(n)` asserting `top >= n`.
    pub fn pop_to(&mut self, mark: usize) -> Vec<u8> {
        assert!(mark <= self.buf.len(), "scratch buffer: pop past top");
        self.buf.split_off(mark)
    }

    /// Remove and return everything pushed since `mark` as a `String`.
    ///
    /// Panics if the popped bytes are not valid UTF-8 — callers only use
    /// this after pushing known-UTF-8 content (decoded string escapes or
    /// generator output), so this is an invariant violation, not user error.
    pub fn pop_string(&mut self, mark: usize) -> String {
        String::from_utf8(self.pop_to(mark)).expect("scratch buffer: popped bytes were not UTF-8")
    }

    /// Consume the buffer, returning everything pushed so far.
    pub fn finish(self) -> Vec<u8> {
        self.buf
    }

    /// Consume the buffer, returning everything pushed so far as a `String`.
    pub fn finish_string(self) -> String {
        String::from_utf8(self.buf).expect("scratch buffer: final bytes were not UTF-8")
    }
}

#[test]
fn push_and_pop_round_trips() {
    let mut s = Scratch::new();
    let mark = s.mark();
    s.push_slice(b"hello");
    assert_eq!(s.len(), 5);
    let popped = s.pop_to(mark);
    assert_eq!(popped, b"hello");
    assert_eq!(s.len(), 0);
}

#[test]
fn nested_marks_preserve_earlier_content() {
    let mut s = Scratch::new();
    s.push_str("outer-");
    let mark = s.mark();
    s.push_str("inner");
    let inner = s.pop_string(mark);
    assert_eq!(inner, "inner");
    assert_eq!(s.len(), "outer-".len());
}
