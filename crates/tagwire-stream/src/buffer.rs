use bytes::{Buf, BufMut, BytesMut};

use crate::error::{Result, StreamError};

/// Byte offset of the discriminant in a freshly encoded envelope buffer:
/// one tag byte, then the discriminant value.
pub const DISCRIMINANT_OFFSET: usize = 1;

/// An ordered FIFO sequence of tagged bytes.
///
/// Producers append `[tag][value]` pairs at the tail; consumers pop from
/// the head. The buffer carries no field names or lengths — it is only
/// meaningful when drained left-to-right in the exact order it was filled.
///
/// Lifecycle: created empty by an [`crate::OutStream`], filled by one
/// encode pass, handed by value to an [`crate::InStream`], drained by one
/// decode pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagBuffer {
    bytes: BytesMut,
}

impl TagBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one byte at the tail.
    pub fn push(&mut self, byte: u8) {
        self.bytes.put_u8(byte);
    }

    /// Remove and return the byte at the head, if any.
    pub fn pop(&mut self) -> Option<u8> {
        if self.bytes.is_empty() {
            None
        } else {
            Some(self.bytes.get_u8())
        }
    }

    /// Read the byte at `index` without consuming anything.
    pub fn peek_at(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    /// Read the discriminant of an encoded envelope without consuming
    /// anything.
    ///
    /// Format invariant: an envelope's discriminant is always its first
    /// encoded field and tags are always one byte wide, so the discriminant
    /// sits at byte offset 1. The tag byte it skips is not validated —
    /// this is a format-aware shortcut for dispatch, not a general stream
    /// operation.
    pub fn peek_discriminant(&self) -> Result<u8> {
        self.peek_at(DISCRIMINANT_OFFSET)
            .ok_or(StreamError::BufferExhausted)
    }

    /// Number of bytes currently held.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True if no bytes are held.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Borrow the raw bytes, head first.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Drop all bytes, keeping the allocation.
    pub fn clear(&mut self) {
        self.bytes.clear();
    }
}

impl From<&[u8]> for TagBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self {
            bytes: BytesMut::from(bytes),
        }
    }
}

impl From<Vec<u8>> for TagBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self {
            bytes: BytesMut::from(&bytes[..]),
        }
    }
}
