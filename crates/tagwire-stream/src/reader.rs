use tracing::debug;

use crate::buffer::TagBuffer;
use crate::error::{Result, StreamError};
use crate::stream::{Serializable, Stream};
use crate::tag::Tag;

/// Decoding stream: consumes tagged values from the head of a [`TagBuffer`].
///
/// Takes the buffer by value — ownership moves from the encoder to the
/// decoder, never shared. Callers must decode fields in the exact order
/// they were encoded; a tag that does not match the requested kind is a
/// hard format error.
#[derive(Debug)]
pub struct InStream {
    buffer: TagBuffer,
}

impl InStream {
    /// Create a decoding stream bound to `buffer`.
    pub fn new(buffer: TagBuffer) -> Self {
        Self { buffer }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buffer.len()
    }

    fn pop(&mut self) -> Result<u8> {
        self.buffer.pop().ok_or(StreamError::BufferExhausted)
    }
}

impl Stream for InStream {
    fn byte(&mut self, v: &mut u8) -> Result<()> {
        let tag = self.pop()?;
        if tag != Tag::UnsignedByte.as_byte() {
            debug!(found = tag, "tag mismatch while decoding unsigned byte");
            return Err(StreamError::TagMismatch {
                expected: Tag::UnsignedByte,
                found: tag,
            });
        }
        *v = self.pop()?;
        Ok(())
    }

    fn nested(&mut self, obj: &mut dyn Serializable) -> Result<()> {
        obj.traverse(self)
    }
}
