use crate::buffer::TagBuffer;
use crate::error::Result;
use crate::stream::{Serializable, Stream};
use crate::tag::Tag;

/// Encoding stream: appends tagged values to an owned [`TagBuffer`].
///
/// One encode pass fills the buffer; [`OutStream::take_buffer`] hands it
/// off for decoding and leaves the stream empty for reuse.
#[derive(Debug, Default)]
pub struct OutStream {
    buffer: TagBuffer,
}

impl OutStream {
    /// Create an encoding stream over a fresh, empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the bytes accumulated so far.
    pub fn buffer(&self) -> &TagBuffer {
        &self.buffer
    }

    /// Move the accumulated buffer out, leaving the stream empty.
    pub fn take_buffer(&mut self) -> TagBuffer {
        std::mem::take(&mut self.buffer)
    }

    /// Discard everything accumulated so far.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }
}

impl Stream for OutStream {
    fn byte(&mut self, v: &mut u8) -> Result<()> {
        self.buffer.push(Tag::UnsignedByte.as_byte());
        self.buffer.push(*v);
        Ok(())
    }

    fn nested(&mut self, obj: &mut dyn Serializable) -> Result<()> {
        obj.traverse(self)
    }
}
