use tagwire_stream::{InStream, Serializable, TagBuffer};
use tracing::debug;

use crate::envelope::Envelope;
use crate::error::{MessageError, Result};
use crate::registry::Registry;

/// Reconstructs envelopes from tagged byte buffers.
///
/// The payload type is not known statically: the receiver peeks the
/// discriminant out of the buffer, asks its registry to fabricate a blank
/// envelope of the right concrete shape, then runs the envelope's own
/// decode traversal to populate it.
#[derive(Debug)]
pub struct Receiver<'a, P> {
    registry: &'a Registry<P>,
}

impl<'a, P: Serializable> Receiver<'a, P> {
    /// Create a receiver dispatching through `registry`.
    pub fn new(registry: &'a Registry<P>) -> Self {
        Self { registry }
    }

    /// Decode `buffer` into a fully populated envelope.
    ///
    /// The discriminant is read twice: once via peek for dispatch, once by
    /// the normal decode traversal for the field value. Both reads hit the
    /// same fixed buffer position, so they agree by construction.
    pub fn package(&self, buffer: TagBuffer) -> Result<Envelope<P>> {
        let id = buffer.peek_discriminant()?;
        debug!(id, len = buffer.len(), "dispatching received buffer");

        let mut envelope = self
            .registry
            .fabricate(id)?
            .ok_or(MessageError::UnknownMessageId(id))?;

        let mut input = InStream::new(buffer);
        envelope.traverse(&mut input)?;
        Ok(envelope)
    }
}
