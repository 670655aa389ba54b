use tagwire_stream::{Result, Serializable, Stream};

/// Discriminant identifying the logical message kind on the wire.
pub type MessageId = u8;

/// Couples a message discriminant with a serializable payload.
///
/// The envelope owns its payload outright. Whoever constructs it is
/// responsible for the discriminant matching the payload's actual kind;
/// the envelope never re-verifies (the [`crate::Registry`] checks this for
/// fabricated envelopes).
///
/// Wire shape: `[0x00][id]` followed immediately by the payload's
/// flattened tagged fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope<P> {
    id: MessageId,
    payload: P,
}

impl<P> Envelope<P> {
    /// Create an envelope for message kind `id` carrying `payload`.
    pub fn new(id: MessageId, payload: P) -> Self {
        Self { id, payload }
    }

    /// The message discriminant.
    pub fn id(&self) -> MessageId {
        self.id
    }

    /// Borrow the payload.
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Mutably borrow the payload.
    pub fn payload_mut(&mut self) -> &mut P {
        &mut self.payload
    }

    /// Consume the envelope and return the payload.
    pub fn into_payload(self) -> P {
        self.payload
    }
}

impl<P: Serializable> Serializable for Envelope<P> {
    /// Streams the discriminant first, then the payload as a nested
    /// serializable. Discriminant-first is a format invariant: it is what
    /// lets a receiver peek the message kind out of a buffer before the
    /// full decode runs.
    fn traverse(&mut self, s: &mut dyn Stream) -> Result<()> {
        s.byte(&mut self.id)?;
        s.nested(&mut self.payload)
    }
}
