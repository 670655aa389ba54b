use std::collections::HashMap;

use tracing::debug;

use crate::envelope::{Envelope, MessageId};
use crate::error::{MessageError, Result};

/// Zero-argument constructor of a blank envelope for one message kind.
///
/// The produced envelope must already carry the discriminant it was
/// installed under; [`Registry::fabricate`] rejects producers that do not.
pub type Producer<P> = fn() -> Envelope<P>;

/// Maps message discriminants to envelope producers.
///
/// Registration is an explicit setup step performed before any decode
/// traffic — there is no auto-discovery and no static initialization. The
/// populated registry is handed by reference to a [`crate::Receiver`],
/// which only reads it.
#[derive(Debug)]
pub struct Registry<P> {
    lines: HashMap<MessageId, Producer<P>>,
}

impl<P> Registry<P> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            lines: HashMap::new(),
        }
    }

    /// Register a producer under a discriminant. Re-installing the same
    /// id overwrites the previous producer — last write wins.
    pub fn install(&mut self, id: MessageId, producer: Producer<P>) {
        if self.lines.insert(id, producer).is_some() {
            debug!(id, "replacing installed producer");
        }
    }

    /// Construct a blank envelope for `id`.
    ///
    /// Returns `Ok(None)` when no producer is installed — callers must
    /// check. A producer that yields an envelope carrying a different
    /// discriminant than its registration key signals a setup bug and
    /// fails with [`MessageError::RegistryInconsistency`].
    pub fn fabricate(&self, id: MessageId) -> Result<Option<Envelope<P>>> {
        let producer = match self.lines.get(&id) {
            Some(producer) => producer,
            None => return Ok(None),
        };

        let envelope = producer();
        if envelope.id() != id {
            return Err(MessageError::RegistryInconsistency {
                installed: id,
                produced: envelope.id(),
            });
        }
        Ok(Some(envelope))
    }

    /// True if a producer is installed for `id`.
    pub fn contains(&self, id: MessageId) -> bool {
        self.lines.contains_key(&id)
    }

    /// Discriminants with installed producers, sorted.
    pub fn ids(&self) -> Vec<MessageId> {
        let mut ids: Vec<MessageId> = self.lines.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Number of installed producers.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True if no producers are installed.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl<P> Default for Registry<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use tagwire_stream::{Result as StreamResult, Serializable, Stream};

    use super::*;

    #[derive(Debug, Default, PartialEq, Eq)]
    struct Blank(u8);

    impl Serializable for Blank {
        fn traverse(&mut self, s: &mut dyn Stream) -> StreamResult<()> {
            s.byte(&mut self.0)
        }
    }

    #[test]
    fn fabricate_installed_id() {
        let mut registry = Registry::new();
        registry.install(1, || Envelope::new(1, Blank::default()));

        let envelope = registry.fabricate(1).unwrap().unwrap();
        assert_eq!(envelope.id(), 1);
    }

    #[test]
    fn fabricate_unknown_id_is_none() {
        let registry: Registry<Blank> = Registry::new();
        assert!(registry.fabricate(42).unwrap().is_none());
    }

    #[test]
    fn reinstall_overwrites() {
        let mut registry = Registry::new();
        registry.install(1, || Envelope::new(1, Blank(0x11)));
        registry.install(1, || Envelope::new(1, Blank(0x22)));

        assert_eq!(registry.len(), 1);
        let envelope = registry.fabricate(1).unwrap().unwrap();
        assert_eq!(envelope.payload(), &Blank(0x22));
    }

    #[test]
    fn mismatched_producer_is_inconsistent() {
        let mut registry = Registry::new();
        registry.install(1, || Envelope::new(2, Blank::default()));

        assert!(matches!(
            registry.fabricate(1),
            Err(MessageError::RegistryInconsistency {
                installed: 1,
                produced: 2,
            })
        ));
    }

    #[test]
    fn introspection_helpers() {
        let mut registry = Registry::new();
        assert!(registry.is_empty());

        registry.install(5, || Envelope::new(5, Blank::default()));
        registry.install(2, || Envelope::new(2, Blank::default()));

        assert!(registry.contains(5));
        assert!(!registry.contains(7));
        assert_eq!(registry.ids(), vec![2, 5]);
        assert_eq!(registry.len(), 2);
    }
}
