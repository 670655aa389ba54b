use crate::error::Result;

/// The wire format version reported by every stream. There is no format
/// negotiation or multi-version decode path.
pub const FORMAT_VERSION: u8 = 1;

/// Direction-agnostic marshalling capability.
///
/// One method per supported shape. Domain types drive the traversal order;
/// the concrete stream decides whether each call appends to or consumes
/// from the underlying [`crate::TagBuffer`]. Callers write one traversal
/// per type and it serves both encode and decode.
pub trait Stream {
    /// Marshal one unsigned byte.
    ///
    /// Encoding reads from the slot and appends a `[tag][value]` pair;
    /// decoding validates the tag at the head and writes into the slot.
    fn byte(&mut self, v: &mut u8) -> Result<()>;

    /// Marshal a nested serializable object by recursing into its
    /// traversal. No boundary tag is written: the nested object's fields
    /// are inlined flat into the parent's buffer.
    fn nested(&mut self, obj: &mut dyn Serializable) -> Result<()>;

    /// The constant format version.
    fn version(&self) -> u8 {
        FORMAT_VERSION
    }
}

/// Capability of any domain type that can pass through a [`Stream`].
///
/// Implementors must visit their own fields in one fixed, declared order,
/// identical on every call — this symmetry is what lets a single method
/// serve both directions safely. Which direction runs is decided solely by
/// the concrete stream the caller supplies.
pub trait Serializable {
    fn traverse(&mut self, s: &mut dyn Stream) -> Result<()>;
}
