use crate::error::{Result, StreamError};

/// One-byte type tag preceding every primitive value on the wire.
///
/// The set is closed and fixed at compile time. `Serializable` and
/// `ClassIdentifier` are reserved slots: the current format never emits
/// them (nested objects are inlined flat, and discriminants travel as
/// plain unsigned bytes), but their values are pinned so the wire format
/// has stable room for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tag {
    /// One raw byte follows.
    UnsignedByte = 0,
    /// Reserved boundary marker for nested objects. Never emitted.
    Serializable = 1,
    /// Reserved tag for discriminant values. Never emitted.
    ClassIdentifier = 2,
}

impl Tag {
    /// Decode a tag from its wire byte.
    pub fn from_byte(byte: u8) -> Result<Self> {
        match byte {
            0 => Ok(Tag::UnsignedByte),
            1 => Ok(Tag::Serializable),
            2 => Ok(Tag::ClassIdentifier),
            _ => Err(StreamError::UnknownTag(byte)),
        }
    }

    /// The wire byte for this tag.
    pub fn as_byte(self) -> u8 {
        self as u8
    }
}
