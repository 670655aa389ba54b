use crate::tag::Tag;

/// Errors that can occur while marshalling tagged bytes.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// The tag at the head of the buffer does not match the kind of value
    /// the decoder was asked to populate.
    #[error("tag mismatch (expected {expected:?}, found 0x{found:02x})")]
    TagMismatch { expected: Tag, found: u8 },

    /// The byte is not a member of the tag enumeration at all.
    #[error("unknown tag byte 0x{0:02x}")]
    UnknownTag(u8),

    /// The buffer ran out of bytes mid-decode (truncated input).
    #[error("buffer exhausted (decoded past end of tagged buffer)")]
    BufferExhausted,
}

pub type Result<T> = std::result::Result<T, StreamError>;
