use crate::envelope::MessageId;

/// Errors that can occur while packaging or reconstructing messages.
#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    /// Format violation or truncation bubbled up from the stream layer.
    #[error("stream error: {0}")]
    Stream(#[from] tagwire_stream::StreamError),

    /// No producer is installed for a peeked discriminant. Reconstruction
    /// of the message aborts; no partial decode is attempted.
    #[error("unknown message id {0}")]
    UnknownMessageId(MessageId),

    /// An envelope was asked for a payload it does not carry.
    #[error("envelope has no payload")]
    MissingPayload,

    /// A producer constructed an envelope whose discriminant disagrees
    /// with the key it was installed under. A setup bug, not a data
    /// problem.
    #[error("registry inconsistency (installed under id {installed}, producer yields id {produced})")]
    RegistryInconsistency {
        installed: MessageId,
        produced: MessageId,
    },
}

pub type Result<T> = std::result::Result<T, MessageError>;
