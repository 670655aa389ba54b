//! Self-describing tagged binary serialization with polymorphic message
//! envelopes.
//!
//! tagwire converts heterogeneous domain objects to a byte stream and
//! reconstructs them on a receiver that does not know the concrete type in
//! advance — the type is recovered from a discriminant embedded in the
//! stream.
//!
//! # Crate Structure
//!
//! - [`stream`] — Tagged byte marshalling: [`stream::TagBuffer`],
//!   [`stream::OutStream`], [`stream::InStream`], the direction-agnostic
//!   [`stream::Stream`] trait and the [`stream::Serializable`] capability
//! - [`message`] — Envelopes, the producer [`message::Registry`], and the
//!   [`message::Sender`]/[`message::Receiver`] pair

/// Re-export stream types.
pub mod stream {
    pub use tagwire_stream::*;
}

/// Re-export message types.
pub mod message {
    pub use tagwire_message::*;
}
