//! Polymorphic message envelopes with factory-based reconstruction.
//!
//! This is the dispatch layer of tagwire. An [`Envelope`] couples a one-byte
//! discriminant with a serializable payload; a [`Registry`] maps each
//! discriminant to a producer that constructs a blank envelope of the right
//! concrete shape. [`Sender`] turns envelopes into tagged bytes and
//! [`Receiver`] turns bytes back into fully populated envelopes without
//! knowing the payload type in advance — the discriminant is peeked out of
//! the buffer before the full decode runs.

pub mod envelope;
pub mod error;
pub mod receiver;
pub mod registry;
pub mod sender;

pub use envelope::{Envelope, MessageId};
pub use error::{MessageError, Result};
pub use receiver::Receiver;
pub use registry::{Producer, Registry};
pub use sender::Sender;
