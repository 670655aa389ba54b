//! Self-describing tagged byte marshalling with symmetric encode/decode streams.
//!
//! This is the wire layer of tagwire. Every primitive value is written as a
//! `[tag][value]` pair; nested objects are inlined flat in their declared
//! traversal order. One traversal method per domain type serves both
//! directions — the concrete stream ([`OutStream`] or [`InStream`]) decides
//! whether fields are appended or consumed.
//!
//! No length prefixes, no end markers, no checksums.

pub mod buffer;
pub mod error;
pub mod reader;
pub mod stream;
pub mod tag;
pub mod writer;

pub use buffer::TagBuffer;
pub use error::{Result, StreamError};
pub use reader::InStream;
pub use stream::{Serializable, Stream, FORMAT_VERSION};
pub use tag::Tag;
pub use writer::OutStream;
