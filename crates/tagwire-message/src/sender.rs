use tagwire_stream::{OutStream, Serializable, TagBuffer};

use crate::envelope::Envelope;
use crate::error::Result;

/// Encodes envelopes into tagged byte buffers.
#[derive(Debug, Default)]
pub struct Sender {
    output: OutStream,
}

impl Sender {
    /// Create a sender with a fresh encoding stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode `message` and return the produced bytes.
    ///
    /// The internal stream is drained by the hand-off, so consecutive
    /// calls yield independent buffers.
    pub fn package<P: Serializable>(&mut self, message: &mut Envelope<P>) -> Result<TagBuffer> {
        message.traverse(&mut self.output)?;
        Ok(self.output.take_buffer())
    }
}

#[cfg(test)]
mod tests {
    use tagwire_stream::{Result as StreamResult, Serializable, Stream};

    use super::*;

    #[derive(Debug, Default, PartialEq, Eq)]
    struct BytePair {
        first: u8,
        second: u8,
    }

    impl Serializable for BytePair {
        fn traverse(&mut self, s: &mut dyn Stream) -> StreamResult<()> {
            s.byte(&mut self.first)?;
            s.byte(&mut self.second)
        }
    }

    #[test]
    fn package_produces_wire_bytes() {
        let mut sender = Sender::new();
        let mut message = Envelope::new(
            1,
            BytePair {
                first: 0x55,
                second: 0xAA,
            },
        );

        let buf = sender.package(&mut message).unwrap();
        assert_eq!(buf.as_slice(), &[0x00, 0x01, 0x00, 0x55, 0x00, 0xAA]);
    }

    #[test]
    fn consecutive_packages_are_independent() {
        let mut sender = Sender::new();

        let first = sender
            .package(&mut Envelope::new(1, BytePair::default()))
            .unwrap();
        let second = sender
            .package(&mut Envelope::new(
                2,
                BytePair {
                    first: 0x01,
                    second: 0x02,
                },
            ))
            .unwrap();

        assert_eq!(first.as_slice(), &[0x00, 0x01, 0x00, 0x00, 0x00, 0x00]);
        assert_eq!(second.as_slice(), &[0x00, 0x02, 0x00, 0x01, 0x00, 0x02]);
    }
}
