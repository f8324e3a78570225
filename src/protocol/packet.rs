//! Command frame handling

use super::{ProtocolError, Result};

pub const FRAME_SIZE: usize = 4;
const ARG_COUNT: usize = FRAME_SIZE - 1;

/// A received command frame
pub struct Frame {
    buffer: [u8; FRAME_SIZE],
}

impl Frame {
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() != FRAME_SIZE {
            return Err(ProtocolError::InvalidPacket);
        }
        let mut buffer = [0u8; FRAME_SIZE];
        buffer.copy_from_slice(data);
        Ok(Self { buffer })
    }

    pub fn command(&self) -> u8 {
        self.buffer[0]
    }

    /// Argument `ix`, zero when out of range
    pub fn arg(&self, ix: usize) -> u8 {
        if ix < ARG_COUNT {
            self.buffer[ix + 1]
        } else {
            0
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_frame() {
        let frame = Frame::parse(&[b'm', 1, 2, 3]).unwrap();
        assert_eq!(frame.command(), b'm');
        assert_eq!(frame.arg(0), 1);
        assert_eq!(frame.arg(2), 3);
        assert_eq!(frame.arg(3), 0);
        assert_eq!(frame.as_bytes(), &[b'm', 1, 2, 3]);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!(matches!(Frame::parse(&[]), Err(ProtocolError::InvalidPacket)));
        assert!(matches!(
            Frame::parse(&[b'm', 1, 2, 3, 4]),
            Err(ProtocolError::InvalidPacket)
        ));
    }
}
