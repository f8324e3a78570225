//! Console text wrapped into debug frames
//!
//! The daemon reads the link strictly in frames, so text never goes out raw.
//! Two characters travel per `d` frame, the daemon prints them into its
//! debug log. Line breaks end the current frame.

use super::{Command, Link, ProtocolError};
use embedded_hal::serial::Write;
use ufmt::uWrite;

pub struct DebugWriter<'a, S> {
    link: &'a mut Link<S>,
    pending: Option<u8>,
}

impl<'a, S: Write<u8>> DebugWriter<'a, S> {
    pub fn new(link: &'a mut Link<S>) -> Self {
        Self {
            link,
            pending: None,
        }
    }

    fn push(&mut self, byte: u8) -> Result<(), ProtocolError> {
        match self.pending.take() {
            None => {
                self.pending = Some(byte);
                Ok(())
            }
            Some(first) => self.link.send(&Command::Debug([first, byte, 0])),
        }
    }

    /// Sends a half filled frame, padded with a blank
    pub fn flush(&mut self) -> Result<(), ProtocolError> {
        match self.pending.take() {
            Some(first) => self.link.send(&Command::Debug([first, b' ', 0])),
            None => Ok(()),
        }
    }
}

impl<'a, S: Write<u8>> uWrite for DebugWriter<'a, S> {
    type Error = ProtocolError;

    fn write_str(&mut self, s: &str) -> Result<(), ProtocolError> {
        for byte in s.bytes() {
            match byte {
                b'\r' => {}
                b'\n' => self.flush()?,
                _ => self.push(byte)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::serial::{Mock as SerialMock, Transaction as SerialTransaction};
    use ufmt::uwrite;

    #[test]
    fn text_goes_out_as_debug_frames() {
        let expectations = [
            SerialTransaction::write_many([b'd', b'[', b'I', 0]),
            SerialTransaction::flush(),
            SerialTransaction::write_many([b'd', b'N', b'F', 0]),
            SerialTransaction::flush(),
            SerialTransaction::write_many([b'd', b']', b' ', 0]),
            SerialTransaction::flush(),
            SerialTransaction::write_many([b'd', b'o', b'k', 0]),
            SerialTransaction::flush(),
            SerialTransaction::write_many([b'd', b'!', b' ', 0]),
            SerialTransaction::flush(),
        ];
        let mut link = Link::new(SerialMock::new(&expectations));

        let mut writer = DebugWriter::new(&mut link);
        uwrite!(writer, "[INF] ok!\r\n").unwrap();
        writer.flush().unwrap();

        link.free().done();
    }

    #[test]
    fn every_write_is_a_decodable_frame() {
        let expectations = [
            SerialTransaction::write_many([b'd', b'm', b'a', 0]),
            SerialTransaction::flush(),
            SerialTransaction::write_many([b'd', b'p', b' ', 0]),
            SerialTransaction::flush(),
        ];
        let mut link = Link::new(SerialMock::new(&expectations));

        let mut writer = DebugWriter::new(&mut link);
        writer.write_str("map").unwrap();
        writer.flush().unwrap();
        // nothing left over
        writer.flush().unwrap();

        assert_eq!(Command::decode(&[b'd', b'm', b'a', 0]), Ok(Command::Debug(*b"ma\0")));
        link.free().done();
    }
}
