//! Serial link to the daemon

use super::packet::FRAME_SIZE;
use super::{Command, ProtocolError, Result};
use embedded_hal::serial::{Read, Write};

pub struct Link<S> {
    serial: S,
    rx_buffer: [u8; FRAME_SIZE],
    rx_index: usize,
}

impl<S> Link<S> {
    pub fn new(serial: S) -> Self {
        Self {
            serial,
            rx_buffer: [0; FRAME_SIZE],
            rx_index: 0,
        }
    }

    pub fn free(self) -> S {
        self.serial
    }
}

impl<S: Write<u8>> Link<S> {
    pub fn send(&mut self, command: &Command) -> Result<()> {
        for byte in command.encode() {
            nb::block!(self.serial.write(byte)).map_err(|_| ProtocolError::TransportError)?;
        }
        nb::block!(self.serial.flush()).map_err(|_| ProtocolError::TransportError)
    }
}

impl<S: Read<u8>> Link<S> {
    /// Collects whatever bytes are available, `WouldBlock` until a frame is
    /// complete. A partial frame is kept for the next call.
    pub fn poll(&mut self) -> nb::Result<Command, ProtocolError> {
        while self.rx_index < FRAME_SIZE {
            match self.serial.read() {
                Ok(byte) => {
                    self.rx_buffer[self.rx_index] = byte;
                    self.rx_index += 1;
                }
                Err(nb::Error::WouldBlock) => return Err(nb::Error::WouldBlock),
                Err(nb::Error::Other(_)) => {
                    self.rx_index = 0;
                    return Err(nb::Error::Other(ProtocolError::TransportError));
                }
            }
        }
        self.rx_index = 0;
        Command::decode(&self.rx_buffer).map_err(nb::Error::Other)
    }

    /// Blocks until a full frame has arrived
    pub fn receive(&mut self) -> Result<Command> {
        nb::block!(self.poll())
    }
}
