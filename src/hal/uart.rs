//! USART0, the link to the daemon

use avr_device::atmega328p::USART0;
use core::convert::Infallible;
use embedded_hal::serial::{Read, Write};

// 1Mbaud at 16MHz in double speed mode: 16_000_000 / (8 * 1_000_000) - 1
const UBRR_1M: u16 = 1;

const U2X0: u8 = 1 << 1;
const UDRE0: u8 = 1 << 5;
const RXC0: u8 = 1 << 7;
const TXEN_RXEN: u8 = (1 << 3) | (1 << 4);
const FRAME_8N1: u8 = 0x06;

pub struct Uart {
    _usart: USART0,
}

impl Uart {
    pub fn new(usart: USART0) -> Self {
        unsafe {
            usart.ubrr0.write(|w| w.bits(UBRR_1M));
            usart.ucsr0a.write(|w| w.bits(U2X0));
            usart.ucsr0c.write(|w| w.bits(FRAME_8N1));
            usart.ucsr0b.write(|w| w.bits(TXEN_RXEN));
        }
        Self { _usart: usart }
    }

    fn status(&self) -> u8 {
        unsafe { (*USART0::ptr()).ucsr0a.read().bits() }
    }
}

impl Write<u8> for Uart {
    type Error = Infallible;

    fn write(&mut self, byte: u8) -> nb::Result<(), Infallible> {
        if self.status() & UDRE0 == 0 {
            return Err(nb::Error::WouldBlock);
        }
        unsafe {
            (*USART0::ptr()).udr0.write(|w| w.bits(byte));
        }
        Ok(())
    }

    fn flush(&mut self) -> nb::Result<(), Infallible> {
        if self.status() & UDRE0 == 0 {
            Err(nb::Error::WouldBlock)
        } else {
            Ok(())
        }
    }
}

impl Read<u8> for Uart {
    type Error = Infallible;

    fn read(&mut self) -> nb::Result<u8, Infallible> {
        if self.status() & RXC0 == 0 {
            return Err(nb::Error::WouldBlock);
        }
        Ok(unsafe { (*USART0::ptr()).udr0.read().bits() })
    }
}
