//! Timer2 fast PWM on OC2B, drives the rumble motor

use super::gpio::board::RUMBLE;
use avr_device::atmega328p::TC2;
use embedded_hal::PwmPin;

const WGM_FAST_PWM: u8 = 0x03;
const COM2B_CLEAR: u8 = 0x20;
const CS_DIV64: u8 = 0x04;

pub struct RumblePwm {
    _pin: RUMBLE,
}

impl RumblePwm {
    pub fn new(pin: RUMBLE) -> Self {
        unsafe {
            let p = TC2::ptr();
            (*p).ocr2b.write(|w| w.bits(0));
            (*p).tccr2a.write(|w| w.bits(WGM_FAST_PWM));
            (*p).tccr2b.write(|w| w.bits(CS_DIV64));
        }
        Self { _pin: pin }
    }
}

impl PwmPin for RumblePwm {
    type Duty = u16;

    fn disable(&mut self) {
        // Disconnect OC2B, the pin falls back to its (low) port value
        unsafe {
            (*TC2::ptr()).tccr2a.write(|w| w.bits(WGM_FAST_PWM));
        }
    }

    fn enable(&mut self) {
        unsafe {
            (*TC2::ptr()).tccr2a.write(|w| w.bits(WGM_FAST_PWM | COM2B_CLEAR));
        }
    }

    fn get_duty(&self) -> u16 {
        unsafe { u16::from((*TC2::ptr()).ocr2b.read().bits()) }
    }

    fn get_max_duty(&self) -> u16 {
        u16::from(u8::MAX)
    }

    fn set_duty(&mut self, duty: u16) {
        let duty = duty.min(u16::from(u8::MAX)) as u8;
        unsafe {
            (*TC2::ptr()).ocr2b.write(|w| w.bits(duty));
        }
    }
}
