//! Rumble motor driver
//!
//! Emulates the sound of a spinning Microdrive with a small vibration
//! motor driven by PWM. The level scales the duty cycle, 255 being full on.

use embedded_hal::PwmPin;

const LEVEL_MAX: u32 = 255;

pub struct Rumble<P> {
    motor: P,
    level: u8,
    running: bool,
}

impl<P: PwmPin<Duty = u16>> Rumble<P> {
    pub fn new(motor: P, level: u8) -> Self {
        Self {
            motor,
            level,
            running: false,
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        if self.level == 0 {
            return;
        }
        self.apply_duty();
        self.motor.enable();
        self.running = true;
    }

    pub fn stop(&mut self) {
        if self.running {
            self.motor.disable();
            self.running = false;
        }
    }

    pub fn set_level(&mut self, level: u8) {
        self.level = level;
        if !self.running {
            return;
        }
        if level == 0 {
            self.stop();
        } else {
            self.apply_duty();
        }
    }

    fn apply_duty(&mut self) {
        let max = u32::from(self.motor.get_max_duty());
        let duty = max * u32::from(self.level) / LEVEL_MAX;
        self.motor.set_duty(duty as u16);
    }

    pub fn free(self) -> P {
        self.motor
    }
}
