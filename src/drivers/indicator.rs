//! R/W activity LED

use crate::config::AdapterConfig;
use embedded_hal::digital::v2::OutputPin;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Activity {
    Idle,
    ReadWrite,
    /// Waiting for the daemon to sync up
    SyncWait,
}

pub struct Indicator<P> {
    led: P,
    idle_on: bool,
    sync_wait: bool,
    activity: Activity,
    blink: bool,
}

impl<P: OutputPin> Indicator<P> {
    pub fn new(led: P, config: &AdapterConfig) -> Self {
        Self {
            led,
            idle_on: config.led_rw_idle_on,
            sync_wait: config.led_sync_wait,
            activity: Activity::Idle,
            blink: false,
        }
    }

    pub fn activity(&self) -> Activity {
        self.activity
    }

    pub fn set_activity(&mut self, activity: Activity) -> Result<(), P::Error> {
        self.activity = activity;
        self.blink = true;
        self.refresh()
    }

    /// Advances the blink phase, only visible while waiting for sync
    pub fn tick(&mut self) -> Result<(), P::Error> {
        if self.activity == Activity::SyncWait && self.sync_wait {
            self.blink = !self.blink;
            self.refresh()
        } else {
            Ok(())
        }
    }

    pub fn is_lit(&self) -> bool {
        match self.activity {
            Activity::Idle => self.idle_on,
            Activity::ReadWrite => !self.idle_on,
            Activity::SyncWait if self.sync_wait => self.blink,
            Activity::SyncWait => self.idle_on,
        }
    }

    fn refresh(&mut self) -> Result<(), P::Error> {
        if self.is_lit() {
            self.led.set_high()
        } else {
            self.led.set_low()
        }
    }

    pub fn free(self) -> P {
        self.led
    }
}
