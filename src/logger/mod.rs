//! Console logging over the serial port
//!
//! Lines are written as `[LVL] message\r\n` through `ufmt`, anything below
//! the logger's threshold is dropped.

use crate::config::AdapterConfig;
use ufmt::{uDisplay, uWrite, uwrite};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
}

impl Level {
    pub const fn tag(self) -> &'static str {
        match self {
            Level::Error => "ERR",
            Level::Warn => "WRN",
            Level::Info => "INF",
            Level::Debug => "DBG",
        }
    }
}

pub struct Logger<W> {
    sink: W,
    threshold: Level,
}

impl<W: uWrite> Logger<W> {
    pub fn new(sink: W, threshold: Level) -> Self {
        Self { sink, threshold }
    }

    pub fn enabled(&self, level: Level) -> bool {
        level <= self.threshold
    }

    pub fn log(&mut self, level: Level, msg: &str) -> Result<(), W::Error> {
        if !self.enabled(level) {
            return Ok(());
        }
        uwrite!(self.sink, "[{}] {}\r\n", level.tag(), msg)
    }

    /// Logs `msg: value`
    pub fn value<V: uDisplay>(&mut self, level: Level, msg: &str, value: V) -> Result<(), W::Error> {
        if !self.enabled(level) {
            return Ok(());
        }
        uwrite!(self.sink, "[{}] {}: {}\r\n", level.tag(), msg, value)
    }

    pub fn error(&mut self, msg: &str) -> Result<(), W::Error> {
        self.log(Level::Error, msg)
    }

    pub fn warn(&mut self, msg: &str) -> Result<(), W::Error> {
        self.log(Level::Warn, msg)
    }

    pub fn info(&mut self, msg: &str) -> Result<(), W::Error> {
        self.log(Level::Info, msg)
    }

    pub fn debug(&mut self, msg: &str) -> Result<(), W::Error> {
        self.log(Level::Debug, msg)
    }

    /// Dumps all options of a configuration at info level
    pub fn profile(&mut self, config: &AdapterConfig) -> Result<(), W::Error> {
        if !self.enabled(Level::Info) {
            return Ok(());
        }
        self.flag("LED_RW_IDLE_ON", config.led_rw_idle_on)?;
        self.flag("LED_SYNC_WAIT", config.led_sync_wait)?;
        self.number("RUMBLE_LEVEL", config.rumble_level)?;
        self.number("DRIVE_OFFSET_IF1", config.drive_offset_if1)?;
        self.number("DRIVE_OFFSET_QL", config.drive_offset_ql)?;
        self.number("HW_GROUP_START", config.hw_group_start)?;
        self.number("HW_GROUP_END", config.hw_group_end)?;
        self.flag("HW_GROUP_LOCK", config.hw_group_lock)?;
        self.flag("FORCE_IF1", config.force_if1)?;
        self.flag("FORCE_QL", config.force_ql)
    }

    fn flag(&mut self, name: &str, value: bool) -> Result<(), W::Error> {
        let value = if value { "true" } else { "false" };
        uwrite!(self.sink, "[{}] {} = {}\r\n", Level::Info.tag(), name, value)
    }

    fn number(&mut self, name: &str, value: u8) -> Result<(), W::Error> {
        uwrite!(self.sink, "[{}] {} = {}\r\n", Level::Info.tag(), name, value)
    }

    pub fn free(self) -> W {
        self.sink
    }
}
