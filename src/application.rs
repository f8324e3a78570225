//! Application layer: the adapter's side of the daemon conversation
//!
//! Until the daemon answers, the adapter keeps sending its hello and the LED
//! shows the sync wait. Once synced it announces the hardware group and pings
//! the daemon regularly; the daemon hands out its queued control commands
//! (`Map`, rumble config, `Resync`) in reply to those pings.

use crate::config::{AdapterConfig, ConfigError};
use crate::drive::{Client, HardwareGroup};
use crate::drivers::{Activity, Indicator, Rumble};
use crate::logger::{Level, Logger};
use crate::protocol::{Command, DebugWriter, Link, Result};
use crate::testing::{TestCase, TestRunner};
use embedded_hal::digital::v2::OutputPin;
use embedded_hal::serial::{Read, Write};
use embedded_hal::PwmPin;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Syncing,
    Synced(Client),
}

/// What an [`update`](Application::update) did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Idle,
    Synced(Client),
    Remapped,
    RemapRefused(ConfigError),
    RumbleLevel(u8),
    Resyncing,
    Ignored(Command),
}

pub struct Application<S, L, M> {
    link: Link<S>,
    indicator: Indicator<L>,
    rumble: Rumble<M>,
    group: HardwareGroup,
    forced: Client,
    client: Client,
    state: State,
    idle: u16,
    interval: u16,
}

impl<S, L, M> Application<S, L, M>
where
    S: Read<u8> + Write<u8>,
    L: OutputPin,
    M: PwmPin<Duty = u16>,
{
    /// `interval` is the number of idle polls between hellos, pings and LED
    /// blink phases. `detected` is the client found on the bus, it is
    /// overridden by a forced client.
    pub fn new(
        link: Link<S>,
        led: L,
        motor: M,
        config: &AdapterConfig,
        detected: Client,
        interval: u16,
    ) -> Self {
        let mut indicator = Indicator::new(led, config);
        // the LED is cosmetic, pin errors are not worth stopping for
        indicator.set_activity(Activity::SyncWait).ok();

        Self {
            link,
            indicator,
            rumble: Rumble::new(motor, config.rumble_level),
            group: config.hardware_group(),
            forced: config.forced_client(),
            client: detected,
            state: State::Syncing,
            idle: 0,
            interval: interval.max(1),
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn group(&self) -> HardwareGroup {
        self.group
    }

    /// Client announced in the hello
    pub fn client(&self) -> Client {
        match (self.forced, self.client) {
            (Client::Unknown, Client::Unknown) => Client::If1,
            (Client::Unknown, detected) => detected,
            (forced, _) => forced,
        }
    }

    pub fn rumble(&mut self) -> &mut Rumble<M> {
        &mut self.rumble
    }

    /// One pass of the main loop, never blocks on the serial port
    pub fn update(&mut self) -> Result<Event> {
        match self.link.poll() {
            Err(nb::Error::WouldBlock) => {
                self.on_idle()?;
                Ok(Event::Idle)
            }
            Err(nb::Error::Other(err)) => Err(err),
            Ok(command) => self.handle(command),
        }
    }

    /// Runs the startup self-test and dumps the profile into the daemon's
    /// debug log. Only useful once synced, the daemon drops frames before.
    pub fn report(
        &mut self,
        config: &AdapterConfig,
        tests: &[&dyn TestCase],
        level: Level,
    ) -> Result<bool> {
        let client = self.client();
        let mut runner = TestRunner::new(DebugWriter::new(&mut self.link));
        runner.run_suite("startup", tests)?;
        let passed = runner.all_passed();

        let mut log = Logger::new(runner.free(), level);
        log.value(Level::Info, "client", client.name())?;
        log.profile(config)?;
        if !passed {
            log.warn("self test failed, check the adapter settings")?;
        }
        log.free().flush()?;
        Ok(passed)
    }

    fn on_idle(&mut self) -> Result<()> {
        let due = self.idle == 0;
        self.idle += 1;
        if self.idle >= self.interval {
            self.idle = 0;
        }
        if !due {
            return Ok(());
        }

        match self.state {
            State::Syncing => {
                self.indicator.tick().ok();
                self.link.send(&Command::Hello(self.client()))
            }
            State::Synced(_) => self.link.send(&Command::Ping),
        }
    }

    fn handle(&mut self, command: Command) -> Result<Event> {
        let State::Synced(_) = self.state else {
            if command == Command::DaemonHello {
                let client = self.client();
                self.state = State::Synced(client);
                self.idle = 0;
                self.indicator.set_activity(Activity::Idle).ok();
                let reply = self.map_reply();
                self.link.send(&reply)?;
                return Ok(Event::Synced(client));
            }
            // leftovers from before the sync
            return Ok(Event::Ignored(command));
        };

        match command {
            Command::Map { start, end, .. } => {
                let result = self.group.remap(start, end);
                // the daemon learns the group in effect either way
                let reply = self.map_reply();
                self.link.send(&reply)?;
                Ok(match result {
                    Ok(()) => Event::Remapped,
                    Err(err) => Event::RemapRefused(err),
                })
            }
            Command::Rumble(level) => {
                self.rumble.set_level(level);
                Ok(Event::RumbleLevel(level))
            }
            Command::Resync(requested) => {
                if requested != Client::Unknown {
                    self.client = requested;
                }
                self.state = State::Syncing;
                self.idle = 0;
                self.rumble.stop();
                self.indicator.set_activity(Activity::SyncWait).ok();
                Ok(Event::Resyncing)
            }
            other => Ok(Event::Ignored(other)),
        }
    }

    fn map_reply(&self) -> Command {
        Command::Map {
            start: self.group.start(),
            end: self.group.end(),
            locked: self.group.is_locked(),
        }
    }

    pub fn free(self) -> (Link<S>, L, M) {
        (self.link, self.indicator.free(), self.rumble.free())
    }
}
