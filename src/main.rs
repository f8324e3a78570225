#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]

#[cfg(target_arch = "avr")]
mod firmware {
    use panic_halt as _;

    use avr_device::atmega328p::Peripherals;
    use oqtadrive_adapter::application::{Application, Event};
    use oqtadrive_adapter::config::{self, ProfileGuard};
    use oqtadrive_adapter::drive::Client;
    use oqtadrive_adapter::hal::{board, delay_ms, RumblePwm, Uart};
    use oqtadrive_adapter::logger::Level;
    use oqtadrive_adapter::protocol::Link;
    use oqtadrive_adapter::testing::{GuardCheck, ProfileCheck, TestCase};

    #[cfg(feature = "debug")]
    const LOG_LEVEL: Level = Level::Debug;
    #[cfg(not(feature = "debug"))]
    const LOG_LEVEL: Level = Level::Info;

    /// Idle polls between hellos and pings, roughly a quarter second
    const POLL_INTERVAL: u16 = 50_000;
    const GREETING_MS: u16 = 300;

    fn halt() -> ! {
        loop {
            avr_device::asm::sleep();
        }
    }

    #[avr_device::entry]
    fn main() -> ! {
        let Some(dp) = Peripherals::take() else { halt() };

        let mut guard = ProfileGuard::new();
        let Ok(cfg) = guard.bind(config::ACTIVE_PROFILE) else { halt() };

        // no bus sensing yet, an unforced adapter announces itself as Interface 1
        let mut app = Application::new(
            Link::new(Uart::new(dp.USART0)),
            board::LED::new(),
            RumblePwm::new(board::RUMBLE::new()),
            &cfg,
            Client::If1,
            POLL_INTERVAL,
        );

        let tests: [&dyn TestCase; 2] = [
            &ProfileCheck(cfg),
            &GuardCheck(config::ACTIVE_PROFILE),
        ];
        let mut reported = false;

        loop {
            match app.update() {
                Ok(Event::Synced(_)) => {
                    app.rumble().start();
                    delay_ms(GREETING_MS);
                    app.rumble().stop();

                    if !reported {
                        reported = app.report(&cfg, &tests, LOG_LEVEL).is_ok();
                    }
                }
                // garbage on the line, the daemon resyncs when it notices
                Ok(_) | Err(_) => {}
            }
        }
    }
}

/// Host build: prints the configuration this build was made with
#[cfg(not(target_arch = "avr"))]
fn main() {
    use oqtadrive_adapter::config;
    use oqtadrive_adapter::logger::{Level, Logger};
    use std::io::Write;

    struct Stdout(std::io::Stdout);

    impl ufmt::uWrite for Stdout {
        type Error = std::io::Error;

        fn write_str(&mut self, s: &str) -> Result<(), std::io::Error> {
            self.0.write_all(s.as_bytes())
        }
    }

    let mut log = Logger::new(Stdout(std::io::stdout()), Level::Info);
    let result = log
        .value(Level::Info, "OqtaDrive profile", config::ACTIVE_PROFILE.name())
        .and_then(|_| log.profile(&config::ACTIVE));
    if let Err(err) = result {
        eprintln!("cannot write profile: {err}");
        std::process::exit(1);
    }
}
