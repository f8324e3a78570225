//! ATmega328P peripherals used by the adapter
pub mod gpio;
pub mod pwm;
pub mod timer;
pub mod uart;

// Re-export commonly used types
pub use gpio::{board, Output, Pin};
pub use pwm::RumblePwm;
pub use timer::delay_ms;
pub use uart::Uart;
