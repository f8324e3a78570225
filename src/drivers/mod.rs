pub mod indicator;
pub mod rumble;

pub use indicator::{Activity, Indicator};
pub use rumble::Rumble;
