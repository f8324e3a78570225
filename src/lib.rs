//! OqtaDrive adapter firmware
//!
//! Build-time configuration of the adapter together with the drivers and
//! the daemon conversation that act on it. Everything except [`hal`] is target
//! independent and unit tested on the host.
#![cfg_attr(not(test), no_std)]

pub mod application;
pub mod config;
pub mod drive;
pub mod drivers;
pub mod logger;
pub mod protocol;
pub mod testing;

#[cfg(target_arch = "avr")]
pub mod hal;
