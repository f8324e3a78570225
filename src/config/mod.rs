//! Adapter configuration
//!
//! The adapter is configured entirely at build time. A configuration is a
//! complete [`AdapterConfig`] record produced by one of the named builders in
//! [`profile`]; exactly one Cargo feature (`profile-example` or
//! `profile-builtin`) picks the profile that becomes [`ACTIVE`].
//!
//! Exclusivity is enforced by `compile_error!`, each selection is checked by
//! building it:
//!
//! ```text
//! cargo test                                                  # example profile
//! cargo test --no-default-features --features profile-builtin # builtin profile
//! cargo check --features profile-builtin       # fails: conflicting configuration
//! cargo check --no-default-features            # fails: no configuration selected
//! ```
//!
//! Every field is mandatory. Leaving one out of a profile does not fall back
//! to a default, the build fails instead:
//!
//! ```compile_fail
//! use oqtadrive_adapter::config::AdapterConfig;
//!
//! const PARTIAL: AdapterConfig = AdapterConfig {
//!     led_rw_idle_on: false,
//!     led_sync_wait: true,
//!     rumble_level: 35,
//!     drive_offset_if1: 0,
//!     drive_offset_ql: 0,
//!     hw_group_start: 7,
//!     hw_group_end: 8,
//!     hw_group_lock: false,
//!     force_if1: false,
//! };
//! ```

pub mod profile;

pub use profile::{Profile, ProfileGuard};

use crate::drive::group::HardwareGroup;
use crate::drive::Client;

/// Errors raised while binding or checking a configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A second, different profile was bound after the first one
    DefinitionConflict { bound: Profile, requested: Profile },
    /// Hardware group start is past the last drive
    InvalidGroupStart(u8),
    /// Hardware group end is past the last drive or before the start
    InvalidGroupEnd(u8),
    /// Only one of the hardware group bounds is zero
    PartialGroup { start: u8, end: u8 },
    /// Hardware group is locked and cannot be remapped
    GroupLocked,
    /// Both client types are forced at once
    AmbiguousForce,
}

pub type Result<T> = core::result::Result<T, ConfigError>;

/// Complete set of adapter options, fixed at build time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdapterConfig {
    /// R/W activity LED stays lit while the adapter is idle
    pub led_rw_idle_on: bool,
    /// LED blinks while waiting for sync with the daemon
    pub led_sync_wait: bool,
    /// Rumble motor intensity, 0 turns the motor off
    pub rumble_level: u8,
    /// Drive number offset when attached to an Interface 1
    pub drive_offset_if1: u8,
    /// Drive number offset when attached to a QL
    pub drive_offset_ql: u8,
    /// First drive of the hardware drive group, 0 if there is none
    pub hw_group_start: u8,
    /// Last drive of the hardware drive group, 0 if there is none
    pub hw_group_end: u8,
    /// Hardware group cannot be changed by the daemon
    pub hw_group_lock: bool,
    /// Always act as Interface 1 drives
    pub force_if1: bool,
    /// Always act as QL drives
    pub force_ql: bool,
}

impl AdapterConfig {
    /// Client type the adapter is pinned to, `Client::Unknown` means auto-detect
    pub const fn forced_client(&self) -> Client {
        match (self.force_if1, self.force_ql) {
            (true, false) => Client::If1,
            (false, true) => Client::Ql,
            _ => Client::Unknown,
        }
    }

    /// Drive number offset for the given client
    pub const fn drive_offset(&self, client: Client) -> u8 {
        match client {
            Client::If1 => self.drive_offset_if1,
            Client::Ql => self.drive_offset_ql,
            Client::Unknown => 0,
        }
    }

    pub const fn hardware_group(&self) -> HardwareGroup {
        HardwareGroup::new(self.hw_group_start, self.hw_group_end, self.hw_group_lock)
    }

    /// Sanity check of option combinations. Building a profile never calls
    /// this; the firmware runs it as part of its startup self-test.
    pub fn check(&self) -> Result<()> {
        HardwareGroup::validate(self.hw_group_start, self.hw_group_end)?;
        if self.force_if1 && self.force_ql {
            return Err(ConfigError::AmbiguousForce);
        }
        Ok(())
    }
}

#[cfg(all(feature = "profile-example", feature = "profile-builtin"))]
compile_error!("conflicting configuration: features 'profile-example' and 'profile-builtin' both define the adapter settings, enable only one");

#[cfg(not(any(feature = "profile-example", feature = "profile-builtin")))]
compile_error!("no configuration selected: enable either the 'profile-example' or the 'profile-builtin' feature");

/// Profile selected for this build
#[cfg(all(feature = "profile-example", not(feature = "profile-builtin")))]
pub const ACTIVE_PROFILE: Profile = Profile::Example;
#[cfg(all(feature = "profile-builtin", not(feature = "profile-example")))]
pub const ACTIVE_PROFILE: Profile = Profile::Builtin;
// Keeps the remaining items well-formed while compile_error! reports the conflict
#[cfg(any(
    all(feature = "profile-example", feature = "profile-builtin"),
    not(any(feature = "profile-example", feature = "profile-builtin"))
))]
pub const ACTIVE_PROFILE: Profile = Profile::Example;

/// Profile name as seen by the build script
pub const BUILD_PROFILE: &str = env!("OQTADRIVE_PROFILE");

/// Settings of the profile selected for this build
pub const ACTIVE: AdapterConfig = ACTIVE_PROFILE.config();

pub const LED_RW_IDLE_ON: bool = ACTIVE.led_rw_idle_on;
pub const LED_SYNC_WAIT: bool = ACTIVE.led_sync_wait;
pub const RUMBLE_LEVEL: u8 = ACTIVE.rumble_level;
pub const DRIVE_OFFSET_IF1: u8 = ACTIVE.drive_offset_if1;
pub const DRIVE_OFFSET_QL: u8 = ACTIVE.drive_offset_ql;
pub const HW_GROUP_START: u8 = ACTIVE.hw_group_start;
pub const HW_GROUP_END: u8 = ACTIVE.hw_group_end;
pub const HW_GROUP_LOCK: bool = ACTIVE.hw_group_lock;
pub const FORCE_IF1: bool = ACTIVE.force_if1;
pub const FORCE_QL: bool = ACTIVE.force_ql;
