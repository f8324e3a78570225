//! Named configuration profiles

use super::{AdapterConfig, ConfigError, Result};

/// Source a configuration can come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Settings of the example config file
    Example,
    /// Settings kept in the firmware source itself
    Builtin,
}

impl Profile {
    pub const fn config(self) -> AdapterConfig {
        match self {
            Profile::Example => example(),
            Profile::Builtin => builtin(),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Profile::Example => "example",
            Profile::Builtin => "builtin",
        }
    }
}

/// Example adapter: hardware drives 7 and 8, forced to QL mode
pub const fn example() -> AdapterConfig {
    AdapterConfig {
        led_rw_idle_on: false,
        led_sync_wait: true,
        rumble_level: 35,
        drive_offset_if1: 0,
        drive_offset_ql: 0,
        hw_group_start: 7,
        hw_group_end: 8,
        hw_group_lock: false,
        force_if1: false,
        force_ql: true,
    }
}

/// Stock firmware settings: no hardware drives, client auto-detected
pub const fn builtin() -> AdapterConfig {
    AdapterConfig {
        led_rw_idle_on: false,
        led_sync_wait: true,
        rumble_level: 35,
        drive_offset_if1: 0,
        drive_offset_ql: 0,
        hw_group_start: 0,
        hw_group_end: 0,
        hw_group_lock: false,
        force_if1: false,
        force_ql: false,
    }
}

/// Startup guard making sure only one profile is ever in effect.
///
/// The first [`bind`](ProfileGuard::bind) wins. Binding the same profile
/// again is harmless, binding a different one is a definition conflict.
#[derive(Debug, Default)]
pub struct ProfileGuard {
    bound: Option<Profile>,
}

impl ProfileGuard {
    pub const fn new() -> Self {
        Self { bound: None }
    }

    pub fn bind(&mut self, profile: Profile) -> Result<AdapterConfig> {
        match self.bound {
            None => {
                self.bound = Some(profile);
                Ok(profile.config())
            }
            Some(bound) if bound == profile => Ok(bound.config()),
            Some(bound) => Err(ConfigError::DefinitionConflict {
                bound,
                requested: profile,
            }),
        }
    }

    pub fn bound(&self) -> Option<Profile> {
        self.bound
    }

    /// Configuration in effect, if a profile has been bound
    pub fn config(&self) -> Option<AdapterConfig> {
        self.bound.map(Profile::config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_profile_values() {
        let cfg = example();
        assert!(!cfg.led_rw_idle_on);
        assert!(cfg.led_sync_wait);
        assert_eq!(cfg.rumble_level, 35);
        assert_eq!(cfg.drive_offset_if1, 0);
        assert_eq!(cfg.drive_offset_ql, 0);
        assert_eq!(cfg.hw_group_start, 7);
        assert_eq!(cfg.hw_group_end, 8);
        assert!(!cfg.hw_group_lock);
        assert!(!cfg.force_if1);
        assert!(cfg.force_ql);
    }

    #[test]
    fn profiles_resolve_to_their_builders() {
        assert_eq!(Profile::Example.config(), example());
        assert_eq!(Profile::Builtin.config(), builtin());
        assert_ne!(example(), builtin());
    }

    #[test]
    fn guard_binds_first_profile() {
        let mut guard = ProfileGuard::new();
        assert_eq!(guard.bound(), None);
        assert_eq!(guard.config(), None);

        assert_eq!(guard.bind(Profile::Example), Ok(example()));
        assert_eq!(guard.bound(), Some(Profile::Example));
        assert_eq!(guard.config(), Some(example()));
    }

    #[test]
    fn guard_is_idempotent_for_same_profile() {
        let mut guard = ProfileGuard::new();
        let first = guard.bind(Profile::Builtin);
        let second = guard.bind(Profile::Builtin);
        assert_eq!(first, second);
        assert_eq!(second, Ok(builtin()));
    }

    #[test]
    fn guard_rejects_second_profile() {
        let mut guard = ProfileGuard::new();
        guard.bind(Profile::Example).unwrap();

        assert_eq!(
            guard.bind(Profile::Builtin),
            Err(ConfigError::DefinitionConflict {
                bound: Profile::Example,
                requested: Profile::Builtin,
            })
        );
        // the first profile stays in effect
        assert_eq!(guard.config(), Some(example()));
    }
}
