//! Hardware drive group
//!
//! Real Microdrives can sit on the bus together with the adapter. The
//! hardware group is the range of drive numbers they occupy; the adapter
//! leaves those drives alone. A group of `0..0` means there are none.

use super::DRIVE_COUNT;
use crate::config::{ConfigError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HardwareGroup {
    start: u8,
    end: u8,
    locked: bool,
}

impl HardwareGroup {
    /// Takes the bounds as given, see [`validate`](Self::validate)
    pub const fn new(start: u8, end: u8, locked: bool) -> Self {
        Self { start, end, locked }
    }

    pub fn validate(start: u8, end: u8) -> Result<()> {
        if start > DRIVE_COUNT {
            return Err(ConfigError::InvalidGroupStart(start));
        }
        if end > DRIVE_COUNT || end < start {
            return Err(ConfigError::InvalidGroupEnd(end));
        }
        if (start > 0 && end == 0) || (end > 0 && start == 0) {
            return Err(ConfigError::PartialGroup { start, end });
        }
        Ok(())
    }

    pub fn start(&self) -> u8 {
        self.start
    }

    pub fn end(&self) -> u8 {
        self.end
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn is_disabled(&self) -> bool {
        self.start == 0 && self.end == 0
    }

    pub fn contains(&self, drive: u8) -> bool {
        !self.is_disabled() && self.start <= drive && drive <= self.end
    }

    /// Moves the group to new bounds, as requested by the daemon
    pub fn remap(&mut self, start: u8, end: u8) -> Result<()> {
        if self.locked {
            return Err(ConfigError::GroupLocked);
        }
        Self::validate(start, end)?;
        self.start = start;
        self.end = end;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_bounds() {
        assert_eq!(HardwareGroup::validate(0, 0), Ok(()));
        assert_eq!(HardwareGroup::validate(7, 8), Ok(()));
        assert_eq!(HardwareGroup::validate(3, 3), Ok(()));
        assert_eq!(
            HardwareGroup::validate(9, 9),
            Err(ConfigError::InvalidGroupStart(9))
        );
        assert_eq!(
            HardwareGroup::validate(1, 9),
            Err(ConfigError::InvalidGroupEnd(9))
        );
        assert_eq!(
            HardwareGroup::validate(5, 4),
            Err(ConfigError::InvalidGroupEnd(4))
        );
        // an end of zero with a non-zero start trips the ordering check first
        assert_eq!(
            HardwareGroup::validate(2, 0),
            Err(ConfigError::InvalidGroupEnd(0))
        );
        assert_eq!(
            HardwareGroup::validate(0, 2),
            Err(ConfigError::PartialGroup { start: 0, end: 2 })
        );
    }

    #[test]
    fn membership() {
        let group = HardwareGroup::new(7, 8, false);
        assert!(!group.is_disabled());
        assert!(!group.contains(6));
        assert!(group.contains(7));
        assert!(group.contains(8));

        let none = HardwareGroup::new(0, 0, false);
        assert!(none.is_disabled());
        assert!(!none.contains(0));
        assert!(!none.contains(1));
    }

    #[test]
    fn remap_unlocked_group() {
        let mut group = HardwareGroup::new(7, 8, false);
        assert_eq!(group.remap(1, 2), Ok(()));
        assert_eq!((group.start(), group.end()), (1, 2));

        assert_eq!(group.remap(4, 3), Err(ConfigError::InvalidGroupEnd(3)));
        assert_eq!((group.start(), group.end()), (1, 2));

        assert_eq!(group.remap(0, 0), Ok(()));
        assert!(group.is_disabled());
    }

    #[test]
    fn remap_locked_group_fails() {
        let mut group = HardwareGroup::new(7, 8, true);
        assert!(group.is_locked());
        assert_eq!(group.remap(1, 2), Err(ConfigError::GroupLocked));
        assert_eq!((group.start(), group.end()), (7, 8));
    }
}
