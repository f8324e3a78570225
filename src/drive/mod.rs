//! Drive numbering and client types
pub mod group;

pub use group::HardwareGroup;

/// Number of drives the adapter serves, numbered from 1
pub const DRIVE_COUNT: u8 = 8;

/// Resync mask bit for Interface 1
pub const MASK_IF1: u8 = 1;
/// Resync mask bit for QL
pub const MASK_QL: u8 = 2;

/// Host computer attached to the adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Client {
    If1,
    Ql,
    Unknown,
}

impl Client {
    pub const fn name(self) -> &'static str {
        match self {
            Client::If1 => "Interface 1",
            Client::Ql => "QL",
            Client::Unknown => "<unknown>",
        }
    }

    pub const fn mask(self) -> u8 {
        match self {
            Client::If1 => MASK_IF1,
            Client::Ql => MASK_QL,
            Client::Unknown => 0,
        }
    }

    pub const fn from_mask(mask: u8) -> Self {
        if mask & MASK_IF1 != 0 {
            Client::If1
        } else if mask & MASK_QL != 0 {
            Client::Ql
        } else {
            Client::Unknown
        }
    }
}

impl ufmt::uDisplay for Client {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: ufmt::uWrite + ?Sized,
    {
        f.write_str(self.name())
    }
}

/// Maps a drive number as seen by the host to the adapter's own numbering
pub fn to_virtual(host_drive: u8, offset: u8) -> Option<u8> {
    match host_drive.checked_sub(offset) {
        Some(drive @ 1..=DRIVE_COUNT) => Some(drive),
        _ => None,
    }
}
