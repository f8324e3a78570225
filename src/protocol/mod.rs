//! Control commands exchanged with the daemon
//!
//! Every command travels as a fixed four byte frame: the command byte
//! followed by three argument bytes, unused arguments are zero.

pub mod debug;
pub mod packet;
pub mod transport;

pub use debug::DebugWriter;
pub use transport::Link;

use crate::config::AdapterConfig;
use crate::drive::Client;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolError {
    InvalidPacket,
    InvalidCommand,
    TransportError,
}

pub type Result<T> = core::result::Result<T, ProtocolError>;

/// Hello, sent by the adapter until the daemon answers
pub const CMD_HELLO: u8 = b'h';
/// Ping/pong
pub const CMD_PING: u8 = b'P';
/// Debug message for the daemon log
pub const CMD_DEBUG: u8 = b'd';
/// Hardware drive mapping
pub const CMD_MAP: u8 = b'm';
/// Adapter setting change
pub const CMD_CONFIG: u8 = b'c';
/// Resync with the adapter, optionally switching client type
pub const CMD_RESYNC: u8 = b'r';

/// Config item: rumble level
pub const CONFIG_ITEM_RUMBLE: u8 = b'r';

const HELLO_IF1: [u8; 4] = *b"hloi";
const HELLO_QL: [u8; 4] = *b"hloq";
const HELLO_DAEMON: [u8; 4] = *b"hlod";
const PING: [u8; 4] = *b"Ping";
const PONG: [u8; 4] = *b"Pong";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Adapter hello naming its client, `Unknown` goes out as Interface 1
    Hello(Client),
    /// The daemon's answer to a hello, completes the sync
    DaemonHello,
    Ping,
    Pong,
    Debug([u8; 3]),
    Map { start: u8, end: u8, locked: bool },
    Rumble(u8),
    Resync(Client),
}

impl Command {
    /// Announces the hardware group of a configuration
    pub const fn map(config: &AdapterConfig) -> Self {
        Command::Map {
            start: config.hw_group_start,
            end: config.hw_group_end,
            locked: config.hw_group_lock,
        }
    }

    pub const fn rumble(level: u8) -> Self {
        Command::Rumble(level)
    }

    pub const fn resync(client: Client) -> Self {
        Command::Resync(client)
    }

    pub fn encode(&self) -> [u8; packet::FRAME_SIZE] {
        match *self {
            Command::Hello(Client::Ql) => HELLO_QL,
            Command::Hello(_) => HELLO_IF1,
            Command::DaemonHello => HELLO_DAEMON,
            Command::Ping => PING,
            Command::Pong => PONG,
            Command::Debug([a, b, c]) => [CMD_DEBUG, a, b, c],
            Command::Map { start, end, locked } => [CMD_MAP, start, end, locked as u8],
            Command::Rumble(level) => [CMD_CONFIG, CONFIG_ITEM_RUMBLE, level, 0],
            Command::Resync(client) => [CMD_RESYNC, client.mask(), 0, 0],
        }
    }

    pub fn decode(data: &[u8]) -> Result<Self> {
        let frame = packet::Frame::parse(data)?;
        match frame.command() {
            CMD_HELLO => match frame.as_bytes() {
                b if *b == HELLO_IF1 => Ok(Command::Hello(Client::If1)),
                b if *b == HELLO_QL => Ok(Command::Hello(Client::Ql)),
                b if *b == HELLO_DAEMON => Ok(Command::DaemonHello),
                _ => Err(ProtocolError::InvalidCommand),
            },
            CMD_PING => match frame.as_bytes() {
                b if *b == PING => Ok(Command::Ping),
                b if *b == PONG => Ok(Command::Pong),
                _ => Err(ProtocolError::InvalidCommand),
            },
            CMD_DEBUG => Ok(Command::Debug([frame.arg(0), frame.arg(1), frame.arg(2)])),
            CMD_MAP => Ok(Command::Map {
                start: frame.arg(0),
                end: frame.arg(1),
                locked: frame.arg(2) == 1,
            }),
            CMD_CONFIG => match frame.arg(0) {
                CONFIG_ITEM_RUMBLE => Ok(Command::Rumble(frame.arg(1))),
                _ => Err(ProtocolError::InvalidCommand),
            },
            CMD_RESYNC => Ok(Command::Resync(Client::from_mask(frame.arg(0)))),
            _ => Err(ProtocolError::InvalidCommand),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::profile;

    #[test]
    fn map_from_example_profile() {
        let cmd = Command::map(&profile::example());
        assert_eq!(
            cmd,
            Command::Map {
                start: 7,
                end: 8,
                locked: false
            }
        );
        assert_eq!(cmd.encode(), [b'm', 7, 8, 0]);
    }

    #[test]
    fn encode_commands() {
        assert_eq!(Command::rumble(35).encode(), [b'c', b'r', 35, 0]);
        assert_eq!(Command::resync(Client::If1).encode(), [b'r', 1, 0, 0]);
        assert_eq!(Command::resync(Client::Ql).encode(), [b'r', 2, 0, 0]);
        assert_eq!(Command::resync(Client::Unknown).encode(), [b'r', 0, 0, 0]);
        let locked = Command::Map {
            start: 1,
            end: 2,
            locked: true,
        };
        assert_eq!(locked.encode(), [b'm', 1, 2, 1]);
    }

    #[test]
    fn decode_commands() {
        assert_eq!(
            Command::decode(&[b'm', 3, 4, 1]),
            Ok(Command::Map {
                start: 3,
                end: 4,
                locked: true
            })
        );
        assert_eq!(Command::decode(&[b'c', b'r', 200, 0]), Ok(Command::Rumble(200)));
        assert_eq!(
            Command::decode(&[b'r', 2, 0, 0]),
            Ok(Command::Resync(Client::Ql))
        );
    }

    #[test]
    fn hello_frames() {
        assert_eq!(Command::Hello(Client::If1).encode(), *b"hloi");
        assert_eq!(Command::Hello(Client::Ql).encode(), *b"hloq");
        assert_eq!(Command::Hello(Client::Unknown).encode(), *b"hloi");
        assert_eq!(Command::decode(b"hlod"), Ok(Command::DaemonHello));
        assert_eq!(Command::decode(b"hloq"), Ok(Command::Hello(Client::Ql)));
        assert_eq!(Command::decode(b"hlox"), Err(ProtocolError::InvalidCommand));
    }

    #[test]
    fn ping_and_debug_frames() {
        assert_eq!(Command::decode(b"Ping"), Ok(Command::Ping));
        assert_eq!(Command::Pong.encode(), *b"Pong");
        assert_eq!(Command::decode(b"Pang"), Err(ProtocolError::InvalidCommand));
        assert_eq!(Command::Debug(*b"ST\x02").encode(), [b'd', b'S', b'T', 2]);
        assert_eq!(Command::decode(&[b'd', b'o', b'k', 0]), Ok(Command::Debug([b'o', b'k', 0])));
    }

    #[test]
    fn decode_rejects_garbage() {
        assert_eq!(
            Command::decode(&[b'x', 0, 0, 0]),
            Err(ProtocolError::InvalidCommand)
        );
        assert_eq!(
            Command::decode(&[b'c', b'z', 1, 0]),
            Err(ProtocolError::InvalidCommand)
        );
        assert_eq!(
            Command::decode(&[b'm', 1, 2]),
            Err(ProtocolError::InvalidPacket)
        );
    }
}
