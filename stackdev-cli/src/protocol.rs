//! Wire frames spoken between the server and its clients.
//!
//! Every request starts with a 5-byte header: one opcode byte followed by a
//! big-endian 32-bit argument. A write request is followed by `n` payload
//! bytes. Every response starts with a status byte (0 or an errno value) and
//! a big-endian `u32` count; a successful read is followed by `count` bytes.

use std::fmt;

/// Length of request and response headers.
pub const HEADER_LEN: usize = 5;

/// Status byte of a successful response.
pub const STATUS_OK: u8 = 0;

/// errno sent back for an unknown opcode.
pub const EINVAL: u8 = 22;

const OP_READ: u8 = b'R';
const OP_WRITE: u8 = b'W';
const OP_SET_CAPACITY: u8 = b'C';

/// A decoded request header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// Pop up to `n` bytes worth of elements.
    Read(u32),
    /// Push the `n` payload bytes that follow the header.
    Write(u32),
    /// Change the stack capacity.
    SetCapacity(i32),
}

/// Header carried an opcode this server does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownOpcode(pub u8);

impl fmt::Display for UnknownOpcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown opcode 0x{:02x}", self.0)
    }
}

impl std::error::Error for UnknownOpcode {}

impl Request {
    pub fn encode(&self) -> [u8; HEADER_LEN] {
        let (op, arg) = match *self {
            Self::Read(n) => (OP_READ, n.to_be_bytes()),
            Self::Write(n) => (OP_WRITE, n.to_be_bytes()),
            Self::SetCapacity(n) => (OP_SET_CAPACITY, n.to_be_bytes()),
        };
        let mut header = [0u8; HEADER_LEN];
        header[0] = op;
        header[1..].copy_from_slice(&arg);
        header
    }

    pub fn decode(header: [u8; HEADER_LEN]) -> Result<Self, UnknownOpcode> {
        let arg = [header[1], header[2], header[3], header[4]];
        match header[0] {
            OP_READ => Ok(Self::Read(u32::from_be_bytes(arg))),
            OP_WRITE => Ok(Self::Write(u32::from_be_bytes(arg))),
            OP_SET_CAPACITY => Ok(Self::SetCapacity(i32::from_be_bytes(arg))),
            other => Err(UnknownOpcode(other)),
        }
    }
}

/// A response header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Response {
    pub status: u8,
    pub count: u32,
}

impl Response {
    pub fn ok(count: usize) -> Self {
        Self {
            status: STATUS_OK,
            count: u32::try_from(count).unwrap_or(u32::MAX),
        }
    }

    pub fn error(errno: i32) -> Self {
        Self {
            status: u8::try_from(errno).unwrap_or(EINVAL),
            count: 0,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    pub fn encode(&self) -> [u8; HEADER_LEN] {
        let mut header = [0u8; HEADER_LEN];
        header[0] = self.status;
        header[1..].copy_from_slice(&self.count.to_be_bytes());
        header
    }

    pub fn decode(header: [u8; HEADER_LEN]) -> Self {
        Self {
            status: header[0],
            count: u32::from_be_bytes([header[1], header[2], header[3], header[4]]),
        }
    }
}

/// Human-readable name for a status byte.
pub fn describe_status(status: u8) -> &'static str {
    match status {
        STATUS_OK => "ok",
        12 => "out of memory",
        14 => "bad address",
        EINVAL => "invalid argument",
        28 => "stack full",
        61 => "no data",
        _ => "unknown error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_capacity_negative_argument() {
        let header = Request::SetCapacity(-1).encode();
        assert_eq!(header, [b'C', 0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(Request::decode(header), Ok(Request::SetCapacity(-1)));
    }

    #[test]
    fn test_read_header_layout() {
        assert_eq!(Request::Read(0x0102).encode(), [b'R', 0, 0, 1, 2]);
    }

    #[test]
    fn test_unknown_opcode() {
        let err = Request::decode([b'X', 0, 0, 0, 0]).unwrap_err();
        assert_eq!(err, UnknownOpcode(b'X'));
        assert!(err.to_string().contains("0x58"));
    }

    #[test]
    fn test_response_error_status() {
        let response = Response::error(28);
        assert!(!response.is_ok());
        assert_eq!(Response::decode(response.encode()), response);
        assert_eq!(describe_status(response.status), "stack full");
    }
}
