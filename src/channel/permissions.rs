use std::fmt::{self, Display, Formatter};

use bitflags::bitflags;
use libc::mode_t;

use super::InvalidArgumentError;

bitflags! {
    /// POSIX permission bits for owner, group and other. Each flag's value is its contribution to
    /// the numeric mode.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Permissions: u16 {
        const OWNER_READ    = 0o400;
        const OWNER_WRITE   = 0o200;
        const OWNER_EXECUTE = 0o100;
        const GROUP_READ    = 0o040;
        const GROUP_WRITE   = 0o020;
        const GROUP_EXECUTE = 0o010;
        const OTHER_READ    = 0o004;
        const OTHER_WRITE   = 0o002;
        const OTHER_EXECUTE = 0o001;
    }
}

// In `ls -l` order.
const SYMBOLS: [(Permissions, u8); 9] = [
    (Permissions::OWNER_READ, b'r'),
    (Permissions::OWNER_WRITE, b'w'),
    (Permissions::OWNER_EXECUTE, b'x'),
    (Permissions::GROUP_READ, b'r'),
    (Permissions::GROUP_WRITE, b'w'),
    (Permissions::GROUP_EXECUTE, b'x'),
    (Permissions::OTHER_READ, b'r'),
    (Permissions::OTHER_WRITE, b'w'),
    (Permissions::OTHER_EXECUTE, b'x'),
];

impl Permissions {
    /// The native mode for these permissions, between `0` and `0o777`.
    pub const fn mode(self) -> mode_t {
        (self.bits() & Self::all().bits()) as mode_t
    }

    /// Parses the nine character symbolic form used by `ls -l`, e.g. `"rw-r--r--"`.
    pub fn from_symbolic(value: &str) -> Result<Permissions, InvalidArgumentError> {
        let bytes = value.as_bytes();
        if bytes.len() != SYMBOLS.len() {
            Err(InvalidArgumentError { reason: "symbolic permissions must be 9 characters" })?
        }

        let mut permissions = Permissions::empty();
        for (&ch, &(permission, symbol)) in bytes.iter().zip(SYMBOLS.iter()) {
            match ch {
                b'-' => (),
                _ if ch == symbol => permissions |= permission,
                _ => Err(InvalidArgumentError { reason: "unexpected character in symbolic permissions" })?,
            }
        }
        Ok(permissions)
    }
}

impl From<mode_t> for Permissions {
    /// Keeps the permission bits of `mode`, dropping file type and special bits.
    fn from(mode: mode_t) -> Self {
        Permissions::from_bits_truncate((mode & 0o777) as u16)
    }
}

impl Display for Permissions {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (permission, symbol) in SYMBOLS {
            let ch = if self.contains(permission) { symbol } else { b'-' };
            write!(f, "{}", ch as char)?;
        }
        Ok(())
    }
}
