use std::fmt::{self, Debug, Formatter};
use std::num::NonZeroU64;

use crate::driver::RawHandle;

/// An open native file handle.
///
/// Only a successful create / open produces one and closing consumes it, so a zero or already
/// released handle can never reach the driver through a channel.
#[derive(PartialEq, Eq)]
pub(crate) struct Handle(NonZeroU64);

impl Handle {
    pub(crate) const fn from_raw(raw: RawHandle) -> Option<Handle> {
        match NonZeroU64::new(raw) {
            Some(raw) => Some(Handle(raw)),
            None => None,
        }
    }

    pub(crate) const fn raw(&self) -> RawHandle {
        self.0.get()
    }
}

impl Debug for Handle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Handle(0x{:x})", self.raw())
    }
}
