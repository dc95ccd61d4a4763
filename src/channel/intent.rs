use bitflags::bitflags;
use libc::{O_APPEND, O_CREAT, O_DSYNC, O_EXCL, O_RDONLY, O_RDWR, O_SYNC, O_TRUNC, c_int};

bitflags! {
    /// The portable intents a channel is opened with.
    ///
    /// At most one of [`CREATE`](Self::CREATE) and [`CREATE_NEW`](Self::CREATE_NEW) is meant to be
    /// present; neither means the file must already exist. [`OpenOptions`](super::OpenOptions)
    /// keeps the two exclusive, but a set holding both still translates deterministically, with
    /// `CREATE_NEW` taking precedence.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct OpenIntent: u16 {
        const READ       = 1 << 0;
        const WRITE      = 1 << 1;
        const APPEND     = 1 << 2;
        const TRUNCATE   = 1 << 3;
        const CREATE     = 1 << 4;
        const CREATE_NEW = 1 << 5;
        const SYNC       = 1 << 6;
        const DSYNC      = 1 << 7;
    }
}

impl OpenIntent {
    pub const fn writes(self) -> bool {
        self.intersects(Self::WRITE.union(Self::APPEND))
    }

    pub const fn creates(self) -> bool {
        self.intersects(Self::CREATE.union(Self::CREATE_NEW))
    }

    pub const fn creates_new(self) -> bool {
        self.contains(Self::CREATE_NEW)
    }

    /// Translates the intents into the native `open(2)`-style flags.
    ///
    /// Any writing intent opens the file read-write, so written data can be read back through the
    /// same channel. Truncation only applies to writable channels.
    pub const fn native_flags(self) -> c_int {
        let mut flags = if self.writes() { O_RDWR } else { O_RDONLY };

        if self.contains(Self::APPEND) {
            flags |= O_APPEND;
        }
        if self.writes() && self.contains(Self::TRUNCATE) {
            flags |= O_TRUNC;
        }
        if self.creates_new() {
            flags |= O_CREAT | O_EXCL;
        } else if self.contains(Self::CREATE) {
            flags |= O_CREAT;
        }
        if self.contains(Self::SYNC) {
            flags |= O_SYNC;
        }
        if self.contains(Self::DSYNC) {
            flags |= O_DSYNC;
        }

        flags
    }
}
