use std::fmt::{self, Display, Formatter};
use std::io;

use derive_more::{Display, Error};

use crate::driver::RawOsError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("invalid argument: {reason}")]
pub struct InvalidArgumentError {
    pub reason: &'static str,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("file already exists")]
pub struct AlreadyExistsError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("channel is closed")]
pub struct ClosedChannelError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("short write: {written} of {expected} bytes accepted")]
pub struct ShortWriteError {
    pub expected: usize,
    pub written: usize,
}

/// The native primitive that failed.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum NativeOp {
    #[display("create")]
    Create,
    #[display("open")]
    Open,
    #[display("read")]
    Read,
    #[display("write")]
    Write,
    #[display("fstat")]
    Fstat,
    #[display("lseek")]
    Lseek,
    #[display("ftruncate")]
    Ftruncate,
    #[display("fsync")]
    Fsync,
    #[display("close")]
    Close,
}

/// A failed native call, with the driver's error code when it reported one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub struct IOError {
    pub op: NativeOp,
    pub code: Option<RawOsError>,
}

impl Display for IOError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "native {} failed: {}", self.op, io::Error::from_raw_os_error(code)),
            None => write!(f, "native {} failed", self.op),
        }
    }
}
