use std::io::{self, ErrorKind};

use derive_more::{Display, Error, From, IsVariant};

use super::{AlreadyExistsError, ClosedChannelError, IOError, InvalidArgumentError, ShortWriteError};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum OpenError {
    InvalidArgument(InvalidArgumentError),
    AlreadyExists(AlreadyExistsError),
    IO(IOError),
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum ReadError {
    Closed(ClosedChannelError),
    IO(IOError),
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum WriteError {
    Closed(ClosedChannelError),
    IO(IOError),
    ShortWrite(ShortWriteError),
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum MetadataError {
    Closed(ClosedChannelError),
    IO(IOError),
}

pub type SizeError = MetadataError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum SeekError {
    Closed(ClosedChannelError),
    InvalidArgument(InvalidArgumentError),
    IO(IOError),
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum TruncateError {
    Closed(ClosedChannelError),
    InvalidArgument(InvalidArgumentError),
    IO(IOError),
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum SyncError {
    Closed(ClosedChannelError),
    IO(IOError),
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum CloseError {
    Closed(ClosedChannelError),
    IO(IOError),
}

impl From<IOError> for io::Error {
    fn from(value: IOError) -> Self {
        match value.code {
            Some(code) => io::Error::from_raw_os_error(code),
            None => io::Error::other(value),
        }
    }
}

impl From<InvalidArgumentError> for io::Error {
    fn from(value: InvalidArgumentError) -> Self {
        io::Error::new(ErrorKind::InvalidInput, value)
    }
}

impl From<AlreadyExistsError> for io::Error {
    fn from(value: AlreadyExistsError) -> Self {
        io::Error::new(ErrorKind::AlreadyExists, value)
    }
}

impl From<ClosedChannelError> for io::Error {
    fn from(value: ClosedChannelError) -> Self {
        io::Error::new(ErrorKind::NotConnected, value)
    }
}

impl From<ShortWriteError> for io::Error {
    fn from(value: ShortWriteError) -> Self {
        io::Error::new(ErrorKind::WriteZero, value)
    }
}

macro_rules! impl_into_io {
    ($error:ident { $($variant:ident),+ }) => {
        impl From<$error> for io::Error {
            fn from(value: $error) -> Self {
                match value {
                    $($error::$variant(e) => e.into(),)+
                }
            }
        }
    };
    ($error:ident { $($variant:ident),+ }, $($rest:tt)+) => {
        impl_into_io!($error { $($variant),+ });
        impl_into_io!($($rest)+);
    };
}

impl_into_io! {
    OpenError     { InvalidArgument, AlreadyExists, IO },
    ReadError     { Closed, IO },
    WriteError    { Closed, IO, ShortWrite },
    MetadataError { Closed, IO },
    SeekError     { Closed, InvalidArgument, IO },
    TruncateError { Closed, InvalidArgument, IO },
    SyncError     { Closed, IO },
    CloseError    { Closed, IO }
}
