//! Byte channels over native file handles.
//!
//! The central type is [`FileChannel`], opened through [`FileChannel::open`] or the
//! [`OpenOptions`] builder against any [`Driver`](crate::driver::Driver).
//!
//! # Opening
//! A channel is opened from a [`Volume`](crate::driver::Volume), an absolute path, a set of
//! [`OpenIntent`]s and optional [`Permissions`]. Intents translate to native flags through
//! [`OpenIntent::native_flags`] and permissions to a mode through [`Permissions::mode`]; both are
//! pure. Creating intents route to the driver's create primitive, everything else to open.
//!
//! # Errors
//! Every operation returns its own error enum, built from a small set of error structs:
//! [`InvalidArgumentError`] for bad input caught before the driver is called,
//! [`AlreadyExistsError`] for [`OpenIntent::CREATE_NEW`] against an existing file, [`IOError`]
//! for any other native failure, and [`ClosedChannelError`] for use after close. All of them
//! convert into [`std::io::Error`].

mod error;
mod file_channel;
mod handle;
mod intent;
mod io;
mod metadata;
mod options;
mod permissions;
mod union_errors;


pub use error::*;
pub use file_channel::*;
pub(crate) use handle::*;
pub use intent::*;
pub use metadata::*;
pub use options::*;
pub use permissions::*;
pub use union_errors::*;
