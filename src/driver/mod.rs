//! The native call surface that a [`FileChannel`](crate::channel::FileChannel) drives.
//!
//! Every primitive mirrors the shape of the underlying C call: handles and counts come back as
//! raw integers, where a zero handle or a negative count / status denotes failure. Interpreting
//! those values is the channel's job, not the driver's.
//!
//! The production implementation is [`GfapiDriver`] (behind the `gfapi` feature). Anything else
//! implementing [`Driver`] can stand in for it, which is how the channel is tested.

use std::ffi::CStr;
use std::io;
use std::rc::Rc;
use std::sync::Arc;

use libc::{c_int, mode_t, off_t, stat as Stat};

#[cfg(feature = "gfapi")]
mod gfapi;

#[cfg(feature = "gfapi")]
pub use gfapi::*;

/// An `errno` value reported by the native driver.
pub type RawOsError = c_int;

/// The raw form of a native file handle. Zero never identifies an open file.
pub type RawHandle = u64;

/// An opaque identifier for an already mounted volume.
///
/// Volumes are owned by whoever mounted them; a channel only passes its copy through to the
/// driver and never mounts, validates or releases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Volume(pub u64);

impl Volume {
    /// Wraps a native volume pointer, such as the `glfs_t *` returned by `glfs_new`.
    pub fn from_ptr<T>(ptr: *mut T) -> Volume {
        Volume(ptr as usize as u64)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait Driver {
    /// Creates (or, without `O_EXCL`, opens) the file at `path`. `mode` is `None` when the caller
    /// supplied no permissions, leaving the choice of default to the driver.
    fn create(&self, volume: Volume, path: &CStr, flags: c_int, mode: Option<mode_t>) -> RawHandle;

    fn open(&self, volume: Volume, path: &CStr, flags: c_int) -> RawHandle;

    /// Reads into the whole of `buf` from the handle's implicit cursor.
    fn read(&self, handle: RawHandle, buf: &mut [u8], flags: c_int) -> isize;

    /// Writes the whole of `buf` at the handle's implicit cursor.
    fn write(&self, handle: RawHandle, buf: &[u8], flags: c_int) -> isize;

    fn fstat(&self, handle: RawHandle, stat: &mut Stat) -> c_int;

    fn lseek(&self, handle: RawHandle, offset: off_t, whence: c_int) -> off_t;

    fn ftruncate(&self, handle: RawHandle, length: off_t) -> c_int;

    fn fsync(&self, handle: RawHandle) -> c_int;

    fn close(&self, handle: RawHandle) -> c_int;

    /// The error code left behind by the most recent failed call on this thread, if the driver
    /// reports one.
    fn last_error(&self) -> Option<RawOsError> {
        err_no()
    }
}

/// Reads `errno` for the calling thread. Zero means no error was recorded.
pub fn err_no() -> Option<RawOsError> {
    io::Error::last_os_error()
        .raw_os_error()
        .filter(|&code| code != 0)
}

macro_rules! forward_driver {
    ($($ptr:ty),+) => {$(
        impl<D: Driver + ?Sized> Driver for $ptr {
            fn create(&self, volume: Volume, path: &CStr, flags: c_int, mode: Option<mode_t>) -> RawHandle {
                (**self).create(volume, path, flags, mode)
            }

            fn open(&self, volume: Volume, path: &CStr, flags: c_int) -> RawHandle {
                (**self).open(volume, path, flags)
            }

            fn read(&self, handle: RawHandle, buf: &mut [u8], flags: c_int) -> isize {
                (**self).read(handle, buf, flags)
            }

            fn write(&self, handle: RawHandle, buf: &[u8], flags: c_int) -> isize {
                (**self).write(handle, buf, flags)
            }

            fn fstat(&self, handle: RawHandle, stat: &mut Stat) -> c_int {
                (**self).fstat(handle, stat)
            }

            fn lseek(&self, handle: RawHandle, offset: off_t, whence: c_int) -> off_t {
                (**self).lseek(handle, offset, whence)
            }

            fn ftruncate(&self, handle: RawHandle, length: off_t) -> c_int {
                (**self).ftruncate(handle, length)
            }

            fn fsync(&self, handle: RawHandle) -> c_int {
                (**self).fsync(handle)
            }

            fn close(&self, handle: RawHandle) -> c_int {
                (**self).close(handle)
            }

            fn last_error(&self) -> Option<RawOsError> {
                (**self).last_error()
            }
        }
    )+};
}

forward_driver!(&D, Box<D>, Rc<D>, Arc<D>);
