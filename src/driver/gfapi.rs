//! [`Driver`] bound to GlusterFS's `libgfapi`.

use std::ffi::CStr;
use std::ptr;

use libc::{c_char, c_int, c_void, mode_t, off_t, size_t, ssize_t, stat as Stat};

use super::{Driver, RawHandle, Volume};

/// Mode used for created files when the caller supplies no permissions.
pub const DEFAULT_MODE: mode_t = 0o644;

#[link(name = "gfapi")]
unsafe extern "C" {
    fn glfs_creat(fs: *mut c_void, path: *const c_char, flags: c_int, mode: mode_t) -> *mut c_void;
    fn glfs_open(fs: *mut c_void, path: *const c_char, flags: c_int) -> *mut c_void;
    fn glfs_read(fd: *mut c_void, buf: *mut c_void, count: size_t, flags: c_int) -> ssize_t;
    fn glfs_write(fd: *mut c_void, buf: *const c_void, count: size_t, flags: c_int) -> ssize_t;
    fn glfs_fstat(fd: *mut c_void, buf: *mut Stat) -> c_int;
    fn glfs_lseek(fd: *mut c_void, offset: off_t, whence: c_int) -> off_t;
    // prestat / poststat are optional out-parameters since GFAPI_6.0.
    fn glfs_ftruncate(fd: *mut c_void, length: off_t, prestat: *mut c_void, poststat: *mut c_void) -> c_int;
    fn glfs_fsync(fd: *mut c_void, prestat: *mut c_void, poststat: *mut c_void) -> c_int;
    fn glfs_close(fd: *mut c_void) -> c_int;
}

/// The production driver. Volumes passed to it must wrap a `glfs_t *` that has been through
/// `glfs_init`, see [`Volume::from_ptr`].
#[derive(Debug, Default, Clone, Copy)]
pub struct GfapiDriver;

fn fs_ptr(volume: Volume) -> *mut c_void {
    volume.0 as usize as *mut c_void
}

fn fd_ptr(handle: RawHandle) -> *mut c_void {
    handle as usize as *mut c_void
}

impl Driver for GfapiDriver {
    fn create(&self, volume: Volume, path: &CStr, flags: c_int, mode: Option<mode_t>) -> RawHandle {
        // SAFETY: path is NUL terminated and outlives the call; gfapi reports a bad volume
        // through a null return rather than touching it.
        let fd = unsafe {
            glfs_creat(fs_ptr(volume), path.as_ptr(), flags, mode.unwrap_or(DEFAULT_MODE))
        };
        fd as usize as RawHandle
    }

    fn open(&self, volume: Volume, path: &CStr, flags: c_int) -> RawHandle {
        // SAFETY: As above.
        let fd = unsafe { glfs_open(fs_ptr(volume), path.as_ptr(), flags) };
        fd as usize as RawHandle
    }

    fn read(&self, handle: RawHandle, buf: &mut [u8], flags: c_int) -> isize {
        // SAFETY: buf is valid for buf.len() writable bytes for the duration of the call.
        unsafe { glfs_read(fd_ptr(handle), buf.as_mut_ptr().cast(), buf.len(), flags) }
    }

    fn write(&self, handle: RawHandle, buf: &[u8], flags: c_int) -> isize {
        // SAFETY: buf is valid for buf.len() readable bytes for the duration of the call.
        unsafe { glfs_write(fd_ptr(handle), buf.as_ptr().cast(), buf.len(), flags) }
    }

    fn fstat(&self, handle: RawHandle, stat: &mut Stat) -> c_int {
        // SAFETY: stat is a valid, exclusively borrowed stat record.
        unsafe { glfs_fstat(fd_ptr(handle), stat) }
    }

    fn lseek(&self, handle: RawHandle, offset: off_t, whence: c_int) -> off_t {
        // SAFETY: No memory is shared with the driver.
        unsafe { glfs_lseek(fd_ptr(handle), offset, whence) }
    }

    fn ftruncate(&self, handle: RawHandle, length: off_t) -> c_int {
        // SAFETY: Null stat out-parameters are skipped by gfapi.
        unsafe { glfs_ftruncate(fd_ptr(handle), length, ptr::null_mut(), ptr::null_mut()) }
    }

    fn fsync(&self, handle: RawHandle) -> c_int {
        // SAFETY: Null stat out-parameters are skipped by gfapi.
        unsafe { glfs_fsync(fd_ptr(handle), ptr::null_mut(), ptr::null_mut()) }
    }

    fn close(&self, handle: RawHandle) -> c_int {
        // SAFETY: The caller gives up the handle; gfapi frees it whatever the outcome.
        unsafe { glfs_close(fd_ptr(handle)) }
    }
}
