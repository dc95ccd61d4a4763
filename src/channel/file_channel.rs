use std::ffi::CString;
use std::fmt::{self, Debug, Formatter};
use std::io::SeekFrom;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;
use std::{mem, ptr, slice};

use bytes::{Buf, BufMut};
use libc::{SEEK_CUR, SEEK_END, SEEK_SET, off_t, stat as Stat};
use tracing::{debug, trace, warn};

use super::{
    AlreadyExistsError, ClosedChannelError, CloseError, Handle, IOError, InvalidArgumentError,
    Metadata, MetadataError, NativeOp, OpenError, OpenIntent, OpenOptions, Permissions, ReadError,
    SeekError, ShortWriteError, SizeError, SyncError, TruncateError, WriteError,
};
use crate::driver::{Driver, RawOsError, Volume};

/// The largest region [`FileChannel::read_buf`] hands to the driver in one call.
pub const READ_BUF_LIMIT: usize = 128 * 1024;

/// A byte channel over a single native file handle.
///
/// The channel owns its handle from a successful [`open`](Self::open) until [`close`](Self::close)
/// (or drop). Once closed, every operation fails with [`ClosedChannelError`] without reaching the
/// driver. The read / write position lives in the driver; the channel never tracks it itself.
///
/// All calls block until the driver returns. A channel is not internally synchronized, which the
/// `&mut self` receivers enforce.
pub struct FileChannel<D: Driver> {
    driver: D,
    volume: Volume,
    handle: Option<Handle>,
}

impl<D: Driver> FileChannel<D> {
    pub fn options() -> OpenOptions {
        OpenOptions::new()
    }

    /// Opens `file_path` on `volume`, creating it first if `intents` ask for it.
    ///
    /// Relative paths are rejected before any native call. Exactly one native create or open is
    /// issued otherwise, and its failure is never retried.
    pub fn open<P: AsRef<Path>>(
        driver: D,
        volume: Volume,
        file_path: P,
        intents: OpenIntent,
        permissions: Option<Permissions>,
    ) -> Result<FileChannel<D>, OpenError> {
        let file_path = file_path.as_ref();
        let pathname = native_path(file_path)?;

        let flags = intents.native_flags();
        let mode = permissions.map(Permissions::mode);

        let raw = if intents.creates() {
            driver.create(volume, &pathname, flags, mode)
        } else {
            driver.open(volume, &pathname, flags)
        };

        let Some(handle) = Handle::from_raw(raw) else {
            // Read the error code before anything else can clobber it.
            let code = driver.last_error();
            debug!(path = %file_path.display(), flags, ?code, "native open failed");
            return Err(open_failure(intents, code));
        };

        debug!(path = %file_path.display(), flags, ?mode, ?handle, "opened channel");
        Ok(FileChannel {
            driver,
            volume,
            handle: Some(handle),
        })
    }

    pub const fn volume(&self) -> Volume {
        self.volume
    }

    pub const fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    fn raw_handle(&self) -> Result<u64, ClosedChannelError> {
        self.handle.as_ref().map(Handle::raw).ok_or(ClosedChannelError)
    }

    fn io_error(&self, op: NativeOp) -> IOError {
        IOError {
            op,
            code: self.driver.last_error(),
        }
    }

    /// Reads from the current position into the whole of `buf`, returning the number of bytes the
    /// driver filled. Zero means end of stream.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize, ReadError> {
        let handle = self.raw_handle()?;
        let capacity = buf.len();

        match self.driver.read(handle, buf, 0) {
            count if count < 0 => Err(self.io_error(NativeOp::Read).into()),
            count if count as usize > capacity => Err(IOError { op: NativeOp::Read, code: None }.into()),
            count => {
                trace!(handle, capacity, count, "read");
                Ok(count as usize)
            },
        }
    }

    /// Reads into the writable region of `buf`, advancing its cursor by the number of bytes read.
    ///
    /// At most [`READ_BUF_LIMIT`] bytes are requested per call.
    pub fn read_buf<B: BufMut>(&mut self, buf: &mut B) -> Result<usize, ReadError> {
        if !buf.has_remaining_mut() {
            return Ok(0);
        }

        let chunk = buf.chunk_mut();
        let len = chunk.len().min(READ_BUF_LIMIT);
        let start = chunk.as_mut_ptr();

        // SAFETY: chunk_mut hands out at least len writable bytes at start, which stay valid until
        // buf is next touched. Zeroing them first makes the region an initialized slice.
        let region = unsafe {
            ptr::write_bytes(start, 0, len);
            slice::from_raw_parts_mut(start, len)
        };

        let count = self.read(region)?;
        // SAFETY: read never reports more bytes than the region holds, all of them initialized.
        unsafe { buf.advance_mut(count) };
        Ok(count)
    }

    /// Writes all of `buf` at the current position.
    ///
    /// A driver accepting fewer bytes than given is a [`ShortWriteError`]; the remainder is not
    /// retried.
    pub fn write(&mut self, buf: &[u8]) -> Result<usize, WriteError> {
        let handle = self.raw_handle()?;
        let expected = buf.len();

        match self.driver.write(handle, buf, 0) {
            count if count < 0 => Err(self.io_error(NativeOp::Write).into()),
            count if count as usize > expected => Err(IOError { op: NativeOp::Write, code: None }.into()),
            count if (count as usize) < expected => Err(ShortWriteError {
                expected,
                written: count as usize,
            }.into()),
            count => {
                trace!(handle, count, "write");
                Ok(count as usize)
            },
        }
    }

    /// Writes exactly the remaining bytes of `buf` and advances it past them.
    ///
    /// A buffer split across several chunks is gathered into one region first, which consumes it
    /// even if the write then fails.
    pub fn write_buf<B: Buf>(&mut self, buf: &mut B) -> Result<usize, WriteError> {
        let remaining = buf.remaining();

        if buf.chunk().len() == remaining {
            let count = self.write(buf.chunk())?;
            buf.advance(count);
            Ok(count)
        } else {
            let region = buf.copy_to_bytes(remaining);
            self.write(&region)
        }
    }

    pub fn metadata(&self) -> Result<Metadata, MetadataError> {
        let handle = self.raw_handle()?;

        // SAFETY: stat is plain data, for which all zeroes is a valid value.
        let mut raw: Stat = unsafe { mem::zeroed() };
        if self.driver.fstat(handle, &mut raw) != 0 {
            Err(self.io_error(NativeOp::Fstat))?
        }

        Ok(Metadata::from_stat(&raw))
    }

    /// The current length of the file in bytes.
    pub fn size(&self) -> Result<u64, SizeError> {
        Ok(self.metadata()?.size)
    }

    pub fn seek(&mut self, pos: SeekFrom) -> Result<u64, SeekError> {
        let handle = self.raw_handle()?;
        let (offset, whence) = match pos {
            SeekFrom::Start(offset) => (to_off(offset)?, SEEK_SET),
            SeekFrom::Current(offset) => (to_off(offset)?, SEEK_CUR),
            SeekFrom::End(offset) => (to_off(offset)?, SEEK_END),
        };

        match self.driver.lseek(handle, offset, whence) {
            pos if pos < 0 => Err(self.io_error(NativeOp::Lseek).into()),
            pos => {
                trace!(handle, offset, whence, pos, "seek");
                Ok(pos as u64)
            },
        }
    }

    pub fn position(&mut self) -> Result<u64, SeekError> {
        self.seek(SeekFrom::Current(0))
    }

    pub fn set_position(&mut self, pos: u64) -> Result<u64, SeekError> {
        self.seek(SeekFrom::Start(pos))
    }

    /// Cuts or extends the file to `len` bytes. The position is left untouched.
    pub fn truncate(&mut self, len: u64) -> Result<(), TruncateError> {
        let handle = self.raw_handle()?;
        if self.driver.ftruncate(handle, to_off(len)?) != 0 {
            Err(self.io_error(NativeOp::Ftruncate))?
        }
        Ok(())
    }

    /// Flushes written data and metadata through to storage.
    pub fn sync(&mut self) -> Result<(), SyncError> {
        let handle = self.raw_handle()?;
        if self.driver.fsync(handle) != 0 {
            Err(self.io_error(NativeOp::Fsync))?
        }
        Ok(())
    }

    /// Releases the native handle.
    ///
    /// The channel is closed afterwards even if the driver reports a failure, which is still
    /// returned. Closing twice fails with [`ClosedChannelError`].
    pub fn close(&mut self) -> Result<(), CloseError> {
        let handle = self.handle.take().ok_or(ClosedChannelError)?;
        debug!(?handle, "closing channel");
        Ok(release(&self.driver, handle)?)
    }
}

impl<D: Driver> Drop for FileChannel<D> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            let raw = handle.raw();
            if let Err(error) = release(&self.driver, handle) {
                warn!(handle = raw, %error, "failed to close native handle on drop");
            }
        }
    }
}

impl<D: Driver> Debug for FileChannel<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileChannel")
            .field("volume", &self.volume)
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}

fn release<D: Driver>(driver: &D, handle: Handle) -> Result<(), IOError> {
    if driver.close(handle.raw()) != 0 {
        Err(IOError {
            op: NativeOp::Close,
            code: driver.last_error(),
        })?
    }
    Ok(())
}

fn native_path(file_path: &Path) -> Result<CString, InvalidArgumentError> {
    if !file_path.is_absolute() {
        Err(InvalidArgumentError { reason: "path is not absolute" })?
    }
    CString::new(file_path.as_os_str().as_bytes())
        .map_err(|_| InvalidArgumentError { reason: "path contains a nul byte" })
}

/// Classifies a failed create / open. Under `CREATE_NEW`, only a failure the driver explicitly
/// attributes to something other than an existing file is a plain I/O error.
fn open_failure(intents: OpenIntent, code: Option<RawOsError>) -> OpenError {
    let op = if intents.creates() { NativeOp::Create } else { NativeOp::Open };

    match code {
        None | Some(libc::EEXIST) if intents.creates_new() => AlreadyExistsError.into(),
        code => IOError { op, code }.into(),
    }
}

fn to_off<T: TryInto<off_t>>(value: T) -> Result<off_t, InvalidArgumentError> {
    value
        .try_into()
        .map_err(|_| InvalidArgumentError { reason: "offset does not fit the native offset type" })
}
