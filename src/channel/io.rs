use std::io::{self, Read, Seek, SeekFrom, Write};

use super::{ClosedChannelError, FileChannel};
use crate::driver::Driver;

impl<D: Driver> Read for FileChannel<D> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(FileChannel::read(self, buf)?)
    }
}

impl<D: Driver> Write for FileChannel<D> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(FileChannel::write(self, buf)?)
    }

    // Nothing is buffered on this side of the driver.
    fn flush(&mut self) -> io::Result<()> {
        if self.is_open() {
            Ok(())
        } else {
            Err(ClosedChannelError.into())
        }
    }
}

impl<D: Driver> Seek for FileChannel<D> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        Ok(FileChannel::seek(self, pos)?)
    }
}
