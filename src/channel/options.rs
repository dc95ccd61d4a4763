use std::fmt::{self, Debug, Formatter};
use std::path::Path;

use super::{FileChannel, OpenError, OpenIntent, Permissions};
use crate::driver::{Driver, Volume};
use crate::util::fmt::DebugRaw;

/// A builder for opening [`FileChannel`]s, with read-only access to an existing file as the
/// default. Available via [`FileChannel::options`].
///
/// The creation setters replace one another: enabling [`create`](Self::create) clears
/// [`create_new`](Self::create_new) and vice versa, so the built intent set always holds at most
/// one creation mode.
#[derive(Clone, PartialEq, Eq)]
pub struct OpenOptions {
    pub(crate) intents: OpenIntent,
    pub(crate) permissions: Option<Permissions>,
}

impl OpenOptions {
    pub const fn new() -> OpenOptions {
        OpenOptions {
            intents: OpenIntent::READ,
            permissions: None,
        }
    }

    pub const fn intents(&self) -> OpenIntent {
        self.intents
    }

    pub const fn permissions(&self) -> Option<Permissions> {
        self.permissions
    }

    pub fn read(&mut self, value: bool) -> &mut Self {
        self.intents.set(OpenIntent::READ, value);
        self
    }

    pub fn write(&mut self, value: bool) -> &mut Self {
        self.intents.set(OpenIntent::WRITE, value);
        self
    }

    pub fn append(&mut self, value: bool) -> &mut Self {
        self.intents.set(OpenIntent::APPEND, value);
        self
    }

    pub fn truncate(&mut self, value: bool) -> &mut Self {
        self.intents.set(OpenIntent::TRUNCATE, value);
        self
    }

    /// Creates the file if it is missing.
    pub fn create(&mut self, value: bool) -> &mut Self {
        self.intents.remove(OpenIntent::CREATE_NEW);
        self.intents.set(OpenIntent::CREATE, value);
        self
    }

    /// Creates the file, failing with [`OpenError::AlreadyExists`] if it is already present. The
    /// existence check and the creation are a single native call.
    pub fn create_new(&mut self, value: bool) -> &mut Self {
        self.intents.remove(OpenIntent::CREATE);
        self.intents.set(OpenIntent::CREATE_NEW, value);
        self
    }

    pub fn sync(&mut self, value: bool) -> &mut Self {
        self.intents.set(OpenIntent::SYNC, value);
        self
    }

    pub fn dsync(&mut self, value: bool) -> &mut Self {
        self.intents.set(OpenIntent::DSYNC, value);
        self
    }

    /// Permissions given to a newly created file. Without them the driver picks its own default.
    pub fn create_permissions(&mut self, value: Permissions) -> &mut Self {
        self.permissions = Some(value);
        self
    }

    pub fn mode(&mut self, value: u16) -> &mut Self {
        self.permissions = Some(Permissions::from_bits_truncate(value));
        self
    }

    pub fn open<D: Driver, P: AsRef<Path>>(
        &self,
        driver: D,
        volume: Volume,
        file_path: P,
    ) -> Result<FileChannel<D>, OpenError> {
        FileChannel::open(driver, volume, file_path, self.intents, self.permissions)
    }
}

impl Default for OpenOptions {
    fn default() -> Self {
        OpenOptions::new()
    }
}

impl Debug for OpenOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenOptions")
            .field("intents", &self.intents)
            .field("flags", &DebugRaw::hex(self.intents.native_flags()))
            .field("mode", &self.permissions.map(|p| DebugRaw::octal(p.mode())))
            .finish()
    }
}
