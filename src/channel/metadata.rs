use libc::{mode_t, stat as Stat};

use super::Permissions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    BlockDevice,
    CharDevice,
    Directory,
    FIFO,
    Symlink,
    Regular,
    Socket,
    Unknown,
}

impl FileType {
    pub const fn from_mode(mode: mode_t) -> FileType {
        match mode & libc::S_IFMT {
            libc::S_IFBLK  => FileType::BlockDevice,
            libc::S_IFCHR  => FileType::CharDevice,
            libc::S_IFDIR  => FileType::Directory,
            libc::S_IFIFO  => FileType::FIFO,
            libc::S_IFLNK  => FileType::Symlink,
            libc::S_IFREG  => FileType::Regular,
            libc::S_IFSOCK => FileType::Socket,
            _              => FileType::Unknown,
        }
    }
}

/// A copy of the status record the driver reports for an open handle.
#[derive(Debug, Clone)]
pub struct Metadata {
    pub size: u64,                 // st_size
    pub file_type: FileType,       // st_mode
    pub permissions: Permissions,  // st_mode
    pub uid: u32,                  // st_uid
    pub gid: u32,                  // st_gid
    pub device_id: u64,            // st_dev
    pub time_accessed: (i64, i64), // st_atime, st_atime_nsec
    pub time_modified: (i64, i64), // st_mtime, st_mtime_nsec
    pub time_changed: (i64, i64),  // st_ctime, st_ctime_nsec
    pub links: u64,                // st_nlink
    pub block_size: i64,           // st_blksize
    pub blocks: i64,               // st_blocks
    pub inode_num: u64,            // st_ino
}

impl Metadata {
    #[allow(clippy::unnecessary_cast)]
    pub(crate) fn from_stat(raw: &Stat) -> Metadata {
        Metadata {
            // A negative size never describes a real file.
            size: raw.st_size.max(0) as u64,
            file_type: FileType::from_mode(raw.st_mode),
            permissions: Permissions::from(raw.st_mode),
            uid: raw.st_uid,
            gid: raw.st_gid,
            device_id: raw.st_dev as u64,
            time_accessed: (raw.st_atime as i64, raw.st_atime_nsec as i64),
            time_modified: (raw.st_mtime as i64, raw.st_mtime_nsec as i64),
            time_changed: (raw.st_ctime as i64, raw.st_ctime_nsec as i64),
            links: raw.st_nlink as u64,
            block_size: raw.st_blksize as i64,
            blocks: raw.st_blocks as i64,
            inode_num: raw.st_ino as u64,
        }
    }

    pub const fn is_regular(&self) -> bool {
        matches!(self.file_type, FileType::Regular)
    }
}
