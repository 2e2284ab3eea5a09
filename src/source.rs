//! Directory listing abstraction used by the tree builder.

use std::ffi::OsString;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One immediate child of a listed directory.
///
/// `name` is the display form and may be lossy; `file_name` is the name as
/// stored on disk and is what recursion joins onto the parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub file_name: OsString,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn new(file_name: OsString, kind: EntryKind) -> Self {
        Self {
            name: file_name.to_string_lossy().to_string(),
            file_name,
            kind,
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self::new(OsString::from(name.into()), EntryKind::File)
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Self::new(OsString::from(name.into()), EntryKind::Directory)
    }
}

/// Read access to directory contents.
pub trait DirectorySource {
    /// List the immediate entries of `dir`, in no particular order.
    fn list(&self, dir: &Path) -> io::Result<Vec<DirEntry>>;
}

/// The real filesystem.
///
/// Entry kinds come from `read_dir` without following symlinks, so a link to a
/// directory is listed as a file and never walked.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsDirectory;

impl DirectorySource for OsDirectory {
    fn list(&self, dir: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();

        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let kind = if entry.file_type()?.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };

            entries.push(DirEntry::new(entry.file_name(), kind));
        }

        Ok(entries)
    }
}
