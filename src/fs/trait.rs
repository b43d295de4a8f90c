//! FileSystem trait definition

use anyhow::Result;
use std::path::Path;

/// Abstraction over the file operations the patcher needs
pub trait FileSystem {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Read file contents as string
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Replace the file contents with `contents`
    fn write(&self, path: &Path, contents: &str) -> Result<()>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        (**self).read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        (**self).write(path, contents)
    }
}
