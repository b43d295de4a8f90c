use super::FileSystem;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Resolves relative paths against a fixed root before delegating
pub struct RootedFileSystem<F: FileSystem> {
    inner: F,
    root: PathBuf,
}

impl<F: FileSystem> RootedFileSystem<F> {
    pub fn new(inner: F, root: impl Into<PathBuf>) -> Self {
        Self {
            inner,
            root: root.into(),
        }
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl<F: FileSystem> FileSystem for RootedFileSystem<F> {
    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(&self.resolve(path))
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.inner.read_to_string(&self.resolve(path))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        self.inner.write(&self.resolve(path), contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;

    #[test]
    fn test_relative_paths_join_root() {
        let mock = MockFileSystem::new();
        mock.add_file("/repo/src/app/api/transfers/[id]/route.ts", "x");

        let rooted = RootedFileSystem::new(&mock, "/repo");
        assert!(rooted.exists(Path::new("src/app/api/transfers/[id]/route.ts")));
        assert!(!rooted.exists(Path::new("src/app/api/missing/route.ts")));
    }

    #[test]
    fn test_absolute_paths_bypass_root() {
        let rooted = RootedFileSystem::new(MockFileSystem::new(), "/repo");
        assert_eq!(
            rooted.resolve(Path::new("/elsewhere/route.ts")),
            PathBuf::from("/elsewhere/route.ts")
        );
    }

    #[test]
    fn test_writes_land_under_root() {
        let mock = MockFileSystem::new();
        mock.add_file("/repo/route.ts", "before");

        let rooted = RootedFileSystem::new(&mock, "/repo");
        rooted.write(Path::new("route.ts"), "after").unwrap();

        assert_eq!(mock.content("/repo/route.ts").as_deref(), Some("after"));
    }
}
