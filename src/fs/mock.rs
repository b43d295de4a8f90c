use super::FileSystem;
use anyhow::{anyhow, Result};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq)]
enum EntryKind {
    File(String),
    Directory,
}

/// In-memory file system that records every write
pub struct MockFileSystem {
    entries: RwLock<HashMap<PathBuf, EntryKind>>,
    unreadable: RwLock<HashSet<PathBuf>>,
    readonly: RwLock<HashSet<PathBuf>>,
    writes: RwLock<Vec<PathBuf>>,
    root: PathBuf,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::with_root(PathBuf::from("/mock"))
    }

    pub fn with_root(root: PathBuf) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            unreadable: RwLock::new(HashSet::new()),
            readonly: RwLock::new(HashSet::new()),
            writes: RwLock::new(Vec::new()),
            root,
        }
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        let path = self.normalize_path(path.as_ref());
        let mut entries = self.entries.write().unwrap();

        if let Some(parent) = path.parent() {
            Self::ensure_parents(&mut entries, parent);
        }

        entries.insert(path, EntryKind::File(content.to_string()));
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = self.normalize_path(path.as_ref());
        let mut entries = self.entries.write().unwrap();

        Self::ensure_parents(&mut entries, &path);
        entries.insert(path, EntryKind::Directory);
    }

    /// Register a file whose reads fail, as with a permission error
    pub fn add_unreadable_file(&self, path: impl AsRef<Path>) {
        self.add_file(path.as_ref(), "");
        let path = self.normalize_path(path.as_ref());
        self.unreadable.write().unwrap().insert(path);
    }

    /// Register a file whose writes fail
    pub fn add_readonly_file(&self, path: impl AsRef<Path>, content: &str) {
        self.add_file(path.as_ref(), content);
        let path = self.normalize_path(path.as_ref());
        self.readonly.write().unwrap().insert(path);
    }

    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        let path = self.normalize_path(path.as_ref());
        match self.entries.read().unwrap().get(&path) {
            Some(EntryKind::File(content)) => Some(content.clone()),
            _ => None,
        }
    }

    /// Paths written so far, in write order
    pub fn writes(&self) -> Vec<PathBuf> {
        self.writes.read().unwrap().clone()
    }

    fn normalize_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    fn ensure_parents(entries: &mut HashMap<PathBuf, EntryKind>, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            entries
                .entry(current.clone())
                .or_insert(EntryKind::Directory);
        }
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        let path = self.normalize_path(path);
        self.entries.read().unwrap().contains_key(&path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let path = self.normalize_path(path);
        if self.unreadable.read().unwrap().contains(&path) {
            return Err(anyhow!("Permission denied: {:?}", path));
        }

        match self.entries.read().unwrap().get(&path) {
            Some(EntryKind::File(content)) => Ok(content.clone()),
            Some(EntryKind::Directory) => Err(anyhow!("Is a directory: {:?}", path)),
            None => Err(anyhow!("File not found: {:?}", path)),
        }
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        let path = self.normalize_path(path);
        if self.readonly.read().unwrap().contains(&path) {
            return Err(anyhow!("Read-only file system: {:?}", path));
        }

        let mut entries = self.entries.write().unwrap();
        if let Some(EntryKind::Directory) = entries.get(&path) {
            return Err(anyhow!("Is a directory: {:?}", path));
        }
        if let Some(parent) = path.parent() {
            Self::ensure_parents(&mut entries, parent);
        }

        entries.insert(path.clone(), EntryKind::File(contents.to_string()));
        self.writes.write().unwrap().push(path);
        Ok(())
    }
}
