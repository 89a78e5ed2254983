//! On-disk cache for downloaded sprite archives.
//!
//! One raw zip blob per entity, keyed by the zero-padded id. Entries are
//! written once and never pruned; deleting the cache directory is the only
//! way to force a re-download.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Cache of `sprites.zip` blobs keyed by entity id.
#[derive(Debug, Clone)]
pub struct ArchiveCache {
    dir: PathBuf,
}

impl ArchiveCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the cache entry for `id`.
    pub fn entry_path(&self, id: u32) -> PathBuf {
        self.dir.join(format!("{:04}_sprites.zip", id))
    }

    /// Read the cached archive for `id`, or `None` when absent.
    pub fn load(&self, id: u32) -> Option<Vec<u8>> {
        fs::read(self.entry_path(id)).ok()
    }

    /// Persist a freshly downloaded archive for `id`.
    pub fn store(&self, id: u32, bytes: &[u8]) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.entry_path(id), bytes)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_path_zero_pads_id() {
        let cache = ArchiveCache::new("/tmp/cache");
        assert!(cache.entry_path(7).ends_with("0007_sprites.zip"));
        assert!(cache.entry_path(151).ends_with("0151_sprites.zip"));
        assert!(cache.entry_path(99999).ends_with("99999_sprites.zip"));
    }

    #[test]
    fn test_store_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ArchiveCache::new(dir.path().join("cache"));

        assert!(cache.load(25).is_none());
        cache.store(25, b"zip bytes").unwrap();
        assert_eq!(cache.load(25).unwrap(), b"zip bytes");
    }
}
