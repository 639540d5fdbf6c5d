// src/core/cache.rs
// On-disk response cache: one file per URL, named by the SHA-256 of the URL.
// Entries never expire; `clear` is the only eviction.

use std::{fs, io, path::{Path, PathBuf}};

use sha2::{Digest, Sha256};
use url::Url;

#[derive(Clone, Debug)]
pub struct ResponseCache {
    dir: PathBuf,
}

impl ResponseCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path { &self.dir }

    fn entry_path(&self, url: &Url) -> PathBuf {
        let digest = Sha256::digest(url.as_str().as_bytes());
        self.dir.join(format!("{digest:x}"))
    }

    /// Cached body for `url`, if any. Read errors count as a miss.
    pub fn load(&self, url: &Url) -> Option<Vec<u8>> {
        fs::read(self.entry_path(url)).ok()
    }

    pub fn store(&self, url: &Url, body: &[u8]) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.entry_path(url);
        // write-then-rename so a crash never leaves a truncated entry behind
        let tmp = path.with_extension("part");
        fs::write(&tmp, body)?;
        fs::rename(&tmp, &path)
    }

    /// Remove every entry. Returns how many were dropped.
    pub fn clear(&self) -> io::Result<usize> {
        if !self.dir.exists() {
            return Ok(0);
        }
        let mut removed = 0usize;
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.is_file() {
                fs::remove_file(&path)?;
                removed += 1;
            }
        }
        Ok(removed)
    }
}
