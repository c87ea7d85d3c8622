use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{CoreError, Result};

/// Raw response bodies keyed by request URL.
///
/// Each body lives in `<dir>/<blake3(url) hex>.json` and is replaced
/// atomically, so a reader never sees a half-written file.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    dir: PathBuf,
}

impl ResponseCache {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn path_for(&self, url: &str) -> PathBuf {
        let key = blake3::hash(url.as_bytes()).to_hex();
        self.dir.join(format!("{key}.json"))
    }

    pub fn get(&self, url: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(url)) {
            Ok(body) => Ok(Some(body)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(CoreError::from(err)),
        }
    }

    pub fn put(&self, url: &str, body: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(url);
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| CoreError::Internal(format!("invalid cache path for {url}")))?;
        let tmp_path = self
            .dir
            .join(format!(".{file_name}.tmp.{}", uuid::Uuid::new_v4().simple()));

        {
            let mut tmp = fs::OpenOptions::new()
                .create_new(true)
                .write(true)
                .open(&tmp_path)?;
            tmp.write_all(body.as_bytes())?;
            tmp.sync_all()?;
        }

        if let Err(err) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(CoreError::from(err));
        }
        Ok(())
    }

    pub fn remove(&self, url: &str) -> Result<()> {
        match fs::remove_file(self.path_for(url)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(CoreError::from(err)),
        }
    }
}
