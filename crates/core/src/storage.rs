use std::{
    fmt,
    fs::{self, File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use rand::Rng;

use crate::dirs;

/// Byte oriented blob storage keyed by file name like keys.
pub trait BlobStore: fmt::Debug {
    /// Read the whole blob stored under `key`. A missing blob is an error.
    fn read(&self, key: &str) -> Result<Vec<u8>>;

    /// Overwrite the blob stored under `key` with `data`.
    fn write(&mut self, key: &str, data: &[u8]) -> Result<()>;
}

/// Blob store over plain files, one file per key.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Store rooted at the jotter user data directory.
    pub fn new() -> Result<FileStore> {
        let root = dirs::data_dir().context("Cannot determine user data directory")?;
        Ok(FileStore { root })
    }

    pub fn with_root(root: impl Into<PathBuf>) -> FileStore {
        FileStore { root: root.into() }
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl BlobStore for FileStore {
    fn read(&self, key: &str) -> Result<Vec<u8>> {
        let path = self.blob_path(key);
        let data = fs::read(&path).with_context(|| format!("Failed to read {path:?}"))?;
        Ok(data)
    }

    fn write(&mut self, key: &str, data: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create {:?}", self.root))?;

        // Write to a sibling temp file and rename over the target, a torn
        // write must not corrupt the existing blob.
        let (tmp, mut file) = tmp_sibling(&self.root)?;
        let written = file.write_all(data).and_then(|_| file.sync_all());
        drop(file);
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(e).with_context(|| format!("Failed to write {tmp:?}"));
        }

        let path = self.blob_path(key);
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(e).with_context(|| format!("Failed to replace {path:?}"));
        }

        log::debug!("Wrote blob {key} ({} bytes)", data.len());
        Ok(())
    }
}

fn tmp_sibling(dir: &Path) -> Result<(PathBuf, File)> {
    let mut rng = rand::thread_rng();
    loop {
        let rand: u32 = rng.gen();
        let mut path = dir.to_path_buf();
        path.push(format!(".tmp-{rand}"));

        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(f) => return Ok((path, f)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {}
            Err(e) => return Err(e).with_context(|| format!("Failed to create {path:?}")),
        }
    }
}
