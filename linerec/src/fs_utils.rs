use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::path::Path;

pub fn open_file<P: AsRef<Path>>(path: P, oo: &OpenOptions) -> Result<File> {
    let path = path.as_ref();
    oo.open(path).with_context(|| format!("open {path:?}"))
}

/// Creates the file, or truncates it if it exists.
pub fn create_file<P: AsRef<Path>>(path: P) -> Result<File> {
    open_file(
        path,
        OpenOptions::new().write(true).create(true).truncate(true),
    )
}

pub fn open_readonly<P: AsRef<Path>>(path: P) -> Result<File> {
    open_file(path, OpenOptions::new().read(true))
}
