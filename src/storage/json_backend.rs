use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::utils;

use super::{Result, StorageAdapter};

const VALUE_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// File-per-key storage rooted at the application data directory. Each
/// logical key maps to one file; writes go through a temp file and rename so
/// a crashed write never corrupts the previous value.
#[derive(Clone)]
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(utils::app_data_dir);
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    pub fn key_path(&self, key: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", canonical_key(key), VALUE_EXTENSION))
    }
}

impl StorageAdapter for JsonStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key);
        let tmp = tmp_path(&path);
        write_file(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}

fn canonical_key(key: &str) -> String {
    let sanitized: String = key
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "value".into()
    } else {
        sanitized
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
