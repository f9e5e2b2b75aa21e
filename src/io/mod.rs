//! Persistence of polygon reports.
//! The history is kept as a single base64 encoded text blob, newest report first.
use crate::*;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

/// Append-only history of [`Report`]s, stored base64 encoded.
///
/// The encoding is **not** encryption, it only keeps the file from being casually read.
#[derive(Clone, Debug)]
pub struct ReportStore {
    path: PathBuf,
}

impl ReportStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The decoded history. A store that does not exist yet is empty.
    pub fn read(&self) -> Result<String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(x) => x,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(String::new()),
            Err(e) => return Err(e.into()),
        };

        decode(&raw)
    }

    /// Put `report` at the head of the history and rewrite the store.
    pub fn prepend(&self, report: &str) -> Result<()> {
        let history = self.read()?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        let blob = encode(&format!("{report}{history}"));
        fs::write(&self.path, blob)?;
        log::debug!(
            "wrote {} report bytes to {}",
            report.len(),
            self.path.display()
        );

        Ok(())
    }
}

pub fn encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

pub fn decode(blob: &str) -> Result<String> {
    let bytes = STANDARD
        .decode(blob.trim())
        .map_err(|e| Error::Store(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| Error::Store(e.to_string()))
}
