//! Append-only password history, one password per line.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use log::debug;
use zeroize::Zeroize;

use crate::error::StoreError;
use crate::pass::Password;

#[derive(Debug, Clone)]
pub struct HistoryLog {
    path: PathBuf,
}

impl HistoryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one line, creating the file and its directory on first use.
    pub fn append(&self, password: &Password) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::unavailable(parent, e))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::unavailable(&self.path, e))?;

        // One write per entry so a failure cannot leave half a line.
        let mut line = Vec::with_capacity(password.len() + 1);
        line.extend_from_slice(password.as_str().as_bytes());
        line.push(b'\n');
        let written = file.write_all(&line);
        line.zeroize();
        written.map_err(|e| StoreError::unavailable(&self.path, e))?;

        debug!("appended history entry to {}", self.path.display());
        Ok(())
    }

    /// The last `limit` entries, oldest first. Empty if nothing was logged yet.
    pub fn read_recent(&self, limit: usize) -> Result<Vec<String>, StoreError> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::unavailable(&self.path, e)),
        };

        let mut recent = VecDeque::with_capacity(limit.min(64));
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| match e.kind() {
                io::ErrorKind::InvalidData => {
                    StoreError::corrupt(&self.path, "history entry is not valid UTF-8")
                }
                _ => StoreError::unavailable(&self.path, e),
            })?;
            if recent.len() == limit {
                recent.pop_front();
            }
            recent.push_back(line);
        }

        Ok(recent.into())
    }
}
