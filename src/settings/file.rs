//! Preference file persistence.
//!
//! The record is six little-endian `i32`s: min length, max length, then the
//! lower/upper/numbers/symbols flags as 1 or 0. Every field is XORed with
//! 255 on disk. That is a reversible bit flip kept for compatibility with
//! existing preference files, not a confidentiality measure.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use log::debug;

use super::{Classes, GenerationPolicy};
use crate::error::StoreError;

const FIELDS: usize = 6;
const RECORD_LEN: usize = FIELDS * 4;
const MASK: i32 = 255;

/// File-backed store for one [`GenerationPolicy`].
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
    ceiling: usize,
}

impl PreferenceStore {
    /// `ceiling` bounds `max_length` of policies read back from disk.
    pub fn new(path: impl Into<PathBuf>, ceiling: usize) -> Self {
        Self {
            path: path.into(),
            ceiling,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored policy. `Ok(None)` when nothing has been saved yet.
    pub fn load(&self) -> Result<Option<GenerationPolicy>, StoreError> {
        let mut file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no preferences at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(StoreError::unavailable(&self.path, e)),
        };

        let mut record = [0u8; RECORD_LEN];
        file.read_exact(&mut record).map_err(|e| match e.kind() {
            io::ErrorKind::UnexpectedEof => {
                StoreError::corrupt(&self.path, format!("record shorter than {RECORD_LEN} bytes"))
            }
            _ => StoreError::unavailable(&self.path, e),
        })?;

        let policy =
            decode(&record, self.ceiling).map_err(|reason| StoreError::corrupt(&self.path, reason))?;
        debug!("loaded preferences from {}", self.path.display());
        Ok(Some(policy))
    }

    /// Replace the stored policy.
    ///
    /// The record goes to a sibling temp file first and is renamed over the
    /// target, so a failed save leaves the previous record intact.
    pub fn save(&self, policy: &GenerationPolicy) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::unavailable(parent, e))?;
        }

        let tmp = self.temp_path();
        let written =
            write_record(&tmp, &encode(policy)).and_then(|()| fs::rename(&tmp, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            return Err(StoreError::unavailable(&self.path, e));
        }

        debug!("saved preferences to {}", self.path.display());
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

fn write_record(path: &Path, record: &[u8]) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(record)?;
    file.sync_all()
}

fn encode(policy: &GenerationPolicy) -> [u8; RECORD_LEN] {
    let classes = policy.classes();
    // GenerationPolicy::new keeps both lengths within MAX_STORABLE_LENGTH.
    let fields = [
        policy.min_length() as i32,
        policy.max_length() as i32,
        i32::from(classes.lower),
        i32::from(classes.upper),
        i32::from(classes.numbers),
        i32::from(classes.symbols),
    ];

    let mut record = [0u8; RECORD_LEN];
    for (chunk, field) in record.chunks_exact_mut(4).zip(fields) {
        chunk.copy_from_slice(&(field ^ MASK).to_le_bytes());
    }
    record
}

fn decode(record: &[u8; RECORD_LEN], ceiling: usize) -> Result<GenerationPolicy, String> {
    let mut fields = [0i32; FIELDS];
    for (field, chunk) in fields.iter_mut().zip(record.chunks_exact(4)) {
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(chunk);
        *field = i32::from_le_bytes(bytes) ^ MASK;
    }

    let length = |value: i32, name: &str| {
        usize::try_from(value).map_err(|_| format!("negative {name} length {value}"))
    };
    let min = length(fields[0], "minimum")?;
    let max = length(fields[1], "maximum")?;
    let classes = Classes {
        lower: fields[2] != 0,
        upper: fields[3] != 0,
        numbers: fields[4] != 0,
        symbols: fields[5] != 0,
    };

    GenerationPolicy::new(min, max, classes, ceiling).map_err(|e| e.to_string())
}
