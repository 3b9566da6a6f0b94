//! File-based puzzle input store

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Reads puzzle inputs from a directory
///
/// Directory structure: `{input_dir}/{year}_day{day:02}.txt`. An explicit
/// file set with [`InputStore::with_override`] replaces the directory lookup
/// for one year/day.
pub struct InputStore {
    input_dir: PathBuf,
    explicit: Option<(u16, u8, PathBuf)>,
}

impl InputStore {
    /// Create a store reading from `input_dir`
    pub fn new(input_dir: PathBuf) -> Self {
        Self {
            input_dir,
            explicit: None,
        }
    }

    /// Read the input for `year`/`day` from `path` instead of the directory
    pub fn with_override(mut self, year: u16, day: u8, path: PathBuf) -> Self {
        self.explicit = Some((year, day, path));
        self
    }

    /// Path the input for a specific year/day is read from
    pub fn path(&self, year: u16, day: u8) -> PathBuf {
        match &self.explicit {
            Some((y, d, path)) if *y == year && *d == day => path.clone(),
            _ => self
                .input_dir
                .join(format!("{}_day{:02}.txt", year, day)),
        }
    }

    /// Check if an input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.path(year, day).is_file()
    }

    /// Read the input for a specific year/day
    pub fn get(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.path(year, day);
        fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => InputError::Missing { year, day, path },
            _ => InputError::Io { path, source },
        })
    }
}
