//! Puzzle inputs stored as local files

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Directory of puzzle inputs
///
/// Directory structure: `{dir}/{year}_day{day:02}.txt`
pub struct InputDir {
    dir: PathBuf,
}

impl InputDir {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path the input for a specific year/day is expected at
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.dir.join(format!("{}_day{:02}.txt", year, day))
    }

    /// Read the input for `year`/`day`
    pub fn load(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.input_path(year, day);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(InputError::Missing { year, day, path }),
            Err(source) => Err(InputError::Io { path, source }),
        }
    }
}
