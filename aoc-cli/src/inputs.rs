//! Read-only store of puzzle inputs on disk

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// File-based lookup of puzzle inputs
///
/// Directory structure: `{input_dir}/{year}_day{day:02}.txt`. A single
/// day may be pointed at an explicit file instead.
pub struct InputStore {
    input_dir: PathBuf,
    override_file: Option<InputOverride>,
}

struct InputOverride {
    /// `None` matches the day in every year
    year: Option<u16>,
    day: u8,
    path: PathBuf,
}

impl InputStore {
    /// Create an input store reading from `input_dir`
    pub fn new(input_dir: PathBuf) -> Self {
        Self {
            input_dir,
            override_file: None,
        }
    }

    /// Serve `day` (of `year`, or of any year) from `path` instead of the
    /// input directory
    pub fn with_override(mut self, year: Option<u16>, day: u8, path: PathBuf) -> Self {
        self.override_file = Some(InputOverride { year, day, path });
        self
    }

    /// Get the file path for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        match &self.override_file {
            Some(o) if o.day == day && o.year.is_none_or(|y| y == year) => o.path.clone(),
            _ => self
                .input_dir
                .join(format!("{}_day{:02}.txt", year, day)),
        }
    }

    /// Check if an input file is present
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_file()
    }

    /// Read the input for a year/day
    pub fn get(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.input_path(year, day);
        fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => InputError::Missing { year, day, path },
            _ => InputError::Io { path, source },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_path_format() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        let path = store.input_path(2023, 5);
        assert!(path.starts_with(temp.path()));
        assert!(path.to_string_lossy().ends_with("2023_day05.txt"));

        let path = store.input_path(2023, 10);
        assert!(path.to_string_lossy().ends_with("2023_day10.txt"));
    }

    #[test]
    fn test_read_existing_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        let input = "seeds: 79 14 55 13\n";
        fs::write(store.input_path(2023, 5), input).unwrap();

        assert!(store.contains(2023, 5));
        assert_eq!(store.get(2023, 5).unwrap(), input);
    }

    #[test]
    fn test_missing_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        assert!(!store.contains(2023, 1));
        assert!(matches!(
            store.get(2023, 1),
            Err(InputError::Missing { year: 2023, day: 1, .. })
        ));
    }

    #[test]
    fn test_override_applies_to_one_day() {
        let temp = TempDir::new().unwrap();
        let custom = temp.path().join("custom.txt");
        fs::write(&custom, "0 3 6\n").unwrap();
        let store =
            InputStore::new(temp.path().join("inputs")).with_override(Some(2023), 9, custom.clone());

        assert_eq!(store.input_path(2023, 9), custom);
        assert_eq!(store.get(2023, 9).unwrap(), "0 3 6\n");
        assert!(!store.contains(2023, 8));
        assert!(!store.contains(2022, 9));
    }

    #[test]
    fn test_override_without_year_matches_any_year() {
        let store = InputStore::new(PathBuf::from("inputs")).with_override(
            None,
            9,
            PathBuf::from("custom.txt"),
        );
        assert_eq!(store.input_path(2022, 9), PathBuf::from("custom.txt"));
        assert_eq!(store.input_path(2023, 9), PathBuf::from("custom.txt"));
        assert_eq!(store.input_path(2023, 8), PathBuf::from("inputs/2023_day08.txt"));
    }
}
