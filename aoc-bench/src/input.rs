//! Filesystem-backed puzzle inputs

use aoc_harness::InputSource;
use std::fs;
use std::path::PathBuf;

/// Loads `day{:02}.txt` files from a single directory.
///
/// An unreadable or absent file simply yields `None`; the harness skips
/// that day.
pub struct FileInputSource {
    dir: PathBuf,
}

impl FileInputSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl InputSource for FileInputSource {
    fn load(&self, day: u8) -> Option<String> {
        fs::read_to_string(self.dir.join(format!("day{day:02}.txt"))).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    #[test]
    fn test_loads_zero_padded_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = File::create(dir.path().join("day03.txt")).unwrap();
        write!(file, "abc\n").unwrap();

        let source = FileInputSource::new(dir.path());
        assert_eq!(source.load(3).as_deref(), Some("abc\n"));
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileInputSource::new(dir.path());
        assert_eq!(source.load(1), None);
    }

    #[test]
    fn test_unpadded_name_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("day3.txt")).unwrap();

        let source = FileInputSource::new(dir.path());
        assert_eq!(source.load(3), None);
    }
}
