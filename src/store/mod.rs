//! Persisted high scores
//!
//! [`ScoreStore`] appends run totals to a plain text file, one integer per
//! line, and reads them all back for the records view. The file lives
//! under the platform data directory by default and is never edited in
//! place.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Append-only score file.
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    /// Store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default score file location: `<data dir>/slovo/scores.txt`, or
    /// `./scores.txt` when the platform has no data directory.
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::data_dir().map_or_else(
            || PathBuf::from("scores.txt"),
            |base| base.join("slovo").join("scores.txt"),
        )
    }

    /// The file this store writes to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one score as a new line, creating the file and its directory
    /// if needed. A zero score is not worth recording and is skipped
    /// without touching the file.
    ///
    /// # Errors
    /// Returns the underlying I/O error if the directory or file cannot be
    /// created or written.
    pub fn append(&self, score: u32) -> io::Result<()> {
        if score == 0 {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        writeln!(file, "{score}")?;

        Ok(())
    }

    /// Read every recorded score in file order.
    ///
    /// A missing file simply means no records yet; any other read failure
    /// is logged and treated the same way. Lines that do not parse as a
    /// non-negative integer are skipped.
    #[must_use]
    pub fn load_all(&self) -> Vec<u32> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                log::warn!("could not read score file {}: {err}", self.path.display());
                return Vec::new();
            }
        };

        content
            .lines()
            .filter_map(|line| line.trim().parse::<u32>().ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> ScoreStore {
        let path = std::env::temp_dir().join(format!("slovo_test_store_{name}.txt"));
        fs::remove_file(&path).ok();
        ScoreStore::new(path)
    }

    #[test]
    fn append_then_load_preserves_file_order() {
        let store = temp_store("file_order");
        store.append(3).unwrap();
        store.append(7).unwrap();

        assert_eq!(store.load_all(), vec![3, 7]);

        fs::remove_file(store.path()).ok();
    }

    #[test]
    fn zero_score_is_not_persisted() {
        let store = temp_store("zero_skip");
        store.append(0).unwrap();

        assert!(!store.path().exists());
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn zero_score_leaves_existing_records_unchanged() {
        let store = temp_store("zero_unchanged");
        store.append(5).unwrap();
        store.append(0).unwrap();

        assert_eq!(store.load_all(), vec![5]);

        fs::remove_file(store.path()).ok();
    }

    #[test]
    fn missing_file_reads_as_no_records() {
        let store = temp_store("missing");
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn unparsable_lines_are_skipped() {
        let store = temp_store("unparsable");
        fs::write(store.path(), "7\nabc\n\n 3 \n-2\n").unwrap();

        assert_eq!(store.load_all(), vec![7, 3]);

        fs::remove_file(store.path()).ok();
    }

    #[test]
    fn append_creates_missing_directories() {
        let dir = std::env::temp_dir().join("slovo_test_store_nested");
        fs::remove_dir_all(&dir).ok();
        let store = ScoreStore::new(dir.join("deep").join("scores.txt"));

        store.append(4).unwrap();
        assert_eq!(store.load_all(), vec![4]);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn default_path_ends_with_score_file() {
        assert!(ScoreStore::default_path().ends_with("scores.txt"));
    }
}
