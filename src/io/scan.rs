use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Decides which directory entries count as source images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFilter {
    /// Required name suffix, including the dot
    pub suffix: String,
    /// Compare the suffix case-insensitively
    pub ignore_case: bool,
    /// Names containing any of these are never sources
    pub exclude: Vec<String>,
}

impl SourceFilter {
    /// `.webp` in any case, skipping anything mentioning `thumbnail` or `background`.
    pub fn thumbnails() -> Self {
        Self {
            suffix: ".webp".to_string(),
            ignore_case: true,
            exclude: vec!["thumbnail".to_string(), "background".to_string()],
        }
    }

    /// Lowercase `.webp` only, skipping derived `thumbnail_`/`background_` names.
    pub fn conversions() -> Self {
        Self {
            suffix: ".webp".to_string(),
            ignore_case: false,
            exclude: vec!["thumbnail_".to_string(), "background_".to_string()],
        }
    }

    pub fn accepts(&self, file_name: &str) -> bool {
        let has_suffix = if self.ignore_case {
            file_name
                .to_lowercase()
                .ends_with(&self.suffix.to_lowercase())
        } else {
            file_name.ends_with(&self.suffix)
        };
        has_suffix && !self.exclude.iter().any(|s| file_name.contains(s.as_str()))
    }
}

/// Sources found in one directory listing.
#[derive(Debug, Clone, Default)]
pub struct DirectoryScan {
    /// Accepted regular files, sorted by path
    pub sources: Vec<PathBuf>,
    /// Entries that were not sources
    pub skipped: usize,
}

/// List `dir` once (no recursion) and split entries by `filter`.
pub fn scan_directory(dir: &Path, filter: &SourceFilter) -> Result<DirectoryScan> {
    let mut scan = DirectoryScan::default();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let name = entry.file_name();

        match name.to_str() {
            Some(name) if filter.accepts(name) && path.is_file() => scan.sources.push(path),
            Some(_) => {
                debug!("Skipping non-source entry: {:?}", path);
                scan.skipped += 1;
            }
            None => {
                debug!("Skipping entry with non UTF-8 name: {:?}", path);
                scan.skipped += 1;
            }
        }
    }

    scan.sources.sort();
    Ok(scan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumbnail_filter() {
        let f = SourceFilter::thumbnails();
        assert!(f.accepts("photo.webp"));
        assert!(f.accepts("PHOTO.WEBP"));
        assert!(!f.accepts("photo.png"));
        assert!(!f.accepts("background_photo.webp"));
        assert!(!f.accepts("thumbnail_photo.webp"));
        assert!(!f.accepts("mythumbnails.webp"));
        // Substring checks are case-sensitive
        assert!(f.accepts("Background.webp"));
    }

    #[test]
    fn test_conversion_filter() {
        let f = SourceFilter::conversions();
        assert!(f.accepts("art.webp"));
        assert!(!f.accepts("art.WEBP"));
        assert!(!f.accepts("thumbnail_art.webp"));
        assert!(!f.accepts("old_background_art.webp"));
        // Only the underscored prefixes are excluded here
        assert!(f.accepts("background.webp"));
    }

    #[test]
    fn test_scan_directory_sorts_and_counts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.webp", "a.webp", "notes.txt", "background_a.webp"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("folder.webp")).unwrap();

        let scan = scan_directory(dir.path(), &SourceFilter::thumbnails()).unwrap();
        let names: Vec<_> = scan
            .sources
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["a.webp", "b.webp"]);
        assert_eq!(scan.skipped, 3);
    }

    #[test]
    fn test_scan_missing_directory_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(scan_directory(&dir.path().join("missing"), &SourceFilter::conversions()).is_err());
    }
}
