use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Files directly under `dir` with the given extension, sorted by file name
///
/// The sort makes the listing order explicit: year-over-year pairing only
/// looks at neighbouring entries.
pub fn list_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let read_err = |source| Error::SourceRead { path: dir.to_path_buf(), source };
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == extension);
        if matches && path.is_file() {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Create the output directory if missing
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| Error::OutputDir { path: dir.to_path_buf(), source })
}

/// File name as UTF-8, lossy
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// File stem as UTF-8, lossy
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_sorted_by_name_and_filters_extension() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.txt", "a.txt", "c.pdf", "C.txt"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }
        fs::create_dir(dir.path().join("sub.txt")).unwrap();
        let names: Vec<String> = list_files(dir.path(), "txt")
            .unwrap()
            .iter()
            .map(|p| file_name(p))
            .collect();
        assert_eq!(names, vec!["C.txt", "a.txt", "b.txt"]);
    }

    #[test]
    fn missing_directory_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = list_files(&dir.path().join("nope"), "txt").unwrap_err();
        assert!(matches!(err, Error::SourceRead { .. }));
    }

    #[test]
    fn ensure_dir_creates_nested() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/c");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn ensure_dir_fails_on_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("f");
        fs::write(&file, "x").unwrap();
        let err = ensure_dir(&file.join("sub")).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn stem_and_name() {
        let p = Path::new("/tmp/MD_Acme_2019.txt");
        assert_eq!(file_name(p), "MD_Acme_2019.txt");
        assert_eq!(file_stem(p), "MD_Acme_2019");
    }
}
