use crate::error::{IoAction, MigrateError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Which files the enumerator yields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOptions {
    /// File extension without the leading dot
    pub extension: String,
    /// Directory names pruned at every level, in addition to hidden ones
    pub excluded_dirs: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extension: "rs".to_string(),
            excluded_dirs: vec!["target".to_string()],
        }
    }
}

impl ScanOptions {
    pub fn new(extension: &str, excluded_dirs: Vec<String>) -> Result<Self, MigrateError> {
        let extension = normalize_extension(extension)?;
        Ok(Self {
            extension,
            excluded_dirs,
        })
    }

    fn suffix(&self) -> String {
        format!(".{}", self.extension)
    }
}

/// Strip a leading dot and reject empty extensions
pub fn normalize_extension(extension: &str) -> Result<String, MigrateError> {
    let trimmed = extension.trim().trim_start_matches('.');
    if trimmed.is_empty() {
        return Err(MigrateError::Configuration {
            message: format!("file extension '{}' is empty", extension),
        });
    }
    Ok(trimmed.to_string())
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

fn keep_dir(entry: &DirEntry, options: &ScanOptions) -> bool {
    // The root is never pruned by name, so "." is a valid root
    if entry.depth() == 0 {
        return true;
    }
    let name = entry.file_name().to_string_lossy();
    !is_hidden(&name) && !options.excluded_dirs.iter().any(|d| d.as_str() == name)
}

fn is_candidate(entry: &DirEntry, suffix: &str) -> bool {
    let is_file = entry.file_type().is_file()
        || (entry.path_is_symlink() && entry.path().is_file());
    if !is_file {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    !is_hidden(&name) && name.ends_with(suffix)
}

/// Lazily enumerate candidate files under `root`.
///
/// Fails up front with [`MigrateError::MissingRoot`] if `root` is not an
/// existing directory. Errors hit while walking (an unreadable subdirectory,
/// an entry that vanished) are yielded in the sequence so the caller can
/// report them per path and keep going.
pub fn candidate_files(
    root: &Path,
    options: &ScanOptions,
) -> Result<impl Iterator<Item = Result<PathBuf, MigrateError>>, MigrateError> {
    if !root.is_dir() {
        return Err(MigrateError::MissingRoot {
            path: root.to_path_buf(),
        });
    }

    let suffix = options.suffix();
    let dir_options = options.clone();
    let root_path = root.to_path_buf();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(move |entry| !entry.file_type().is_dir() || keep_dir(entry, &dir_options));

    Ok(walker.filter_map(move |entry| match entry {
        Ok(entry) => is_candidate(&entry, &suffix).then(|| Ok(entry.into_path())),
        Err(err) => {
            let path = err
                .path()
                .map_or_else(|| root_path.clone(), Path::to_path_buf);
            let source = err
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
            Some(Err(MigrateError::io(path, IoAction::Walk, source)))
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn collect(root: &Path, options: &ScanOptions) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = candidate_files(root, options)
            .unwrap()
            .map(Result::unwrap)
            .map(|p| p.strip_prefix(root).unwrap().to_path_buf())
            .collect();
        files.sort();
        files
    }

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "use crate::store::posts;\n").unwrap();
    }

    #[test]
    fn test_default_options() {
        let options = ScanOptions::default();
        assert_eq!(options.extension, "rs");
        assert_eq!(options.excluded_dirs, vec!["target".to_string()]);
    }

    #[test]
    fn test_filters_by_extension() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "main.rs");
        touch(temp.path(), "README.md");
        touch(temp.path(), "build.rs.bak");
        touch(temp.path(), "nested/deep/lib.rs");

        let files = collect(temp.path(), &ScanOptions::default());
        assert_eq!(
            files,
            vec![PathBuf::from("main.rs"), PathBuf::from("nested/deep/lib.rs")]
        );
    }

    #[test]
    fn test_skips_hidden_and_excluded_dirs() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "src/app.rs");
        touch(temp.path(), ".git/hooks/pre-commit.rs");
        touch(temp.path(), ".cache/gen.rs");
        touch(temp.path(), "target/debug/build/out.rs");
        touch(temp.path(), "src/target/generated.rs");
        touch(temp.path(), "src/.hidden.rs");

        let files = collect(temp.path(), &ScanOptions::default());
        assert_eq!(files, vec![PathBuf::from("src/app.rs")]);
    }

    #[test]
    fn test_custom_excluded_dirs() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "src/app.rs");
        touch(temp.path(), "vendor/dep.rs");
        touch(temp.path(), "target/out.rs");

        let options = ScanOptions::new("rs", vec!["vendor".to_string()]).unwrap();
        let files = collect(temp.path(), &options);
        assert_eq!(
            files,
            vec![PathBuf::from("src/app.rs"), PathBuf::from("target/out.rs")]
        );
    }

    #[test]
    fn test_hidden_root_is_still_walked() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join(".workspace");
        touch(&root, "lib.rs");

        let files = collect(&root, &ScanOptions::default());
        assert_eq!(files, vec![PathBuf::from("lib.rs")]);
    }

    #[test]
    fn test_missing_root_fails() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("does-not-exist");
        let err = candidate_files(&missing, &ScanOptions::default())
            .err()
            .unwrap();
        assert!(matches!(err, MigrateError::MissingRoot { .. }));
    }

    #[test]
    fn test_file_root_is_rejected() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "main.rs");
        let err = candidate_files(&temp.path().join("main.rs"), &ScanOptions::default())
            .err()
            .unwrap();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension(".rs").unwrap(), "rs");
        assert_eq!(normalize_extension("toml").unwrap(), "toml");
        assert!(normalize_extension(".").is_err());
        assert!(normalize_extension("").is_err());
    }
}
