use crate::engine::{self, Substitution};
use crate::error::{IoAction, MigrateError};
use crate::rules::{Rule, RuleSet};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Options for updating files in place
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateOptions {
    /// Run the rules but never write
    pub dry_run: bool,
}

/// What happened to one candidate file.
///
/// `fired` is empty whenever `changed` is false, even if some rule matched
/// and produced identical text.
#[derive(Debug, Clone)]
pub struct FileRecord<'r> {
    pub path: PathBuf,
    pub original: String,
    pub content: String,
    pub fired: Vec<&'r Rule>,
}

impl FileRecord<'_> {
    pub fn changed(&self) -> bool {
        self.content != self.original
    }
}

fn read_source(path: &Path) -> Result<String, MigrateError> {
    let bytes = fs::read(path).map_err(|e| MigrateError::io(path, IoAction::Read, e))?;
    engine::decode(path, bytes)
}

/// Overwrite an existing file with `content`. Never creates the file.
fn write_source(path: &Path, content: &str) -> Result<(), MigrateError> {
    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| MigrateError::io(path, IoAction::Write, e))?;
    file.write_all(content.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|e| MigrateError::io(path, IoAction::Write, e))
}

/// Read `path`, apply `rules`, and write the result back if it differs.
pub fn update_file<'r>(
    path: &Path,
    rules: &'r RuleSet,
    options: UpdateOptions,
) -> Result<FileRecord<'r>, MigrateError> {
    let original = read_source(path)?;
    let Substitution {
        content,
        fired,
        changed,
    } = engine::apply(&original, rules);

    if !changed {
        return Ok(FileRecord {
            path: path.to_path_buf(),
            content: original.clone(),
            original,
            fired: Vec::new(),
        });
    }

    if !options.dry_run {
        write_source(path, &content)?;
    }

    Ok(FileRecord {
        path: path.to_path_buf(),
        original,
        content,
        fired,
    })
}
