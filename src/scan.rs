//! Documentation tree discovery and file classification.
//!
//! The generated docs are a flat directory plus a `search` folder. Any other
//! layout means the generator changed and the patterns can no longer be
//! trusted, so it is reported as [`ScrapeError::UpdatedDoc`].

use crate::error::{Result, ScrapeError};
use crate::parser::enums::ENUMS_FILE;
use crate::parser::namespace::GLOBAL_FUNCTIONS_FILE;
use crate::parser::patterns::{RE_CLASS_FILE, RE_NAMESPACE_FILE};
use std::fs;
use std::path::{Path, PathBuf};

/// The only subdirectory the generator emits.
pub const SEARCH_DIR: &str = "search";

/// Pages of a documentation tree, grouped by the reader that handles them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocFiles {
    pub class_files: Vec<PathBuf>,
    pub namespace_files: Vec<PathBuf>,
    pub enum_file: PathBuf,
    pub function_file: PathBuf,
}

/// List every file of the tree as `(file name, path)`, sorted by path.
pub fn list_doc_files(root: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut files = Vec::new();
    for entry in read_dir(root)? {
        let name = entry.file_name().to_string_lossy().into_owned();
        let path = entry.path();
        if path.is_dir() {
            if name != SEARCH_DIR {
                return Err(ScrapeError::updated_doc(format!(
                    "unexpected subdirectory {}",
                    path.display()
                )));
            }
            for search_entry in read_dir(&path)? {
                let search_name = search_entry.file_name().to_string_lossy().into_owned();
                files.push((search_name, search_entry.path()));
            }
        } else {
            files.push((name, path));
        }
    }
    // read_dir order is platform dependent
    files.sort_by(|a, b| a.1.cmp(&b.1));
    Ok(files)
}

fn read_dir(dir: &Path) -> Result<Vec<fs::DirEntry>> {
    fs::read_dir(dir)
        .and_then(|entries| entries.collect::<std::io::Result<Vec<_>>>())
        .map_err(|e| ScrapeError::io(dir, e))
}

pub fn is_class_file(name: &str) -> bool {
    RE_CLASS_FILE.is_match(name)
}

pub fn is_namespace_file(name: &str) -> bool {
    RE_NAMESPACE_FILE.is_match(name)
}

/// Classify the pages of the documentation rooted at `root`.
///
/// The whole tree is listed first, so a bad layout fails before anything is
/// classified.
pub fn categorize_files(root: &Path) -> Result<DocFiles> {
    let files = list_doc_files(root)?;

    let class_files = files
        .iter()
        .filter(|(name, _)| is_class_file(name))
        .map(|(_, path)| path.clone())
        .collect();
    let namespace_files = files
        .iter()
        .filter(|(name, _)| is_namespace_file(name))
        .map(|(_, path)| path.clone())
        .collect();

    Ok(DocFiles {
        class_files,
        namespace_files,
        enum_file: required_file(root, ENUMS_FILE)?,
        function_file: required_file(root, GLOBAL_FUNCTIONS_FILE)?,
    })
}

fn required_file(root: &Path, name: &str) -> Result<PathBuf> {
    let path = root.join(name);
    if path.is_file() {
        Ok(path)
    } else {
        Err(ScrapeError::updated_doc(format!("missing {}", path.display())))
    }
}
