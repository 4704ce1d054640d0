//! Whole-tree extraction: classify the pages, then run each reader.

use crate::error::Result;
use crate::model::*;
use crate::parser::enums::EnumStream;
use crate::scan;
use std::iter;
use std::path::Path;

/// Extract the API described by the documentation rooted at `doc_root`.
///
/// Any structural problem in any page aborts the whole run; there is no
/// partial snapshot.
pub fn scrape(doc_root: &Path) -> Result<ApiSnapshot> {
    let files = scan::categorize_files(doc_root)?;
    tracing::debug!(
        classes = files.class_files.len(),
        namespaces = files.namespace_files.len(),
        "categorized documentation files"
    );

    let classes = files
        .class_files
        .iter()
        .map(|path| Class::from_file(path))
        .collect::<Result<Vec<_>>>()?;

    let namespaces = files
        .namespace_files
        .iter()
        .chain(iter::once(&files.function_file))
        .map(|path| Namespace::from_file(path))
        .collect::<Result<Vec<_>>>()?;

    let enumerators = EnumStream::open(&files.enum_file)?.collect::<Result<Vec<_>>>()?;

    tracing::info!(
        classes = classes.len(),
        namespaces = namespaces.len(),
        enumerators = enumerators.len(),
        root = %doc_root.display(),
        "scraped API"
    );

    Ok(ApiSnapshot {
        classes,
        namespaces,
        enumerators,
    })
}

impl ApiSnapshot {
    pub fn class(&self, name: &str) -> Option<&Class> {
        self.classes.iter().find(|c| c.name == name)
    }

    pub fn namespace(&self, name: &str) -> Option<&Namespace> {
        self.namespaces.iter().find(|n| n.name == name)
    }

    pub fn enumerator(&self, name: &str) -> Option<&Enumerator> {
        self.enumerators.iter().find(|e| e.name == name)
    }
}
