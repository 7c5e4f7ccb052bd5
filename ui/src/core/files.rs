//! The set of documents the user has picked.

use std::collections::HashSet;

pub use api::SelectedFile;

/// Ordered, name-unique selection of files.
///
/// The store is plain data. Components keep it in a `Signal` and mutate it
/// through `with_mut`, which is what notifies the list view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileSelectionStore {
    files: Vec<SelectedFile>,
}

impl FileSelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every candidate whose name is not already present, keeping
    /// first-seen order. Returns how many were inserted.
    pub fn add<I>(&mut self, candidates: I) -> usize
    where
        I: IntoIterator<Item = SelectedFile>,
    {
        let mut seen: HashSet<String> = self.files.iter().map(|f| f.name.clone()).collect();
        let before = self.files.len();

        for file in candidates {
            if seen.insert(file.name.clone()) {
                self.files.push(file);
            }
        }

        self.files.len() - before
    }

    /// Remove the entry called `name`. Absent names are ignored.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.files.len();
        self.files.retain(|f| f.name != name);
        self.files.len() != before
    }

    pub fn list(&self) -> &[SelectedFile] {
        &self.files
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.files.iter().any(|f| f.name == name)
    }

    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(SelectedFile::size).sum()
    }
}

/// Compact size label for the file list, e.g. `12.4 KB`.
pub fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let value = bytes as f64;
    if value < KB {
        format!("{bytes} B")
    } else if value < MB {
        format!("{:.1} KB", value / KB)
    } else {
        format!("{:.1} MB", value / MB)
    }
}
