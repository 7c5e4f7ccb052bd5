use dioxus::prelude::*;

use crate::core::files::{format_size, FileSelectionStore};
use crate::core::state::StateCell;
use crate::t;

/// One rendered row of the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRow {
    pub name: String,
    pub size: String,
}

/// What the list shows for a given store state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileListContent {
    Placeholder,
    Rows { rows: Vec<FileRow>, total: String },
}

impl FileListContent {
    pub fn of(store: &FileSelectionStore) -> Self {
        if store.is_empty() {
            return Self::Placeholder;
        }
        let rows = store
            .list()
            .iter()
            .map(|file| FileRow {
                name: file.name.clone(),
                size: format_size(file.size()),
            })
            .collect();
        Self::Rows {
            rows,
            total: format_size(store.total_bytes()),
        }
    }
}

/// Action behind a row's remove button.
pub fn remove_entry(files: &impl StateCell<FileSelectionStore>, name: &str) -> bool {
    files.write_with(|store| store.remove(name))
}

/// Current selection, one row per file. Rebuilt from the store on every change.
#[component]
pub fn FileList(files: Signal<FileSelectionStore>) -> Element {
    let body = match files.with(FileListContent::of) {
        FileListContent::Placeholder => rsx! {
            p { class: "file-list__placeholder", {t!("files-empty")} }
        },
        FileListContent::Rows { rows, total } => {
            let summary = t!("files-summary", count = rows.len(), size = total);
            rsx! {
                ul { class: "file-list__items",
                    for row in rows {
                        {render_entry(row, files)}
                    }
                }
                p { class: "file-list__summary", "{summary}" }
            }
        }
    };

    rsx! {
        div { id: "file-list", class: "file-list", {body} }
    }
}

fn render_entry(row: FileRow, files: Signal<FileSelectionStore>) -> Element {
    let FileRow { name, size } = row;
    let remove_label = t!("files-remove-label", name = name.clone());
    let target = name.clone();

    rsx! {
        li { key: "{name}", class: "file-list__item",
            span { class: "file-list__name", "{name}" }
            span { class: "file-list__size", "{size}" }
            button {
                r#type: "button",
                class: "file-list__remove",
                aria_label: "{remove_label}",
                title: "{remove_label}",
                onclick: move |_| {
                    remove_entry(&files, &target);
                },
                "×"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::core::files::SelectedFile;

    fn store(files: &[(&str, usize)]) -> Rc<RefCell<FileSelectionStore>> {
        let mut store = FileSelectionStore::new();
        store.add(
            files
                .iter()
                .map(|(name, len)| SelectedFile::new(*name, vec![0u8; *len])),
        );
        Rc::new(RefCell::new(store))
    }

    fn names(content: &FileListContent) -> Vec<&str> {
        match content {
            FileListContent::Placeholder => Vec::new(),
            FileListContent::Rows { rows, .. } => rows.iter().map(|r| r.name.as_str()).collect(),
        }
    }

    #[test]
    fn empty_store_shows_placeholder() {
        let files = store(&[]);
        assert_eq!(FileListContent::of(&files.borrow()), FileListContent::Placeholder);
    }

    #[test]
    fn one_row_per_file_in_insertion_order() {
        let files = store(&[("b.csv", 512), ("a.pdf", 2048)]);

        let content = FileListContent::of(&files.borrow());

        assert_eq!(
            content,
            FileListContent::Rows {
                rows: vec![
                    FileRow {
                        name: "b.csv".into(),
                        size: "512 B".into(),
                    },
                    FileRow {
                        name: "a.pdf".into(),
                        size: "2.0 KB".into(),
                    },
                ],
                total: "2.5 KB".into(),
            }
        );
    }

    #[test]
    fn remove_button_drops_only_that_row() {
        let files = store(&[("a.csv", 1), ("b.csv", 1), ("c.csv", 1)]);

        assert!(remove_entry(&files, "b.csv"));

        assert_eq!(names(&FileListContent::of(&files.borrow())), ["a.csv", "c.csv"]);
        assert!(!remove_entry(&files, "b.csv"));
    }

    #[test]
    fn removing_the_last_file_restores_placeholder() {
        let files = store(&[("only.txt", 10)]);

        remove_entry(&files, "only.txt");

        assert_eq!(FileListContent::of(&files.borrow()), FileListContent::Placeholder);
    }
}
