use std::sync::Arc;

use dioxus::html::{FileEngine, HasFileData};
use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::core::files::{FileSelectionStore, SelectedFile};
use crate::t;

/// File input plus drop zone. Both feed the same store.
#[component]
pub fn FilePicker(files: Signal<FileSelectionStore>) -> Element {
    // Bumped after each pick so the input remounts empty and re-picking the
    // same file still fires `change`.
    let mut picker_key = use_signal(|| 0u32);
    let mut dragging = use_signal(|| false);

    let on_pick = move |evt: FormEvent| {
        if let Some(engine) = evt.files() {
            spawn(add_from_engine(engine, files));
        }
        picker_key += 1;
    };

    let on_drop = move |evt: DragEvent| {
        evt.prevent_default();
        dragging.set(false);
        if let Some(engine) = evt.files() {
            spawn(add_from_engine(engine, files));
        }
    };

    let zone_class = if dragging() {
        "file-picker file-picker--active"
    } else {
        "file-picker"
    };

    rsx! {
        div {
            class: "{zone_class}",
            ondragover: move |evt: DragEvent| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| dragging.set(false),
            ondrop: on_drop,

            label { class: "file-picker__button button", r#for: "file-input",
                {t!("files-picker-label")}
            }
            input {
                key: "{picker_key}",
                id: "file-input",
                class: "file-picker__input visually-hidden",
                r#type: "file",
                multiple: true,
                onchange: on_pick,
            }
            span { class: "file-picker__hint", {t!("files-drop-hint")} }
        }
    }
}

async fn add_from_engine(engine: Arc<dyn FileEngine>, mut files: Signal<FileSelectionStore>) {
    let picked = read_selection(engine).await;
    let inserted = files.with_mut(|store| store.add(picked));
    debug!(inserted, "files added to selection");
}

async fn read_selection(engine: Arc<dyn FileEngine>) -> Vec<SelectedFile> {
    let mut picked = Vec::new();
    for path in engine.files() {
        match engine.read_file(&path).await {
            Some(bytes) => picked.push(SelectedFile::new(display_name(&path), bytes)),
            None => warn!(file = %path, "unable to read selected file"),
        }
    }
    picked
}

/// Native file engines report full paths; the store keys on the bare name.
fn display_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
