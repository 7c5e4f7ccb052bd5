//! Every `t!("...")` key used in `src/` must exist in the fallback locale, and
//! every other locale must define the fallback's keys.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "planwise-ui.ftl";
const I18N_DIR: &str = "i18n";
const FALLBACK: &str = "en-US";

/// Message ids defined in a Fluent file. Terms, comments, variants and
/// continuation lines are skipped.
fn message_ids(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .filter(|line| !line.starts_with(char::is_whitespace))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Literal first arguments of `t!(...)` across the source tree.
fn referenced_keys(src_root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        let mut rest = content.as_str();
        while let Some(pos) = rest.find("t!(\"") {
            rest = &rest[pos + 4..];
            let Some(end) = rest.find('"') else { break };
            let key = &rest[..end];
            if !key.is_empty() && key.chars().all(valid_key_char) {
                found.insert(key.to_string());
            }
            rest = &rest[end..];
        }
    }

    found
}

fn locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root)
        .map(|entries| {
            entries
                .flatten()
                .filter(|entry| entry.path().is_dir())
                .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
                .filter(|name| name.contains('-'))
                .collect()
        })
        .unwrap_or_default();
    dirs.sort();
    dirs
}

#[test]
fn i18n_completeness() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join(I18N_DIR);

    let fallback_file = i18n_root.join(FALLBACK).join(FTL_FILENAME);
    let fallback_content =
        fs::read_to_string(&fallback_file).expect("Failed to read fallback FTL file");
    let fallback_keys = message_ids(&fallback_content);
    assert!(
        !fallback_keys.is_empty(),
        "No message keys parsed from fallback FTL: {:?}",
        fallback_file
    );

    let referenced = referenced_keys(&crate_root.join("src"));
    assert!(referenced.contains("analyze-button"));
    let missing: Vec<&String> = referenced.difference(&fallback_keys).collect();
    assert!(
        missing.is_empty(),
        "Referenced translation keys missing in {FALLBACK}: {missing:?}"
    );

    let mut report = Vec::new();
    for locale in locale_dirs(&i18n_root) {
        let path = i18n_root.join(&locale).join(FTL_FILENAME);
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Locale folder {locale} missing {FTL_FILENAME}"));
        let keys = message_ids(&content);
        let missing: Vec<&String> = fallback_keys.difference(&keys).collect();
        if !missing.is_empty() {
            report.push(format!("{locale}: {missing:?}"));
        }
    }
    assert!(
        report.is_empty(),
        "Locales missing translations:\n{}",
        report.join("\n")
    );

    let unused: Vec<&String> = fallback_keys.difference(&referenced).collect();
    if !unused.is_empty() {
        eprintln!("[i18n] NOTE: fallback keys unused in Rust sources: {unused:?}");
    }
}
