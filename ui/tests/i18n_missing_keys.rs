use std::collections::{BTreeSet, HashSet};

/// Every locale shipped in `ui/i18n/` must define at least the keys of the
/// fallback `en-US/planwise-ui.ftl`, with no key defined twice.
///
/// To add a locale: create `ui/i18n/<locale>/planwise-ui.ftl`, copy the keys
/// from `en-US`, and register the file below.
#[test]
fn all_locales_have_all_fallback_keys() {
    const EN_US: &str = include_str!("../i18n/en-US/planwise-ui.ftl");
    const ES_ES: &str = include_str!("../i18n/es-ES/planwise-ui.ftl");

    let fallback_keys = extract_keys(EN_US);
    assert!(!fallback_keys.is_empty(), "Fallback (en-US) contains no keys.");
    assert_no_dup_keys(EN_US, "en-US");

    let locales: &[(&str, &str)] = &[("es-ES", ES_ES)];

    let mut failures = Vec::new();
    for (locale, src) in locales {
        assert_no_dup_keys(src, locale);

        let keys = extract_keys(src);
        let missing: BTreeSet<&String> = fallback_keys.difference(&keys).collect();
        if !missing.is_empty() {
            failures.push(format!("Locale {locale} is missing {missing:?}"));
        }
    }

    assert!(
        failures.is_empty(),
        "Translation completeness check failed:\n{}",
        failures.join("\n")
    );
}

#[test]
fn plural_summary_covers_one_and_other() {
    for (locale, src) in [
        ("en-US", include_str!("../i18n/en-US/planwise-ui.ftl")),
        ("es-ES", include_str!("../i18n/es-ES/planwise-ui.ftl")),
    ] {
        let body: String = src
            .lines()
            .skip_while(|line| !line.starts_with("files-summary"))
            .take_while(|line| line.starts_with("files-summary") || line.starts_with(' '))
            .collect();
        assert!(body.contains("[one]"), "{locale}: files-summary lacks [one]");
        assert!(body.contains("*[other]"), "{locale}: files-summary lacks *[other]");
    }
}

fn key_of(line: &str) -> Option<&str> {
    if line.starts_with(char::is_whitespace) || line.starts_with('#') {
        return None;
    }
    let (left, _) = line.split_once('=')?;
    let key = left.trim();
    (!key.is_empty() && !key.contains(char::is_whitespace) && !key.starts_with('-')).then_some(key)
}

fn extract_keys(src: &str) -> HashSet<String> {
    src.lines().filter_map(key_of).map(str::to_string).collect()
}

fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let dups: BTreeSet<&str> = src.lines().filter_map(key_of).filter(|k| !seen.insert(*k)).collect();
    assert!(dups.is_empty(), "Duplicate key definitions in {locale}: {dups:?}");
}
