//! Property-based tests for cleaning and path lists.

use super::clean::{clean, PathClean};
use super::list::{clean_paths, clean_paths_default};
use proptest::prelude::*;
use std::path::{Component, Path, PathBuf};

// Elements biased towards the ones cleaning cares about.
fn element_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just(".".to_string()),
        Just("..".to_string()),
        "[a-z0-9_-]{1,8}",
    ]
}

fn raw_path_strategy() -> impl Strategy<Value = String> {
    (any::<bool>(), prop::collection::vec(element_strategy(), 0..10)).prop_map(
        |(rooted, parts)| {
            let body = parts.join("/");
            if rooted {
                format!("/{body}")
            } else {
                body
            }
        },
    )
}

fn entry_strategy() -> impl Strategy<Value = String> {
    (" {0,2}", raw_path_strategy(), " {0,2}").prop_map(|(l, p, r)| format!("{l}{p}{r}"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // clean(clean(p)) == clean(p)
    #[test]
    fn clean_idempotent(path in raw_path_strategy()) {
        let once = clean(&path);
        prop_assert_eq!(clean(&once), once);
    }

    // Cleaned output is never empty and never ends in a separator (except root)
    #[test]
    fn clean_shape(path in raw_path_strategy()) {
        let cleaned = clean(&path);
        prop_assert!(!cleaned.is_empty());
        if cleaned != "/" {
            prop_assert!(!cleaned.ends_with('/'));
        }
        prop_assert!(!cleaned.contains("//"));
    }

    // No "." anywhere unless the whole result is "."; ".." only as a leading run
    #[test]
    fn clean_no_interior_dots(path in raw_path_strategy()) {
        let cleaned = clean(&path);
        let components: Vec<Component<'_>> = Path::new(&cleaned).components().collect();

        if cleaned != "." {
            prop_assert!(!components.contains(&Component::CurDir));
        }

        let first_normal = components
            .iter()
            .position(|c| matches!(c, Component::Normal(_)))
            .unwrap_or(components.len());
        prop_assert!(!components[first_normal..].contains(&Component::ParentDir));

        if path.starts_with('/') {
            prop_assert!(!components.contains(&Component::ParentDir));
        }
    }

    // The Path-based cleaner agrees with the string cleaner
    #[test]
    fn path_clean_agrees_with_clean(path in raw_path_strategy()) {
        prop_assert_eq!(Path::new(&path).clean(), PathBuf::from(clean(&path)));
    }

    // One output entry per delimited part of a non-blank input
    #[test]
    fn clean_paths_count(entries in prop::collection::vec(entry_strategy(), 1..6)) {
        let joined = entries.join(",");
        let cleaned = clean_paths(&joined, ",");

        if joined.trim().is_empty() {
            prop_assert!(cleaned.is_empty());
        } else {
            prop_assert_eq!(cleaned.len(), joined.trim().split(',').count());
        }
    }

    // Each entry equals clean() of its trimmed part, in order
    #[test]
    fn clean_paths_entries(entries in prop::collection::vec(entry_strategy(), 1..6)) {
        let joined = entries.join(";");
        let expected: Vec<String> = if joined.trim().is_empty() {
            Vec::new()
        } else {
            joined.trim().split(';').map(|p| clean(p.trim())).collect()
        };
        prop_assert_eq!(clean_paths(&joined, ";"), expected);
    }

    // Re-cleaning a cleaned list changes nothing
    #[test]
    fn clean_paths_idempotent(entries in prop::collection::vec(entry_strategy(), 1..6)) {
        let once = clean_paths(&entries.join(","), ",");
        let twice = clean_paths(&once.join(","), ",");
        prop_assert_eq!(once, twice);
    }

    // The fallback is returned exactly when the cleaned list is empty
    #[test]
    fn fallback_only_for_blank(
        input in entry_strategy(),
        fallback in prop::collection::vec("[a-z/]{0,6}", 0..4),
    ) {
        let result = clean_paths_default(&input, ",", &fallback);
        if input.trim().is_empty() {
            prop_assert_eq!(&*result, fallback.as_slice());
        } else {
            prop_assert_eq!(result.into_owned(), clean_paths(&input, ","));
        }
    }
}
