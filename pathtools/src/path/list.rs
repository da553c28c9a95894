//! Delimited path lists.
//!
//! Host programs often pack several paths into one string field, such as an
//! environment variable (`a/b,c/d`). The functions here split such a string,
//! trim and [`clean`] each entry, and optionally substitute a fallback list
//! when nothing was configured.

use std::borrow::Cow;
use std::env;

use crate::path::clean::clean;

/// Delimiter used when none is configured.
pub const DEFAULT_DELIMITER: &str = ",";

/// Split `paths` on `delimiter`, then trim and clean each entry.
///
/// A blank or whitespace-only input yields an empty list. Otherwise there is
/// exactly one output entry per delimited part, in input order. A part that
/// is empty after trimming cleans to `"."`, so `"x,,y"` yields three entries.
///
/// An empty `delimiter` splits the input into its individual characters.
///
/// # Examples
///
/// ```
/// use pathtools::path::clean_paths;
///
/// assert_eq!(clean_paths("a/./b, c/../d", ","), vec!["a/b", "d"]);
/// assert!(clean_paths("   ", ",").is_empty());
/// assert_eq!(clean_paths("x,,y", ","), vec!["x", ".", "y"]);
/// ```
#[must_use]
pub fn clean_paths(paths: &str, delimiter: &str) -> Vec<String> {
    // Splitting "" would yield one empty part, which would clean to ".".
    let paths = paths.trim();
    if paths.is_empty() {
        return Vec::new();
    }

    split(paths, delimiter)
        .into_iter()
        .map(|part| clean(part.trim()))
        .collect()
}

/// Like [`clean_paths`], but returns `fallback` untouched when the cleaned
/// list is empty.
///
/// The fallback is borrowed, not copied or cleaned.
///
/// # Examples
///
/// ```
/// use pathtools::path::clean_paths_default;
///
/// let fallback = vec!["fallback1".to_string(), "fallback2".to_string()];
/// assert_eq!(&*clean_paths_default("", ",", &fallback), fallback.as_slice());
/// assert_eq!(&*clean_paths_default("a,b", ",", &fallback), ["a", "b"]);
/// ```
#[must_use]
pub fn clean_paths_default<'a>(
    paths: &str,
    delimiter: &str,
    fallback: &'a [String],
) -> Cow<'a, [String]> {
    let cleaned = clean_paths(paths, delimiter);
    if cleaned.is_empty() {
        Cow::Borrowed(fallback)
    } else {
        Cow::Owned(cleaned)
    }
}

fn split<'a>(paths: &'a str, delimiter: &str) -> Vec<&'a str> {
    if delimiter.is_empty() {
        paths
            .char_indices()
            .map(|(i, c)| &paths[i..i + c.len_utf8()])
            .collect()
    } else {
        paths.split(delimiter).collect()
    }
}

/// A delimiter paired with a fallback list.
///
/// # Examples
///
/// ```
/// use pathtools::path::PathList;
///
/// let list = PathList::new(":").with_fallback(vec!["/usr/local/bin".into()]);
/// assert_eq!(list.clean("/opt//bin:/usr/./bin"), vec!["/opt/bin", "/usr/bin"]);
/// assert_eq!(&*list.clean_or_fallback(""), ["/usr/local/bin"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathList {
    delimiter: String,
    fallback: Vec<String>,
}

impl Default for PathList {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER)
    }
}

impl PathList {
    /// Create a path list with the given delimiter and no fallback.
    #[must_use]
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
            fallback: Vec::new(),
        }
    }

    /// Set the fallback returned for blank input.
    #[must_use]
    pub fn with_fallback(mut self, fallback: Vec<String>) -> Self {
        self.fallback = fallback;
        self
    }

    /// The configured delimiter.
    #[must_use]
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// The configured fallback.
    #[must_use]
    pub fn fallback(&self) -> &[String] {
        &self.fallback
    }

    /// See [`clean_paths`].
    #[must_use]
    pub fn clean(&self, paths: &str) -> Vec<String> {
        clean_paths(paths, &self.delimiter)
    }

    /// See [`clean_paths_default`].
    #[must_use]
    pub fn clean_or_fallback(&self, paths: &str) -> Cow<'_, [String]> {
        clean_paths_default(paths, &self.delimiter, &self.fallback)
    }

    /// Read the environment variable `var` and clean it, falling back when
    /// it is blank.
    ///
    /// An unset variable, or one that is not valid Unicode, counts as blank.
    #[must_use]
    pub fn from_env(&self, var: &str) -> Vec<String> {
        let value = match env::var(var) {
            Ok(value) => value,
            Err(e) => {
                log::debug!("{var} treated as blank: {e}");
                String::new()
            }
        };
        self.clean_or_fallback(&value).into_owned()
    }
}
