//! Lexical path cleaning.
//!
//! Cleaning rewrites a path into its shortest equivalent form without
//! touching the filesystem:
//! 1. Repeated separators collapse into one
//! 2. `.` elements are dropped
//! 3. Each `..` is dropped together with the non-`..` element before it
//! 4. `..` elements that begin a rooted path are dropped (`/..` becomes `/`)
//! 5. `..` elements that begin a relative path are kept
//!
//! An empty result becomes `"."`. Trailing separators are removed except
//! for the root itself. Symlinks are not consulted, so `a/link/..` cleans
//! to `a` even if `link` points elsewhere.

use std::path::{is_separator, Component, Path, PathBuf, MAIN_SEPARATOR_STR};

/// The current-directory marker, returned when cleaning leaves nothing.
pub const CURRENT_DIR: &str = ".";

const PARENT_DIR: &str = "..";

/// Clean a path string lexically.
///
/// Any platform separator is accepted on input; output is joined with the
/// platform's main separator.
///
/// # Examples
///
/// ```
/// use pathtools::path::clean;
///
/// assert_eq!(clean("a/./b"), "a/b");
/// assert_eq!(clean("c/../d"), "d");
/// assert_eq!(clean("a//b/"), "a/b");
/// assert_eq!(clean("/../x"), "/x");
/// assert_eq!(clean("../../x"), "../../x");
/// assert_eq!(clean(""), ".");
/// ```
#[must_use]
pub fn clean(path: &str) -> String {
    let rooted = path.starts_with(is_separator);
    let mut elements: Vec<&str> = Vec::new();

    for element in path.split(is_separator) {
        match element {
            "" | CURRENT_DIR => {}
            PARENT_DIR => match elements.last() {
                Some(&last) if last != PARENT_DIR => {
                    elements.pop();
                }
                _ if rooted => {}
                _ => elements.push(PARENT_DIR),
            },
            normal => elements.push(normal),
        }
    }

    let body = elements.join(MAIN_SEPARATOR_STR);
    if rooted {
        format!("{MAIN_SEPARATOR_STR}{body}")
    } else if body.is_empty() {
        CURRENT_DIR.to_string()
    } else {
        body
    }
}

/// Lexical cleaning for [`Path`] values, including non-UTF-8 paths.
///
/// # Examples
///
/// ```
/// use pathtools::path::PathClean;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(Path::new("/test/../path/").clean(), PathBuf::from("/path"));
/// assert_eq!(Path::new("hello/world/..").clean(), PathBuf::from("hello"));
/// ```
pub trait PathClean {
    /// Returns the cleaned form of this path.
    fn clean(&self) -> PathBuf;
}

impl PathClean for Path {
    fn clean(&self) -> PathBuf {
        let mut out: Vec<Component<'_>> = Vec::new();

        for component in self.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => match out.last() {
                    Some(Component::Normal(_)) => {
                        out.pop();
                    }
                    Some(Component::RootDir) => {}
                    // A bare prefix (`C:..`) or a leading `..` run stays.
                    None | Some(Component::ParentDir | Component::CurDir | Component::Prefix(_)) => {
                        out.push(component);
                    }
                },
                other => out.push(other),
            }
        }

        if out.is_empty() {
            PathBuf::from(CURRENT_DIR)
        } else {
            out.iter().collect()
        }
    }
}

impl PathClean for PathBuf {
    fn clean(&self) -> PathBuf {
        self.as_path().clean()
    }
}
