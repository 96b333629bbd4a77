use serde::Serialize;
use serde_json::{Value, json};

use crate::collections::Tagged;

/// A normalized source path paired with the working directory it was
/// resolved against.
///
/// Paths use `/` separators. Relative paths are joined onto `cwd` and then
/// lexically normalized, so `File::new("./a/../b", "/root")` has path `/root/b`.
#[derive(Debug, Clone, Serialize)]
pub struct File {
    path: String,
    cwd: String,
}

impl File {
    pub fn new(path: impl AsRef<str>, cwd: impl AsRef<str>) -> Self {
        let cwd = normalize(cwd.as_ref());
        let path = path.as_ref();
        let path = if path.starts_with('/') {
            normalize(path)
        } else {
            normalize(&format!("{}/{}", cwd, path))
        };
        Self { path, cwd }
    }

    /// Canonical path string used for matching.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    /// Path relative to `cwd`, or the full path when it lies outside it.
    pub fn relative(&self) -> &str {
        if self.cwd == "/" {
            return self.path.trim_start_matches('/');
        }
        match self.path.strip_prefix(&self.cwd) {
            Some(rest) if rest.starts_with('/') => &rest[1..],
            Some("") => "",
            _ => &self.path,
        }
    }

    /// Last path segment without its extension(s).
    ///
    /// `button.config.json` yields `button`; a leading dot is kept
    /// (`.hidden` yields `.hidden`).
    pub fn stem(&self) -> &str {
        let basename = self.path.rsplit('/').next().unwrap_or_default();
        match basename.char_indices().skip(1).find(|(_, c)| *c == '.') {
            Some((idx, _)) => &basename[..idx],
            None => basename,
        }
    }

    pub fn to_json(&self) -> Value {
        json!({ "path": self.path, "cwd": self.cwd })
    }
}

impl PartialEq for File {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for File {}

impl Tagged for File {}

/// Lexically normalize a `/`-separated path: collapse duplicate separators,
/// drop `.` segments, resolve `..` and strip any trailing separator.
fn normalize(path: &str) -> String {
    let absolute = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|last| *last != "..") {
                    segments.pop();
                } else if !absolute {
                    segments.push("..");
                }
            }
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    if absolute {
        format!("/{}", joined)
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}
