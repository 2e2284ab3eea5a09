//! Confinement of request paths to the root directory.
//!
//! Resolution is purely lexical. Nothing here touches the filesystem, so the
//! caller still has to stat the result and decide between a file and a 404.
//!
//! Parent segments (`..`) that would climb above the root are deleted rather
//! than rejected: `../../etc/passwd` resolves to `<root>/etc/passwd`. Symlinks
//! are not followed; a link inside the root that points elsewhere is served as
//! whatever it points to.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{error, warn};

use crate::exclusion::ExclusionSet;

/// Why a path was refused. Both map to 403.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejected {
    #[error("first path segment is excluded")]
    Excluded,

    #[error("path resolves outside the root directory")]
    OutsideRoot,
}

/// Resolves caller-supplied relative paths against a fixed root.
#[derive(Debug, Clone, Copy)]
pub struct PathResolver<'a> {
    root: &'a Path,
    exclusions: &'a ExclusionSet,
}

impl<'a> PathResolver<'a> {
    pub fn new(root: &'a Path, exclusions: &'a ExclusionSet) -> Self {
        Self { root, exclusions }
    }

    /// Resolve a single `/`-joined, already percent-decoded path.
    pub fn resolve(&self, raw: &str) -> Result<PathBuf, Rejected> {
        self.resolve_segments([raw])
    }

    /// Resolve a path delivered as separate segments (e.g. a catch-all route
    /// parameter). Segments may themselves contain separators.
    pub fn resolve_segments<I, S>(&self, segments: I) -> Result<PathBuf, Rejected>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let relative = sanitize(segments);

        if let Some(first) = relative.first()
            && self.exclusions.contains(first)
        {
            warn!("Rejected request for excluded path segment: {}", first);
            return Err(Rejected::Excluded);
        }

        let mut path = self.root.to_path_buf();
        for segment in &relative {
            path.push(segment);
        }

        // Catches segments the platform treats as absolute (e.g. `C:` on Windows)
        if !path.starts_with(self.root) {
            error!("Path resolution left the root directory: {:?}", path);
            return Err(Rejected::OutsideRoot);
        }

        Ok(path)
    }
}

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Normalize segments lexically and drop any `..` that would climb above the
/// root. The result holds only normal segments.
fn sanitize<I, S>(segments: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut stack: Vec<String> = Vec::new();

    for raw in segments {
        for segment in raw.as_ref().split(is_separator) {
            match segment {
                "" | "." => continue,
                ".." => {
                    if stack.last().is_some_and(|s| s != "..") {
                        stack.pop();
                    } else {
                        stack.push("..".to_string());
                    }
                }
                name => stack.push(name.to_string()),
            }
        }
    }

    // After normalization any remaining `..` can only be leading
    stack.retain(|s| s != "..");
    stack
}
