//! Read-only folder browser.
//!
//! Serves a JSON description of a directory tree and the raw bytes of the files
//! inside it. The library holds the path resolution and tree walking logic plus
//! the axum handlers; `main.rs` only wires them to a listener.

pub mod config;
pub mod content_type;
pub mod error;
pub mod exclusion;
pub mod handlers;
pub mod resolve;
pub mod routes;
pub mod source;
pub mod tree;

use std::path::PathBuf;
use std::sync::Arc;

pub use config::Config;
pub use error::FileServerError;
pub use exclusion::ExclusionSet;
pub use resolve::{PathResolver, Rejected};
pub use tree::{TreeBuilder, TreeNode};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Root directory to serve files from
    pub root_dir: PathBuf,
    /// Names hidden from the tree and from direct file access
    pub exclusions: Arc<ExclusionSet>,
    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new AppState with the given root directory and default config.
    pub fn new(root_dir: PathBuf) -> Self {
        Self::with_config(root_dir, Config::default())
    }

    /// Create a new AppState with the given root directory and config.
    pub fn with_config(root_dir: PathBuf, config: Config) -> Self {
        let exclusions = ExclusionSet::new(config.excluded_names.iter().cloned());
        Self {
            root_dir,
            exclusions: Arc::new(exclusions),
            config: Arc::new(config),
        }
    }

    /// Path resolver bound to this state's root and exclusion set.
    pub fn resolver(&self) -> PathResolver<'_> {
        PathResolver::new(&self.root_dir, &self.exclusions)
    }
}
