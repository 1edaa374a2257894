//! `[content]` section configuration.
//!
//! Where each collection's documents live.

use super::defaults;
use crate::content::ContentKind;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// `[content]` section in folio.toml - collection directories.
///
/// # Example
/// ```toml
/// [content]
/// posts = "content/blog"
/// papers = "content/papers"
/// projects = "content/projects"
/// extension = "md"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct ContentConfig {
    /// Blog post directory.
    #[serde(default = "defaults::content::posts")]
    #[educe(Default = defaults::content::posts())]
    pub posts: PathBuf,

    /// Research paper directory.
    #[serde(default = "defaults::content::papers")]
    #[educe(Default = defaults::content::papers())]
    pub papers: PathBuf,

    /// Project directory.
    #[serde(default = "defaults::content::projects")]
    #[educe(Default = defaults::content::projects())]
    pub projects: PathBuf,

    /// File extension of content documents (without the dot).
    #[serde(default = "defaults::content::extension")]
    #[educe(Default = defaults::content::extension())]
    pub extension: String,
}

impl ContentConfig {
    /// Directory holding the given collection.
    pub fn dir(&self, kind: ContentKind) -> &Path {
        match kind {
            ContentKind::Posts => &self.posts,
            ContentKind::Papers => &self.papers,
            ContentKind::Projects => &self.projects,
        }
    }

    /// Re-base relative directories onto `root`.
    pub(super) fn rebase(&mut self, root: &Path) {
        for dir in [&mut self.posts, &mut self.papers, &mut self.projects] {
            if dir.is_relative() {
                *dir = root.join(&*dir);
            }
        }
    }
}
