//! The three content collections behind one handle.
//!
//! Each `Library` owns its own stores and caches, so independent instances
//! (one per test, say) never share parsed state.

use crate::{
    config::FolioConfig,
    content::{ContentKind, ContentStore, PaperMeta, PostMeta, ProjectMeta},
};

#[derive(Debug)]
pub struct Library {
    pub posts: ContentStore<PostMeta>,
    pub papers: ContentStore<PaperMeta>,
    pub projects: ContentStore<ProjectMeta>,
}

impl Library {
    pub fn new(
        posts: ContentStore<PostMeta>,
        papers: ContentStore<PaperMeta>,
        projects: ContentStore<ProjectMeta>,
    ) -> Self {
        Self {
            posts,
            papers,
            projects,
        }
    }

    /// Enumerate every configured collection directory.
    ///
    /// Documents are read now and parsed on first access.
    pub fn from_config(config: &FolioConfig) -> Self {
        let extension = config.content.extension.trim_start_matches('.');
        let content = &config.content;

        Self::new(
            ContentStore::from_dir(content.dir(ContentKind::Posts), extension),
            ContentStore::from_dir(content.dir(ContentKind::Papers), extension),
            ContentStore::from_dir(content.dir(ContentKind::Projects), extension),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Facet, RawDocument};
    use std::fs;

    const PAPER: &str = "---\ntitle: \"Graphs\"\nauthors: [\"Ada\"]\njournal: \"J\"\nyear: 2022\n\
                         abstract: \"a\"\ncategory: \"research\"\nstatus: published\n---\nBody\n";

    #[test]
    fn test_from_config_reads_each_directory() {
        let dir = tempfile::tempdir().unwrap();
        let papers = dir.path().join("content/papers");
        fs::create_dir_all(&papers).unwrap();
        fs::write(papers.join("graphs.md"), PAPER).unwrap();
        fs::write(papers.join("graphs.txt"), PAPER).unwrap();

        let mut config = FolioConfig::default();
        config.set_root(dir.path());
        let library = Library::from_config(&config);

        assert_eq!(library.papers.load_all().len(), 1);
        assert_eq!(library.papers.get_by_slug("graphs").unwrap().meta.year, 2022);
        assert!(library.posts.load_all().is_empty());
        assert!(library.projects.load_all().is_empty());
    }

    #[test]
    fn test_dotted_extension_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let papers = dir.path().join("content/papers");
        fs::create_dir_all(&papers).unwrap();
        fs::write(papers.join("graphs.md"), PAPER).unwrap();

        let mut config = FolioConfig::default();
        config.content.extension = ".md".to_string();
        config.set_root(dir.path());

        assert_eq!(Library::from_config(&config).papers.source_count(), 1);
    }

    #[test]
    fn test_instances_do_not_share_caches() {
        let build = || {
            Library::new(
                ContentStore::from_raw(Vec::new()),
                ContentStore::from_raw(vec![RawDocument::new("graphs", PAPER)]),
                ContentStore::from_raw(Vec::new()),
            )
        };
        let first = build();
        let second = build();

        assert_ne!(
            first.papers.load_all().as_ptr(),
            second.papers.load_all().as_ptr()
        );
        assert_eq!(first.papers.distinct_values(Facet::Year), vec!["2022"]);
    }
}
