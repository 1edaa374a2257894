//! Cached, sorted content collections.
//!
//! A store owns the raw documents of one content type. Parsing happens on
//! first access and is published once through a `OnceLock`, so concurrent
//! first readers never parse twice and later readers see the same slice.
//!
//! # Caches
//!
//! | Cache | Filled by | Used by |
//! |-------|-----------|---------|
//! | `documents` | `load_all()` | detail lookups, selectors |
//! | `summaries` | `load_summaries()` | listing pages, `paginated()` |

use std::{
    collections::{BTreeSet, HashSet},
    fs,
    path::Path,
    sync::OnceLock,
};

use rayon::prelude::*;
use walkdir::WalkDir;

use super::{Document, Facet, Metadata, PaperMeta, ProjectMeta, Summary, parse};
use crate::{
    log,
    pagination::{PageResult, paginate},
    query::{ListQuery, query},
    utils::slug::identifier_from_path,
};

/// Unparsed source text of one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    /// Source filename without extension.
    pub id: String,
    pub text: String,
}

impl RawDocument {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// All documents of one content type.
#[derive(Debug)]
pub struct ContentStore<M> {
    sources: Vec<RawDocument>,
    documents: OnceLock<Vec<Document<M>>>,
    summaries: OnceLock<Vec<Summary<M>>>,
}

impl<M: Metadata> ContentStore<M> {
    /// Create a store over an in-memory document set.
    ///
    /// Enumeration order is kept as the tie-breaker for equal dates.
    pub fn from_raw(sources: Vec<RawDocument>) -> Self {
        Self {
            sources,
            documents: OnceLock::new(),
            summaries: OnceLock::new(),
        }
    }

    /// Create a store from the `*.{extension}` files directly inside `dir`.
    ///
    /// Files are enumerated once, sorted by name, with symlinks followed.
    /// Entries that cannot be listed or read are logged and skipped; a
    /// missing directory yields an empty store.
    pub fn from_dir(dir: &Path, extension: &str) -> Self {
        if !dir.is_dir() {
            log!("content"; "{} directory `{}` not found, collection is empty", M::KIND.name(), dir.display());
            return Self::from_raw(Vec::new());
        }

        let sources = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    log!("content"; "cannot list entry in `{}`: {}", dir.display(), err);
                    None
                }
            })
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == extension))
            .filter_map(|e| {
                let path = e.path();
                let id = identifier_from_path(path)?;
                match fs::read_to_string(path) {
                    Ok(text) => Some(RawDocument { id, text }),
                    Err(err) => {
                        log!("content"; "cannot read `{}`: {}", path.display(), err);
                        None
                    }
                }
            })
            .collect();

        Self::from_raw(sources)
    }

    /// Number of raw documents, parseable or not.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// All parseable documents, newest first.
    ///
    /// Documents that fail to parse are logged and left out. The sort is
    /// stable, so documents sharing a date keep their enumeration order.
    pub fn load_all(&self) -> &[Document<M>] {
        self.documents.get_or_init(|| self.parse_all())
    }

    /// Body-less view of [`load_all`](Self::load_all), same order and length.
    pub fn load_summaries(&self) -> &[Summary<M>] {
        self.summaries
            .get_or_init(|| self.load_all().iter().map(Document::summary).collect())
    }

    fn parse_all(&self) -> Vec<Document<M>> {
        let results: Vec<_> = self
            .sources
            .par_iter()
            .map(|raw| parse::<M>(&raw.text, &raw.id))
            .collect();

        let mut documents = Vec::with_capacity(results.len());
        for result in results {
            match result {
                Ok(doc) => documents.push(doc),
                Err(err) => log!("content"; "skipping {} {}", M::KIND.name(), err),
            }
        }

        documents.sort_by(|a, b| b.meta.date().cmp(&a.meta.date()));
        warn_duplicate_slugs(&documents);
        documents
    }

    /// Find a document by slug. The first match in sorted order wins.
    pub fn get_by_slug(&self, slug: &str) -> Option<&Document<M>> {
        self.load_all().iter().find(|doc| doc.slug == slug)
    }

    /// Find a document by identifier.
    pub fn get_by_id(&self, id: &str) -> Option<&Document<M>> {
        self.load_all().iter().find(|doc| doc.id == id)
    }

    /// Distinct values of a facet, sorted ascending.
    pub fn distinct_values(&self, facet: Facet) -> Vec<String> {
        let mut values = BTreeSet::new();
        for doc in self.load_all() {
            let meta = &doc.meta;
            match facet {
                Facet::Category => {
                    values.insert(meta.category().to_owned());
                }
                Facet::Status => values.extend(meta.status().map(str::to_owned)),
                Facet::Labels => values.extend(meta.labels().iter().cloned()),
                Facet::Year => {
                    values.insert(meta.date().year.to_string());
                }
            }
        }
        values.into_iter().collect()
    }

    /// Documents flagged `featured`, in sorted order.
    pub fn featured(&self) -> Vec<&Document<M>> {
        self.load_all()
            .iter()
            .filter(|doc| doc.meta.featured())
            .collect()
    }

    /// Documents in a category (case-insensitive).
    pub fn by_category(&self, category: &str) -> Vec<&Document<M>> {
        let category = category.to_lowercase();
        self.load_all()
            .iter()
            .filter(|doc| doc.meta.category().to_lowercase() == category)
            .collect()
    }

    /// Filter, search and paginate the summaries.
    pub fn paginated(&self, list: &ListQuery) -> PageResult<Summary<M>> {
        let matched = query(self.load_summaries(), &list.filters, list.search.as_deref());
        paginate(&matched, list.page.page(), list.page.per_page())
    }
}

impl ContentStore<PaperMeta> {
    /// Papers published in the given year.
    pub fn by_year(&self, year: u16) -> Vec<&Document<PaperMeta>> {
        self.load_all()
            .iter()
            .filter(|doc| doc.meta.year == year)
            .collect()
    }

    /// Most cited papers first, at most `limit`. Uncited papers are left out.
    pub fn top_cited(&self, limit: usize) -> Vec<&Document<PaperMeta>> {
        let mut cited: Vec<_> = self
            .load_all()
            .iter()
            .filter(|doc| doc.meta.citations.is_some_and(|c| c > 0))
            .collect();
        cited.sort_by(|a, b| b.meta.citations.cmp(&a.meta.citations));
        cited.truncate(limit);
        cited
    }
}

impl ContentStore<ProjectMeta> {
    /// Projects using a technology (case-insensitive substring match).
    pub fn by_technology(&self, technology: &str) -> Vec<&Document<ProjectMeta>> {
        let needle = technology.to_lowercase();
        self.load_all()
            .iter()
            .filter(|doc| {
                doc.meta
                    .technologies
                    .iter()
                    .any(|tech| tech.to_lowercase().contains(&needle))
            })
            .collect()
    }
}

fn warn_duplicate_slugs<M: Metadata>(documents: &[Document<M>]) {
    let mut seen = HashSet::with_capacity(documents.len());
    for doc in documents {
        if !seen.insert(doc.slug.as_str()) {
            log!("content"; "duplicate {} slug `{}` (from `{}`)", M::KIND.name(), doc.slug, doc.id);
        }
    }
}
