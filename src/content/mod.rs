//! Typed content collections loaded from frontmatter-tagged markdown.
//!
//! # Pipeline
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────────────────┐
//! │ RawDocument  │ ──► │ parse::<M>() │ ──► │ ContentStore<M>          │
//! │ (id, text)   │     │ frontmatter  │     │ load_all()      (cached) │
//! └──────────────┘     │ + body       │     │ load_summaries()(cached) │
//!                      └──────────────┘     └──────────────────────────┘
//! ```
//!
//! Each content type (posts, papers, projects) is a metadata schema `M`
//! implementing [`Metadata`]. A [`Document`] pairs that metadata with the
//! markdown body; a [`Summary`] is the same record without the body, used
//! by listing views.

mod error;
mod parser;
mod store;
mod types;

use clap::ValueEnum;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::utils::date::ContentDate;

pub use error::ParseError;
pub use parser::{parse, split_frontmatter};
pub use store::{ContentStore, RawDocument};
pub use types::{PaperMeta, PaperStatus, PostMeta, ProjectMeta, ProjectStatus};

/// The three content collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Posts,
    Papers,
    Projects,
}

impl ContentKind {
    /// Collection name (used in logs and config keys).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Posts => "posts",
            Self::Papers => "papers",
            Self::Projects => "projects",
        }
    }
}

/// Fields whose distinct values populate filter options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Facet {
    Category,
    Status,
    /// Tags, keywords or technologies, depending on the content type.
    Labels,
    Year,
}

/// Schema of one content type's frontmatter.
pub trait Metadata: DeserializeOwned + Serialize + Clone + Send + Sync {
    const KIND: ContentKind;

    fn title(&self) -> &str;

    /// Slug given in frontmatter, if any.
    fn explicit_slug(&self) -> Option<&str>;

    /// Date used for ordering (newest first) and range filtering.
    fn date(&self) -> ContentDate;

    fn category(&self) -> &str;

    /// Lifecycle status. Content types without one return `None`.
    fn status(&self) -> Option<&str> {
        None
    }

    /// Tags, keywords or technologies.
    fn labels(&self) -> &[String];

    fn featured(&self) -> bool;

    /// Fields matched by free-text search.
    fn search_fields(&self) -> Vec<&str>;
}

/// Fields shared by full documents and summaries.
pub trait Record {
    type Meta: Metadata;

    fn id(&self) -> &str;
    fn slug(&self) -> &str;
    fn meta(&self) -> &Self::Meta;

    fn title(&self) -> &str {
        self.meta().title()
    }
}

/// A parsed document with its markdown body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document<M> {
    /// Source filename without extension.
    pub id: String,
    pub slug: String,
    pub meta: M,
    pub body: String,
}

/// A document without its body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary<M> {
    pub id: String,
    pub slug: String,
    pub meta: M,
}

impl<M: Clone> Document<M> {
    /// Derive the body-less view of this document.
    pub fn summary(&self) -> Summary<M> {
        Summary {
            id: self.id.clone(),
            slug: self.slug.clone(),
            meta: self.meta.clone(),
        }
    }
}

impl<M> From<Document<M>> for Summary<M> {
    fn from(doc: Document<M>) -> Self {
        Self {
            id: doc.id,
            slug: doc.slug,
            meta: doc.meta,
        }
    }
}

impl<M: Metadata> Record for Document<M> {
    type Meta = M;

    fn id(&self) -> &str {
        &self.id
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn meta(&self) -> &M {
        &self.meta
    }
}

impl<M: Metadata> Record for Summary<M> {
    type Meta = M;

    fn id(&self) -> &str {
        &self.id
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn meta(&self) -> &M {
        &self.meta
    }
}
