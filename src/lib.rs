//! Folio - typed content pipeline for a portfolio site.
//!
//! Markdown documents with YAML frontmatter (blog posts, research papers,
//! projects) are parsed into typed records, cached per collection, and
//! served as filtered, searched, paginated listings.
//!
//! ```text
//! raw documents ─► parse ─► ContentStore (cached, sorted)
//!                                 │
//!                                 ▼
//!                      query (filters + search) ─► paginate ─► PageResult
//! ```
//!
//! # Example
//!
//! ```ignore
//! use folio::{content::{ContentStore, PaperMeta, RawDocument}, query::ListQuery};
//!
//! let papers: ContentStore<PaperMeta> = ContentStore::from_raw(vec![
//!     RawDocument::new("attention", source),
//! ]);
//! let page = papers.paginated(&ListQuery::new(1, 6).with_search("transformer"));
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod content;
pub mod library;
pub mod pagination;
pub mod query;
pub mod utils;
