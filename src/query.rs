//! Filtering and free-text search over content records.
//!
//! Every filter is an independent predicate, so the order they are applied
//! in never changes the result. A filter that is unset, empty, or `"all"`
//! matches everything. Output keeps the input order.

use thiserror::Error;

use crate::{
    content::{Metadata, Record},
    pagination::PageRequest,
    utils::date::ContentDate,
};

/// Reserved filter value meaning "no constraint".
pub const ALL: &str = "all";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("invalid date bound `{0}` (expected YYYY or YYYY-MM-DD)")]
    InvalidDateBound(String),
}

/// Inclusive date range; either bound may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<ContentDate>,
    pub end: Option<ContentDate>,
}

impl DateRange {
    /// Build a range from textual bounds (`YYYY` or `YYYY-MM-DD`).
    ///
    /// Empty strings and `"all"` leave the bound open.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self, QueryError> {
        let bound = |value: Option<&str>, upper: bool| -> Result<Option<ContentDate>, QueryError> {
            match active(value) {
                None => Ok(None),
                Some(text) => ContentDate::parse_bound(text, upper)
                    .map(Some)
                    .ok_or_else(|| QueryError::InvalidDateBound(text.to_owned())),
            }
        };

        Ok(Self {
            start: bound(start, false)?,
            end: bound(end, true)?,
        })
    }

    pub fn contains(&self, date: ContentDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }
}

/// Conjunctive filter set for one listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub category: Option<String>,
    /// Ignored by content types without a status.
    pub status: Option<String>,
    /// Tag, keyword or technology.
    pub label: Option<String>,
    pub date_range: DateRange,
}

impl Filters {
    pub fn matches<M: Metadata>(&self, meta: &M) -> bool {
        let category = active(self.category.as_deref())
            .is_none_or(|want| eq_ignore_case(meta.category(), want));

        let status = match (active(self.status.as_deref()), meta.status()) {
            (Some(want), Some(have)) => eq_ignore_case(have, want),
            _ => true,
        };

        let label = active(self.label.as_deref())
            .is_none_or(|want| meta.labels().iter().any(|l| eq_ignore_case(l, want)));

        category && status && label && self.date_range.contains(meta.date())
    }
}

/// Case-insensitive substring search over the record's search fields.
///
/// An empty or whitespace-only term matches everything.
pub fn matches_search<M: Metadata>(meta: &M, term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    meta.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Apply filters and search, keeping the input order.
pub fn query<R>(records: &[R], filters: &Filters, search: Option<&str>) -> Vec<R>
where
    R: Record + Clone,
{
    records
        .iter()
        .filter(|record| filters.matches(record.meta()))
        .filter(|record| search.is_none_or(|term| matches_search(record.meta(), term)))
        .cloned()
        .collect()
}

/// A listing request: which page, which filters, which search term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub page: PageRequest,
    pub filters: Filters,
    pub search: Option<String>,
}

impl ListQuery {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page: PageRequest::new(page, per_page),
            ..Self::default()
        }
    }

    pub fn with_filters(mut self, filters: Filters) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }
}

/// A filter value that actually constrains: non-empty and not `"all"`.
fn active(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(ALL))
}

#[inline]
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b) || a.to_lowercase() == b.to_lowercase()
}
