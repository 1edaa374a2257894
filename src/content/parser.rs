//! Frontmatter splitting and typed parsing.
//!
//! ```text
//! ---                      ◄─ opening delimiter (first line)
//! title: "Hello"           ┐
//! tags: ["rust", "web"]    ├─ YAML mapping, deserialized into `M`
//! date: 2024-01-15         ┘
//! ---                      ◄─ closing delimiter
//!
//! # Hello                  ◄─ body, kept verbatim
//! ```

use super::{Document, Metadata, ParseError};
use crate::utils::slug::resolve_slug;

const DELIMITER: &str = "---";

#[inline]
fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

/// Split raw text into `(frontmatter, body)`.
///
/// The opening delimiter must be the first line (a UTF-8 BOM is skipped).
/// The body starts right after the closing delimiter line.
pub fn split_frontmatter<'a>(raw: &'a str, id: &str) -> Result<(&'a str, &'a str), ParseError> {
    let text = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let mut lines = text.split_inclusive('\n');

    let opening = lines
        .next()
        .filter(|line| is_delimiter(line))
        .ok_or_else(|| ParseError::MissingFrontmatter { id: id.to_owned() })?;

    let start = opening.len();
    let mut offset = start;
    for line in lines {
        if is_delimiter(line) {
            return Ok((&text[start..offset], &text[offset + line.len()..]));
        }
        offset += line.len();
    }

    Err(ParseError::Unterminated { id: id.to_owned() })
}

/// Parse a raw document into a typed [`Document`].
///
/// The identifier is supplied by the caller (derived from the filename),
/// never read from the frontmatter.
pub fn parse<M: Metadata>(raw: &str, id: &str) -> Result<Document<M>, ParseError> {
    let (frontmatter, body) = split_frontmatter(raw, id)?;

    let meta: M = serde_yaml::from_str(frontmatter).map_err(|source| ParseError::Malformed {
        id: id.to_owned(),
        source,
    })?;
    let slug = resolve_slug(meta.explicit_slug(), id);

    Ok(Document {
        id: id.to_owned(),
        slug,
        meta,
        body: body.to_owned(),
    })
}
