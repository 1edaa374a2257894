//! Document parsing errors.

use thiserror::Error;

/// Why a single document could not be parsed.
///
/// Every variant names the document so the store can log and skip it.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("`{id}`: missing frontmatter block")]
    MissingFrontmatter { id: String },

    #[error("`{id}`: frontmatter block is not closed")]
    Unterminated { id: String },

    #[error("`{id}`: malformed frontmatter: {source}")]
    Malformed {
        id: String,
        #[source]
        source: serde_yaml::Error,
    },
}

impl ParseError {
    /// Identifier of the offending document.
    pub fn id(&self) -> &str {
        match self {
            Self::MissingFrontmatter { id }
            | Self::Unterminated { id }
            | Self::Malformed { id, .. } => id,
        }
    }
}
