//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [content] Section Defaults
// ============================================================================

pub mod content {
    use std::path::PathBuf;

    pub fn posts() -> PathBuf {
        "content/posts".into()
    }

    pub fn papers() -> PathBuf {
        "content/papers".into()
    }

    pub fn projects() -> PathBuf {
        "content/projects".into()
    }

    pub fn extension() -> String {
        "md".into()
    }
}

// ============================================================================
// [pagination] Section Defaults
// ============================================================================

pub mod pagination {
    use crate::pagination::{DEFAULT_MAX_VISIBLE, sizes};

    pub fn per_page() -> usize {
        sizes::SMALL
    }

    pub fn max_visible() -> usize {
        DEFAULT_MAX_VISIBLE
    }
}
