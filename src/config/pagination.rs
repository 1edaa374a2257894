//! `[pagination]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[pagination]` section in folio.toml - listing page sizes.
///
/// # Example
/// ```toml
/// [pagination]
/// per_page = 10
/// max_visible = 7
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct PaginationConfig {
    /// Items per listing page.
    #[serde(default = "defaults::pagination::per_page")]
    #[educe(Default = defaults::pagination::per_page())]
    pub per_page: usize,

    /// Page numbers shown in the page selector.
    #[serde(default = "defaults::pagination::max_visible")]
    #[educe(Default = defaults::pagination::max_visible())]
    pub max_visible: usize,
}
