//! Frontmatter schemas for posts, papers and projects.
//!
//! Keys are camelCase in frontmatter (`readTime`, `startDate`, ...).
//! Unknown keys are ignored; missing required keys fail the parse.

use serde::{Deserialize, Deserializer, Serialize, de};

use super::{ContentKind, Metadata};
use crate::utils::date::{ContentDate, deserialize_year};

// ============================================================================
// Posts
// ============================================================================

/// Blog post frontmatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMeta {
    pub title: String,

    pub excerpt: String,

    /// Publication date
    pub date: ContentDate,

    #[serde(default)]
    pub tags: Vec<String>,

    pub category: String,

    /// Display string, e.g. "5 min read"
    pub read_time: String,

    pub author: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub featured: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
}

impl Metadata for PostMeta {
    const KIND: ContentKind = ContentKind::Posts;

    fn title(&self) -> &str {
        &self.title
    }

    fn explicit_slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    fn date(&self) -> ContentDate {
        self.date
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn labels(&self) -> &[String] {
        &self.tags
    }

    fn featured(&self) -> bool {
        self.featured
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.excerpt.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

// ============================================================================
// Papers
// ============================================================================

/// Publication status of a paper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaperStatus {
    Published,
    UnderReview,
    Draft,
}

impl PaperStatus {
    const VARIANTS: &'static [&'static str] = &["published", "under-review", "draft"];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::UnderReview => "under-review",
            Self::Draft => "draft",
        }
    }

    /// Match a status ignoring case, e.g. `Published` or `Under-Review`.
    pub fn parse(text: &str) -> Option<Self> {
        match normalize_status(text).as_str() {
            "published" => Some(Self::Published),
            "under-review" => Some(Self::UnderReview),
            "draft" => Some(Self::Draft),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for PaperStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).ok_or_else(|| de::Error::unknown_variant(&text, Self::VARIANTS))
    }
}

/// Research paper frontmatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperMeta {
    pub title: String,

    /// Author names in citation order
    pub authors: Vec<String>,

    pub journal: String,

    #[serde(deserialize_with = "deserialize_year")]
    pub year: u16,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arxiv_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,

    #[serde(rename = "abstract")]
    pub abstract_text: String,

    #[serde(default)]
    pub keywords: Vec<String>,

    pub category: String,

    pub status: PaperStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citations: Option<u32>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub featured: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl Metadata for PaperMeta {
    const KIND: ContentKind = ContentKind::Papers;

    fn title(&self) -> &str {
        &self.title
    }

    fn explicit_slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    /// Papers only carry a year; it compares as 1 January.
    fn date(&self) -> ContentDate {
        ContentDate::year_start(self.year)
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn labels(&self) -> &[String] {
        &self.keywords
    }

    fn featured(&self) -> bool {
        self.featured
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.title.as_str(),
            self.abstract_text.as_str(),
            self.journal.as_str(),
        ];
        fields.extend(self.keywords.iter().map(String::as_str));
        fields.extend(self.authors.iter().map(String::as_str));
        fields
    }
}

// ============================================================================
// Projects
// ============================================================================

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Active,
    Completed,
    OnHold,
}

impl ProjectStatus {
    const VARIANTS: &'static [&'static str] = &["active", "completed", "on-hold"];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::OnHold => "on-hold",
        }
    }

    /// Match a status ignoring case, e.g. `Active` or `On-Hold`.
    pub fn parse(text: &str) -> Option<Self> {
        match normalize_status(text).as_str() {
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            "on-hold" => Some(Self::OnHold),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for ProjectStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).ok_or_else(|| de::Error::unknown_variant(&text, Self::VARIANTS))
    }
}

/// Lowercase and trim a status; `_` and spaces count as `-`.
fn normalize_status(text: &str) -> String {
    text.trim()
        .chars()
        .map(|c| match c {
            '_' | ' ' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Project frontmatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMeta {
    pub title: String,

    pub description: String,

    #[serde(default)]
    pub technologies: Vec<String>,

    pub category: String,

    pub status: ProjectStatus,

    pub start_date: ContentDate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<ContentDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub featured: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl Metadata for ProjectMeta {
    const KIND: ContentKind = ContentKind::Projects;

    fn title(&self) -> &str {
        &self.title
    }

    fn explicit_slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    fn date(&self) -> ContentDate {
        self.start_date
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn labels(&self) -> &[String] {
        &self.technologies
    }

    fn featured(&self) -> bool {
        self.featured
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.technologies.iter().map(String::as_str));
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(year: u16) -> PaperMeta {
        PaperMeta {
            title: "Scaling Laws".to_string(),
            authors: vec!["Grace Hopper".to_string()],
            journal: "JMLR".to_string(),
            year,
            volume: None,
            pages: None,
            doi: None,
            arxiv_url: None,
            pdf_url: None,
            abstract_text: "On scaling.".to_string(),
            keywords: vec!["scaling".to_string()],
            category: "research".to_string(),
            status: PaperStatus::Published,
            citations: None,
            featured: false,
            slug: None,
        }
    }

    #[test]
    fn test_status_strings_match_serde() {
        for status in [PaperStatus::Published, PaperStatus::UnderReview, PaperStatus::Draft] {
            let yaml = serde_yaml::to_string(&status).unwrap();
            assert_eq!(yaml.trim(), status.as_str());
        }
        for status in [ProjectStatus::Active, ProjectStatus::Completed, ProjectStatus::OnHold] {
            let yaml = serde_yaml::to_string(&status).unwrap();
            assert_eq!(yaml.trim(), status.as_str());
        }
    }

    #[test]
    fn test_status_parse_ignores_case() {
        assert_eq!(PaperStatus::parse("Published"), Some(PaperStatus::Published));
        assert_eq!(PaperStatus::parse("UNDER-REVIEW"), Some(PaperStatus::UnderReview));
        assert_eq!(PaperStatus::parse("under_review"), Some(PaperStatus::UnderReview));
        assert_eq!(ProjectStatus::parse("On-Hold"), Some(ProjectStatus::OnHold));
        assert_eq!(ProjectStatus::parse(" Active "), Some(ProjectStatus::Active));
        assert_eq!(ProjectStatus::parse("archived"), None);
    }

    #[test]
    fn test_mixed_case_status_deserializes() {
        let yaml = "title: t\nauthors: []\njournal: j\nyear: 2020\nabstract: a\ncategory: c\nstatus: Published\n";
        let meta: PaperMeta = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(meta.status, PaperStatus::Published);
        assert_eq!(meta.status(), Some("published"));

        let yaml = "title: t\ndescription: d\ncategory: c\nstatus: On-Hold\nstartDate: 2023-05-01\n";
        let meta: ProjectMeta = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(meta.status, ProjectStatus::OnHold);
    }

    #[test]
    fn test_unknown_status_names_variants() {
        let yaml = "title: t\nauthors: []\njournal: j\nyear: 2020\nabstract: a\ncategory: c\nstatus: retracted\n";
        let err = serde_yaml::from_str::<PaperMeta>(yaml).unwrap_err();
        assert!(err.to_string().contains("retracted"));
    }

    #[test]
    fn test_paper_date_is_year_start() {
        assert_eq!(paper(2021).date(), ContentDate::from_ymd(2021, 1, 1));
    }

    #[test]
    fn test_paper_search_fields_include_authors_and_journal() {
        let meta = paper(2021);
        let fields = meta.search_fields();
        assert!(fields.contains(&"Grace Hopper"));
        assert!(fields.contains(&"JMLR"));
        assert!(fields.contains(&"scaling"));
    }

    #[test]
    fn test_paper_accepts_quoted_year() {
        let yaml = "title: t\nauthors: []\njournal: j\nyear: \"2019\"\nabstract: a\ncategory: c\nstatus: draft\n";
        let meta: PaperMeta = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(meta.year, 2019);
    }

    #[test]
    fn test_paper_serializes_abstract_key() {
        let json = serde_json::to_value(paper(2020)).unwrap();
        assert_eq!(json["abstract"], "On scaling.");
        assert!(json.get("doi").is_none());
        assert!(json.get("featured").is_none());
    }

    #[test]
    fn test_post_has_no_status() {
        let yaml = "title: t\nexcerpt: e\ndate: 2024-01-01\ncategory: c\nreadTime: 1 min\nauthor: a\n";
        let meta: PostMeta = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(meta.status(), None);
        assert!(meta.tags.is_empty());
    }
}
