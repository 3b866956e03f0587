use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{constants::ALL_TAGS, slug::project_slug, utils::deserialize::null_as_default};

// ───── Constants ──────────────────────────────────────────────────────
const MAX_SEARCH_LENGTH: u64 = 100;
const MAX_TAG_LENGTH: u64 = 50;

// ───── Data Source Models ────────────────────────────────────────────

/// One project entry exactly as it appears in `projects_data.json`.
///
/// Optional collections and the completion date are filled with their empty
/// defaults here, so nothing downstream has to deal with missing values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub name: String,
    pub description: String,
    pub image: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tech_stack: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub features: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge: Option<String>,

    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub completion_date: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub screenshots: Vec<String>,
}

impl ProjectRecord {
    /// True when the record links to a live deployment.
    pub fn is_deployed(&self) -> bool {
        self.link.as_deref().is_some_and(|l| !l.is_empty())
    }

    pub fn uses(&self, tech: &str) -> bool {
        self.tech_stack.iter().any(|t| t == tech)
    }

    pub fn slug(&self) -> String {
        project_slug(&self.name)
    }
}

/// Envelope of `projects_data.json`.
#[derive(Debug, Deserialize)]
pub struct ProjectData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<ProjectRecord>,
}

/// A distinct technology with the number of projects that use it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechnologyFacet {
    pub name: String,
    pub count: usize,
}

// ───── Query State ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Date,
    Tech,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortKey::Name => "name",
            SortKey::Date => "date",
            SortKey::Tech => "tech",
        };
        write!(f, "{s}")
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "date" => Ok(SortKey::Date),
            "tech" => Ok(SortKey::Tech),
            other => Err(format!("Invalid sort key: {other}")),
        }
    }
}

/// Technology filter. The literal `"All"` is the "no filter" sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TagFilter {
    #[default]
    All,
    Tag(String),
}

impl TagFilter {
    pub fn as_str(&self) -> &str {
        match self {
            TagFilter::All => ALL_TAGS,
            TagFilter::Tag(tag) => tag,
        }
    }
}

impl From<&str> for TagFilter {
    fn from(value: &str) -> Self {
        if value == ALL_TAGS {
            TagFilter::All
        } else {
            TagFilter::Tag(value.to_string())
        }
    }
}

impl From<String> for TagFilter {
    fn from(value: String) -> Self {
        if value == ALL_TAGS {
            TagFilter::All
        } else {
            TagFilter::Tag(value)
        }
    }
}

impl Serialize for TagFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The three orthogonal inputs of the catalog pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogQuery {
    pub search_term: String,
    pub selected_tag: TagFilter,
    pub sort_key: SortKey,
}

impl CatalogQuery {
    /// Clears search and tag, keeping the sort order.
    pub fn reset_filters(&mut self) {
        self.search_term.clear();
        self.selected_tag = TagFilter::All;
    }

    pub fn is_filtered(&self) -> bool {
        !self.search_term.is_empty() || self.selected_tag != TagFilter::All
    }
}

// ───── Input & Validation Requests ──────────────────────────────────

/// Query string accepted by `GET /api/v1/projects`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ProjectListParams {
    #[validate(length(max = MAX_SEARCH_LENGTH, message = "Search term is too long"))]
    pub search: Option<String>,

    #[validate(length(max = MAX_TAG_LENGTH, message = "Tag must be at most 50 characters"))]
    pub tag: Option<String>,

    pub sort: Option<SortKey>,
}

impl From<ProjectListParams> for CatalogQuery {
    fn from(params: ProjectListParams) -> Self {
        CatalogQuery {
            search_term: params.search.unwrap_or_default(),
            selected_tag: params.tag.map(TagFilter::from).unwrap_or_default(),
            sort_key: params.sort.unwrap_or_default(),
        }
    }
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ProjectSummary {
    pub slug: String,
    #[serde(flatten)]
    pub record: ProjectRecord,
}

impl From<&ProjectRecord> for ProjectSummary {
    fn from(record: &ProjectRecord) -> Self {
        ProjectSummary {
            slug: record.slug(),
            record: record.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<ProjectSummary>,
    pub total: usize,
    pub matched: usize,
    pub query: CatalogQuery,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total_projects: usize,
    pub technologies: usize,
    pub deployed: usize,
}
