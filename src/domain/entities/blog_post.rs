use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::{deserialize::null_as_default, markdown::safe_markdown_to_html};

const MAX_CATEGORY_LENGTH: u64 = 50;
const CHARS_PER_READ_MINUTE: usize = 1000;

/// One entry of `blogs_data.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub date: String,
    pub category: String,
    pub excerpt: String,
    pub content: String,
    pub image: String,
    pub author: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

/// Envelope of `blogs_data.json`.
#[derive(Debug, Deserialize)]
pub struct BlogData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub blogs: Vec<BlogPost>,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct BlogListParams {
    #[validate(length(min = 1, max = MAX_CATEGORY_LENGTH, message = "Category must be between 1 and 50 characters"))]
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BlogPostListItem {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub date: String,
    pub category: String,
    pub excerpt: String,
    pub image: String,
    pub author: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct BlogListResponse {
    pub posts: Vec<BlogPostListItem>,
    pub total: usize,
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BlogPostDetailResponse {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub date: String,
    pub category: String,
    pub excerpt: String,
    pub content_html: String,
    pub image: String,
    pub author: String,
    pub tags: Vec<String>,
    pub read_minutes: usize,
}

impl BlogPost {
    /// Estimated reading time, one minute per thousand characters, rounded up.
    pub fn read_minutes(&self) -> usize {
        self.content.chars().count().div_ceil(CHARS_PER_READ_MINUTE)
    }

    pub fn to_list_item(&self) -> BlogPostListItem {
        BlogPostListItem {
            id: self.id,
            title: self.title.clone(),
            slug: self.slug.clone(),
            date: self.date.clone(),
            category: self.category.clone(),
            excerpt: self.excerpt.clone(),
            image: self.image.clone(),
            author: self.author.clone(),
            tags: self.tags.clone(),
        }
    }

    pub fn to_detail_response(&self) -> BlogPostDetailResponse {
        BlogPostDetailResponse {
            id: self.id,
            title: self.title.clone(),
            slug: self.slug.clone(),
            date: self.date.clone(),
            category: self.category.clone(),
            excerpt: self.excerpt.clone(),
            content_html: safe_markdown_to_html(&self.content),
            image: self.image.clone(),
            author: self.author.clone(),
            tags: self.tags.clone(),
            read_minutes: self.read_minutes(),
        }
    }
}
