use std::{collections::HashSet, sync::Arc};

use crate::{
    entities::blog_post::{BlogListResponse, BlogPost, BlogPostDetailResponse},
    errors::AppError,
};

/// Read-only view over the loaded blog posts.
pub struct BlogHandler {
    posts: Arc<[BlogPost]>,
}

impl BlogHandler {
    pub fn new(posts: Arc<[BlogPost]>) -> Self {
        BlogHandler { posts }
    }

    /// Lists posts, optionally restricted to one category
    pub fn list_posts(&self, category: Option<&str>) -> BlogListResponse {
        let posts: Vec<_> = filter_by_category(&self.posts, category)
            .into_iter()
            .map(BlogPost::to_list_item)
            .collect();

        BlogListResponse {
            total: posts.len(),
            posts,
            category: category.map(str::to_string),
        }
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<String> {
        categories(&self.posts)
    }

    /// Retrieves a single post, rendered for display
    pub fn get_post_by_slug(&self, slug: &str) -> Result<BlogPostDetailResponse, AppError> {
        find_by_slug(&self.posts, slug)
            .map(BlogPost::to_detail_response)
            .ok_or_else(|| AppError::NotFound("Blog post not found".to_string()))
    }
}

pub fn categories(posts: &[BlogPost]) -> Vec<String> {
    let mut seen = HashSet::new();
    posts
        .iter()
        .filter(|p| seen.insert(p.category.as_str()))
        .map(|p| p.category.clone())
        .collect()
}

pub fn filter_by_category<'a>(posts: &'a [BlogPost], category: Option<&str>) -> Vec<&'a BlogPost> {
    match category {
        None => posts.iter().collect(),
        Some(category) => posts.iter().filter(|p| p.category == category).collect(),
    }
}

pub fn find_by_slug<'a>(posts: &'a [BlogPost], slug: &str) -> Option<&'a BlogPost> {
    posts.iter().find(|p| p.slug == slug)
}
