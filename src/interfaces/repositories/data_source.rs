use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::{
    entities::{blog_post::BlogPost, project::ProjectRecord},
    errors::DataSourceError,
};

/// Where the two static JSON documents come from.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetches and parses `projects_data.json`
    async fn fetch_projects(&self) -> Result<Vec<ProjectRecord>, DataSourceError>;

    /// Fetches and parses `blogs_data.json`
    async fn fetch_blogs(&self) -> Result<Vec<BlogPost>, DataSourceError>;

    /// Human-readable location, used in logs and the health report
    fn describe(&self) -> String;
}
