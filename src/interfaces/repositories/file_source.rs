use std::path::PathBuf;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tokio::fs;

use crate::{
    constants::{BLOGS_FILE, PROJECTS_FILE},
    entities::{blog_post::{BlogData, BlogPost}, project::{ProjectData, ProjectRecord}},
    errors::DataSourceError,
    repositories::data_source::DataSource,
};

/// Reads the data documents from a local directory, typically `public/`.
#[derive(Debug, Clone)]
pub struct FileDataSource {
    dir: PathBuf,
}

impl FileDataSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileDataSource { dir: dir.into() }
    }

    async fn read_json<T: DeserializeOwned>(&self, file_name: &str) -> Result<T, DataSourceError> {
        let path = self.dir.join(file_name);
        let display = path.display().to_string();

        let content = fs::read_to_string(&path)
            .await
            .map_err(|e| DataSourceError::Io(display.clone(), e.to_string()))?;

        serde_json::from_str(&content).map_err(|e| DataSourceError::Parse(display, e.to_string()))
    }
}

#[async_trait]
impl DataSource for FileDataSource {
    async fn fetch_projects(&self) -> Result<Vec<ProjectRecord>, DataSourceError> {
        let data: ProjectData = self.read_json(PROJECTS_FILE).await?;
        Ok(data.projects)
    }

    async fn fetch_blogs(&self) -> Result<Vec<BlogPost>, DataSourceError> {
        let data: BlogData = self.read_json(BLOGS_FILE).await?;
        Ok(data.blogs)
    }

    fn describe(&self) -> String {
        format!("file://{}", self.dir.display())
    }
}
