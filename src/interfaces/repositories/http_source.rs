use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    constants::{BLOGS_FILE, PROJECTS_FILE},
    entities::{blog_post::{BlogData, BlogPost}, project::{ProjectData, ProjectRecord}},
    errors::DataSourceError,
    repositories::data_source::DataSource,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches the data documents from a static host, e.g. the site's CDN.
///
/// A single GET per document; non-2xx responses are failures and nothing is
/// retried.
#[derive(Debug, Clone)]
pub struct HttpDataSource {
    base_url: Url,
    client: Client,
}

impl HttpDataSource {
    pub fn new(base_url: Url) -> Result<Self, DataSourceError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| DataSourceError::Request(base_url.to_string(), e.to_string()))?;

        Ok(HttpDataSource {
            base_url: with_trailing_slash(base_url),
            client,
        })
    }

    fn document_url(&self, file_name: &str) -> Result<Url, DataSourceError> {
        self.base_url
            .join(file_name)
            .map_err(|e| DataSourceError::Request(file_name.to_string(), e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, file_name: &str) -> Result<T, DataSourceError> {
        let url = self.document_url(file_name)?;
        let target = url.to_string();

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DataSourceError::Request(target.clone(), e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataSourceError::Status(target, status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| DataSourceError::Parse(target, e.to_string()))
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    async fn fetch_projects(&self) -> Result<Vec<ProjectRecord>, DataSourceError> {
        let data: ProjectData = self.get_json(PROJECTS_FILE).await?;
        Ok(data.projects)
    }

    async fn fetch_blogs(&self) -> Result<Vec<BlogPost>, DataSourceError> {
        let data: BlogData = self.get_json(BLOGS_FILE).await?;
        Ok(data.blogs)
    }

    fn describe(&self) -> String {
        self.base_url.to_string()
    }
}

// `Url::join` drops the last path segment unless the base ends in '/'.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
