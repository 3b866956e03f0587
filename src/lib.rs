use std::sync::Arc;

use anyhow::Context;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod background_task;

pub use domain::{entities, slug, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{cors, telemetry, utils};

use repositories::{
    content_store::ContentStore,
    data_source::DataSource,
    file_source::FileDataSource,
    http_source::HttpDataSource,
};
use settings::{AppConfig, DataSourceSetting};
use use_cases::theme::ThemeStore;

pub struct AppState {
    pub content: ContentStore,
    pub data_source: Arc<dyn DataSource>,
    pub theme_store: ThemeStore,
}

impl AppState {
    pub fn new(config: &AppConfig, data_source: Arc<dyn DataSource>) -> Self {
        AppState {
            content: ContentStore::new(),
            data_source,
            theme_store: ThemeStore::new(config.default_theme),
        }
    }

    /// Fetches both data documents into the content store.
    pub async fn load_content(&self) -> repositories::content_store::LoadReport {
        self.content.load(self.data_source.as_ref()).await
    }
}

/// Picks the file or HTTP data source named by the configuration.
pub fn build_data_source(config: &AppConfig) -> anyhow::Result<Arc<dyn DataSource>> {
    let source: Arc<dyn DataSource> = match config.data_source()? {
        DataSourceSetting::Directory(dir) => Arc::new(FileDataSource::new(dir)),
        DataSourceSetting::Remote(url) => Arc::new(
            HttpDataSource::new(url).context("Failed to build HTTP data source")?,
        ),
    };
    Ok(source)
}
