use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;

use crate::{
    entities::{blog_post::BlogPost, project::{ProjectRecord, TechnologyFacet}},
    errors::DataSourceError,
    repositories::data_source::DataSource,
    use_cases::{blog::BlogHandler, catalog::{compute_technology_facets, ProjectCatalog}},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogPhase {
    Unloaded,
    Ready,
}

/// Everything served to clients, replaced as a whole on each load.
#[derive(Debug, Clone)]
pub struct ContentSnapshot {
    pub projects: Arc<[ProjectRecord]>,
    pub facets: Arc<[TechnologyFacet]>,
    pub blogs: Arc<[BlogPost]>,
    pub phase: CatalogPhase,
    pub loaded_at: Option<DateTime<Utc>>,
}

impl Default for ContentSnapshot {
    fn default() -> Self {
        ContentSnapshot {
            projects: Arc::from(Vec::new()),
            facets: Arc::from(Vec::new()),
            blogs: Arc::from(Vec::new()),
            phase: CatalogPhase::Unloaded,
            loaded_at: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub projects: usize,
    pub blogs: usize,
    pub failures: usize,
}

/// Shared, swappable holder of the loaded content.
///
/// Readers clone `Arc`s out of the lock and release it immediately.
#[derive(Clone, Default)]
pub struct ContentStore {
    inner: Arc<RwLock<ContentSnapshot>>,
}

impl ContentStore {
    pub fn new() -> Self {
        ContentStore::default()
    }

    pub fn snapshot(&self) -> ContentSnapshot {
        self.inner.read().clone()
    }

    pub fn phase(&self) -> CatalogPhase {
        self.inner.read().phase
    }

    pub fn projects(&self) -> Arc<[ProjectRecord]> {
        self.inner.read().projects.clone()
    }

    pub fn facets(&self) -> Arc<[TechnologyFacet]> {
        self.inner.read().facets.clone()
    }

    /// A fresh catalog over the current records with an unfiltered query.
    pub fn catalog(&self) -> ProjectCatalog {
        ProjectCatalog::new(self.projects())
    }

    pub fn blog(&self) -> BlogHandler {
        BlogHandler::new(self.inner.read().blogs.clone())
    }

    /// Initial load. A document that cannot be fetched is served as empty.
    pub async fn load(&self, source: &dyn DataSource) -> LoadReport {
        self.fetch_and_apply(source, false).await
    }

    /// Periodic reload. A document that cannot be fetched keeps its previous
    /// contents.
    pub async fn refresh(&self, source: &dyn DataSource) -> LoadReport {
        self.fetch_and_apply(source, true).await
    }

    async fn fetch_and_apply(&self, source: &dyn DataSource, keep_previous_on_error: bool) -> LoadReport {
        let (projects, blogs) = futures::join!(source.fetch_projects(), source.fetch_blogs());
        let mut failures = 0;

        let projects = settle(projects, "projects", &mut failures);
        let blogs = settle(blogs, "blogs", &mut failures);

        let mut guard = self.inner.write();

        match projects {
            Some(projects) => {
                guard.facets = compute_technology_facets(&projects).into();
                guard.projects = projects.into();
            }
            None if !keep_previous_on_error => {
                guard.projects = Arc::from(Vec::new());
                guard.facets = Arc::from(Vec::new());
            }
            None => {}
        }

        match blogs {
            Some(blogs) => guard.blogs = blogs.into(),
            None if !keep_previous_on_error => guard.blogs = Arc::from(Vec::new()),
            None => {}
        }

        guard.phase = CatalogPhase::Ready;
        guard.loaded_at = Some(Utc::now());

        let report = LoadReport {
            projects: guard.projects.len(),
            blogs: guard.blogs.len(),
            failures,
        };
        drop(guard);

        tracing::info!(
            source = %source.describe(),
            projects = report.projects,
            blogs = report.blogs,
            failures = report.failures,
            "Content loaded"
        );

        report
    }
}

fn settle<T>(result: Result<Vec<T>, DataSourceError>, document: &str, failures: &mut usize) -> Option<Vec<T>> {
    match result {
        Ok(items) => Some(items),
        Err(e) => {
            tracing::error!(document, error = %e, "Error fetching content");
            *failures += 1;
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::data_source::MockDataSource;

    fn project(name: &str, tech: &[&str]) -> ProjectRecord {
        ProjectRecord {
            name: name.into(),
            description: "desc".into(),
            image: "/img.png".into(),
            link: None,
            github_link: None,
            tech_stack: tech.iter().map(|t| t.to_string()).collect(),
            features: vec![],
            challenge: None,
            completion_date: String::new(),
            screenshots: vec![],
        }
    }

    fn post(slug: &str) -> BlogPost {
        BlogPost {
            id: 1,
            title: "t".into(),
            slug: slug.into(),
            date: "2024-01-01".into(),
            category: "General".into(),
            excerpt: "e".into(),
            content: "c".into(),
            image: "/i.png".into(),
            author: "a".into(),
            tags: vec![],
        }
    }

    fn healthy_source() -> MockDataSource {
        let mut source = MockDataSource::new();
        source
            .expect_fetch_projects()
            .returning(|| Ok(vec![project("One", &["Rust", "Actix"]), project("Two", &["Rust"])]));
        source.expect_fetch_blogs().returning(|| Ok(vec![post("hello")]));
        source.expect_describe().return_const("mock".to_string());
        source
    }

    fn failing_source() -> MockDataSource {
        let mut source = MockDataSource::new();
        source
            .expect_fetch_projects()
            .returning(|| Err(DataSourceError::Status("mock/projects_data.json".into(), 404)));
        source
            .expect_fetch_blogs()
            .returning(|| Err(DataSourceError::Parse("mock/blogs_data.json".into(), "eof".into())));
        source.expect_describe().return_const("mock".to_string());
        source
    }

    #[tokio::test]
    async fn starts_unloaded_and_empty() {
        let store = ContentStore::new();
        assert_eq!(store.phase(), CatalogPhase::Unloaded);
        assert!(store.projects().is_empty());
        assert!(store.catalog().visible_projects().is_empty());
    }

    #[tokio::test]
    async fn load_populates_records_and_facets() {
        let store = ContentStore::new();
        let report = store.load(&healthy_source()).await;

        assert_eq!(report, LoadReport { projects: 2, blogs: 1, failures: 0 });
        assert_eq!(store.phase(), CatalogPhase::Ready);
        assert_eq!(store.facets()[0], TechnologyFacet { name: "Rust".into(), count: 2 });
        assert_eq!(store.blog().categories(), ["General"]);
    }

    #[tokio::test]
    async fn failed_load_degrades_to_empty() {
        let store = ContentStore::new();
        let report = store.load(&failing_source()).await;

        assert_eq!(report, LoadReport { projects: 0, blogs: 0, failures: 2 });
        assert_eq!(store.phase(), CatalogPhase::Ready);
        assert!(store.catalog().technology_facets().is_empty());
        assert!(store.catalog().visible_projects().is_empty());
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_content() {
        let store = ContentStore::new();
        store.load(&healthy_source()).await;

        let report = store.refresh(&failing_source()).await;

        assert_eq!(report, LoadReport { projects: 2, blogs: 1, failures: 2 });
        assert_eq!(store.projects().len(), 2);
    }

    #[tokio::test]
    async fn failed_reload_clears_previous_content() {
        let store = ContentStore::new();
        store.load(&healthy_source()).await;

        store.load(&failing_source()).await;

        assert!(store.projects().is_empty());
        assert!(store.facets().is_empty());
    }
}
