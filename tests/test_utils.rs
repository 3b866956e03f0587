use actix_web::{
    middleware::NormalizePath,
    web,
    App, HttpServer
};
use portfolio_site::{
    build_data_source,
    cors::build_cors,
    repositories::{content_store::LoadReport, data_source::DataSource},
    routes::configure_routes,
    settings::{AppConfig, AppEnvironment},
    AppState
};
use reqwest::Client;
use std::{net::TcpListener, path::PathBuf, sync::Arc, time::Duration};
use tracing_actix_web::TracingLogger;

#[allow(dead_code)]
pub struct TestApp {
    pub state: web::Data<AppState>,
    pub address: String,
    pub client: Client,
    pub load_report: LoadReport,
}

#[allow(dead_code)]
impl TestApp {
    /// Server backed by the fixture documents.
    pub async fn spawn() -> Self {
        let config = test_config(fixtures_dir());
        let source = build_data_source(&config).expect("Failed to build data source");
        Self::spawn_with_source(config, source).await
    }

    /// Server whose data source fails for every document.
    pub async fn spawn_without_data() -> Self {
        let config = test_config(fixtures_dir().join("does-not-exist"));
        let source = build_data_source(&config).expect("Failed to build data source");
        Self::spawn_with_source(config, source).await
    }

    pub async fn spawn_with_source(config: AppConfig, source: Arc<dyn DataSource>) -> Self {
        let state = web::Data::new(AppState::new(&config, source));
        let load_report = state.load_content().await;

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let state_clone = state.clone();
        let server_config = config.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(state_clone.clone())
                .wrap(NormalizePath::trim())
                .wrap(build_cors(&server_config))
                .wrap(TracingLogger::default())
                .configure(configure_routes)
        })
        .listen(listener)
        .expect("Failed to bind server")
        .workers(config.worker_count)
        .run();

        tokio::spawn(server);

        let client = Client::new();
        while client.get(&format!("{}/api/v1/health", address)).send().await.is_err() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        Self {
            state,
            address,
            client,
            load_report,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_json(&self, path: &str) -> serde_json::Value {
        let response = self.get(path).await;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            panic!("GET {} failed ({}): {}", path, status, body);
        }
        response.json().await.expect("Failed to parse JSON body")
    }

    /// Names of the projects returned by the list endpoint, in order.
    pub async fn project_names(&self, query: &str) -> Vec<String> {
        let body = self.get_json(&format!("/api/v1/projects{}", query)).await;
        body["projects"]
            .as_array()
            .expect("projects must be an array")
            .iter()
            .map(|p| p["name"].as_str().unwrap().to_string())
            .collect()
    }
}

#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

#[allow(dead_code)]
pub fn test_config(data_dir: PathBuf) -> AppConfig {
    AppConfig {
        env: AppEnvironment::Testing,
        name: "Portfolio Site Test".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        worker_count: 1,
        cors_allowed_origins: vec!["*".to_string()],
        data_dir: data_dir.to_string_lossy().into_owned(),
        data_base_url: None,
        refresh_interval_secs: 0,
        default_theme: Default::default(),
        log_json: false,
    }
}
