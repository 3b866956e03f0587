use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use tracing_actix_web::TracingLogger;
use portfolio_site::{
    background_task::start_refresh_task,
    build_data_source,
    cors::build_cors,
    graceful_shutdown::shutdown_signal,
    routes::configure_routes,
    settings::AppConfig,
    telemetry::init_tracing,
    AppState,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = match AppConfig::new() {
        Ok(cfg) => cfg,
        Err(e) => {
            init_tracing(false);
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(config.log_json);
    tracing::info!("Loaded configuration: {:?}", config);

    let data_source = build_data_source(&config)?;
    let app_state = web::Data::new(AppState::new(&config, data_source));

    let report = app_state.load_content().await;
    if report.failures > 0 {
        tracing::warn!("Started with {} data document(s) unavailable; serving empty lists", report.failures);
    }

    if let Some(every) = config.refresh_interval() {
        tokio::spawn(start_refresh_task(
            app_state.content.clone(),
            app_state.data_source.clone(),
            every,
        ));
    }

    let server_addr = format!("{}:{}", config.host, config.port);

    tracing::info!(
        "🚀 Starting Portfolio Site v{} on {}",
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let server_config = config.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(NormalizePath::trim())
            .wrap(build_cors(&server_config))
            .wrap(TracingLogger::default())
            .configure(configure_routes)
    })
    .workers(config.worker_count)
    .bind(server_addr)?
    .run();

    tokio::select! {
        res = server => res?,
        _ = shutdown_signal() => {},
    }

    Ok(())
}
