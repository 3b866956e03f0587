use actix_web::{web, HttpResponse, Responder};
use humantime::format_duration;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use chrono::Utc;
use std::{
    time::Duration,
    sync::atomic::{AtomicI64, Ordering},
};
use sysinfo::System;
use serde::Serialize;

use crate::{constants::START_TIME, repositories::content_store::CatalogPhase, AppState};

const CACHE_TTL_SECS: i64 = 5;

#[derive(Serialize, Clone, Default)]
struct SystemInfo {
    os: String,
    kernel: String,
    hostname: String,
    cpu_count: usize,
    memory_total: String,
}

#[derive(Serialize, Clone)]
struct ContentInfo {
    phase: CatalogPhase,
    source: String,
    projects: usize,
    technologies: usize,
    blog_posts: usize,
    loaded_at: Option<String>,
}

#[derive(Serialize, Clone)]
struct HealthCheckResponse {
    status: String,
    uptime: String,
    timestamp: String,
    start_at: String,
    version: String,
    memory_usage: String,
    content: ContentInfo,
    system: SystemInfo,
}

static LAST_CHECK: AtomicI64 = AtomicI64::new(0);
static CACHED_STATUS: Lazy<RwLock<Option<HealthCheckResponse>>> = Lazy::new(|| RwLock::new(None));

fn content_info(state: &AppState) -> ContentInfo {
    let snapshot = state.content.snapshot();

    ContentInfo {
        phase: snapshot.phase,
        source: state.data_source.describe(),
        projects: snapshot.projects.len(),
        technologies: snapshot.facets.len(),
        blog_posts: snapshot.blogs.len(),
        loaded_at: snapshot.loaded_at.map(|t| t.to_rfc3339()),
    }
}

fn status_for(phase: CatalogPhase) -> &'static str {
    match phase {
        CatalogPhase::Ready => "healthy",
        CatalogPhase::Unloaded => "starting",
    }
}

fn build_health_response(state: &AppState) -> HealthCheckResponse {
    let now_utc = Utc::now();
    let uptime_secs = now_utc.signed_duration_since(*START_TIME).num_seconds().max(0) as u64;

    let mut sys = System::new_all();
    sys.refresh_all();

    let system_info = SystemInfo {
        os: System::name().unwrap_or_else(|| "Unknown".to_string()),
        kernel: System::kernel_version().unwrap_or_else(|| "Unknown".to_string()),
        hostname: System::host_name().unwrap_or_else(|| "Unknown".to_string()),
        cpu_count: sys.cpus().len(),
        memory_total: format!("{:.2} GB", sys.total_memory() as f64 / 1024.0 / 1024.0 / 1024.0),
    };

    let memory_usage = sysinfo::get_current_pid()
        .ok()
        .and_then(|pid| sys.process(pid))
        .map_or("Unknown".to_string(), |p| {
            format!("{:.2} MB", p.memory() as f64 / 1024.0 / 1024.0)
        });

    let content = content_info(state);

    HealthCheckResponse {
        status: status_for(content.phase).to_string(),
        uptime: format_duration(Duration::from_secs(uptime_secs)).to_string(),
        timestamp: now_utc.to_rfc3339(),
        start_at: START_TIME.to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        memory_usage,
        content,
        system: system_info,
    }
}

/// Process and content status. System probing is cached for a few seconds;
/// content counts are always current.
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let now = Utc::now().timestamp();
    let last = LAST_CHECK.load(Ordering::Relaxed);

    let cached = if now - last <= CACHE_TTL_SECS {
        CACHED_STATUS.read().clone()
    } else {
        None
    };

    let response = match cached {
        Some(mut response) => {
            response.content = content_info(&state);
            response.status = status_for(response.content.phase).to_string();
            response
        }
        None => {
            let response = build_health_response(&state);
            *CACHED_STATUS.write() = Some(response.clone());
            LAST_CHECK.store(now, Ordering::Relaxed);
            response
        }
    };

    HttpResponse::Ok().json(response)
}
