use actix_cors::Cors;
use actix_web::http::{header, Method};

use crate::settings::AppConfig;

const PREFLIGHT_MAX_AGE_SECS: usize = 3600;

/// CORS policy from `cors_allowed_origins`; `*` allows any origin.
pub fn build_cors(config: &AppConfig) -> Cors {
    let origins = config.cors_origins();

    let cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::PUT, Method::POST])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .supports_credentials()
        .max_age(PREFLIGHT_MAX_AGE_SECS);

    if origins.iter().any(|o| o == "*") {
        return cors.allow_any_origin();
    }

    origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}
