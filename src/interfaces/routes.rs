use actix_web::web;

use crate::handlers::{home::home, json_error::not_found};

mod blog;
mod json_error;
mod projects;
mod system;
mod theme;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(json_error::config_routes);

    cfg.service(home);

    cfg.service(
        web::scope("/api/v1")
            .configure(projects::config_routes)
            .configure(blog::config_routes)
            .configure(theme::config_routes)
            .configure(system::config_routes)
    );

    cfg.default_service(web::to(not_found));
}
