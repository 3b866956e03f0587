use actix_web::web;

use crate::handlers::projects;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    // Fixed paths go before the slug pattern.
    cfg.service(
        web::scope("/projects")
            .service(
                web::resource("")
                    .route(web::get().to(projects::list_projects))
            )
            .service(
                web::resource("/technologies")
                    .route(web::get().to(projects::list_technologies))
            )
            .service(
                web::resource("/stats")
                    .route(web::get().to(projects::project_stats))
            )
            .service(
                web::resource("/{slug}")
                    .route(web::get().to(projects::get_project_by_slug))
            )
    );
}
