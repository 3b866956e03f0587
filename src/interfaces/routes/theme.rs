use actix_web::web;

use crate::handlers::theme;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/theme")
            .service(
                web::resource("")
                    .route(web::get().to(theme::get_theme))
                    .route(web::put().to(theme::set_theme))
            )
            .service(
                web::resource("/toggle")
                    .route(web::post().to(theme::toggle_theme))
            )
    );
}
