use actix_web::{get, HttpResponse, Responder};

#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Welcome to the Portfolio Site API!",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "projects": "/api/v1/projects",
        "blog": "/api/v1/blog/posts",
        "health": "/api/v1/health"
    }))
}
