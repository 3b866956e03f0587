use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;
use validator::Validate;

use crate::{entities::blog_post::BlogListParams, errors::AppError, AppState};

#[instrument(skip(state, query))]
pub async fn get_all_blog_posts(
    state: web::Data<AppState>,
    query: web::Query<BlogListParams>,
) -> Result<impl Responder, AppError> {
    let params = query.into_inner();
    params.validate()?;

    let posts = state.content.blog().list_posts(params.category.as_deref());

    Ok(HttpResponse::Ok().json(posts))
}

#[instrument(skip(state))]
pub async fn get_blog_categories(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.content.blog().categories())
}

#[instrument(skip(state))]
pub async fn get_blog_post_by_slug(
    slug: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let post = state.content.blog().get_post_by_slug(&slug)?;
    Ok(HttpResponse::Ok().json(post))
}
