use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;
use validator::Validate;

use crate::{
    entities::project::{ProjectListParams, ProjectListResponse, ProjectSummary},
    errors::AppError,
    use_cases::catalog::ProjectCatalog,
    AppState,
};

#[instrument(skip(state, query))]
pub async fn list_projects(
    state: web::Data<AppState>,
    query: web::Query<ProjectListParams>,
) -> Result<impl Responder, AppError> {
    let params = query.into_inner();
    params.validate()?;

    let catalog = ProjectCatalog::with_query(state.content.projects(), params.into());

    let projects: Vec<ProjectSummary> = catalog
        .visible_projects()
        .into_iter()
        .map(ProjectSummary::from)
        .collect();

    if projects.is_empty() && catalog.query().is_filtered() {
        tracing::debug!(query = ?catalog.query(), "No projects match the current filters");
    }

    Ok(HttpResponse::Ok().json(ProjectListResponse {
        total: catalog.records().len(),
        matched: projects.len(),
        projects,
        query: catalog.query().clone(),
    }))
}

#[instrument(skip(state))]
pub async fn list_technologies(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.content.facets().as_ref())
}

#[instrument(skip(state))]
pub async fn project_stats(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.content.catalog().stats())
}

#[instrument(skip(state))]
pub async fn get_project_by_slug(
    slug: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let catalog = state.content.catalog();

    // Segments with reserved characters can reach us still encoded.
    let record = catalog.find_by_slug(&slug).or_else(|| {
        urlencoding::decode(&slug)
            .ok()
            .and_then(|decoded| catalog.find_by_slug(&decoded))
    });

    match record {
        Some(record) => Ok(HttpResponse::Ok().json(ProjectSummary::from(record))),
        None => Err(AppError::NotFound("Project not found".to_string())),
    }
}
