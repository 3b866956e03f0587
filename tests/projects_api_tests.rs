mod test_utils;

use reqwest::StatusCode;
use serde_json::{json, Value};
use test_utils::*;

#[actix_rt::test]
async fn lists_all_projects_sorted_by_name_by_default() {
    let app = TestApp::spawn().await;

    let body = app.get_json("/api/v1/projects").await;

    assert_eq!(body["total"], 4);
    assert_eq!(body["matched"], 4);
    assert_eq!(body["query"], json!({ "search_term": "", "selected_tag": "All", "sort_key": "name" }));
    assert_eq!(app.project_names("").await, ["Apple", "Mango", "Weather App", "Zebra"]);
}

#[actix_rt::test]
async fn date_sort_is_descending_with_ties_in_input_order() {
    let app = TestApp::spawn().await;

    assert_eq!(
        app.project_names("?sort=date").await,
        ["Apple", "Weather App", "Zebra", "Mango"]
    );
}

#[actix_rt::test]
async fn tech_sort_orders_by_stack_size() {
    let app = TestApp::spawn().await;

    assert_eq!(
        app.project_names("?sort=tech").await,
        ["Zebra", "Weather App", "Apple", "Mango"]
    );
}

#[actix_rt::test]
async fn tag_filter_is_exact_and_case_sensitive() {
    let app = TestApp::spawn().await;

    assert_eq!(app.project_names("?tag=React").await, ["Apple", "Zebra"]);
    assert!(app.project_names("?tag=react").await.is_empty());
    assert_eq!(app.project_names("?tag=All").await.len(), 4);
}

#[actix_rt::test]
async fn search_matches_name_description_and_stack() {
    let app = TestApp::spawn().await;

    assert_eq!(app.project_names("?search=man").await, ["Mango"]);
    assert_eq!(app.project_names("?search=ORCHARD").await, ["Apple"]);
    assert_eq!(app.project_names("?search=actix").await, ["Weather App"]);
}

#[actix_rt::test]
async fn stages_compose() {
    let app = TestApp::spawn().await;

    let body = app.get_json("/api/v1/projects?search=a&tag=React&sort=date").await;

    let names: Vec<&str> = body["projects"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Apple", "Zebra"]);
    assert_eq!(body["matched"], 2);
    assert_eq!(body["total"], 4);
}

#[actix_rt::test]
async fn no_results_is_an_empty_list_not_an_error() {
    let app = TestApp::spawn().await;

    let body = app.get_json("/api/v1/projects?search=kubernetes").await;

    assert_eq!(body["matched"], 0);
    assert_eq!(body["projects"], json!([]));
}

#[actix_rt::test]
async fn missing_optional_fields_are_filled() {
    let app = TestApp::spawn().await;

    let body = app.get_json("/api/v1/projects?search=mango").await;
    let mango = &body["projects"][0];

    assert_eq!(mango["tech_stack"], json!([]));
    assert_eq!(mango["features"], json!([]));
    assert!(mango.get("completion_date").is_none());
    assert_eq!(mango["slug"], "mango");
}

#[actix_rt::test]
async fn invalid_sort_key_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/v1/projects?sort=popularity").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("Query string error"));
}

#[actix_rt::test]
async fn overlong_search_is_a_validation_error() {
    let app = TestApp::spawn().await;

    let response = app.get(&format!("/api/v1/projects?search={}", "x".repeat(101))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["details"][0]["field"], "search");
}

#[actix_rt::test]
async fn technologies_are_listed_in_first_seen_order() {
    let app = TestApp::spawn().await;

    let body = app.get_json("/api/v1/projects/technologies").await;

    assert_eq!(
        body,
        json!([
            { "name": "React", "count": 2 },
            { "name": "Node", "count": 1 },
            { "name": "Rust", "count": 1 },
            { "name": "Actix", "count": 1 }
        ])
    );
}

#[actix_rt::test]
async fn stats_summarise_the_catalog() {
    let app = TestApp::spawn().await;

    let body = app.get_json("/api/v1/projects/stats").await;

    assert_eq!(body, json!({ "total_projects": 4, "technologies": 4, "deployed": 1 }));
}

#[actix_rt::test]
async fn project_detail_is_found_by_slug() {
    let app = TestApp::spawn().await;

    let body = app.get_json("/api/v1/projects/weather-app").await;

    assert_eq!(body["name"], "Weather App");
    assert_eq!(body["slug"], "weather-app");
    assert_eq!(body["tech_stack"], json!(["Rust", "Actix"]));

    let encoded = app.get_json("/api/v1/projects/Weather%20App").await;
    assert_eq!(encoded["name"], "Weather App");
}

#[actix_rt::test]
async fn unknown_slug_is_404() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/v1/projects/not-a-project").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Not found: Project not found");
}

#[actix_rt::test]
async fn unavailable_data_source_serves_empty_catalog() {
    let app = TestApp::spawn_without_data().await;

    assert_eq!(app.load_report.failures, 2);

    let body = app.get_json("/api/v1/projects?tag=React&sort=tech").await;
    assert_eq!(body["total"], 0);
    assert_eq!(body["projects"], json!([]));

    let facets = app.get_json("/api/v1/projects/technologies").await;
    assert_eq!(facets, json!([]));
}

#[actix_rt::test]
async fn empty_tag_matches_nothing() {
    let app = TestApp::spawn().await;

    let body = app.get_json("/api/v1/projects?tag=").await;

    assert_eq!(body["matched"], 0);
    assert_eq!(body["query"]["selected_tag"], "");
}
