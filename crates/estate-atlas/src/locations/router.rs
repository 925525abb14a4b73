use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::directory::LocationDirectory;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchParams {
    #[serde(default)]
    pub(crate) q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NameParams {
    pub(crate) name: String,
}

/// Router builder exposing the location directory over HTTP.
pub fn location_router(directory: &'static LocationDirectory) -> Router {
    Router::new()
        .route("/api/v1/locations", get(search_handler))
        .route(
            "/api/v1/locations/cities/:city_id/areas",
            get(city_areas_handler),
        )
        .route(
            "/api/v1/locations/regions/lookup",
            get(region_lookup_handler),
        )
        .route(
            "/api/v1/locations/regions/:region_id/areas",
            get(region_areas_handler),
        )
        .route("/api/v1/locations/areas/lookup", get(area_lookup_handler))
        .route(
            "/api/v1/locations/areas/:area_id/compounds",
            get(area_compounds_handler),
        )
        .with_state(directory)
}

type DirectoryState = State<&'static LocationDirectory>;

/// Without a query the full flattened listing is returned.
pub(crate) async fn search_handler(
    State(directory): DirectoryState,
    Query(params): Query<SearchParams>,
) -> Response {
    let results = match params.q {
        Some(query) => directory.search(&query),
        None => directory.flatten(),
    };
    (StatusCode::OK, Json(results)).into_response()
}

pub(crate) async fn city_areas_handler(
    State(directory): DirectoryState,
    Path(city_id): Path<String>,
) -> Response {
    (StatusCode::OK, Json(directory.areas_by_city(&city_id))).into_response()
}

pub(crate) async fn region_areas_handler(
    State(directory): DirectoryState,
    Path(region_id): Path<String>,
) -> Response {
    (StatusCode::OK, Json(directory.areas_by_region(&region_id))).into_response()
}

pub(crate) async fn area_compounds_handler(
    State(directory): DirectoryState,
    Path(area_id): Path<String>,
) -> Response {
    (StatusCode::OK, Json(directory.compounds_by_area(&area_id))).into_response()
}

pub(crate) async fn region_lookup_handler(
    State(directory): DirectoryState,
    Query(params): Query<NameParams>,
) -> Response {
    lookup_response(directory.region_id_by_name(&params.name), "region", &params.name)
}

pub(crate) async fn area_lookup_handler(
    State(directory): DirectoryState,
    Query(params): Query<NameParams>,
) -> Response {
    lookup_response(directory.area_id_by_name(&params.name), "area", &params.name)
}

fn lookup_response(id: Option<&'static str>, kind: &str, name: &str) -> Response {
    match id {
        Some(id) => (StatusCode::OK, Json(json!({ "id": id }))).into_response(),
        None => {
            let payload = json!({
                "error": format!("no {kind} named '{name}'"),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}
