//! Option lists for the add-vehicle form.

use actix_web::{HttpResponse, web};

use crate::middleware::auth::ApiAccess;
use crate::state::AppState;

/// GET /api/manufacturers
pub async fn manufacturers(state: web::Data<AppState>, _access: ApiAccess) -> HttpResponse {
    state.pause().await;
    HttpResponse::Ok().json(&state.catalogue.manufacturers)
}

/// GET /api/models
pub async fn models(state: web::Data<AppState>, _access: ApiAccess) -> HttpResponse {
    state.pause().await;
    HttpResponse::Ok().json(&state.catalogue.models)
}

/// GET /api/types
pub async fn types(state: web::Data<AppState>, _access: ApiAccess) -> HttpResponse {
    state.pause().await;
    HttpResponse::Ok().json(&state.catalogue.types)
}

/// GET /api/colors
pub async fn colors(state: web::Data<AppState>, _access: ApiAccess) -> HttpResponse {
    state.pause().await;
    HttpResponse::Ok().json(&state.catalogue.colors)
}
