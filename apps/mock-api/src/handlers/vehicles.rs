//! Vehicle list, detail, create and delete.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use fleet_core::DomainError;
use fleet_core::domain::PAGE_SIZE;
use fleet_core::domain::forms::validate_new_vehicle;
use fleet_shared::NewVehicle;

use crate::middleware::auth::ApiAccess;
use crate::middleware::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    page: Option<String>,
    q: Option<String>,
}

impl ListQuery {
    /// Missing or unparsable pages read as 1; any integer is echoed as is.
    fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(1)
    }
}

/// GET /api/vehicles?page=&q=
pub async fn list(
    state: web::Data<AppState>,
    _access: ApiAccess,
    query: web::Query<ListQuery>,
) -> AppResult<HttpResponse> {
    state.pause().await;
    let q = query.q.as_deref().unwrap_or_default();
    let result = state.vehicles.search(q, query.page(), PAGE_SIZE).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// GET /api/vehicles/{id}
pub async fn get(
    state: web::Data<AppState>,
    _access: ApiAccess,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.pause().await;
    let id = path.into_inner();
    let vehicle = state
        .vehicles
        .find_by_id(id.clone())
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "Vehicle",
            id,
        })?;
    Ok(HttpResponse::Ok().json(vehicle))
}

/// POST /api/vehicles
pub async fn create(
    state: web::Data<AppState>,
    _access: ApiAccess,
    body: web::Json<NewVehicle>,
) -> AppResult<HttpResponse> {
    state.pause().await;
    let new_vehicle = body.into_inner();
    validate_new_vehicle(&new_vehicle)?;

    let vehicle = new_vehicle.into_vehicle(uuid::Uuid::new_v4().to_string());
    let saved = state.vehicles.save(vehicle).await?;
    tracing::info!(id = %saved.id, vrm = %saved.vrm, "Vehicle created");
    Ok(HttpResponse::Created().json(saved))
}

/// DELETE /api/vehicles/{id}
pub async fn delete(
    state: web::Data<AppState>,
    _access: ApiAccess,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.pause().await;
    let id = path.into_inner();
    state.vehicles.delete(id.clone()).await?;
    tracing::info!(id = %id, "Vehicle deleted");
    Ok(HttpResponse::NoContent().finish())
}
