//! Dashboard aggregates.

use actix_web::{HttpResponse, web};
use serde::de::IntoDeserializer;
use serde::de::value::{Error as ValueError, StringDeserializer};
use serde::{Deserialize, Deserializer};

use fleet_core::domain::stats;
use fleet_shared::{Chart, ChartType};

use crate::middleware::auth::ApiAccess;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/summary
pub async fn summary(state: web::Data<AppState>, _access: ApiAccess) -> AppResult<HttpResponse> {
    state.pause().await;
    let vehicles = state.vehicles.all().await?;
    Ok(HttpResponse::Ok().json(stats::summary(&vehicles)))
}

#[derive(Debug, Deserialize)]
pub struct ChartQuery {
    #[serde(rename = "type", default, deserialize_with = "known_chart_type")]
    kind: Option<ChartType>,
}

/// Unknown names read as absent instead of rejecting the request.
fn known_chart_type<'de, D>(deserializer: D) -> Result<Option<ChartType>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let value: StringDeserializer<ValueError> = raw.into_deserializer();
    Ok(ChartType::deserialize(value).ok())
}

/// GET /api/chart?type=FUEL_TYPE|OEM|REGISTRATION_YEAR
///
/// Unknown or missing types give an empty array.
pub async fn chart(
    state: web::Data<AppState>,
    _access: ApiAccess,
    query: web::Query<ChartQuery>,
) -> AppResult<HttpResponse> {
    state.pause().await;
    let Some(kind) = query.kind else {
        return Ok(HttpResponse::Ok().json(Vec::<Chart>::new()));
    };

    let vehicles = state.vehicles.all().await?;
    Ok(HttpResponse::Ok().json(stats::chart(kind, &vehicles, state.current_year())))
}
