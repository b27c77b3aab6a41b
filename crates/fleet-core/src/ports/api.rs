//! The inventory REST API as seen by the client.

use async_trait::async_trait;
use fleet_shared::{Chart, ChartType, NewVehicle, Session, Summary, User, Vehicle, VehicleList};

use crate::error::ApiError;

/// Client-side view of the inventory API.
///
/// Every method is a single request with no retry. Implementations attach
/// whatever credentials they hold; callers never see headers.
#[async_trait]
pub trait InventoryApi: Send + Sync {
    /// `POST /api/login`. A rejected login is `ApiError::Unauthorized`.
    async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError>;

    /// `GET /api/me`
    async fn current_user(&self) -> Result<User, ApiError>;

    /// `GET /api/summary`
    async fn summary(&self) -> Result<Summary, ApiError>;

    /// `GET /api/chart?type=`
    async fn chart(&self, kind: ChartType) -> Result<Vec<Chart>, ApiError>;

    /// `GET /api/vehicles?page=&q=`
    async fn vehicles(&self, page: i64, query: &str) -> Result<VehicleList, ApiError>;

    /// `GET /api/vehicles/:id`
    async fn vehicle(&self, id: &str) -> Result<Vehicle, ApiError>;

    /// `POST /api/vehicles`
    async fn create_vehicle(&self, vehicle: &NewVehicle) -> Result<Vehicle, ApiError>;

    /// `DELETE /api/vehicles/:id`
    async fn delete_vehicle(&self, id: &str) -> Result<(), ApiError>;

    /// `GET /api/manufacturers`
    async fn manufacturers(&self) -> Result<Vec<String>, ApiError>;

    /// `GET /api/models`
    async fn models(&self) -> Result<Vec<String>, ApiError>;

    /// `GET /api/types`
    async fn types(&self) -> Result<Vec<String>, ApiError>;

    /// `GET /api/colors`
    async fn colors(&self) -> Result<Vec<String>, ApiError>;
}
