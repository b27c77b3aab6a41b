use async_trait::async_trait;
use fleet_shared::{Vehicle, VehicleList};

use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or replace).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Missing entities are `RepoError::NotFound`.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Vehicle storage behind the mock API.
#[async_trait]
pub trait VehicleRepository: BaseRepository<Vehicle, String> {
    /// Every vehicle, in insertion order.
    async fn all(&self) -> Result<Vec<Vehicle>, RepoError>;

    /// One filtered page, see `domain::inventory::search`.
    async fn search(&self, query: &str, page: i64, page_size: u32)
    -> Result<VehicleList, RepoError>;
}
