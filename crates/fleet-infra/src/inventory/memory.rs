//! In-memory vehicle repository backing the mock API.

use async_trait::async_trait;
use tokio::sync::RwLock;

use fleet_core::RepoError;
use fleet_core::domain::inventory;
use fleet_core::ports::{BaseRepository, VehicleRepository};
use fleet_shared::{Vehicle, VehicleList};

/// Vehicles kept in insertion order behind an async `RwLock`.
///
/// Data is lost on restart.
#[derive(Default)]
pub struct InMemoryVehicleRepository {
    vehicles: RwLock<Vec<Vehicle>>,
}

impl InMemoryVehicleRepository {
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Self {
            vehicles: RwLock::new(vehicles),
        }
    }
}

#[async_trait]
impl BaseRepository<Vehicle, String> for InMemoryVehicleRepository {
    async fn find_by_id(&self, id: String) -> Result<Option<Vehicle>, RepoError> {
        let vehicles = self.vehicles.read().await;
        Ok(vehicles.iter().find(|v| v.id == id).cloned())
    }

    async fn save(&self, entity: Vehicle) -> Result<Vehicle, RepoError> {
        let mut vehicles = self.vehicles.write().await;
        match vehicles.iter_mut().find(|v| v.id == entity.id) {
            Some(existing) => *existing = entity.clone(),
            None => vehicles.push(entity.clone()),
        }
        Ok(entity)
    }

    async fn delete(&self, id: String) -> Result<(), RepoError> {
        let mut vehicles = self.vehicles.write().await;
        let before = vehicles.len();
        vehicles.retain(|v| v.id != id);
        if vehicles.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl VehicleRepository for InMemoryVehicleRepository {
    async fn all(&self) -> Result<Vec<Vehicle>, RepoError> {
        Ok(self.vehicles.read().await.clone())
    }

    async fn search(
        &self,
        query: &str,
        page: i64,
        page_size: u32,
    ) -> Result<VehicleList, RepoError> {
        let vehicles = self.vehicles.read().await;
        Ok(inventory::search(&vehicles, query, page, page_size))
    }
}
