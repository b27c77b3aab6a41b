//! In-memory fakes for router and route tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use fleet_shared::{Chart, ChartType, NewVehicle, Session, Summary, User, Vehicle, VehicleList};
use tokio::sync::{Notify, RwLock};

use crate::domain::{PAGE_SIZE, inventory, stats};
use crate::error::{ApiError, SessionError};
use crate::ports::{InventoryApi, SessionStore};
use crate::router::RouteContext;

pub const EMAIL: &str = "user@example.com";
pub const PASSWORD: &str = "Password123";
pub const TOKEN: &str = "token-123";

const MAKES: [(&str, &str, &str); 5] = [
    ("Ford", "Focus", "Hatchback"),
    ("Volkswagen", "Golf", "Hatchback"),
    ("Tesla", "Model 3", "Saloon"),
    ("Land Rover", "Defender", "SUV"),
    ("Toyota", "Prius", "Hatchback"),
];

pub fn vehicle(index: usize) -> Vehicle {
    let (manufacturer, model, vehicle_type) = MAKES[index % MAKES.len()];
    Vehicle {
        id: format!("v{index}"),
        vrm: format!("AB{:02} CDE", index % 100),
        manufacturer: manufacturer.to_string(),
        model: model.to_string(),
        vehicle_type: vehicle_type.to_string(),
        fuel: ["Gasoline", "Diesel", "Hybrid", "Electric"][index % 4].to_string(),
        color: "red".to_string(),
        vin: format!("1HGCM82633A{index:06}"),
        mileage: 1000 + index as u32 * 100,
        registration_date: NaiveDate::from_ymd_opt(2018 + (index % 5) as i32, 3, 12)
            .unwrap_or_default(),
        price: format!("{}.00", 10_000 + index * 250),
    }
}

/// Blocks `FakeApi::vehicle` until released.
#[derive(Default)]
pub struct Hold {
    pub entered: Notify,
    pub release: Notify,
}

/// Scripted `InventoryApi` that counts calls per endpoint.
pub struct FakeApi {
    vehicles: Mutex<Vec<Vehicle>>,
    calls: Mutex<HashMap<&'static str, usize>>,
    failures: Mutex<HashMap<&'static str, ApiError>>,
    hold: Mutex<Option<Arc<Hold>>>,
    next_id: AtomicUsize,
}

impl FakeApi {
    /// Twenty-five vehicles, ids `v0` to `v24`.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            vehicles: Mutex::new((0..25).map(vehicle).collect()),
            calls: Mutex::new(HashMap::new()),
            failures: Mutex::new(HashMap::new()),
            hold: Mutex::new(None),
            next_id: AtomicUsize::new(100),
        })
    }

    pub fn calls(&self, endpoint: &str) -> usize {
        self.calls.lock().unwrap().get(endpoint).copied().unwrap_or(0)
    }

    /// Make every later call to `endpoint` fail with `error`.
    pub fn fail(&self, endpoint: &'static str, error: ApiError) {
        self.failures.lock().unwrap().insert(endpoint, error);
    }

    pub fn hold_vehicle(&self) -> Arc<Hold> {
        let hold = Arc::new(Hold::default());
        *self.hold.lock().unwrap() = Some(hold.clone());
        hold
    }

    pub fn has_vehicle(&self, id: &str) -> bool {
        self.vehicles.lock().unwrap().iter().any(|v| v.id == id)
    }

    fn record(&self, endpoint: &'static str) -> Result<(), ApiError> {
        *self.calls.lock().unwrap().entry(endpoint).or_default() += 1;
        match self.failures.lock().unwrap().get(endpoint) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn snapshot(&self) -> Vec<Vehicle> {
        self.vehicles.lock().unwrap().clone()
    }

    fn distinct(&self, field: fn(&Vehicle) -> &str) -> Vec<String> {
        let mut values: Vec<String> = self
            .snapshot()
            .iter()
            .map(|v| field(v).to_string())
            .collect();
        values.sort();
        values.dedup();
        values
    }
}

#[async_trait]
impl InventoryApi for FakeApi {
    async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        self.record("login")?;
        if email == EMAIL && password == PASSWORD {
            Ok(Session {
                token: TOKEN.to_string(),
            })
        } else {
            Err(ApiError::Unauthorized)
        }
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        self.record("me")?;
        Ok(User {
            id: "u1".to_string(),
            name: "Jane Doe".to_string(),
            email: EMAIL.to_string(),
            avatar: "https://example.com/avatar.png".to_string(),
        })
    }

    async fn summary(&self) -> Result<Summary, ApiError> {
        self.record("summary")?;
        Ok(stats::summary(&self.snapshot()))
    }

    async fn chart(&self, kind: ChartType) -> Result<Vec<Chart>, ApiError> {
        self.record("chart")?;
        Ok(stats::chart(kind, &self.snapshot(), 2024))
    }

    async fn vehicles(&self, page: i64, query: &str) -> Result<VehicleList, ApiError> {
        self.record("vehicles")?;
        Ok(inventory::search(&self.snapshot(), query, page, PAGE_SIZE))
    }

    async fn vehicle(&self, id: &str) -> Result<Vehicle, ApiError> {
        self.record("vehicle")?;
        let hold = self.hold.lock().unwrap().clone();
        if let Some(hold) = hold {
            hold.entered.notify_one();
            hold.release.notified().await;
        }
        self.snapshot()
            .into_iter()
            .find(|v| v.id == id)
            .ok_or(ApiError::NotFound)
    }

    async fn create_vehicle(&self, vehicle: &NewVehicle) -> Result<Vehicle, ApiError> {
        self.record("create")?;
        let id = format!("v{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        let created = vehicle.clone().into_vehicle(id);
        self.vehicles.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn delete_vehicle(&self, id: &str) -> Result<(), ApiError> {
        self.record("delete")?;
        let mut vehicles = self.vehicles.lock().unwrap();
        let before = vehicles.len();
        vehicles.retain(|v| v.id != id);
        if vehicles.len() == before {
            Err(ApiError::NotFound)
        } else {
            Ok(())
        }
    }

    async fn manufacturers(&self) -> Result<Vec<String>, ApiError> {
        self.record("manufacturers")?;
        Ok(self.distinct(|v| &v.manufacturer))
    }

    async fn models(&self) -> Result<Vec<String>, ApiError> {
        self.record("models")?;
        Ok(self.distinct(|v| &v.model))
    }

    async fn types(&self) -> Result<Vec<String>, ApiError> {
        self.record("types")?;
        Ok(self.distinct(|v| &v.vehicle_type))
    }

    async fn colors(&self) -> Result<Vec<String>, ApiError> {
        self.record("colors")?;
        Ok(self.distinct(|v| &v.color))
    }
}

/// Session store held in memory, optionally unreadable.
pub struct MemorySession {
    session: RwLock<Option<Session>>,
    broken: bool,
}

impl MemorySession {
    pub fn empty() -> Arc<Self> {
        Arc::new(Self {
            session: RwLock::new(None),
            broken: false,
        })
    }

    pub fn with(session: Session) -> Arc<Self> {
        Arc::new(Self {
            session: RwLock::new(Some(session)),
            broken: false,
        })
    }

    pub fn signed_in() -> Arc<Self> {
        Self::with(Session {
            token: TOKEN.to_string(),
        })
    }

    pub fn broken() -> Arc<Self> {
        Arc::new(Self {
            session: RwLock::new(None),
            broken: true,
        })
    }

    pub async fn token(&self) -> Option<String> {
        self.session.read().await.as_ref().map(|s| s.token.clone())
    }
}

#[async_trait]
impl SessionStore for MemorySession {
    async fn get(&self) -> Result<Option<Session>, SessionError> {
        if self.broken {
            return Err(SessionError::Serialization("unreadable".to_string()));
        }
        Ok(self.session.read().await.clone())
    }

    async fn set(&self, session: &Session) -> Result<(), SessionError> {
        *self.session.write().await = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionError> {
        *self.session.write().await = None;
        Ok(())
    }
}

pub fn ctx_with(api: Arc<FakeApi>, session: Arc<MemorySession>) -> RouteContext {
    RouteContext::new(api, session)
}
