//! Data Transfer Objects - request/response types for the inventory API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Session issued by a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
}

/// The signed-in user's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
}

/// Stock totals shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: u64,
    pub oems: u64,
    pub value: f64,
}

/// A label/count pair. Used for the fuel, manufacturer and registration
/// year breakdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chart {
    pub key: String,
    pub value: u64,
}

impl Chart {
    pub fn new(key: impl Into<String>, value: u64) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Breakdown selector for `GET /api/chart?type=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChartType {
    FuelType,
    Oem,
    RegistrationYear,
}

/// A vehicle in stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub vrm: String,
    pub manufacturer: String,
    pub model: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub fuel: String,
    pub color: String,
    pub vin: String,
    pub mileage: u32,
    pub registration_date: NaiveDate,
    /// Decimal string, e.g. `"12000.00"`.
    pub price: String,
}

/// Fields submitted to create a vehicle. The server assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVehicle {
    pub vrm: String,
    pub manufacturer: String,
    pub model: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub fuel: String,
    pub color: String,
    pub vin: String,
    pub mileage: u32,
    pub registration_date: NaiveDate,
    pub price: String,
}

impl NewVehicle {
    pub fn into_vehicle(self, id: String) -> Vehicle {
        Vehicle {
            id,
            vrm: self.vrm,
            manufacturer: self.manufacturer,
            model: self.model,
            vehicle_type: self.vehicle_type,
            fuel: self.fuel,
            color: self.color,
            vin: self.vin,
            mileage: self.mileage,
            registration_date: self.registration_date,
            price: self.price,
        }
    }
}

/// Pagination metadata for a vehicle list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSummary {
    pub total: u64,
    pub total_pages: u64,
    /// Echo of the requested page, which may lie outside `1..=totalPages`.
    pub page: i64,
    pub page_size: u32,
}

/// One page of a filtered vehicle list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleList {
    pub summary: ListSummary,
    pub vehicles: Vec<Vehicle>,
}
