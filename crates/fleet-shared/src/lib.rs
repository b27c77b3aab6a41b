//! # Fleet Shared
//!
//! Wire types shared by the console client and the mock API server.
//! Field names follow the API's camelCase JSON.

pub mod dto;
pub mod response;

pub use dto::{
    Chart, ChartType, ListSummary, LoginRequest, NewVehicle, Session, Summary, User, Vehicle,
    VehicleList,
};
pub use response::ErrorResponse;
