//! Application state - shared across all handlers.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Datelike, Utc};
use fleet_core::ports::{AuthError, PasswordService, TokenService, VehicleRepository};
use fleet_infra::{
    Argon2PasswordService, Catalogue, FixtureGenerator, InMemoryVehicleRepository,
    JwtTokenService, catalogue,
};
use fleet_shared::User;

use crate::config::AppConfig;

/// The single account the mock server accepts.
#[derive(Clone)]
pub struct DemoAccount {
    pub user: User,
    pub password_hash: String,
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub vehicles: Arc<dyn VehicleRepository>,
    pub account: Arc<DemoAccount>,
    pub catalogue: Arc<Catalogue>,
    pub passwords: Arc<dyn PasswordService>,
    pub tokens: Arc<dyn TokenService>,
    pub delay: Duration,
    pub require_auth: bool,
}

impl AppState {
    /// Generate the inventory and hash the demo password.
    pub fn new(config: &AppConfig) -> Result<Self, AuthError> {
        let mut fixtures = FixtureGenerator::new(config.seed);
        let vehicles = fixtures.vehicles();
        let user = fixtures.user(&config.user_email);

        let passwords = Arc::new(Argon2PasswordService::new());
        let password_hash = passwords.hash(&config.user_password)?;

        tracing::info!(
            vehicles = vehicles.len(),
            seed = ?config.seed,
            user = %user.email,
            "Mock inventory generated"
        );

        Ok(Self {
            vehicles: Arc::new(InMemoryVehicleRepository::new(vehicles)),
            account: Arc::new(DemoAccount {
                user,
                password_hash,
            }),
            catalogue: Arc::new(catalogue()),
            passwords,
            tokens: Arc::new(JwtTokenService::new(config.jwt.clone())),
            delay: config.delay,
            require_auth: config.require_auth,
        })
    }

    /// Simulated network latency.
    pub async fn pause(&self) {
        if !self.delay.is_zero() {
            actix_rt::time::sleep(self.delay).await;
        }
    }

    pub fn current_year(&self) -> i32 {
        Utc::now().year()
    }
}
