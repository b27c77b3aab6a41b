//! Data produced by loaders and actions, handed to views.

use fleet_shared::{Chart, Summary, User, Vehicle, VehicleList};

use super::location::Location;

/// Everything the dashboard renders.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub summary: Summary,
    pub fuel_chart: Vec<Chart>,
    pub oem_chart: Vec<Chart>,
    pub year_chart: Vec<Chart>,
}

/// Select options for the add-vehicle form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormOptions {
    pub manufacturers: Vec<String>,
    pub models: Vec<String>,
    pub types: Vec<String>,
    pub colors: Vec<String>,
}

/// Login form state. `error` is shown beneath the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoaderData {
    /// Route without a loader.
    #[default]
    None,
    User(User),
    Dashboard(Dashboard),
    Vehicles(VehicleList),
    Vehicle(Vehicle),
    AddForm(FormOptions),
    Login(LoginForm),
}

/// Result of a loader or action.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Data(LoaderData),
    Redirect(Location),
}

impl Outcome {
    pub fn redirect(href: &str) -> Self {
        Outcome::Redirect(Location::parse(href))
    }
}
