//! Text rendering of committed pages.
//!
//! The layout header comes from the root route's data; each matched route
//! then contributes its own section, outermost first, so a detail sheet is
//! printed beneath the list it was opened from. An error replaces the
//! sections from the failing route down.

pub mod add;
pub mod dashboard;
pub mod details;
pub mod error;
pub mod format;
pub mod layout;
pub mod login;
pub mod not_found;
pub mod vehicles;

use fleet_core::Page;
use fleet_core::router::{LoaderData, LoginForm, RouteId};

pub fn render(page: &Page) -> String {
    let location = &page.location;
    let mut sections = Vec::new();

    for route in &page.matches {
        let section = match (route.id, &route.data) {
            (RouteId::Root, LoaderData::User(user)) => layout::header(user, location),
            (RouteId::Dashboard, LoaderData::Dashboard(data)) => dashboard::render(data),
            (RouteId::Vehicles, LoaderData::Vehicles(list)) => vehicles::render(list, location),
            (RouteId::VehicleDetails, LoaderData::Vehicle(vehicle)) => {
                details::render(vehicle, location)
            }
            (RouteId::AddVehicle, LoaderData::AddForm(options)) => add::render(options),
            (RouteId::Login, LoaderData::Login(form)) => login::render(form, location),
            (RouteId::Login, _) => login::render(&LoginForm::default(), location),
            (RouteId::NotFound, _) => not_found::render(location),
            _ => continue,
        };
        sections.push(section);
    }

    if let Some(error) = &page.error {
        sections.push(error::render(error));
    }

    sections.join("\n\n")
}
