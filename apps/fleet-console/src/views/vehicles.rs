//! The inventory table.

use fleet_core::router::Location;
use fleet_shared::{Vehicle, VehicleList};

use super::format::{fuel_label, grouped, price, table};

const LIST_PATH: &str = "/vehicles";

/// The list at `page` filtered by `query`; an empty query is left out.
pub fn list_location(query: &str, page: i64) -> Location {
    let location = Location::new(LIST_PATH);
    let location = if query.is_empty() {
        location
    } else {
        location.with_query("q", query)
    };
    location.with_query("page", page.to_string())
}

/// A vehicle's detail page, carrying the list's search parameters so the
/// list underneath stays on the same page.
pub fn detail_location(id: &str, from: &Location) -> Location {
    let mut location = Location::new(format!("{LIST_PATH}/{}", urlencoding::encode(id)));
    for (key, value) in from.search_params() {
        location = location.with_query(key.as_str(), value.as_str());
    }
    location
}

fn row(vehicle: &Vehicle, location: &Location) -> Vec<String> {
    vec![
        vehicle.vrm.clone(),
        vehicle.manufacturer.clone(),
        format!("{} {}", vehicle.model, vehicle.vehicle_type),
        fuel_label(&vehicle.fuel),
        price(&vehicle.price),
        detail_location(&vehicle.id, location).href(),
    ]
}

pub fn render(list: &VehicleList, location: &Location) -> String {
    let summary = &list.summary;
    let query = location.query("q").unwrap_or_default();

    let mut sections = vec![format!("Inventory ({})", grouped(summary.total))];
    if !query.is_empty() {
        sections.push(format!("Search: \"{query}\""));
    }

    if list.vehicles.is_empty() {
        sections.push(
            "No results found\nTry adjusting your search\nClear search: open /vehicles".to_string(),
        );
        return sections.join("\n");
    }

    let rows: Vec<Vec<String>> = list.vehicles.iter().map(|v| row(v, location)).collect();
    sections.push(table(
        &[
            "Registration",
            "Manufacturer",
            "Description",
            "Fuel",
            "Price",
            "Open",
        ],
        &rows,
    ));

    if summary.total_pages > 1 {
        let mut footer = vec![format!("Page {} of {}", summary.page, summary.total_pages)];
        if summary.page > 1 {
            footer.push(format!(
                "Previous: open {}",
                list_location(query, summary.page - 1)
            ));
        }
        if u64::try_from(summary.page).is_ok_and(|p| p < summary.total_pages) {
            footer.push(format!(
                "Next: open {}",
                list_location(query, summary.page + 1)
            ));
        }
        sections.push(footer.join("   "));
    }

    sections.join("\n")
}
