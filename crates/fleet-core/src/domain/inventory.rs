//! Vehicle search and pagination.

use fleet_shared::{ListSummary, Vehicle, VehicleList};

/// Fixed number of vehicles per list page.
pub const PAGE_SIZE: u32 = 10;

/// Whether `vehicle` matches a free-text `query`.
///
/// An empty query matches everything. Otherwise the query must be a
/// case-insensitive substring of the manufacturer, model or type, checked in
/// that order.
pub fn matches(vehicle: &Vehicle, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let needle = query.to_lowercase();
    [
        vehicle.manufacturer.as_str(),
        vehicle.model.as_str(),
        vehicle.vehicle_type.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

/// `ceil(total / page_size)`, zero when there is nothing to page.
pub fn total_pages(total: u64, page_size: u32) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(u64::from(page_size))
}

/// Filter `vehicles` by `query`, then cut out 1-based `page`.
///
/// The requested page is echoed back unchanged, even when it lies past the
/// last page (the slice is then empty). Pages below 1 have no vehicles.
pub fn search(vehicles: &[Vehicle], query: &str, page: i64, page_size: u32) -> VehicleList {
    let filtered: Vec<&Vehicle> = vehicles.iter().filter(|v| matches(v, query)).collect();
    let total = filtered.len() as u64;

    let page_vehicles = match usize::try_from(page.saturating_sub(1)) {
        Ok(index) if page >= 1 => {
            let start = index.saturating_mul(page_size as usize);
            filtered
                .into_iter()
                .skip(start)
                .take(page_size as usize)
                .cloned()
                .collect()
        }
        _ => Vec::new(),
    };

    VehicleList {
        summary: ListSummary {
            total,
            total_pages: total_pages(total, page_size),
            page,
            page_size,
        },
        vehicles: page_vehicles,
    }
}
