//! Dashboard aggregations over the whole inventory.

use std::collections::{BTreeMap, HashSet};

use chrono::Datelike;
use fleet_shared::{Chart, ChartType, Summary, Vehicle};

/// API fuel values and the chart keys they are reported under.
pub const FUEL_KEYS: [(&str, &str); 4] = [
    ("Gasoline", "petrol"),
    ("Diesel", "diesel"),
    ("Hybrid", "hybrid"),
    ("Electric", "electric"),
];

/// Stock count, distinct manufacturers and total price.
///
/// Prices that do not parse as numbers contribute nothing to the value.
pub fn summary(vehicles: &[Vehicle]) -> Summary {
    let oems: HashSet<&str> = vehicles.iter().map(|v| v.manufacturer.as_str()).collect();
    let value = vehicles
        .iter()
        .filter_map(|v| v.price.parse::<f64>().ok())
        .sum();

    Summary {
        count: vehicles.len() as u64,
        oems: oems.len() as u64,
        value,
    }
}

/// Dispatch a breakdown by chart type.
pub fn chart(kind: ChartType, vehicles: &[Vehicle], current_year: i32) -> Vec<Chart> {
    match kind {
        ChartType::FuelType => fuel_breakdown(vehicles),
        ChartType::Oem => oem_breakdown(vehicles),
        ChartType::RegistrationYear => registration_year_breakdown(vehicles, current_year),
    }
}

/// Counts per fuel, always four entries in `FUEL_KEYS` order.
pub fn fuel_breakdown(vehicles: &[Vehicle]) -> Vec<Chart> {
    FUEL_KEYS
        .iter()
        .map(|(fuel, key)| {
            let count = vehicles.iter().filter(|v| v.fuel == *fuel).count();
            Chart::new(*key, count as u64)
        })
        .collect()
}

/// Counts per manufacturer, sorted by manufacturer name.
pub fn oem_breakdown(vehicles: &[Vehicle]) -> Vec<Chart> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for vehicle in vehicles {
        *counts.entry(vehicle.manufacturer.as_str()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(key, value)| Chart::new(key, value))
        .collect()
}

/// Counts per registration year.
///
/// Every year from the earliest registration up to `current_year` is
/// present, zero-filled. Keys are year strings in lexical order.
pub fn registration_year_breakdown(vehicles: &[Vehicle], current_year: i32) -> Vec<Chart> {
    let Some(min_year) = vehicles.iter().map(|v| v.registration_date.year()).min() else {
        return Vec::new();
    };

    let mut years: BTreeMap<String, u64> = (min_year..=current_year)
        .map(|year| (year.to_string(), 0))
        .collect();

    for vehicle in vehicles {
        *years
            .entry(vehicle.registration_date.year().to_string())
            .or_insert(0) += 1;
    }

    years
        .into_iter()
        .map(|(key, value)| Chart::new(key, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn vehicle(manufacturer: &str, fuel: &str, year: i32, price: &str) -> Vehicle {
        Vehicle {
            id: format!("{manufacturer}-{year}"),
            vrm: "AB12 CDE".to_string(),
            manufacturer: manufacturer.to_string(),
            model: "Model".to_string(),
            vehicle_type: "Sedan".to_string(),
            fuel: fuel.to_string(),
            color: "blue".to_string(),
            vin: "1FTEW1E55JFA12345".to_string(),
            mileage: 2000,
            registration_date: NaiveDate::from_ymd_opt(year, 6, 1).unwrap(),
            price: price.to_string(),
        }
    }

    #[test]
    fn test_summary() {
        let vehicles = vec![
            vehicle("Ford", "Diesel", 2020, "1000.50"),
            vehicle("Ford", "Gasoline", 2021, "2000.00"),
            vehicle("Audi", "Hybrid", 2022, "not-a-price"),
        ];

        let summary = summary(&vehicles);

        assert_eq!(summary.count, 3);
        assert_eq!(summary.oems, 2);
        assert!((summary.value - 3000.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fuel_breakdown_has_fixed_keys() {
        let vehicles = vec![
            vehicle("Ford", "Gasoline", 2020, "1"),
            vehicle("Ford", "Gasoline", 2020, "1"),
            vehicle("Audi", "Electric", 2020, "1"),
        ];

        let chart = fuel_breakdown(&vehicles);

        assert_eq!(
            chart,
            vec![
                Chart::new("petrol", 2),
                Chart::new("diesel", 0),
                Chart::new("hybrid", 0),
                Chart::new("electric", 1),
            ]
        );
    }

    #[test]
    fn test_oem_breakdown_sorted_by_key() {
        let vehicles = vec![
            vehicle("Volvo", "Diesel", 2020, "1"),
            vehicle("Audi", "Diesel", 2020, "1"),
            vehicle("Volvo", "Diesel", 2020, "1"),
        ];

        let chart = oem_breakdown(&vehicles);

        assert_eq!(chart, vec![Chart::new("Audi", 1), Chart::new("Volvo", 2)]);
    }

    #[test]
    fn test_registration_years_are_zero_filled_to_current_year() {
        let vehicles = vec![
            vehicle("Ford", "Diesel", 2021, "1"),
            vehicle("Ford", "Diesel", 2023, "1"),
            vehicle("Ford", "Diesel", 2023, "1"),
        ];

        let chart = registration_year_breakdown(&vehicles, 2024);

        assert_eq!(
            chart,
            vec![
                Chart::new("2021", 1),
                Chart::new("2022", 0),
                Chart::new("2023", 2),
                Chart::new("2024", 0),
            ]
        );
    }

    #[test]
    fn test_registration_years_empty_inventory() {
        assert!(registration_year_breakdown(&[], 2024).is_empty());
    }
}
