use fleet_core::router::Location;
use fleet_shared::Vehicle;

use super::format::{fuel_label, grouped, long_date, price, title_case};

/// The detail sheet shown over the list.
pub fn render(vehicle: &Vehicle, location: &Location) -> String {
    let fields = [
        ("Manufacturer", vehicle.manufacturer.clone()),
        ("Model", vehicle.model.clone()),
        ("Type", vehicle.vehicle_type.clone()),
        ("Fuel", fuel_label(&vehicle.fuel)),
        ("Colour", title_case(&vehicle.color)),
        ("Mileage", grouped(u64::from(vehicle.mileage))),
        ("Price", price(&vehicle.price)),
        ("Registration date", long_date(vehicle.registration_date)),
        ("VIN", vehicle.vin.clone()),
    ];

    let mut lines = vec![format!("+- {} ", vehicle.vrm)];
    lines.extend(
        fields
            .iter()
            .map(|(label, value)| format!("| {label:<18} {value}")),
    );
    lines.push(format!(
        "| Delete: submit {}/destroy",
        location.path()
    ));
    lines.push(format!(
        "| Close:  open {}",
        location.clone().with_path("/vehicles")
    ));
    lines.push("+-".to_string());
    lines.join("\n")
}
