use fleet_core::domain::forms::VEHICLE_FIELDS;
use fleet_core::router::FormOptions;

use super::format::title_case;

const FUELS: [(&str, &str); 4] = [
    ("Gasoline", "Petrol"),
    ("Diesel", "Diesel"),
    ("Hybrid", "Hybrid"),
    ("Electric", "Electric"),
];

/// The add-vehicle form: every field with its label and, for select
/// fields, the accepted values.
pub fn render(options: &FormOptions) -> String {
    let mut lines = vec![
        "Home > Add Vehicle".to_string(),
        String::new(),
        "Add a vehicle".to_string(),
    ];

    for (name, label) in VEHICLE_FIELDS {
        let hint = match name {
            "manufacturer" => one_of(&options.manufacturers),
            "model" => one_of(&options.models),
            "type" => one_of(&options.types),
            "color" => options
                .colors
                .iter()
                .map(|c| format!("{c} ({})", title_case(c)))
                .collect::<Vec<_>>()
                .join(", "),
            "fuel" => FUELS
                .iter()
                .map(|(value, label)| format!("{value} ({label})"))
                .collect::<Vec<_>>()
                .join(", "),
            "mileage" | "price" => "whole number".to_string(),
            "registrationDate" => "YYYY-MM-DD".to_string(),
            _ => String::new(),
        };
        if hint.is_empty() {
            lines.push(format!("  {label} [{name}]"));
        } else {
            lines.push(format!("  {label} [{name}]: {hint}"));
        }
    }

    lines.push(String::new());
    lines.push("Add:    submit /add vrm=\"AB12 CDE\" manufacturer=Ford ...".to_string());
    lines.push("Cancel: open /".to_string());
    lines.join("\n")
}

fn one_of(values: &[String]) -> String {
    values.join(", ")
}
