//! Submitted form data and the rules for turning it into requests.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use fleet_shared::NewVehicle;

use crate::error::DomainError;

/// Name/value pairs from a submitted form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData(BTreeMap<String, String>);

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Form fields of the add-vehicle form with their labels, in form order.
pub const VEHICLE_FIELDS: [(&str, &str); 10] = [
    ("vrm", "Registration number"),
    ("manufacturer", "Manufacturer"),
    ("model", "Model"),
    ("type", "Type"),
    ("color", "Colour"),
    ("fuel", "Fuel"),
    ("mileage", "Mileage"),
    ("registrationDate", "Registration date"),
    ("vin", "VIN"),
    ("price", "Price"),
];

/// Loose email shape check: `local@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || email.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

fn required<'a>(form: &'a FormData, name: &str, label: &str) -> Result<&'a str, DomainError> {
    match form.get(name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(DomainError::Validation(format!("{label} is required"))),
    }
}

fn whole_number<'a>(form: &'a FormData, name: &str, label: &str) -> Result<&'a str, DomainError> {
    let value = required(form, name, label)?;
    if value.chars().all(|c| c.is_ascii_digit()) {
        Ok(value)
    } else {
        Err(DomainError::Validation(format!(
            "{label}: only whole numbers are allowed"
        )))
    }
}

/// Build a create request from the add-vehicle form.
///
/// Every field is required. Mileage and price must be whole numbers; the
/// mileage is converted to a number while the price stays a string.
pub fn parse_new_vehicle(form: &FormData) -> Result<NewVehicle, DomainError> {
    for (name, label) in VEHICLE_FIELDS {
        required(form, name, label)?;
    }

    let mileage = whole_number(form, "mileage", "Mileage")?
        .parse::<u32>()
        .map_err(|_| DomainError::Validation("Mileage is too large".to_string()))?;
    let price = whole_number(form, "price", "Price")?;
    let registration_date =
        NaiveDate::parse_from_str(required(form, "registrationDate", "Registration date")?, "%Y-%m-%d")
            .map_err(|_| {
                DomainError::Validation("Registration date must be a date (YYYY-MM-DD)".to_string())
            })?;

    let field = |name: &str| form.get(name).unwrap_or_default().to_string();

    Ok(NewVehicle {
        vrm: field("vrm"),
        manufacturer: field("manufacturer"),
        model: field("model"),
        vehicle_type: field("type"),
        fuel: field("fuel"),
        color: field("color"),
        vin: field("vin"),
        mileage,
        registration_date,
        price: price.to_string(),
    })
}

/// Check a create request received as JSON.
///
/// Text fields must be non-empty and the price a plain amount such as
/// `12000` or `12000.00`.
pub fn validate_new_vehicle(vehicle: &NewVehicle) -> Result<(), DomainError> {
    let text_fields = [
        (&vehicle.vrm, "Registration number"),
        (&vehicle.manufacturer, "Manufacturer"),
        (&vehicle.model, "Model"),
        (&vehicle.vehicle_type, "Type"),
        (&vehicle.color, "Colour"),
        (&vehicle.fuel, "Fuel"),
        (&vehicle.vin, "VIN"),
        (&vehicle.price, "Price"),
    ];
    for (value, label) in text_fields {
        if value.trim().is_empty() {
            return Err(DomainError::Validation(format!("{label} is required")));
        }
    }

    let (whole, pence) = vehicle
        .price
        .split_once('.')
        .unwrap_or((vehicle.price.as_str(), "00"));
    let digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    if !digits(whole) || !digits(pence) || pence.len() != 2 {
        return Err(DomainError::Validation(
            "Price must be an amount such as 12000 or 12000.00".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> FormData {
        FormData::new()
            .with("vrm", "AB12 CDE")
            .with("manufacturer", "Ford")
            .with("model", "Focus")
            .with("type", "Hatchback")
            .with("color", "red")
            .with("fuel", "Diesel")
            .with("mileage", "15000")
            .with("registrationDate", "2020-03-12")
            .with("vin", "1FTEW1E55JFA12345")
            .with("price", "12000")
    }

    #[test]
    fn test_parse_new_vehicle() {
        let vehicle = parse_new_vehicle(&complete_form()).unwrap();

        assert_eq!(vehicle.mileage, 15000);
        assert_eq!(vehicle.price, "12000");
        assert_eq!(vehicle.vehicle_type, "Hatchback");
        assert_eq!(
            vehicle.registration_date,
            NaiveDate::from_ymd_opt(2020, 3, 12).unwrap()
        );
    }

    #[test]
    fn test_missing_field_is_reported_by_label() {
        let form = complete_form().with("vin", "");

        let err = parse_new_vehicle(&form).unwrap_err();

        assert_eq!(err.to_string(), "Validation failed: VIN is required");
    }

    #[test]
    fn test_mileage_must_be_whole_number() {
        let form = complete_form().with("mileage", "15,000");
        assert!(matches!(
            parse_new_vehicle(&form),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_price_must_be_whole_number() {
        let form = complete_form().with("price", "12000.50");
        assert!(parse_new_vehicle(&form).is_err());
    }

    #[test]
    fn test_registration_date_must_be_iso() {
        let form = complete_form().with("registrationDate", "12/03/2020");
        assert!(parse_new_vehicle(&form).is_err());
    }

    #[test]
    fn test_validate_new_vehicle() {
        let mut vehicle = parse_new_vehicle(&complete_form()).unwrap();
        assert!(validate_new_vehicle(&vehicle).is_ok());

        vehicle.price = "12000.00".to_string();
        assert!(validate_new_vehicle(&vehicle).is_ok());

        vehicle.price = "12,000".to_string();
        assert!(validate_new_vehicle(&vehicle).is_err());

        vehicle.price = "12000".to_string();
        vehicle.model = " ".to_string();
        let err = validate_new_vehicle(&vehicle).unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: Model is required");
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@mail.example.co.uk"));
        assert!(!is_valid_email("user"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("us er@example.com"));
        assert!(!is_valid_email("a@b@example.com"));
    }
}
