//! Seeded generation of the mock inventory.

use chrono::{Days, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use uuid::Builder;

use fleet_shared::{User, Vehicle};

/// Manufacturers with the models generated for each.
pub const MANUFACTURERS: [(&str, &[&str]); 10] = [
    ("Audi", &["A3", "A4", "Q5"]),
    ("BMW", &["3 Series", "X3", "i4"]),
    ("Ford", &["Fiesta", "Focus", "Kuga", "Mustang"]),
    ("Honda", &["Civic", "Jazz", "CR-V"]),
    ("Kia", &["Ceed", "Niro", "Sportage"]),
    ("Land Rover", &["Defender", "Discovery", "Range Rover"]),
    ("Nissan", &["Juke", "Leaf", "Qashqai"]),
    ("Tesla", &["Model 3", "Model Y"]),
    ("Toyota", &["Corolla", "Prius", "Yaris"]),
    ("Volkswagen", &["Golf", "Polo", "Tiguan"]),
];

pub const TYPES: [&str; 9] = [
    "Cargo Van",
    "Convertible",
    "Coupe",
    "Crew Cab Pickup",
    "Hatchback",
    "Minivan",
    "SUV",
    "Sedan",
    "Wagon",
];

/// Fuel values as stored; views relabel `Gasoline` as petrol.
pub const FUELS: [&str; 4] = ["Gasoline", "Diesel", "Hybrid", "Electric"];

pub const COLORS: [&str; 10] = [
    "black", "blue", "green", "grey", "orange", "purple", "red", "silver", "white", "yellow",
];

const NAMES: [&str; 6] = [
    "Amelia Hughes",
    "Oliver Bennett",
    "Isla Morgan",
    "Harry Walsh",
    "Sophie Clarke",
    "Jack Turner",
];

const VRM_LETTERS: &[u8] = b"ABCDEFGHJKLMNOPRSTUVWXY";
const VIN_CHARS: &[u8] = b"ABCDEFGHJKLMNPRSTUVWXYZ0123456789";

/// Sorted option lists for the add form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogue {
    pub manufacturers: Vec<String>,
    pub models: Vec<String>,
    pub types: Vec<String>,
    pub colors: Vec<String>,
}

fn sorted(values: impl IntoIterator<Item = &'static str>) -> Vec<String> {
    let mut values: Vec<String> = values.into_iter().map(String::from).collect();
    values.sort();
    values.dedup();
    values
}

pub fn catalogue() -> Catalogue {
    Catalogue {
        manufacturers: sorted(MANUFACTURERS.iter().map(|(name, _)| *name)),
        models: sorted(MANUFACTURERS.iter().flat_map(|(_, models)| models.iter().copied())),
        types: sorted(TYPES),
        colors: sorted(COLORS),
    }
}

pub struct FixtureGenerator {
    rng: StdRng,
    today: NaiveDate,
}

impl FixtureGenerator {
    /// Deterministic for a given seed; random otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            today: Utc::now().date_naive(),
        }
    }

    /// Anchor registration dates to a fixed day.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Between 75 and 125 vehicles.
    pub fn vehicles(&mut self) -> Vec<Vehicle> {
        let count = self.rng.gen_range(75..=125);
        (0..count).map(|_| self.vehicle()).collect()
    }

    pub fn vehicle(&mut self) -> Vehicle {
        let (manufacturer, models) = *self.pick(&MANUFACTURERS);
        let model = *self.pick(models);
        let vehicle_type = *self.pick(&TYPES);
        let fuel = *self.pick(&FUELS);
        let color = *self.pick(&COLORS);

        Vehicle {
            id: self.id(),
            vrm: self.vrm(),
            manufacturer: manufacturer.to_string(),
            model: model.to_string(),
            vehicle_type: vehicle_type.to_string(),
            fuel: fuel.to_string(),
            color: color.to_string(),
            vin: self.chars(VIN_CHARS, 17),
            mileage: self.rng.gen_range(1_000..=25_000),
            registration_date: self.registration_date(),
            price: format!("{}.00", self.rng.gen_range(2_000..=50_000)),
        }
    }

    pub fn user(&mut self, email: &str) -> User {
        let name = *self.pick(&NAMES);
        let avatar = format!(
            "https://avatars.githubusercontent.com/u/{}",
            self.rng.gen_range(1_000..=99_999_999)
        );
        User {
            id: self.id(),
            name: name.to_string(),
            email: email.to_string(),
            avatar,
        }
    }

    pub fn id(&mut self) -> String {
        let mut bytes = [0u8; 16];
        self.rng.fill(&mut bytes);
        Builder::from_random_bytes(bytes).into_uuid().to_string()
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        // Every list passed here is a non-empty constant.
        items.choose(&mut self.rng).unwrap_or(&items[0])
    }

    fn chars(&mut self, alphabet: &[u8], len: usize) -> String {
        (0..len)
            .map(|_| alphabet[self.rng.gen_range(0..alphabet.len())] as char)
            .collect()
    }

    /// UK style: two letters, two digits, space, three letters.
    fn vrm(&mut self) -> String {
        let area = self.chars(VRM_LETTERS, 2);
        let age = self.rng.gen_range(10..=99);
        let random = self.chars(VRM_LETTERS, 3);
        format!("{area}{age} {random}")
    }

    /// Within the past ten years.
    fn registration_date(&mut self) -> NaiveDate {
        let days_ago = self.rng.gen_range(1..=3_650);
        self.today
            .checked_sub_days(Days::new(days_ago))
            .unwrap_or(self.today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator(seed: u64) -> FixtureGenerator {
        FixtureGenerator::new(Some(seed))
            .with_today(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    #[test]
    fn test_vehicle_count_in_range() {
        for seed in 0..20 {
            let count = generator(seed).vehicles().len();
            assert!((75..=125).contains(&count), "seed {seed}: {count}");
        }
    }

    #[test]
    fn test_same_seed_same_inventory() {
        assert_eq!(generator(7).vehicles(), generator(7).vehicles());
    }

    #[test]
    fn test_vehicle_field_shapes() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let ten_years_ago = NaiveDate::from_ymd_opt(2014, 6, 1).unwrap();

        for vehicle in generator(42).vehicles() {
            let vrm: Vec<char> = vehicle.vrm.chars().collect();
            assert_eq!(vrm.len(), 8, "{}", vehicle.vrm);
            assert!(vrm[..2].iter().all(char::is_ascii_uppercase));
            assert!(vrm[2..4].iter().all(char::is_ascii_digit));
            assert_eq!(vrm[4], ' ');
            assert!(vrm[5..].iter().all(char::is_ascii_uppercase));

            assert_eq!(vehicle.vin.len(), 17);
            assert!(!vehicle.vin.contains(['I', 'O', 'Q']));

            assert!((1_000..=25_000).contains(&vehicle.mileage));
            assert!(vehicle.registration_date < today);
            assert!(vehicle.registration_date >= ten_years_ago);
            assert!(FUELS.contains(&vehicle.fuel.as_str()));

            let (whole, cents) = vehicle.price.split_once('.').unwrap();
            assert_eq!(cents, "00");
            assert!((2_000..=50_000).contains(&whole.parse::<u32>().unwrap()));
        }
    }

    #[test]
    fn test_models_belong_to_manufacturer() {
        for vehicle in generator(3).vehicles() {
            let (_, models) = MANUFACTURERS
                .iter()
                .find(|(name, _)| *name == vehicle.manufacturer)
                .unwrap();
            assert!(models.contains(&vehicle.model.as_str()));
        }
    }

    #[test]
    fn test_catalogue_is_sorted() {
        let catalogue = catalogue();

        assert_eq!(catalogue.manufacturers.len(), MANUFACTURERS.len());
        assert!(catalogue.models.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(catalogue.colors.first().map(String::as_str), Some("black"));
    }
}
