use fleet_core::router::Location;
use fleet_shared::User;

const NAV: [(&str, &str); 3] = [
    ("Dashboard", "/"),
    ("Inventory", "/vehicles"),
    ("Add vehicle", "/add"),
];

/// Title bar with the signed-in user and the navigation links. The
/// section containing `location` is marked with `*`.
pub fn header(user: &User, location: &Location) -> String {
    let nav: Vec<String> = NAV
        .iter()
        .map(|(label, path)| {
            let active = if *path == "/" {
                location.path() == "/"
            } else {
                location.path().starts_with(path)
            };
            let marker = if active { "*" } else { " " };
            format!("{marker}{label} ({path})")
        })
        .collect();

    format!(
        "Fleet Inventory | {} <{}>\n{}\n{}",
        user.name,
        user.email,
        nav.join("   "),
        "=".repeat(72)
    )
}
