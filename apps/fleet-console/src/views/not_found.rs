use fleet_core::router::Location;

pub fn render(location: &Location) -> String {
    format!(
        "404 - Page not found\nNothing lives at {}.\nGo back home: open /",
        location.path()
    )
}
