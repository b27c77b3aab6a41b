use fleet_core::router::{Location, LoginForm};

/// The sign-in form. It posts back to the current location so a `to`
/// parameter survives the submission.
pub fn render(form: &LoginForm, location: &Location) -> String {
    let mut lines = vec![
        "Sign in".to_string(),
        "Enter your email and password to access the inventory.".to_string(),
        String::new(),
        format!("  submit {location} email=<email> password=<password>"),
    ];
    if let Some(error) = &form.error {
        lines.push(String::new());
        lines.push(format!("! {error}"));
    }
    lines.join("\n")
}
