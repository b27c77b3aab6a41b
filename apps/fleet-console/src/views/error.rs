use fleet_core::router::ErrorPage;

pub fn render(error: &ErrorPage) -> String {
    let mut lines = vec![
        "Something went wrong!".to_string(),
        error.message.clone(),
    ];
    if error.home_link {
        lines.push("Go back home: open /".to_string());
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use fleet_core::router::RouteId;

    use super::*;

    #[test]
    fn test_home_link_only_when_offered() {
        let mut error = ErrorPage {
            route: RouteId::VehicleDetails,
            message: "Not found".to_string(),
            home_link: true,
        };
        assert_eq!(
            render(&error),
            "Something went wrong!\nNot found\nGo back home: open /"
        );

        error.home_link = false;
        assert_eq!(render(&error), "Something went wrong!\nNot found");
    }
}
