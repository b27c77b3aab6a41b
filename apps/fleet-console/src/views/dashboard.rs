//! Stock totals and the three breakdown charts.

use fleet_core::router::Dashboard;
use fleet_shared::Chart;

use super::format::{bar, fuel_label, gbp_compact, grouped};

const BAR_WIDTH: usize = 30;
const TOP_OEMS: usize = 5;

pub fn render(dashboard: &Dashboard) -> String {
    let summary = &dashboard.summary;
    let stats = [
        ("Vehicles in stock", grouped(summary.count)),
        ("Unique OEMs", grouped(summary.oems)),
        ("Stock value", gbp_compact(summary.value)),
    ]
    .iter()
    .map(|(label, value)| format!("{label:<18} {value}"))
    .collect::<Vec<_>>()
    .join("\n");

    let mut oems = dashboard.oem_chart.clone();
    oems.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.key.cmp(&b.key)));
    oems.truncate(TOP_OEMS);

    let fuels: Vec<Chart> = dashboard
        .fuel_chart
        .iter()
        .map(|c| Chart::new(fuel_label(&c.key), c.value))
        .collect();

    [
        format!("Dashboard\n\n{stats}"),
        chart("Top manufacturers", &oems),
        chart("Fuel types", &fuels),
        chart("Registration years", &dashboard.year_chart),
    ]
    .join("\n\n")
}

fn chart(title: &str, entries: &[Chart]) -> String {
    if entries.is_empty() {
        return format!("{title}\n  (no data)");
    }

    let max = entries.iter().map(|c| c.value).max().unwrap_or(0);
    let label_width = entries.iter().map(|c| c.key.chars().count()).max().unwrap_or(0);
    let rows = entries
        .iter()
        .map(|c| {
            format!(
                "  {:<w$}  {:>5}  {}",
                c.key,
                grouped(c.value),
                bar(c.value, max, BAR_WIDTH),
                w = label_width
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("{title}\n{rows}")
}

#[cfg(test)]
mod tests {
    use fleet_shared::Summary;

    use super::*;

    fn dashboard() -> Dashboard {
        Dashboard {
            summary: Summary {
                count: 1234,
                oems: 10,
                value: 1_234_567.0,
            },
            fuel_chart: vec![Chart::new("petrol", 40), Chart::new("electric", 12)],
            oem_chart: (1..=7)
                .map(|i| Chart::new(format!("Make{i}"), i * 3))
                .collect(),
            year_chart: vec![Chart::new("2019", 4), Chart::new("2020", 9)],
        }
    }

    #[test]
    fn test_stats() {
        let text = render(&dashboard());

        assert!(text.contains("Vehicles in stock  1,234"));
        assert!(text.contains("Unique OEMs        10"));
        assert!(text.contains("Stock value        £1.2M"));
    }

    #[test]
    fn test_only_top_five_manufacturers() {
        let text = render(&dashboard());

        assert!(text.contains("Make7"));
        assert!(text.contains("Make3"));
        assert!(!text.contains("Make2"));
        assert!(!text.contains("Make1"));
    }

    #[test]
    fn test_fuel_keys_are_labelled() {
        let text = render(&dashboard());

        assert!(text.contains("Petrol"));
        assert!(text.contains("Electric"));
        assert!(!text.contains("petrol"));
    }

    #[test]
    fn test_empty_chart() {
        let mut dashboard = dashboard();
        dashboard.year_chart.clear();

        assert!(render(&dashboard).contains("Registration years\n  (no data)"));
    }
}
