//! en-GB number, currency and date formatting, plus plain-text tables.

use chrono::NaiveDate;

const COMPACT_UNITS: [&str; 5] = ["", "K", "M", "B", "T"];

/// Thousands separated with commas: `1234567` becomes `1,234,567`.
pub fn grouped(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Whole pounds, e.g. `£12,000`.
pub fn gbp(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}£{}", grouped(amount.abs().round() as u64))
}

/// Short pounds, e.g. `£950`, `£1.2M` or `£34K`.
///
/// One decimal below ten units, none above, trailing `.0` dropped.
pub fn gbp_compact(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let mut value = amount.abs();
    let mut unit = 0;
    while unit + 1 < COMPACT_UNITS.len() && round_compact(value) >= 1000.0 {
        value /= 1000.0;
        unit += 1;
    }

    let shown = round_compact(value);
    let number = if shown.fract() == 0.0 {
        format!("{shown:.0}")
    } else {
        format!("{shown:.1}")
    };
    format!("{sign}£{number}{}", COMPACT_UNITS[unit])
}

fn round_compact(value: f64) -> f64 {
    if value < 10.0 {
        (value * 10.0).round() / 10.0
    } else {
        value.round()
    }
}

/// A price as sent by the API (`"12000.00"`) in whole pounds. Values that
/// are not numbers are shown as they are.
pub fn price(raw: &str) -> String {
    raw.trim()
        .parse::<f64>()
        .map(gbp)
        .unwrap_or_else(|_| raw.to_string())
}

/// `12 March 2020`.
pub fn long_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

/// Display label for a fuel value or fuel chart key.
pub fn fuel_label(fuel: &str) -> String {
    if fuel.eq_ignore_ascii_case("gasoline") || fuel.eq_ignore_ascii_case("petrol") {
        "Petrol".to_string()
    } else {
        title_case(fuel)
    }
}

/// Capitalise each word: `light blue` becomes `Light Blue`.
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A horizontal bar `width` cells long at `max`.
pub fn bar(value: u64, max: u64, width: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let cells = (value as f64 / max as f64 * width as f64).round() as usize;
    "█".repeat(cells.max(usize::from(value > 0)))
}

/// Left-aligned columns separated by two spaces.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<w$}", w = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![line(headers.to_vec())];
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    lines.extend(rows.iter().map(|row| line(row.iter().map(String::as_str).collect())));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouped() {
        assert_eq!(grouped(0), "0");
        assert_eq!(grouped(999), "999");
        assert_eq!(grouped(1000), "1,000");
        assert_eq!(grouped(1234567), "1,234,567");
    }

    #[test]
    fn test_gbp_rounds_to_whole_pounds() {
        assert_eq!(gbp(12000.0), "£12,000");
        assert_eq!(gbp(12345.67), "£12,346");
        assert_eq!(price("24999.00"), "£24,999");
        assert_eq!(price("POA"), "POA");
    }

    #[test]
    fn test_gbp_compact() {
        assert_eq!(gbp_compact(950.0), "£950");
        assert_eq!(gbp_compact(1234.0), "£1.2K");
        assert_eq!(gbp_compact(34_400.0), "£34K");
        assert_eq!(gbp_compact(1_234_567.0), "£1.2M");
        assert_eq!(gbp_compact(2_000_000.0), "£2M");
        assert_eq!(gbp_compact(999_950.0), "£1M");
    }

    #[test]
    fn test_long_date() {
        let date = NaiveDate::from_ymd_opt(2020, 3, 12).unwrap();
        assert_eq!(long_date(date), "12 March 2020");
    }

    #[test]
    fn test_labels() {
        assert_eq!(fuel_label("Gasoline"), "Petrol");
        assert_eq!(fuel_label("petrol"), "Petrol");
        assert_eq!(fuel_label("diesel"), "Diesel");
        assert_eq!(title_case("light BLUE"), "Light Blue");
    }

    #[test]
    fn test_bar() {
        assert_eq!(bar(10, 10, 4), "████");
        assert_eq!(bar(5, 10, 4), "██");
        assert_eq!(bar(1, 100, 4), "█");
        assert_eq!(bar(0, 100, 4), "");
        assert_eq!(bar(3, 0, 4), "");
    }

    #[test]
    fn test_table_pads_columns() {
        let rows = vec![
            vec!["AB12 CDE".to_string(), "Ford".to_string()],
            vec!["X".to_string(), "Land Rover".to_string()],
        ];

        let text = table(&["Registration", "Manufacturer"], &rows);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Registration  Manufacturer");
        assert_eq!(lines[1], "------------  ------------");
        assert_eq!(lines[2], "AB12 CDE      Ford");
        assert_eq!(lines[3], "X             Land Rover");
    }
}
