/// Shared formatting utilities for the UI layer.
///
/// All functions accept `YYYY-MM-DD` API date strings and produce
/// human-readable output without pulling a date crate into the render path.

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parse month number (1-12) from a two-digit string.
fn parse_month(s: &str) -> Option<usize> {
    s.parse::<usize>().ok().filter(|m| (1..=12).contains(m))
}

/// Format an API date string as "Jan 20, 2026" (date-only, human-readable).
///
/// Falls back to the raw input if parsing fails.
pub fn format_date_human(date_str: &str) -> String {
    if date_str.len() < 10 {
        return date_str.to_string();
    }
    let year = &date_str[..4];
    let month = &date_str[5..7];
    let day = &date_str[8..10];

    if let Some(m) = parse_month(month) {
        let day_num: u32 = day.parse().unwrap_or(0);
        format!("{} {}, {}", MONTH_NAMES[m - 1], day_num, year)
    } else {
        date_str[..10].to_string()
    }
}

/// Convert a snake_case column name to a table header
/// (e.g. "silver_rrbucket" → "Silver Rrbucket", "HEART_RATE" → "HEART RATE").
pub fn column_label(s: &str) -> String {
    s.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().to_string() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn human_dates_render_month_names() {
        assert_eq!(format_date_human("2026-08-07"), "Aug 7, 2026");
        assert_eq!(format_date_human("2024-12-31"), "Dec 31, 2024");
        assert_eq!(format_date_human("junk"), "junk");
        assert_eq!(format_date_human("2026-99-07"), "2026-99-07");
    }

    #[test]
    fn column_labels_title_each_word() {
        assert_eq!(column_label("bronze"), "Bronze");
        assert_eq!(column_label("silver_rrbucket"), "Silver Rrbucket");
        assert_eq!(column_label("HEART_RATE"), "HEART RATE");
        assert_eq!(column_label("user_id"), "User Id");
    }
}
