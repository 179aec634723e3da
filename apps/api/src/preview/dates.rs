use chrono::NaiveDate;

const PRESENT: &str = "Present";
const END_DATE_PLACEHOLDER: &str = "End Date";
const RANGE_SEPARATOR: &str = " – ";

/// Formats a `YYYY-MM` value as "Mon YYYY" (e.g. "Jan 2020").
///
/// Values that do not parse are returned as entered so a half-typed date
/// still shows up in the preview.
pub fn format_year_month(value: &str) -> String {
    let value = value.trim();
    match NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d") {
        Ok(date) => date.format("%b %Y").to_string(),
        Err(_) => value.to_string(),
    }
}

/// Renders the date range of an entry, or `None` when no start date is set.
///
/// `current` wins over any stale `end_date` still stored on the entry.
pub fn format_range(start_date: &str, end_date: &str, current: bool) -> Option<String> {
    if start_date.trim().is_empty() {
        return None;
    }
    let end = if current {
        PRESENT.to_string()
    } else if end_date.trim().is_empty() {
        END_DATE_PLACEHOLDER.to_string()
    } else {
        format_year_month(end_date)
    };
    Some(format!("{}{RANGE_SEPARATOR}{end}", format_year_month(start_date)))
}
