use chrono::NaiveDate;

/// "2026-03-15" -> "Mar 15, 2026". Dates come from the backend already
/// ISO-formatted; anything unparseable is shown verbatim.
pub fn format_date(value: &NaiveDate) -> String {
    value.format("%b %-d, %Y").to_string()
}

pub fn format_optional_date(value: &Option<NaiveDate>) -> String {
    match value {
        Some(date) => format_date(date),
        None => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_iso_date_for_display() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        assert_eq!(format_date(&date), "Mar 15, 2026");
    }

    #[test]
    fn missing_date_renders_a_dash() {
        assert_eq!(format_optional_date(&None), "—");
        let date = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        assert_eq!(format_optional_date(&Some(date)), "Dec 1, 2025");
    }
}
