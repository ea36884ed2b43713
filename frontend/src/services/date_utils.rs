/// Get current date in YYYY-MM-DD format, as the date input expects it
pub fn get_current_date() -> String {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year();
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    format_iso_date(year, month, day)
}

pub fn format_iso_date(year: u32, month: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Parse YYYY-MM-DD date string into components
pub fn parse_date_string(date_str: &str) -> Option<(u32, u32, u32)> {
    let parts: Vec<&str> = date_str.split('-').collect();
    if parts.len() != 3 {
        return None;
    }

    let year = parts[0].parse::<u32>().ok()?;
    let month = parts[1].parse::<u32>().ok()?;
    let day = parts[2].parse::<u32>().ok()?;

    if (1..=12).contains(&month) && (1..=31).contains(&day) {
        Some((year, month, day))
    } else {
        None
    }
}

/// Format a YYYY-MM-DD birth date the way the summary screen shows it
/// (e.g. "2021년 5월 1일"). Anything unparseable is shown as typed.
pub fn format_date_for_display(date_str: &str) -> String {
    match parse_date_string(date_str) {
        Some((year, month, day)) => format!("{}년 {}월 {}일", year, month, day),
        None => date_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_iso_date_pads() {
        assert_eq!(format_iso_date(2021, 5, 1), "2021-05-01");
        assert_eq!(format_iso_date(2024, 12, 31), "2024-12-31");
    }

    #[test]
    fn test_parse_date_string() {
        assert_eq!(parse_date_string("2021-05-01"), Some((2021, 5, 1)));
        assert_eq!(parse_date_string("2021-13-01"), None);
        assert_eq!(parse_date_string("2021/05/01"), None);
        assert_eq!(parse_date_string(""), None);
    }

    #[test]
    fn test_format_date_for_display() {
        assert_eq!(format_date_for_display("2021-05-01"), "2021년 5월 1일");
        assert_eq!(format_date_for_display("not a date"), "not a date");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_current_date_is_iso() {
        let today = get_current_date();
        assert!(parse_date_string(&today).is_some());
        assert_eq!(today.len(), 10);
    }
}
