use chrono::{NaiveDate, Utc};

pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn now_timestamp() -> i64 {
    Utc::now().timestamp()
}

/// Parses the value of an `<input type="date">`; blank means "not set".
pub fn parse_date_input(raw: &str) -> Result<Option<NaiveDate>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, DATE_INPUT_FORMAT)
        .map(Some)
        .map_err(|_| format!("Invalid date: {}", trimmed))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

pub fn format_date_input(date: NaiveDate) -> String {
    date.format(DATE_INPUT_FORMAT).to_string()
}

pub fn format_range(start: NaiveDate, end: NaiveDate) -> String {
    format!("{} – {}", format_date(start), format_date(end))
}

/// Nights in the half-open stay `[check_in, check_out)`; never negative.
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days().max(0)
}
