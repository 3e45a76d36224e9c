use chrono::NaiveDate;

/// Calendar-day format used on the wire
pub const WIRE_FORMAT: &str = "%Y-%m-%d";

/// Format used when showing dates to the user
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";

pub fn to_wire_date(date: &NaiveDate) -> String {
    date.format(WIRE_FORMAT).to_string()
}

/// Parse a wire date, ignoring any time component (`2020-01-02T00:00:00Z`).
pub fn parse_wire_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.trim().split('T').next()?;
    NaiveDate::parse_from_str(date_part, WIRE_FORMAT).ok()
}

/// Format a wire date as DD/MM/YYYY, returning the input unchanged if it does not parse
pub fn display_date(value: &str) -> String {
    match parse_wire_date(value) {
        Some(date) => date.format(DISPLAY_FORMAT).to_string(),
        None => value.to_string(),
    }
}

/// Turn the value of a date input into a wire date.
///
/// Empty input means "no date" and yields `None`, as does anything that is
/// not a real calendar day.
pub fn normalize_input_date(value: &str) -> Option<String> {
    parse_wire_date(value).map(|date| to_wire_date(&date))
}
