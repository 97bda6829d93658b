//! Issue dates.
//!
//! Dates come from the form as `yyyy-mm-dd` and are built from their explicit
//! year, month and day components. There is no time of day and no time zone
//! involved, so the printed day can never shift.

use chrono::NaiveDate;

use super::error::ReciboError;

/// Parse a `yyyy-mm-dd` calendar date from its components.
pub fn parse_iso_date(input: &str) -> Result<NaiveDate, ReciboError> {
    let trimmed = input.trim();
    let invalid = || ReciboError::Date(format!("expected yyyy-mm-dd, got '{trimmed}'"));

    let mut parts = trimmed.split('-');
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };

    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    let day: u32 = day.parse().map_err(|_| invalid())?;
    if year <= 0 {
        return Err(invalid());
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        ReciboError::Date(format!("{trimmed} is not a calendar date"))
    })
}

/// Format a date the pt-BR way: `dd/mm/yyyy`.
pub fn format_date_br(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
