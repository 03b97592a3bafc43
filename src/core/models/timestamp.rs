//! Date and time layouts used on the command line and in rendered tasks

use chrono::{NaiveDate, NaiveDateTime};

use crate::core::error::{DATE_HINT, JaxError, TIMESTAMP_HINT};

/// Input layout for date-time arguments (`2019-10-15 1800`)
const INPUT_TIMESTAMP: &str = "%Y-%m-%d %H%M";

/// Input layout for date-only arguments (`2019-10-15`)
const INPUT_DATE: &str = "%Y-%m-%d";

/// Display layout (`Oct 15 2019, 6:00pm`)
const DISPLAY_TIMESTAMP: &str = "%b %d %Y, %-I:%M%P";

/// Parse a `yyyy-MM-dd HHmm` argument
pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime, JaxError> {
    NaiveDateTime::parse_from_str(input.trim(), INPUT_TIMESTAMP)
        .map_err(|_| JaxError::InvalidDateFormat(TIMESTAMP_HINT))
}

/// Parse a `yyyy-MM-dd` argument
pub fn parse_date(input: &str) -> Result<NaiveDate, JaxError> {
    NaiveDate::parse_from_str(input.trim(), INPUT_DATE)
        .map_err(|_| JaxError::InvalidDateFormat(DATE_HINT))
}

/// Render a timestamp the way task listings show it
#[must_use]
pub fn display(at: &NaiveDateTime) -> String {
    at.format(DISPLAY_TIMESTAMP).to_string()
}
