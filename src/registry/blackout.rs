//! Blackout date parsing.

use chrono::NaiveDate;

use super::error::PersonError;

/// Parses a blackout date written as `MM-DD` (resolved against `year`) or as
/// a full `YYYY-MM-DD`.
pub fn parse_blackout(year: i32, raw: &str) -> Result<NaiveDate, PersonError> {
    let value = raw.trim();
    let invalid = || PersonError::InvalidBlackout(raw.to_string());

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }

    let (month, day) = value.split_once('-').ok_or_else(invalid)?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    let day: u32 = day.parse().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Parses every entry, failing on the first malformed one.
pub fn parse_blackouts<'a>(
    year: i32,
    raw: impl IntoIterator<Item = &'a str>,
) -> Result<Vec<NaiveDate>, PersonError> {
    raw.into_iter().map(|s| parse_blackout(year, s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_day_uses_year() {
        assert_eq!(
            parse_blackout(2025, "11-07").unwrap(),
            NaiveDate::from_ymd_opt(2025, 11, 7).unwrap()
        );
    }

    #[test]
    fn full_date_keeps_its_year() {
        assert_eq!(
            parse_blackout(2025, "2024-12-31").unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
        );
    }

    #[test]
    fn surrounding_whitespace_ignored() {
        assert!(parse_blackout(2025, " 10-10 ").is_ok());
    }

    #[test]
    fn malformed_rejected() {
        assert_eq!(
            parse_blackout(2025, "13-01"),
            Err(PersonError::InvalidBlackout("13-01".to_string()))
        );
        assert!(parse_blackout(2025, "tomorrow").is_err());
        assert!(parse_blackout(2025, "02-30").is_err());
    }

    #[test]
    fn parse_many_fails_fast() {
        assert_eq!(parse_blackouts(2025, ["10-10", "10-11"]).unwrap().len(), 2);
        assert!(parse_blackouts(2025, ["10-10", "x"]).is_err());
    }
}
