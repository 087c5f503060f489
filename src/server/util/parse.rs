use crate::server::error::AppError;

/// Parses an "HH:MM" clock time and returns it zero-padded.
///
/// Zero-padding matters: schedule overlap queries compare times
/// lexicographically, which only matches chronological order when every
/// value is exactly five characters wide.
///
/// # Arguments
/// - `value` - The clock time to validate, e.g. "9:05" or "14:30"
///
/// # Returns
/// - `Ok(String)` - Normalized "HH:MM" value
/// - `Err(AppError::BadRequest)` - Not a valid 24-hour clock time
pub fn parse_time_hhmm(value: &str) -> Result<String, AppError> {
    let invalid = || AppError::BadRequest(format!("Invalid time '{}', expected HH:MM", value));

    let (hours, minutes) = value.split_once(':').ok_or_else(invalid)?;

    let hours: u8 = hours.parse().map_err(|_| invalid())?;
    let minutes: u8 = minutes.parse().map_err(|_| invalid())?;

    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    Ok(format!("{:02}:{:02}", hours, minutes))
}

#[cfg(test)]
mod test {
    use super::parse_time_hhmm;

    #[test]
    fn normalizes_unpadded_times() {
        assert_eq!(parse_time_hhmm("9:5").unwrap(), "09:05");
        assert_eq!(parse_time_hhmm("09:40").unwrap(), "09:40");
    }

    #[test]
    fn rejects_out_of_range_times() {
        assert!(parse_time_hhmm("24:00").is_err());
        assert!(parse_time_hhmm("12:60").is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_time_hhmm("").is_err());
        assert!(parse_time_hhmm("0940").is_err());
        assert!(parse_time_hhmm("nine:forty").is_err());
    }
}
