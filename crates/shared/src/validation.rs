//! Common validation utilities.

use chrono::NaiveDate;
use validator::ValidationError;

/// Validates a Croatian OIB (personal/company identification number).
///
/// An OIB is exactly 11 digits; the last digit is an ISO 7064 MOD 11,10
/// check digit over the first ten.
pub fn validate_oib(oib: &str) -> Result<(), ValidationError> {
    if oib.len() != 11 || !oib.bytes().all(|b| b.is_ascii_digit()) {
        let mut err = ValidationError::new("oib_format");
        err.message = Some("OIB must be exactly 11 digits".into());
        return Err(err);
    }

    let mut rem: u32 = 10;
    for b in oib.bytes().take(10) {
        rem = (rem + (b - b'0') as u32) % 10;
        if rem == 0 {
            rem = 10;
        }
        rem = (rem * 2) % 11;
    }
    let check = (11 - rem) % 10;

    if check != (oib.as_bytes()[10] - b'0') as u32 {
        let mut err = ValidationError::new("oib_checksum");
        err.message = Some("OIB check digit is invalid".into());
        return Err(err);
    }

    Ok(())
}

/// Validates that a planned interval does not end before it starts.
pub fn validate_plan_interval(pocetak: NaiveDate, kraj: NaiveDate) -> Result<(), ValidationError> {
    if kraj >= pocetak {
        Ok(())
    } else {
        let mut err = ValidationError::new("plan_interval");
        err.message = Some("Planned end must not precede planned start".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // OIB tests
    #[test]
    fn test_validate_oib_valid() {
        // Known-valid OIBs (check digit computed per ISO 7064 MOD 11,10).
        assert!(validate_oib("12345678903").is_ok());
        assert!(validate_oib("00000000001").is_ok());
    }

    #[test]
    fn test_validate_oib_wrong_length() {
        assert!(validate_oib("1234567890").is_err());
        assert!(validate_oib("123456789012").is_err());
        assert!(validate_oib("").is_err());
    }

    #[test]
    fn test_validate_oib_non_digit() {
        assert!(validate_oib("1234567890a").is_err());
        assert!(validate_oib("12345 78903").is_err());
    }

    #[test]
    fn test_validate_oib_bad_check_digit() {
        assert!(validate_oib("12345678904").is_err());
        let err = validate_oib("12345678904").unwrap_err();
        assert_eq!(err.code, "oib_checksum");
    }

    // Plan interval tests
    #[test]
    fn test_validate_plan_interval() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert!(validate_plan_interval(start, end).is_ok());
        assert!(validate_plan_interval(start, start).is_ok());
        assert!(validate_plan_interval(end, start).is_err());
    }

    #[test]
    fn test_validate_plan_interval_error_message() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let err = validate_plan_interval(start, end).unwrap_err();
        assert_eq!(
            err.message.unwrap().to_string(),
            "Planned end must not precede planned start"
        );
    }
}
