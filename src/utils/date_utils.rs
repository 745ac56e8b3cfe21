//! # 날짜 유틸리티
//!
//! 폼에서 넘어오는 날짜는 모두 `YYYY-MM-DD` 문자열입니다.
//! 검증 함수는 DTO의 `#[validate(custom/schema)]`에서 바로 쓸 수 있도록
//! `validator::ValidationError`를 반환합니다.

use chrono::{NaiveDate, Utc};
use mongodb::bson::DateTime;
use validator::ValidationError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 허용하는 가장 이른 생년월일
const MIN_BIRTH_DATE: (i32, u32, u32) = (1900, 1, 1);

/// `YYYY-MM-DD` 문자열을 날짜로 파싱합니다.
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        ValidationError::new("invalid_date")
            .with_message(format!("날짜 형식이 올바르지 않습니다: {} (YYYY-MM-DD)", value).into())
    })
}

/// 시작일과 종료일을 검증합니다.
///
/// 각각 값이 있으면 형식을 확인하고, 둘 다 있으면 시작일이 종료일보다 늦을 수 없습니다.
pub fn validate_date_range(from: Option<&str>, until: Option<&str>) -> Result<(), ValidationError> {
    let from = from.map(parse_date).transpose()?;
    let until = until.map(parse_date).transpose()?;

    if let (Some(from), Some(until)) = (from, until) {
        if from > until {
            return Err(ValidationError::new("invalid_date_range")
                .with_message("시작일은 종료일보다 늦을 수 없습니다".into()));
        }
    }

    Ok(())
}

/// 요청한 기간이 차량의 대여 가능 기간 안에 있는지 확인합니다.
///
/// 대여 가능 기간의 한쪽 끝이 비어 있으면 그쪽은 제한이 없습니다.
pub fn ensure_within_window(
    start: Option<&str>,
    end: Option<&str>,
    available_from: Option<&str>,
    available_until: Option<&str>,
) -> Result<(), ValidationError> {
    let available_from = available_from.map(parse_date).transpose()?;
    let available_until = available_until.map(parse_date).transpose()?;

    for date in [start, end].into_iter().flatten() {
        let date = parse_date(date)?;
        let too_early = available_from.is_some_and(|from| date < from);
        let too_late = available_until.is_some_and(|until| date > until);

        if too_early || too_late {
            return Err(ValidationError::new("outside_available_window")
                .with_message("요청 기간이 차량의 대여 가능 기간을 벗어났습니다".into()));
        }
    }

    Ok(())
}

/// 생년월일 검증: 형식, 미래 날짜 불가, 1900-01-01 이후
pub fn validate_birth_date(birth: &str) -> Result<(), ValidationError> {
    let date = parse_date(birth)?;
    let (y, m, d) = MIN_BIRTH_DATE;

    if date > Utc::now().date_naive() {
        return Err(ValidationError::new("birth_in_future")
            .with_message("생년월일은 미래일 수 없습니다".into()));
    }

    if NaiveDate::from_ymd_opt(y, m, d).is_some_and(|min| date < min) {
        return Err(ValidationError::new("birth_too_old")
            .with_message("생년월일이 올바르지 않습니다".into()));
    }

    Ok(())
}

/// 응답 JSON에 쓰는 RFC 3339 시각 문자열
pub fn format_datetime(value: &DateTime) -> String {
    value.try_to_rfc3339_string().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2026-11-01").unwrap(), NaiveDate::from_ymd_opt(2026, 11, 1).unwrap());
        assert_eq!(parse_date(" 2026-02-28 ").unwrap(), NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());
        assert!(parse_date("2026/11/01").is_err());
        assert!(parse_date("2026-02-30").is_err());
    }

    #[test]
    fn test_validate_date_range() {
        assert!(validate_date_range(None, None).is_ok());
        assert!(validate_date_range(Some("2026-11-01"), None).is_ok());
        assert!(validate_date_range(Some("2026-11-01"), Some("2026-11-01")).is_ok());
        assert!(validate_date_range(Some("2026-11-01"), Some("2026-11-05")).is_ok());

        let err = validate_date_range(Some("2026-11-05"), Some("2026-11-01")).unwrap_err();
        assert_eq!(err.code, "invalid_date_range");

        let err = validate_date_range(None, Some("내일")).unwrap_err();
        assert_eq!(err.code, "invalid_date");
    }

    #[test]
    fn test_ensure_within_window() {
        let from = Some("2026-11-01");
        let until = Some("2026-11-30");

        assert!(ensure_within_window(Some("2026-11-02"), Some("2026-11-05"), from, until).is_ok());
        assert!(ensure_within_window(Some("2026-11-01"), Some("2026-11-30"), from, until).is_ok());
        assert!(ensure_within_window(None, None, from, until).is_ok());
        assert!(ensure_within_window(Some("2026-10-31"), None, from, until).is_err());
        assert!(ensure_within_window(None, Some("2026-12-01"), from, until).is_err());

        // 열린 구간
        assert!(ensure_within_window(Some("2030-01-01"), None, from, None).is_ok());
        assert!(ensure_within_window(Some("2000-01-01"), None, None, None).is_ok());
    }

    #[test]
    fn test_validate_birth_date() {
        assert!(validate_birth_date("1990-05-17").is_ok());
        assert!(validate_birth_date("1900-01-01").is_ok());

        assert_eq!(validate_birth_date("1899-12-31").unwrap_err().code, "birth_too_old");
        assert_eq!(validate_birth_date("2999-01-01").unwrap_err().code, "birth_in_future");
        assert_eq!(validate_birth_date("1990.05.17").unwrap_err().code, "invalid_date");
    }

    #[test]
    fn test_format_datetime() {
        let value = DateTime::from_millis(0);

        assert!(format_datetime(&value).starts_with("1970-01-01T00:00:00"));
    }
}
