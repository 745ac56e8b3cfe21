//! # 문자열 유틸리티
//!
//! 요청 DTO와 서비스에서 공통으로 쓰는 문자열 정리 함수들입니다.

use serde::Deserialize;
use crate::core::errors::AppError;

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 ValidationError를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// ```rust,ignore
/// assert_eq!(validate_required_string("  12가3456  ", "차량번호").unwrap(), "12가3456");
/// assert!(validate_required_string("   ", "차량번호").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{}은(는) 필수입니다", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// 빈 문자열이나 공백만 있는 문자열을 `None`으로 바꿉니다.
/// 필드가 아예 없을 수 있다면 `#[serde(default)]`와 함께 사용합니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct Query {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     tag: Option<String>,
/// }
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 태그 목록 정규화
///
/// 앞뒤 공백을 제거하고 빈 태그와 중복 태그를 버립니다. 처음 나온 순서를 유지합니다.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(tags.len());

    for tag in tags {
        let trimmed = tag.trim();
        if !trimmed.is_empty() && !normalized.iter().any(|t| t == trimmed) {
            normalized.push(trimmed.to_string());
        }
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        assert_eq!(validate_required_string("SUV", "차종").unwrap(), "SUV");
        assert_eq!(validate_required_string("  현대  ", "제조사").unwrap(), "현대");

        assert!(validate_required_string("", "차종").is_err());
        assert!(validate_required_string("\t\n", "차종").is_err());

        match validate_required_string(" ", "차량번호") {
            Err(AppError::ValidationError(msg)) => assert_eq!(msg, "차량번호은(는) 필수입니다"),
            _ => panic!("Expected ValidationError"),
        }
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("  서울역  ".to_string())), Some("서울역".to_string()));
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            location: Option<String>,
        }

        let result: TestStruct = serde_json::from_str(r#"{"location": "  부산  "}"#).unwrap();
        assert_eq!(result.location, Some("부산".to_string()));

        let result: TestStruct = serde_json::from_str(r#"{"location": "  "}"#).unwrap();
        assert_eq!(result.location, None);

        let result: TestStruct = serde_json::from_str(r#"{"location": null}"#).unwrap();
        assert_eq!(result.location, None);

        let result: TestStruct = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(result.location, None);
    }

    #[test]
    fn test_normalize_tags() {
        let tags = vec![
            " 캠핑 ".to_string(),
            "바다".to_string(),
            "캠핑".to_string(),
            "   ".to_string(),
            "가족".to_string(),
        ];

        assert_eq!(normalize_tags(tags), vec!["캠핑", "바다", "가족"]);
        assert!(normalize_tags(Vec::new()).is_empty());
    }
}
