use serde::Deserialize;
use validator::Validate;
use crate::utils::string_utils::deserialize_optional_string;

/// 평점 등록 요청 (`{"rate": 4}`)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RateArchiveRequest {
    #[validate(range(min = 1, max = 5, message = "평점은 1-5 사이여야 합니다"))]
    pub rate: i32,
}

/// 대여 이력 목록 필터. 숨긴 이력(`show == false`)은 항상 제외됩니다.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub guest_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub host_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_range() {
        assert!(RateArchiveRequest { rate: 1 }.validate().is_ok());
        assert!(RateArchiveRequest { rate: 5 }.validate().is_ok());
        assert!(RateArchiveRequest { rate: 0 }.validate().is_err());
        assert!(RateArchiveRequest { rate: 6 }.validate().is_err());
    }
}
