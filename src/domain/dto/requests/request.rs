//! # 대여 요청 DTO
//!
//! ```json
//! {
//!   "guestId": "firebase-uid-456",
//!   "carId": "6650f0a1b2c3d4e5f6a7b8c9",
//!   "startDate": "2026-11-02",
//!   "endDate": "2026-11-04"
//! }
//! ```
//!
//! 기간이 차량의 대여 가능 기간 안에 있는지는 차량 정보가 필요하므로 서비스에서 확인합니다.

use serde::Deserialize;
use validator::{Validate, ValidationError};
use crate::utils::date_utils::validate_date_range;
use crate::utils::string_utils::deserialize_optional_string;

/// 새 대여 요청
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_request_dates"))]
pub struct CreateRentalRequest {
    #[validate(length(min = 1, message = "게스트 ID가 필요합니다"))]
    pub guest_id: String,

    #[validate(length(equal = 24, message = "유효하지 않은 차량 ID입니다"))]
    pub car_id: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub start_date: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub end_date: Option<String>,
}

/// 대여 요청 목록 필터
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub guest_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub host_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub car_id: Option<String>,
}

/// 요청을 처리하는 사용자
///
/// 값이 주어지면 서비스가 요청의 호스트/게스트와 일치하는지 확인합니다 (불일치 시 403).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub host_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub guest_id: Option<String>,
}

fn validate_request_dates(req: &CreateRentalRequest) -> Result<(), ValidationError> {
    validate_date_range(req.start_date.as_deref(), req.end_date.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_rental_request() {
        let request: CreateRentalRequest = serde_json::from_value(serde_json::json!({
            "guestId": "guest-1",
            "carId": "6650f0a1b2c3d4e5f6a7b8c9",
            "startDate": "2026-11-02",
            "endDate": "2026-11-04"
        }))
        .unwrap();

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_rejects_reversed_dates() {
        let request: CreateRentalRequest = serde_json::from_value(serde_json::json!({
            "guestId": "guest-1",
            "carId": "6650f0a1b2c3d4e5f6a7b8c9",
            "startDate": "2026-11-04",
            "endDate": "2026-11-02"
        }))
        .unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_car_id_and_empty_guest() {
        let request: CreateRentalRequest = serde_json::from_value(serde_json::json!({
            "guestId": "",
            "carId": "abc"
        }))
        .unwrap();

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("guest_id"));
        assert!(fields.contains_key("car_id"));
    }

    #[test]
    fn test_actor_query_blank_values_are_none() {
        let actor: ActorQuery = serde_json::from_value(serde_json::json!({ "hostId": " " })).unwrap();

        assert!(actor.host_id.is_none());
        assert!(actor.guest_id.is_none());
    }
}
