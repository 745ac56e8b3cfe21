//! # 차량 등록 요청 DTO
//!
//! ## 검증 규칙
//!
//! | 필드 | 규칙 |
//! |------|------|
//! | `name` | 1-50자 |
//! | `carNumber` | 1-20자, 서비스에서 중복 확인 |
//! | `carType`, `carBrand` | 1-30자 |
//! | `rentalFee` | 1 - 10,000,000원 |
//! | `tags` | 최대 10개, 각 20자 이하 |
//! | `availableFrom`, `availableUntil` | `YYYY-MM-DD`, 시작일 ≤ 종료일 |
//!
//! ```json
//! {
//!   "name": "주말 캠핑용 SUV",
//!   "carNumber": "12가3456",
//!   "carType": "SUV",
//!   "carBrand": "현대",
//!   "rentalFee": 50000,
//!   "tags": ["캠핑", "가족"],
//!   "hostId": "firebase-uid-123",
//!   "availableFrom": "2026-11-01",
//!   "availableUntil": "2026-11-30"
//! }
//! ```

use serde::Deserialize;
use validator::{Validate, ValidationError};
use crate::utils::date_utils::validate_date_range;
use crate::utils::string_utils::deserialize_optional_string;

pub const MAX_RENTAL_FEE: i64 = 10_000_000;
pub const MAX_TAGS: usize = 10;
pub const MAX_TAG_LENGTH: usize = 20;

/// 새 차량 등록 요청
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_registration_dates"))]
pub struct CreateRegistrationRequest {
    #[validate(length(min = 1, max = 50, message = "등록 이름은 1-50자 사이여야 합니다"))]
    pub name: String,

    #[validate(length(min = 1, max = 20, message = "차량번호는 1-20자 사이여야 합니다"))]
    pub car_number: String,

    #[validate(length(min = 1, max = 30, message = "차종은 1-30자 사이여야 합니다"))]
    pub car_type: String,

    #[validate(length(min = 1, max = 30, message = "제조사는 1-30자 사이여야 합니다"))]
    pub car_brand: String,

    #[validate(range(min = 1, max = 10_000_000, message = "대여료는 1원 이상 10,000,000원 이하여야 합니다"))]
    pub rental_fee: i64,

    #[serde(default)]
    #[validate(length(max = 10, message = "태그는 최대 10개까지 등록할 수 있습니다"))]
    #[validate(custom(function = "validate_tags"))]
    pub tags: Vec<String>,

    /// 등록하는 호스트의 uid
    #[validate(length(min = 1, message = "호스트 ID가 필요합니다"))]
    pub host_id: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub available_from: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub available_until: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 100, message = "위치는 100자 이하여야 합니다"))]
    pub location: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 1000, message = "설명은 1000자 이하여야 합니다"))]
    pub description: Option<String>,
}

/// 차량 등록 부분 수정 요청
///
/// 값이 있는 필드만 변경합니다. 차량번호와 호스트는 바꿀 수 없습니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_update_dates"))]
pub struct UpdateRegistrationRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(min = 1, max = 50, message = "등록 이름은 1-50자 사이여야 합니다"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(min = 1, max = 30, message = "차종은 1-30자 사이여야 합니다"))]
    pub car_type: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(min = 1, max = 30, message = "제조사는 1-30자 사이여야 합니다"))]
    pub car_brand: Option<String>,

    #[validate(range(min = 1, max = 10_000_000, message = "대여료는 1원 이상 10,000,000원 이하여야 합니다"))]
    pub rental_fee: Option<i64>,

    #[validate(length(max = 10, message = "태그는 최대 10개까지 등록할 수 있습니다"))]
    #[validate(custom(function = "validate_tags"))]
    pub tags: Option<Vec<String>>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub available_from: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub available_until: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 100, message = "위치는 100자 이하여야 합니다"))]
    pub location: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 1000, message = "설명은 1000자 이하여야 합니다"))]
    pub description: Option<String>,
}

impl UpdateRegistrationRequest {
    /// 변경할 필드가 하나도 없는지
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.car_type.is_none()
            && self.car_brand.is_none()
            && self.rental_fee.is_none()
            && self.tags.is_none()
            && self.available_from.is_none()
            && self.available_until.is_none()
            && self.location.is_none()
            && self.description.is_none()
    }
}

/// 목록 조회 필터
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub host_id: Option<String>,
    /// `대기중`/`사용중`/`완료` 또는 영문 별칭
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub tag: Option<String>,
    pub limit: Option<i64>,
}

/// 태그마다 길이를 확인합니다. 개수 제한은 `length` 규칙이 담당합니다.
fn validate_tags(tags: &[String]) -> Result<(), ValidationError> {
    if tags.iter().any(|tag| tag.trim().chars().count() > MAX_TAG_LENGTH) {
        return Err(ValidationError::new("tag_too_long")
            .with_message(format!("태그는 {}자 이하여야 합니다", MAX_TAG_LENGTH).into()));
    }
    Ok(())
}

fn validate_registration_dates(req: &CreateRegistrationRequest) -> Result<(), ValidationError> {
    validate_date_range(req.available_from.as_deref(), req.available_until.as_deref())
}

fn validate_update_dates(req: &UpdateRegistrationRequest) -> Result<(), ValidationError> {
    validate_date_range(req.available_from.as_deref(), req.available_until.as_deref())
}
