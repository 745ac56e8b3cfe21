//! # 프로필 저장 요청 DTO
//!
//! `PUT /api/users/{uid}` 본문입니다. 없으면 생성하고 있으면 덮어씁니다.
//!
//! ```json
//! {
//!   "name": "홍길동",
//!   "birth": "1995-03-21",
//!   "address": "서울특별시 중구 세종대로 110",
//!   "email": "gildong@example.com"
//! }
//! ```

use serde::Deserialize;
use validator::Validate;
use crate::utils::date_utils::validate_birth_date;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertProfileRequest {
    #[validate(length(min = 1, max = 30, message = "이름은 1-30자 사이여야 합니다"))]
    pub name: String,

    /// 생년월일 (`YYYY-MM-DD`)
    #[validate(custom(function = "validate_birth_date"))]
    pub birth: String,

    #[validate(length(max = 200, message = "주소는 200자 이하여야 합니다"))]
    #[serde(default)]
    pub address: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, birth: &str, email: &str) -> UpsertProfileRequest {
        UpsertProfileRequest {
            name: name.to_string(),
            birth: birth.to_string(),
            address: "서울특별시 중구".to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_valid_profile() {
        assert!(request("홍길동", "1995-03-21", "gildong@example.com").validate().is_ok());
    }

    #[test]
    fn test_invalid_fields() {
        let errors = request("", "3000-01-01", "not-an-email").validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("birth"));
        assert!(fields.contains_key("email"));
    }

    #[test]
    fn test_name_length_counts_characters() {
        assert!(request(&"가".repeat(30), "1995-03-21", "a@b.com").validate().is_ok());
        assert!(request(&"가".repeat(31), "1995-03-21", "a@b.com").validate().is_err());
    }
}
