//! 차량 등록 엔티티
//!
//! 호스트가 대여 가능하도록 올린 차량 한 대를 나타냅니다.
//! `car_number`는 컬렉션 전체에서 유일합니다 (unique 인덱스).

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::domain::models::RentalStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 등록 이름 (예: "주말 캠핑용 SUV")
    pub name: String,
    /// 차량 번호 (unique)
    pub car_number: String,
    /// 차종 (SUV, 세단 등)
    pub car_type: String,
    /// 제조사
    pub car_brand: String,
    /// 1일 대여료 (원)
    pub rental_fee: i64,
    #[serde(default)]
    pub tags: Vec<String>,
    /// 등록한 호스트의 uid
    pub host_id: String,
    pub status: RentalStatus,
    /// 대여 가능 시작일 (`YYYY-MM-DD`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_from: Option<String>,
    /// 대여 가능 종료일 (`YYYY-MM-DD`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_until: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Registration {
    /// 새 등록을 `대기중` 상태로 만듭니다.
    pub fn new(
        host_id: String,
        name: String,
        car_number: String,
        car_type: String,
        car_brand: String,
        rental_fee: i64,
        tags: Vec<String>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            car_number,
            car_type,
            car_brand,
            rental_fee,
            tags,
            host_id,
            status: RentalStatus::Pending,
            available_from: None,
            available_until: None,
            location: None,
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 새 대여 요청을 받을 수 있는 상태인지
    pub fn is_available(&self) -> bool {
        self.status == RentalStatus::Pending
    }

    pub fn is_hosted_by(&self, uid: &str) -> bool {
        self.host_id == uid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Registration {
        Registration::new(
            "host-1".to_string(),
            "주말 캠핑카".to_string(),
            "12가3456".to_string(),
            "SUV".to_string(),
            "현대".to_string(),
            50_000,
            vec!["캠핑".to_string()],
        )
    }

    #[test]
    fn test_new_registration_starts_pending() {
        let registration = sample();

        assert_eq!(registration.status, RentalStatus::Pending);
        assert!(registration.is_available());
        assert!(registration.id_string().is_none());
        assert_eq!(registration.created_at, registration.updated_at);
    }

    #[test]
    fn test_host_ownership() {
        let registration = sample();

        assert!(registration.is_hosted_by("host-1"));
        assert!(!registration.is_hosted_by("guest-1"));
    }

    #[test]
    fn test_bson_status_uses_korean_label() {
        let document = mongodb::bson::to_document(&sample()).unwrap();

        assert_eq!(document.get_str("status").unwrap(), "대기중");
        assert!(!document.contains_key("_id"));
        assert!(!document.contains_key("location"));
    }
}
