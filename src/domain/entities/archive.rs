//! 대여 이력 엔티티
//!
//! 승인된 대여의 스냅샷입니다. 차량 정보는 승인 시점 값으로 복사되므로
//! 이후 등록 정보가 바뀌거나 삭제되어도 이력은 그대로 유지됩니다.
//!
//! `show`는 목록 노출 여부(소프트 삭제 플래그)입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::core::errors::AppError;
use crate::domain::entities::{Registration, RentalRequest};
use crate::domain::models::RentalStatus;

/// 평점 허용 범위
pub const MIN_RATE: i32 = 1;
pub const MAX_RATE: i32 = 5;

fn default_show() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Archive {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub car_id: String,
    pub name: String,
    pub car_number: String,
    pub car_type: String,
    pub car_brand: String,
    pub rental_fee: i64,
    #[serde(default)]
    pub tags: Vec<String>,
    pub host_id: String,
    pub guest_id: String,
    pub status: RentalStatus,
    /// 게스트 평점 (1-5), 평가 전에는 `None`
    #[serde(default)]
    pub rate: Option<i32>,
    #[serde(default = "default_show")]
    pub show: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub started_at: DateTime,
    #[serde(default)]
    pub completed_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Archive {
    /// 승인된 요청으로부터 `사용중` 이력을 만듭니다.
    pub fn from_approval(registration: &Registration, request: &RentalRequest) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            car_id: registration.id_string().unwrap_or_else(|| request.car_id.clone()),
            name: registration.name.clone(),
            car_number: registration.car_number.clone(),
            car_type: registration.car_type.clone(),
            car_brand: registration.car_brand.clone(),
            rental_fee: registration.rental_fee,
            tags: registration.tags.clone(),
            host_id: registration.host_id.clone(),
            guest_id: request.guest_id.clone(),
            status: RentalStatus::InUse,
            rate: None,
            show: true,
            start_date: request.start_date.clone(),
            end_date: request.end_date.clone(),
            started_at: now,
            completed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 평점을 남길 수 있는지 확인합니다. 완료된 이력만 평가할 수 있습니다.
    pub fn ensure_rateable(&self, rate: i32) -> Result<(), AppError> {
        if !(MIN_RATE..=MAX_RATE).contains(&rate) {
            return Err(AppError::ValidationError(format!(
                "평점은 {}-{} 사이여야 합니다",
                MIN_RATE, MAX_RATE
            )));
        }

        if self.status != RentalStatus::Completed {
            return Err(AppError::ConflictError(
                "반납이 완료된 대여만 평가할 수 있습니다".to_string(),
            ));
        }

        Ok(())
    }
}
