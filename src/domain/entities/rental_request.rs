//! 대여 요청 엔티티
//!
//! 게스트가 특정 차량에 대해 보낸 대기 중인 요청입니다.
//! 승인되거나 거절/취소되면 문서가 삭제되고, 승인된 경우 대여 이력이 남습니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::domain::models::RentalStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentalRequest {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub guest_id: String,
    /// 요청 대상 차량 등록 ID (hex)
    pub car_id: String,
    /// 요청 시점의 차량 호스트 uid
    pub host_id: String,
    pub status: RentalStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl RentalRequest {
    pub fn new(
        guest_id: String,
        car_id: String,
        host_id: String,
        start_date: Option<String>,
        end_date: Option<String>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            guest_id,
            car_id,
            host_id,
            status: RentalStatus::Pending,
            start_date,
            end_date,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
