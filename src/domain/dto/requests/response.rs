use serde::Serialize;
use crate::domain::entities::RentalRequest;
use crate::domain::models::RentalStatus;
use crate::utils::date_utils::format_datetime;

/// 대여 요청 응답 DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalRequestResponse {
    pub id: String,
    pub guest_id: String,
    pub car_id: String,
    pub host_id: String,
    pub status: RentalStatus,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub created_at: String,
}

impl From<RentalRequest> for RentalRequestResponse {
    fn from(request: RentalRequest) -> Self {
        Self {
            id: request.id_string().unwrap_or_default(),
            created_at: format_datetime(&request.created_at),
            guest_id: request.guest_id,
            car_id: request.car_id,
            host_id: request.host_id,
            status: request.status,
            start_date: request.start_date,
            end_date: request.end_date,
        }
    }
}
