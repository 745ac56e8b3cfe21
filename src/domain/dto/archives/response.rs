use serde::Serialize;
use crate::domain::entities::Archive;
use crate::domain::models::RentalStatus;
use crate::utils::date_utils::format_datetime;

/// 대여 이력 응답 DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveResponse {
    pub id: String,
    pub car_id: String,
    pub name: String,
    pub car_number: String,
    pub car_type: String,
    pub car_brand: String,
    pub rental_fee: i64,
    pub tags: Vec<String>,
    pub host_id: String,
    pub guest_id: String,
    pub status: RentalStatus,
    pub rate: Option<i32>,
    pub show: bool,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub started_at: String,
    pub completed_at: Option<String>,
}

impl From<Archive> for ArchiveResponse {
    fn from(archive: Archive) -> Self {
        let Archive {
            id,
            car_id,
            name,
            car_number,
            car_type,
            car_brand,
            rental_fee,
            tags,
            host_id,
            guest_id,
            status,
            rate,
            show,
            start_date,
            end_date,
            started_at,
            completed_at,
            ..
        } = archive;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            car_id,
            name,
            car_number,
            car_type,
            car_brand,
            rental_fee,
            tags,
            host_id,
            guest_id,
            status,
            rate,
            show,
            start_date,
            end_date,
            started_at: format_datetime(&started_at),
            completed_at: completed_at.as_ref().map(format_datetime),
        }
    }
}
