use serde::Serialize;
use crate::domain::entities::Registration;
use crate::domain::models::RentalStatus;
use crate::utils::date_utils::format_datetime;

/// 차량 등록 응답 DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
    pub id: String,
    pub name: String,
    pub car_number: String,
    pub car_type: String,
    pub car_brand: String,
    pub rental_fee: i64,
    pub tags: Vec<String>,
    pub host_id: String,
    pub status: RentalStatus,
    pub available_from: Option<String>,
    pub available_until: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Registration> for RegistrationResponse {
    fn from(registration: Registration) -> Self {
        let Registration {
            id,
            name,
            car_number,
            car_type,
            car_brand,
            rental_fee,
            tags,
            host_id,
            status,
            available_from,
            available_until,
            location,
            description,
            created_at,
            updated_at,
        } = registration;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            car_number,
            car_type,
            car_brand,
            rental_fee,
            tags,
            host_id,
            status,
            available_from,
            available_until,
            location,
            description,
            created_at: format_datetime(&created_at),
            updated_at: format_datetime(&updated_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_response_uses_camel_case() {
        let mut registration = Registration::new(
            "host-1".to_string(),
            "주말 캠핑용 SUV".to_string(),
            "12가3456".to_string(),
            "SUV".to_string(),
            "현대".to_string(),
            50_000,
            vec!["캠핑".to_string()],
        );
        let id = ObjectId::new();
        registration.id = Some(id);

        let json = serde_json::to_value(RegistrationResponse::from(registration)).unwrap();

        assert_eq!(json["id"], id.to_hex());
        assert_eq!(json["carNumber"], "12가3456");
        assert_eq!(json["rentalFee"], 50_000);
        assert_eq!(json["hostId"], "host-1");
        assert_eq!(json["status"], "대기중");
        assert!(json["availableFrom"].is_null());
        assert!(json.get("car_number").is_none());
    }
}
