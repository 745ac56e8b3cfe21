//! # 차량 등록 서비스
//!
//! 호스트의 차량 등록, 목록 조회, 수정, 삭제를 담당합니다.
//!
//! ## 비즈니스 규칙
//!
//! - 새 등록은 항상 `대기중` 상태로 시작합니다.
//! - 차량번호는 중복될 수 없습니다 (409).
//! - 대여 중(`사용중`)인 차량은 수정하거나 삭제할 수 없습니다 (409).
//! - 차량을 삭제하면 그 차량에 걸린 대기 요청도 함께 삭제됩니다.

use std::sync::Arc;
use log::info;
use mongodb::bson::{doc, Document};
use singleton_macro::service;
use crate::{
    core::errors::{AppError, AppResult},
    domain::dto::registrations::{
        CreateRegistrationRequest, RegistrationQuery, RegistrationResponse, UpdateRegistrationRequest,
    },
    domain::entities::Registration,
    domain::models::RentalStatus,
    repositories::registrations::RegistrationRepository,
    repositories::requests::RequestRepository,
    utils::date_utils::validate_date_range,
    utils::string_utils::{clean_optional_string, normalize_tags, validate_required_string},
};

/// 목록 조회 최대 건수
const MAX_LIST_LIMIT: i64 = 100;

#[service(name = "registration")]
pub struct RegistrationService {
    registration_repo: Arc<RegistrationRepository>,
    request_repo: Arc<RequestRepository>,
}

impl RegistrationService {
    /// 새 차량 등록
    ///
    /// * `Err(AppError::ValidationError)` - 필수 값이 공백뿐인 경우
    /// * `Err(AppError::ConflictError)` - 차량번호 중복
    pub async fn create_registration(&self, request: CreateRegistrationRequest) -> AppResult<RegistrationResponse> {
        let mut registration = Registration::new(
            validate_required_string(&request.host_id, "호스트 ID")?,
            validate_required_string(&request.name, "등록 이름")?,
            validate_required_string(&request.car_number, "차량번호")?,
            validate_required_string(&request.car_type, "차종")?,
            validate_required_string(&request.car_brand, "제조사")?,
            request.rental_fee,
            normalize_tags(request.tags),
        );
        registration.available_from = request.available_from;
        registration.available_until = request.available_until;
        registration.location = clean_optional_string(request.location);
        registration.description = clean_optional_string(request.description);

        let created = self.registration_repo.create(registration).await?;

        info!(
            "🚗 차량 등록: {} ({}) host={}",
            created.car_number,
            created.id_string().unwrap_or_default(),
            created.host_id
        );

        Ok(RegistrationResponse::from(created))
    }

    /// 필터에 맞는 등록 목록 (최신순). 필터가 없으면 전체를 반환합니다.
    pub async fn list_registrations(&self, query: RegistrationQuery) -> AppResult<Vec<RegistrationResponse>> {
        let filter = build_list_filter(&query)?;
        let limit = query.limit.map(|limit| limit.clamp(1, MAX_LIST_LIMIT));

        let registrations = self.registration_repo.find_all(filter, limit).await?;

        Ok(registrations.into_iter().map(RegistrationResponse::from).collect())
    }

    pub async fn get_registration(&self, id: &str) -> AppResult<RegistrationResponse> {
        self.find_registration(id).await.map(RegistrationResponse::from)
    }

    /// 대기 중인 차량의 등록 정보를 부분 수정합니다.
    ///
    /// 대여 가능 기간은 기존 값과 합친 뒤 다시 검증합니다.
    pub async fn update_registration(
        &self,
        id: &str,
        request: UpdateRegistrationRequest,
    ) -> AppResult<RegistrationResponse> {
        if request.is_empty() {
            return Err(AppError::ValidationError("변경할 항목이 없습니다".to_string()));
        }

        let current = self.find_editable_registration(id).await?;

        let available_from = request.available_from.as_deref().or(current.available_from.as_deref());
        let available_until = request.available_until.as_deref().or(current.available_until.as_deref());
        validate_date_range(available_from, available_until)?;

        let set_doc = build_update_document(request);

        self.registration_repo
            .update_if_pending(id, set_doc)
            .await?
            .map(RegistrationResponse::from)
            .ok_or_else(rented_car_conflict)
    }

    /// 대기 중인 차량을 삭제하고 걸려 있던 요청을 정리합니다.
    pub async fn delete_registration(&self, id: &str) -> AppResult<()> {
        let current = self.find_editable_registration(id).await?;

        if !self.registration_repo.delete_if_pending(id).await? {
            return Err(rented_car_conflict());
        }

        let removed = self.request_repo.delete_by_car(id).await?;

        info!("🗑️ 차량 등록 삭제: {} (대기 요청 {}건 정리)", current.car_number, removed);

        Ok(())
    }

    async fn find_registration(&self, id: &str) -> AppResult<Registration> {
        self.registration_repo
            .find_by_id(id)
            .await?
            .ok_or_else(registration_not_found)
    }

    /// 수정/삭제 전 상태 확인. 캐시를 거치지 않고 읽습니다.
    async fn find_editable_registration(&self, id: &str) -> AppResult<Registration> {
        let current = self.registration_repo
            .find_by_id_fresh(id)
            .await?
            .ok_or_else(registration_not_found)?;

        ensure_editable(&current)?;
        Ok(current)
    }
}

/// `대기중`인 차량만 수정하거나 삭제할 수 있습니다.
fn ensure_editable(registration: &Registration) -> AppResult<()> {
    if registration.is_available() {
        Ok(())
    } else {
        Err(rented_car_conflict())
    }
}

fn registration_not_found() -> AppError {
    AppError::NotFound("차량을 찾을 수 없습니다".to_string())
}

fn rented_car_conflict() -> AppError {
    AppError::ConflictError("대여 중인 차량은 수정하거나 삭제할 수 없습니다".to_string())
}

/// 목록 조회 쿼리를 MongoDB 필터로 바꿉니다.
fn build_list_filter(query: &RegistrationQuery) -> AppResult<Document> {
    let mut filter = doc! {};

    if let Some(host_id) = &query.host_id {
        filter.insert("host_id", host_id.as_str());
    }

    if let Some(status) = &query.status {
        let status: RentalStatus = status.parse()?;
        filter.insert("status", status.as_str());
    }

    // 배열 필드는 원소 일치로 검색됩니다.
    if let Some(tag) = &query.tag {
        filter.insert("tags", tag.as_str());
    }

    Ok(filter)
}

/// 값이 있는 필드만 `$set` 문서로 만듭니다.
fn build_update_document(request: UpdateRegistrationRequest) -> Document {
    let mut set_doc = doc! {};

    if let Some(name) = request.name {
        set_doc.insert("name", name);
    }
    if let Some(car_type) = request.car_type {
        set_doc.insert("car_type", car_type);
    }
    if let Some(car_brand) = request.car_brand {
        set_doc.insert("car_brand", car_brand);
    }
    if let Some(rental_fee) = request.rental_fee {
        set_doc.insert("rental_fee", rental_fee);
    }
    if let Some(tags) = request.tags {
        set_doc.insert("tags", normalize_tags(tags));
    }
    if let Some(available_from) = request.available_from {
        set_doc.insert("available_from", available_from);
    }
    if let Some(available_until) = request.available_until {
        set_doc.insert("available_until", available_until);
    }
    if let Some(location) = request.location {
        set_doc.insert("location", location);
    }
    if let Some(description) = request.description {
        set_doc.insert("description", description);
    }

    set_doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_matches_everything() {
        let filter = build_list_filter(&RegistrationQuery::default()).unwrap();

        assert!(filter.is_empty());
    }

    #[test]
    fn test_list_filter_normalizes_status_alias() {
        let query = RegistrationQuery {
            host_id: Some("host-1".to_string()),
            status: Some("in_use".to_string()),
            tag: Some("캠핑".to_string()),
            limit: None,
        };

        let filter = build_list_filter(&query).unwrap();

        assert_eq!(filter.get_str("host_id").unwrap(), "host-1");
        assert_eq!(filter.get_str("status").unwrap(), "사용중");
        assert_eq!(filter.get_str("tags").unwrap(), "캠핑");
    }

    #[test]
    fn test_list_filter_rejects_unknown_status() {
        let query = RegistrationQuery {
            status: Some("반납됨".to_string()),
            ..Default::default()
        };

        assert!(matches!(build_list_filter(&query), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_update_document_only_contains_given_fields() {
        let request = UpdateRegistrationRequest {
            rental_fee: Some(45_000),
            tags: Some(vec![" 바다 ".to_string(), "바다".to_string()]),
            ..Default::default()
        };

        let set_doc = build_update_document(request);

        assert_eq!(set_doc.len(), 2);
        assert_eq!(set_doc.get_i64("rental_fee").unwrap(), 45_000);
        assert_eq!(set_doc.get_array("tags").unwrap().len(), 1);
        assert!(!set_doc.contains_key("name"));
    }

    #[test]
    fn test_only_pending_car_is_editable() {
        let mut car = Registration::new(
            "host-1".to_string(),
            "출퇴근용".to_string(),
            "34나5678".to_string(),
            "세단".to_string(),
            "현대".to_string(),
            40_000,
            vec![],
        );
        assert!(ensure_editable(&car).is_ok());

        for status in [RentalStatus::InUse, RentalStatus::Completed] {
            car.status = status;
            assert!(matches!(ensure_editable(&car), Err(AppError::ConflictError(_))));
        }
    }
}
