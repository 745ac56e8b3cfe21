//! # 대여 요청 서비스
//!
//! ## 요청 생성 규칙
//!
//! 1. 차량이 존재하고 `대기중`이어야 합니다.
//! 2. 자신이 등록한 차량은 요청할 수 없습니다.
//! 3. 같은 차량에 대한 대기 요청은 게스트당 하나입니다.
//! 4. 희망 기간은 차량의 대여 가능 기간 안이어야 합니다.
//!
//! ## 승인 흐름
//!
//! ```text
//! approve(request)
//!   ├─ registration: 대기중 → 사용중   (status 조건부 find_one_and_update)
//!   │     └─ 실패 시 409: 다른 승인이 먼저 처리됨
//!   ├─ archive 생성 (사용중 스냅샷)
//!   └─ 해당 차량의 요청 전부 삭제 (승인된 요청 + 경쟁 요청)
//! ```
//!
//! 상태 변경 조건을 DB 연산에 걸기 때문에 같은 차량에 대한 두 승인이 동시에
//! 들어와도 하나만 성공합니다.

use std::sync::Arc;
use log::{error, info};
use mongodb::bson::{doc, Document};
use singleton_macro::service;
use crate::{
    core::errors::{AppError, AppResult},
    domain::dto::archives::ArchiveResponse,
    domain::dto::requests::{ActorQuery, CreateRentalRequest, RentalRequestResponse, RequestQuery},
    domain::entities::{Archive, Registration, RentalRequest},
    domain::models::RentalStatus,
    repositories::archives::ArchiveRepository,
    repositories::registrations::RegistrationRepository,
    repositories::requests::RequestRepository,
    repositories::canonical_id,
    utils::date_utils::ensure_within_window,
    utils::string_utils::validate_required_string,
};

#[service(name = "request")]
pub struct RequestService {
    request_repo: Arc<RequestRepository>,
    registration_repo: Arc<RegistrationRepository>,
    archive_repo: Arc<ArchiveRepository>,
}

impl RequestService {
    /// 새 대여 요청
    ///
    /// * `Err(AppError::NotFound)` - 차량 없음
    /// * `Err(AppError::ConflictError)` - 대여 중인 차량, 본인 차량, 중복 요청
    /// * `Err(AppError::ValidationError)` - 대여 가능 기간 밖의 날짜
    pub async fn create_request(&self, request: CreateRentalRequest) -> AppResult<RentalRequestResponse> {
        let guest_id = validate_required_string(&request.guest_id, "게스트 ID")?;
        let car_id = canonical_id(&request.car_id)?;

        let registration = self.registration_repo
            .find_by_id_fresh(&car_id)
            .await?
            .ok_or_else(|| AppError::NotFound("차량을 찾을 수 없습니다".to_string()))?;

        let already_requested = self.request_repo
            .find_by_guest_and_car(&guest_id, &car_id)
            .await?
            .is_some();

        ensure_requestable(&registration, &guest_id, already_requested)?;

        ensure_within_window(
            request.start_date.as_deref(),
            request.end_date.as_deref(),
            registration.available_from.as_deref(),
            registration.available_until.as_deref(),
        )?;

        let rental_request = RentalRequest::new(
            guest_id,
            car_id,
            registration.host_id,
            request.start_date,
            request.end_date,
        );

        let created = self.request_repo.create(rental_request).await?;

        info!("📨 대여 요청: car={} guest={}", created.car_id, created.guest_id);

        Ok(RentalRequestResponse::from(created))
    }

    pub async fn list_requests(&self, query: RequestQuery) -> AppResult<Vec<RentalRequestResponse>> {
        let requests = self.request_repo.find_all(build_list_filter(&query)?).await?;

        Ok(requests.into_iter().map(RentalRequestResponse::from).collect())
    }

    /// 게스트가 자신의 요청을 취소합니다.
    pub async fn cancel_request(&self, id: &str, actor: &ActorQuery) -> AppResult<()> {
        let request = self.find_request(id).await?;

        if actor.guest_id.as_deref().is_some_and(|guest_id| guest_id != request.guest_id) {
            return Err(AppError::AuthorizationError("본인의 요청만 취소할 수 있습니다".to_string()));
        }

        self.remove_request(id).await?;
        info!("↩️ 대여 요청 취소: {}", id);

        Ok(())
    }

    /// 호스트가 요청을 거절합니다.
    pub async fn reject_request(&self, id: &str, actor: &ActorQuery) -> AppResult<()> {
        let request = self.find_request(id).await?;
        ensure_host(&request, actor)?;

        self.remove_request(id).await?;
        info!("🚫 대여 요청 거절: {} car={}", id, request.car_id);

        Ok(())
    }

    /// 호스트가 요청을 승인하고 대여 이력을 만듭니다.
    ///
    /// * `Err(AppError::ConflictError)` - 차량이 이미 대여 중이거나 다른 승인이 먼저 처리됨
    pub async fn approve_request(&self, id: &str, actor: &ActorQuery) -> AppResult<ArchiveResponse> {
        let request = self.find_request(id).await?;
        ensure_host(&request, actor)?;

        let registration = match self.registration_repo
            .transition_status(&request.car_id, RentalStatus::Pending, RentalStatus::InUse)
            .await?
        {
            Some(registration) => registration,
            None => {
                let car_exists = self.registration_repo
                    .find_by_id_fresh(&request.car_id)
                    .await?
                    .is_some();
                return Err(approval_miss(car_exists));
            }
        };

        let archive = self.archive_repo
            .create(Archive::from_approval(&registration, &request))
            .await
            .inspect_err(|e| error!("대여 이력 생성 실패 (car={}): {}", request.car_id, e))?;

        let removed = self.request_repo.delete_by_car(&request.car_id).await?;

        info!(
            "✅ 대여 승인: car={} guest={} (정리된 요청 {}건)",
            registration.car_number, request.guest_id, removed
        );

        Ok(ArchiveResponse::from(archive))
    }

    async fn find_request(&self, id: &str) -> AppResult<RentalRequest> {
        self.request_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("대여 요청을 찾을 수 없습니다".to_string()))
    }

    async fn remove_request(&self, id: &str) -> AppResult<()> {
        if !self.request_repo.delete(id).await? {
            return Err(AppError::NotFound("대여 요청을 찾을 수 없습니다".to_string()));
        }
        Ok(())
    }
}

/// 대여 요청을 받을 수 있는 차량인지 확인합니다.
///
/// * `Err(AppError::ConflictError)` - 대여 중인 차량, 본인 차량, 이미 요청한 차량
fn ensure_requestable(registration: &Registration, guest_id: &str, already_requested: bool) -> AppResult<()> {
    if !registration.is_available() {
        return Err(AppError::ConflictError("이미 대여 중인 차량입니다".to_string()));
    }

    if registration.is_hosted_by(guest_id) {
        return Err(AppError::ConflictError("자신이 등록한 차량은 대여할 수 없습니다".to_string()));
    }

    if already_requested {
        return Err(AppError::ConflictError("이미 대여를 요청한 차량입니다".to_string()));
    }

    Ok(())
}

/// 승인 시 `대기중 → 사용중` 변경이 적용되지 않은 경우의 에러.
///
/// 차량이 남아 있으면 다른 승인이 먼저 처리된 것이고, 없으면 삭제된 것입니다.
fn approval_miss(car_exists: bool) -> AppError {
    if car_exists {
        AppError::ConflictError("이미 대여 중인 차량입니다".to_string())
    } else {
        AppError::NotFound("차량을 찾을 수 없습니다".to_string())
    }
}

/// 호스트 ID가 주어졌다면 요청의 호스트와 같아야 합니다.
fn ensure_host(request: &RentalRequest, actor: &ActorQuery) -> AppResult<()> {
    match actor.host_id.as_deref() {
        Some(host_id) if host_id != request.host_id => Err(AppError::AuthorizationError(
            "차량을 등록한 호스트만 처리할 수 있습니다".to_string(),
        )),
        _ => Ok(()),
    }
}

fn build_list_filter(query: &RequestQuery) -> AppResult<Document> {
    let mut filter = doc! {};

    if let Some(guest_id) = &query.guest_id {
        filter.insert("guest_id", guest_id.as_str());
    }
    if let Some(host_id) = &query.host_id {
        filter.insert("host_id", host_id.as_str());
    }
    if let Some(car_id) = &query.car_id {
        filter.insert("car_id", canonical_id(car_id)?);
    }

    Ok(filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending_request() -> RentalRequest {
        RentalRequest::new(
            "guest-1".to_string(),
            "6650f0a1b2c3d4e5f6a7b8c9".to_string(),
            "host-1".to_string(),
            None,
            None,
        )
    }

    #[test]
    fn test_ensure_host() {
        let request = pending_request();

        assert!(ensure_host(&request, &ActorQuery::default()).is_ok());

        let host = ActorQuery { host_id: Some("host-1".to_string()), guest_id: None };
        assert!(ensure_host(&request, &host).is_ok());

        let other = ActorQuery { host_id: Some("host-2".to_string()), guest_id: None };
        assert!(matches!(ensure_host(&request, &other), Err(AppError::AuthorizationError(_))));
    }

    #[test]
    fn test_list_filter() {
        let query = RequestQuery {
            guest_id: None,
            host_id: Some("host-1".to_string()),
            car_id: Some("6650F0A1B2C3D4E5F6A7B8C9".to_string()),
        };

        let filter = build_list_filter(&query).unwrap();

        assert_eq!(filter.len(), 2);
        assert_eq!(filter.get_str("host_id").unwrap(), "host-1");
        assert_eq!(filter.get_str("car_id").unwrap(), "6650f0a1b2c3d4e5f6a7b8c9");
        assert!(build_list_filter(&RequestQuery::default()).unwrap().is_empty());
    }

    #[test]
    fn test_list_filter_rejects_invalid_car_id() {
        let query = RequestQuery {
            car_id: Some("car-1".to_string()),
            ..Default::default()
        };

        assert!(matches!(build_list_filter(&query), Err(AppError::ValidationError(_))));
    }

    fn listed_car(host_id: &str) -> Registration {
        Registration::new(
            host_id.to_string(),
            "주말 캠핑용".to_string(),
            "12가3456".to_string(),
            "SUV".to_string(),
            "기아".to_string(),
            70_000,
            vec!["캠핑".to_string()],
        )
    }

    #[test]
    fn test_requestable_for_other_guest() {
        assert!(ensure_requestable(&listed_car("host-1"), "guest-1", false).is_ok());
    }

    #[test]
    fn test_own_car_is_rejected() {
        let result = ensure_requestable(&listed_car("host-1"), "host-1", false);

        match result {
            Err(AppError::ConflictError(msg)) => assert_eq!(msg, "자신이 등록한 차량은 대여할 수 없습니다"),
            _ => panic!("Expected ConflictError"),
        }
    }

    #[test]
    fn test_duplicate_request_is_rejected() {
        let result = ensure_requestable(&listed_car("host-1"), "guest-1", true);

        match result {
            Err(AppError::ConflictError(msg)) => assert_eq!(msg, "이미 대여를 요청한 차량입니다"),
            _ => panic!("Expected ConflictError"),
        }
    }

    #[test]
    fn test_rented_car_is_rejected() {
        let mut car = listed_car("host-1");
        car.status = RentalStatus::InUse;

        match ensure_requestable(&car, "guest-1", false) {
            Err(AppError::ConflictError(msg)) => assert_eq!(msg, "이미 대여 중인 차량입니다"),
            _ => panic!("Expected ConflictError"),
        }
    }

    #[test]
    fn test_lost_approval_is_conflict() {
        assert!(matches!(approval_miss(true), AppError::ConflictError(_)));
    }

    #[test]
    fn test_approval_for_deleted_car_is_not_found() {
        assert!(matches!(approval_miss(false), AppError::NotFound(_)));
    }

    #[test]
    fn test_approval_snapshot_uses_stored_car_id() {
        let mut car = listed_car("host-1");
        car.id = Some(mongodb::bson::oid::ObjectId::parse_str("6650f0a1b2c3d4e5f6a7b8c9").unwrap());
        car.status = RentalStatus::InUse;

        let request = RentalRequest::new(
            "guest-1".to_string(),
            canonical_id("6650F0A1B2C3D4E5F6A7B8C9").unwrap(),
            "host-1".to_string(),
            None,
            None,
        );

        let archive = Archive::from_approval(&car, &request);

        assert_eq!(archive.car_id, "6650f0a1b2c3d4e5f6a7b8c9");
        assert_eq!(archive.status, RentalStatus::InUse);
        assert_eq!(archive.guest_id, "guest-1");
    }
}
