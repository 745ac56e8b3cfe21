//! # 대여 이력 서비스
//!
//! 진행 중/완료된 대여 이력의 조회, 반납 처리, 평점, 숨김을 담당합니다.
//!
//! 반납하면 이력은 `사용중 → 완료`, 차량은 `사용중 → 완료 → 대기중`으로
//! 넘어가 다시 대여 요청을 받을 수 있게 됩니다.

use std::sync::Arc;
use log::{info, warn};
use mongodb::bson::{doc, Document};
use singleton_macro::service;
use crate::{
    core::errors::{AppError, AppResult},
    domain::dto::archives::{ArchiveQuery, ArchiveResponse},
    domain::entities::Archive,
    domain::models::RentalStatus,
    repositories::archives::ArchiveRepository,
    repositories::registrations::RegistrationRepository,
};

/// 반납된 차량을 다시 대여 가능하게 만드는 상태 전이 순서
const RELIST_STEPS: [(RentalStatus, RentalStatus); 2] = [
    (RentalStatus::InUse, RentalStatus::Completed),
    (RentalStatus::Completed, RentalStatus::Pending),
];

#[service(name = "archive")]
pub struct ArchiveService {
    archive_repo: Arc<ArchiveRepository>,
    registration_repo: Arc<RegistrationRepository>,
}

impl ArchiveService {
    /// 숨기지 않은 이력 목록 (최신순)
    pub async fn list_archives(&self, query: ArchiveQuery) -> AppResult<Vec<ArchiveResponse>> {
        let archives = self.archive_repo.find_visible(build_list_filter(&query)?).await?;

        Ok(archives.into_iter().map(ArchiveResponse::from).collect())
    }

    pub async fn get_archive(&self, id: &str) -> AppResult<ArchiveResponse> {
        self.archive_repo
            .find_by_id(id)
            .await?
            .filter(|archive| archive.show)
            .map(ArchiveResponse::from)
            .ok_or_else(archive_not_found)
    }

    /// 반납 처리
    ///
    /// * `Err(AppError::ConflictError)` - 이미 완료된 이력
    pub async fn complete_archive(&self, id: &str) -> AppResult<ArchiveResponse> {
        let archive = self.find_visible_archive(id).await?;
        archive.status.ensure_transition(RentalStatus::Completed)?;

        let completed = self.archive_repo
            .complete(id)
            .await?
            .ok_or_else(|| AppError::ConflictError("이미 반납이 완료된 대여입니다".to_string()))?;

        self.relist_registration(&completed.car_id).await?;

        info!("🏁 반납 완료: car={} guest={}", completed.car_number, completed.guest_id);

        Ok(ArchiveResponse::from(completed))
    }

    /// 평점 등록. 다시 평가하면 덮어씁니다.
    pub async fn rate_archive(&self, id: &str, rate: i32) -> AppResult<ArchiveResponse> {
        let archive = self.find_visible_archive(id).await?;
        archive.ensure_rateable(rate)?;

        let rated = self.archive_repo
            .set_rate(id, rate)
            .await?
            .ok_or_else(|| AppError::ConflictError("반납이 완료된 대여만 평가할 수 있습니다".to_string()))?;

        info!("⭐ 평점 등록: archive={} rate={}", id, rate);

        Ok(ArchiveResponse::from(rated))
    }

    /// 이력을 목록에서 숨깁니다. 진행 중인 대여는 숨길 수 없습니다.
    pub async fn hide_archive(&self, id: &str) -> AppResult<()> {
        let archive = self.find_visible_archive(id).await?;

        if archive.status == RentalStatus::InUse {
            return Err(AppError::ConflictError("진행 중인 대여는 삭제할 수 없습니다".to_string()));
        }

        self.archive_repo
            .hide(id)
            .await?
            .ok_or_else(archive_not_found)?;

        Ok(())
    }

    /// 상태 변경 전 확인용 조회. 캐시를 거치지 않습니다.
    async fn find_visible_archive(&self, id: &str) -> AppResult<Archive> {
        self.archive_repo
            .find_by_id_fresh(id)
            .await?
            .filter(|archive| archive.show)
            .ok_or_else(archive_not_found)
    }

    /// 반납된 차량을 `사용중 → 완료 → 대기중`으로 되돌립니다.
    async fn relist_registration(&self, car_id: &str) -> AppResult<()> {
        for (from, to) in RELIST_STEPS {
            let moved = self.registration_repo
                .transition_status(car_id, from, to)
                .await?;

            if moved.is_none() {
                warn!("반납 처리 중 '{}' 상태의 차량을 찾지 못했습니다: {}", from, car_id);
                return Ok(());
            }
        }

        Ok(())
    }
}

fn archive_not_found() -> AppError {
    AppError::NotFound("대여 이력을 찾을 수 없습니다".to_string())
}

fn build_list_filter(query: &ArchiveQuery) -> AppResult<Document> {
    let mut filter = doc! {};

    if let Some(guest_id) = &query.guest_id {
        filter.insert("guest_id", guest_id.as_str());
    }
    if let Some(host_id) = &query.host_id {
        filter.insert("host_id", host_id.as_str());
    }
    if let Some(status) = &query.status {
        let status: RentalStatus = status.parse()?;
        filter.insert("status", status.as_str());
    }

    Ok(filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_filter_by_guest_and_status() {
        let query = ArchiveQuery {
            guest_id: Some("guest-1".to_string()),
            host_id: None,
            status: Some("완료".to_string()),
        };

        let filter = build_list_filter(&query).unwrap();

        assert_eq!(filter.get_str("guest_id").unwrap(), "guest-1");
        assert_eq!(filter.get_str("status").unwrap(), "완료");
        assert!(!filter.contains_key("host_id"));
    }

    #[test]
    fn test_relist_steps_return_car_to_pending() {
        assert_eq!(RELIST_STEPS[0].0, RentalStatus::InUse);
        assert_eq!(RELIST_STEPS[RELIST_STEPS.len() - 1].1, RentalStatus::Pending);

        for (from, to) in RELIST_STEPS {
            assert!(from.ensure_transition(to).is_ok(), "{} → {}", from, to);
        }
        for pair in RELIST_STEPS.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
    }

    #[test]
    fn test_completed_archive_cannot_complete_again() {
        assert!(matches!(
            RentalStatus::Completed.ensure_transition(RentalStatus::Completed),
            Err(AppError::ConflictError(_))
        ));
    }

    #[test]
    fn test_list_filter_rejects_unknown_status() {
        let query = ArchiveQuery {
            status: Some("unknown".to_string()),
            ..Default::default()
        };

        assert!(build_list_filter(&query).is_err());
    }
}
