//! # 대여 요청 리포지토리
//!
//! 요청은 짧게 살다 사라지는 문서라 캐싱하지 않습니다.
//! `(guest_id, car_id)` unique 인덱스로 같은 게스트의 중복 요청을 막습니다.
//! `car_id`는 소문자 16진수 표기로 저장하고 조회합니다.

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::IndexOptions,
    IndexModel,
};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    core::errors::{AppError, AppResult},
    core::registry::Repository,
    db::Database,
    domain::entities::RentalRequest,
    repositories::{canonical_id, inserted_object_id, is_duplicate_key, parse_object_id},
};

#[repository(name = "request", collection = "requests")]
pub struct RequestRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl RequestRepository {
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<RentalRequest>> {
        let object_id = parse_object_id(id)?;

        self.collection::<RentalRequest>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 필터에 맞는 요청 목록 (최신순)
    pub async fn find_all(&self, filter: Document) -> AppResult<Vec<RentalRequest>> {
        let cursor = self.collection::<RentalRequest>()
            .find(filter)
            .sort(doc! { "created_at": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn find_by_guest_and_car(&self, guest_id: &str, car_id: &str) -> AppResult<Option<RentalRequest>> {
        let mut filter = car_filter(car_id)?;
        filter.insert("guest_id", guest_id);

        self.collection::<RentalRequest>()
            .find_one(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn create(&self, mut request: RentalRequest) -> AppResult<RentalRequest> {
        let result = self.collection::<RentalRequest>()
            .insert_one(&request)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError("이미 대여를 요청한 차량입니다".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        request.id = Some(inserted_object_id(&result.inserted_id)?);

        Ok(request)
    }

    /// 요청 하나를 삭제합니다. 삭제했으면 `true`.
    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        let object_id = parse_object_id(id)?;

        let result = self.collection::<RentalRequest>()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    /// 차량에 걸린 요청을 모두 삭제하고 삭제한 개수를 반환합니다.
    pub async fn delete_by_car(&self, car_id: &str) -> AppResult<u64> {
        let result = self.collection::<RentalRequest>()
            .delete_many(car_filter(car_id)?)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let collection = self.collection::<RentalRequest>();

        let guest_car_index = IndexModel::builder()
            .keys(doc! { "guest_id": 1, "car_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("guest_car_unique".to_string())
                .build())
            .build();

        let host_index = IndexModel::builder()
            .keys(doc! { "host_id": 1 })
            .options(IndexOptions::builder()
                .name("host_id".to_string())
                .build())
            .build();

        let car_index = IndexModel::builder()
            .keys(doc! { "car_id": 1 })
            .options(IndexOptions::builder()
                .name("car_id".to_string())
                .build())
            .build();

        collection
            .create_indexes([guest_car_index, host_index, car_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

/// 차량 ID 조건. 요청에 저장된 표기와 같도록 소문자로 맞춥니다.
fn car_filter(car_id: &str) -> AppResult<Document> {
    Ok(doc! { "car_id": canonical_id(car_id)? })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_filter_matches_stored_car_id() {
        let stored = RentalRequest::new(
            "guest-1".to_string(),
            canonical_id("6650F0A1B2C3D4E5F6A7B8C9").unwrap(),
            "host-1".to_string(),
            None,
            None,
        );

        let filter = car_filter("6650F0A1B2C3D4E5F6A7B8C9").unwrap();

        assert_eq!(filter.get_str("car_id").unwrap(), stored.car_id);
        assert_eq!(filter, car_filter("6650f0a1b2c3d4e5f6a7b8c9").unwrap());
    }

    #[test]
    fn test_car_filter_rejects_invalid_id() {
        assert!(matches!(car_filter("not-a-car"), Err(AppError::ValidationError(_))));
    }
}
