//! # 차량 등록 리포지토리
//!
//! ## 캐싱 전략
//!
//! - **키 패턴**: `registration:{id}` (매크로의 `cache_key()`, 소문자 16진수 ID)
//! - **TTL**: 60초 (`STATUS_TTL_SECS`)
//! - **무효화**: 수정, 상태 전이, 삭제 후 해당 키 제거
//!
//! 상태를 보고 분기하는 쓰기 경로는 캐시를 거치지 않는 [`RegistrationRepository::find_by_id_fresh`]를 씁니다.
//! 읽기와 무효화가 엇갈려 이전 상태가 캐시에 다시 쓰일 수 있기 때문입니다.
//!
//! ## 인덱스
//!
//! - `car_number` unique
//! - `host_id`
//! - `created_at` desc

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document, DateTime},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    IndexModel,
};
use singleton_macro::repository;
use crate::{
    caching::redis::{RedisClient, STATUS_TTL_SECS},
    core::errors::{AppError, AppResult},
    core::registry::Repository,
    db::Database,
    domain::entities::Registration,
    domain::models::RentalStatus,
    repositories::{inserted_object_id, is_duplicate_key, parse_object_id},
};

#[repository(name = "registration", collection = "registrations")]
pub struct RegistrationRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl RegistrationRepository {
    /// ID로 차량 등록 조회 (캐시 우선)
    ///
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Registration>> {
        let object_id = parse_object_id(id)?;
        let cache_key = self.cache_key(&object_id.to_hex());

        if let Ok(Some(cached)) = self.redis.get::<Registration>(&cache_key).await {
            return Ok(Some(cached));
        }

        let registration = self.load(object_id).await?;

        if let Some(ref registration) = registration {
            let _ = self.redis
                .set_with_expiry(&cache_key, registration, STATUS_TTL_SECS)
                .await;
        }

        Ok(registration)
    }

    /// 캐시를 거치지 않고 MongoDB에서 바로 읽습니다.
    pub async fn find_by_id_fresh(&self, id: &str) -> AppResult<Option<Registration>> {
        self.load(parse_object_id(id)?).await
    }

    async fn load(&self, object_id: ObjectId) -> AppResult<Option<Registration>> {
        self.collection::<Registration>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn find_by_car_number(&self, car_number: &str) -> AppResult<Option<Registration>> {
        self.collection::<Registration>()
            .find_one(doc! { "car_number": car_number })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 필터에 맞는 등록 목록을 최신순으로 반환합니다.
    pub async fn find_all(&self, filter: Document, limit: Option<i64>) -> AppResult<Vec<Registration>> {
        let collection = self.collection::<Registration>();
        let mut find = collection
            .find(filter)
            .sort(doc! { "created_at": -1 });

        if let Some(limit) = limit {
            find = find.limit(limit);
        }

        let cursor = find
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 차량 등록
    ///
    /// 차량번호 중복은 사전 조회와 unique 인덱스 양쪽에서 `ConflictError`가 됩니다.
    pub async fn create(&self, mut registration: Registration) -> AppResult<Registration> {
        if self.find_by_car_number(&registration.car_number).await?.is_some() {
            return Err(duplicate_car_number());
        }

        let result = self.collection::<Registration>()
            .insert_one(&registration)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    duplicate_car_number()
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        registration.id = Some(inserted_object_id(&result.inserted_id)?);

        let _ = self.invalidate_collection_cache(None).await;

        Ok(registration)
    }

    /// `대기중`인 차량의 필드를 수정합니다.
    ///
    /// 차량이 없거나 대여 중이면 `Ok(None)`을 반환합니다.
    pub async fn update_if_pending(&self, id: &str, mut set_doc: Document) -> AppResult<Option<Registration>> {
        let object_id = parse_object_id(id)?;
        set_doc.insert("updated_at", DateTime::now());

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self.collection::<Registration>()
            .find_one_and_update(
                doc! { "_id": object_id, "status": RentalStatus::Pending.as_str() },
                doc! { "$set": set_doc },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let _ = self.invalidate_cache(&object_id.to_hex()).await;

        Ok(updated)
    }

    /// 현재 상태가 `from`일 때만 `to`로 바꿉니다 (compare-and-set).
    ///
    /// 다른 요청이 먼저 상태를 바꿨다면 `Ok(None)`입니다.
    pub async fn transition_status(
        &self,
        id: &str,
        from: RentalStatus,
        to: RentalStatus,
    ) -> AppResult<Option<Registration>> {
        from.ensure_transition(to)?;
        let object_id = parse_object_id(id)?;

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self.collection::<Registration>()
            .find_one_and_update(
                doc! { "_id": object_id, "status": from.as_str() },
                doc! { "$set": { "status": to.as_str(), "updated_at": DateTime::now() } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let _ = self.invalidate_cache(&object_id.to_hex()).await;

        Ok(updated)
    }

    /// `대기중`인 차량만 삭제합니다. 삭제했으면 `true`.
    pub async fn delete_if_pending(&self, id: &str) -> AppResult<bool> {
        let object_id = parse_object_id(id)?;

        let result = self.collection::<Registration>()
            .delete_one(doc! { "_id": object_id, "status": RentalStatus::Pending.as_str() })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count > 0 {
            let _ = self.invalidate_cache(&object_id.to_hex()).await;
            let _ = self.invalidate_collection_cache(None).await;
        }

        Ok(result.deleted_count > 0)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let collection = self.collection::<Registration>();

        let car_number_index = IndexModel::builder()
            .keys(doc! { "car_number": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("car_number_unique".to_string())
                .build())
            .build();

        let host_index = IndexModel::builder()
            .keys(doc! { "host_id": 1 })
            .options(IndexOptions::builder()
                .name("host_id".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        collection
            .create_indexes([car_number_index, host_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

fn duplicate_car_number() -> AppError {
    AppError::ConflictError("이미 등록된 차량번호입니다".to_string())
}
