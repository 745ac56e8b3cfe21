//! # 대여 이력 리포지토리
//!
//! 이력은 ID로 캐싱합니다 (`archive:{id}`, 60초).
//! 반납, 평점, 숨김 전의 상태 확인은 [`ArchiveRepository::find_by_id_fresh`]로 캐시 없이 읽습니다.
//! 반납, 평점, 숨김은 모두 현재 상태를 조건으로 거는 `find_one_and_update`입니다.

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
    domain::entities::Archive,
    domain::models::RentalStatus,
    repositories::{inserted_object_id, parse_object_id},
};

#[repository(name = "archive", collection = "archives")]
pub struct ArchiveRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl ArchiveRepository {
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Archive>> {
        let object_id = parse_object_id(id)?;
        let cache_key = self.cache_key(&object_id.to_hex());

        if let Ok(Some(cached)) = self.redis.get::<Archive>(&cache_key).await {
            return Ok(Some(cached));
        }

        let archive = self.load(object_id).await?;

        if let Some(ref archive) = archive {
            let _ = self.redis
                .set_with_expiry(&cache_key, archive, STATUS_TTL_SECS)
                .await;
        }

        Ok(archive)
    }

    /// 캐시를 거치지 않고 MongoDB에서 바로 읽습니다.
    pub async fn find_by_id_fresh(&self, id: &str) -> AppResult<Option<Archive>> {
        self.load(parse_object_id(id)?).await
    }

    async fn load(&self, object_id: ObjectId) -> AppResult<Option<Archive>> {
        self.collection::<Archive>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 숨기지 않은 이력만 최신순으로 반환합니다.
    pub async fn find_visible(&self, mut filter: Document) -> AppResult<Vec<Archive>> {
        filter.insert("show", true);

        let cursor = self.collection::<Archive>()
            .find(filter)
            .sort(doc! { "started_at": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn create(&self, mut archive: Archive) -> AppResult<Archive> {
        let result = self.collection::<Archive>()
            .insert_one(&archive)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        archive.id = Some(inserted_object_id(&result.inserted_id)?);

        let _ = self.invalidate_collection_cache(None).await;

        Ok(archive)
    }

    /// `사용중` 이력을 `완료`로 바꾸고 반납 시각을 기록합니다.
    ///
    /// 이미 완료됐거나 없으면 `Ok(None)`.
    pub async fn complete(&self, id: &str) -> AppResult<Option<Archive>> {
        let now = DateTime::now();

        self.update_where(
            id,
            doc! { "status": RentalStatus::InUse.as_str() },
            doc! {
                "status": RentalStatus::Completed.as_str(),
                "completed_at": now,
                "updated_at": now,
            },
        )
        .await
    }

    /// 완료된 이력에 평점을 기록합니다. 다시 평가하면 덮어씁니다.
    pub async fn set_rate(&self, id: &str, rate: i32) -> AppResult<Option<Archive>> {
        self.update_where(
            id,
            doc! { "status": RentalStatus::Completed.as_str() },
            doc! { "rate": rate, "updated_at": DateTime::now() },
        )
        .await
    }

    /// 목록에서 숨깁니다 (소프트 삭제).
    pub async fn hide(&self, id: &str) -> AppResult<Option<Archive>> {
        self.update_where(
            id,
            doc! {},
            doc! { "show": false, "updated_at": DateTime::now() },
        )
        .await
    }

    async fn update_where(&self, id: &str, mut filter: Document, set_doc: Document) -> AppResult<Option<Archive>> {
        let object_id = parse_object_id(id)?;
        filter.insert("_id", object_id);

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self.collection::<Archive>()
            .find_one_and_update(filter, doc! { "$set": set_doc })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let _ = self.invalidate_cache(&object_id.to_hex()).await;

        Ok(updated)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let collection = self.collection::<Archive>();

        let guest_index = IndexModel::builder()
            .keys(doc! { "guest_id": 1, "started_at": -1 })
            .options(IndexOptions::builder()
                .name("guest_started_at".to_string())
                .build())
            .build();

        let host_index = IndexModel::builder()
            .keys(doc! { "host_id": 1, "started_at": -1 })
            .options(IndexOptions::builder()
                .name("host_started_at".to_string())
                .build())
            .build();

        collection
            .create_indexes([guest_index, host_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
