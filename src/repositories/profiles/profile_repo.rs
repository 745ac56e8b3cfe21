//! # 사용자 프로필 리포지토리
//!
//! 프로필은 문서 ID가 아니라 ID 공급자의 `uid`로 찾습니다.
//! 캐시 키도 `profile:{uid}`입니다.

use std::sync::Arc;
use mongodb::{
    bson::{doc, DateTime},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    IndexModel,
};
use singleton_macro::repository;
use crate::{
    caching::redis::{RedisClient, DEFAULT_TTL_SECS},
    core::errors::{AppError, AppResult},
    core::registry::Repository,
    db::Database,
    domain::entities::Profile,
};

#[repository(name = "profile", collection = "users")]
pub struct ProfileRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl ProfileRepository {
    pub async fn find_by_uid(&self, uid: &str) -> AppResult<Option<Profile>> {
        let cache_key = self.cache_key(uid);

        if let Ok(Some(cached)) = self.redis.get::<Profile>(&cache_key).await {
            return Ok(Some(cached));
        }

        let profile = self.collection::<Profile>()
            .find_one(doc! { "uid": uid })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref profile) = profile {
            let _ = self.redis
                .set_with_expiry(&cache_key, profile, DEFAULT_TTL_SECS)
                .await;
        }

        Ok(profile)
    }

    /// uid 기준으로 생성하거나 덮어씁니다. `created_at`은 처음 생성할 때만 기록됩니다.
    pub async fn upsert(&self, profile: Profile) -> AppResult<Profile> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let saved = self.collection::<Profile>()
            .find_one_and_update(
                doc! { "uid": &profile.uid },
                doc! {
                    "$set": {
                        "name": &profile.name,
                        "birth": &profile.birth,
                        "address": &profile.address,
                        "email": &profile.email,
                        "updated_at": DateTime::now(),
                    },
                    "$setOnInsert": { "created_at": profile.created_at },
                },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let _ = self.invalidate_cache(&profile.uid).await;

        saved.ok_or_else(|| AppError::InternalError("프로필 저장 결과를 확인할 수 없습니다".to_string()))
    }

    pub async fn delete_by_uid(&self, uid: &str) -> AppResult<bool> {
        let result = self.collection::<Profile>()
            .delete_one(doc! { "uid": uid })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count > 0 {
            let _ = self.invalidate_cache(uid).await;
        }

        Ok(result.deleted_count > 0)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let uid_index = IndexModel::builder()
            .keys(doc! { "uid": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("uid_unique".to_string())
                .build())
            .build();

        self.collection::<Profile>()
            .create_index(uid_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
