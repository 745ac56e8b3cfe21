//! # 사용자 프로필 서비스
//!
//! 마이페이지의 이름, 생년월일, 주소, 연락 이메일을 관리합니다.
//! 프로필은 ID 공급자의 `uid`에 1:1로 연결됩니다.

use std::sync::Arc;
use log::info;
use singleton_macro::service;
use crate::{
    core::errors::{AppError, AppResult},
    domain::dto::profiles::{ProfileResponse, UpsertProfileRequest},
    domain::entities::Profile,
    repositories::profiles::ProfileRepository,
    utils::string_utils::validate_required_string,
};

#[service(name = "profile")]
pub struct ProfileService {
    profile_repo: Arc<ProfileRepository>,
}

impl ProfileService {
    /// 프로필을 생성하거나 덮어씁니다.
    pub async fn upsert_profile(&self, uid: &str, request: UpsertProfileRequest) -> AppResult<ProfileResponse> {
        let profile = Profile::new(
            validate_required_string(uid, "사용자 ID")?,
            validate_required_string(&request.name, "이름")?,
            request.birth.trim().to_string(),
            request.address.trim().to_string(),
            request.email.trim().to_string(),
        );

        let saved = self.profile_repo.upsert(profile).await?;
        info!("👤 프로필 저장: {}", saved.uid);

        Ok(ProfileResponse::from(saved))
    }

    pub async fn get_profile(&self, uid: &str) -> AppResult<ProfileResponse> {
        self.profile_repo
            .find_by_uid(uid)
            .await?
            .map(ProfileResponse::from)
            .ok_or_else(|| AppError::NotFound("프로필을 찾을 수 없습니다".to_string()))
    }

    pub async fn delete_profile(&self, uid: &str) -> AppResult<()> {
        if !self.profile_repo.delete_by_uid(uid).await? {
            return Err(AppError::NotFound("프로필을 찾을 수 없습니다".to_string()));
        }

        info!("👤 프로필 삭제: {}", uid);
        Ok(())
    }
}
