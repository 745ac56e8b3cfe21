//! # Profile (마이페이지) HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/users/{uid}` | 프로필 조회 | 200 OK |
//! | `PUT` | `/api/users/{uid}` | 프로필 생성/수정 | 200 OK |
//! | `DELETE` | `/api/users/{uid}` | 프로필 삭제 | 204 No Content |

use actix_web::{web, HttpResponse, get, put, delete};
use validator::Validate;
use crate::core::errors::AppResult;
use crate::domain::dto::profiles::UpsertProfileRequest;
use crate::services::profiles::ProfileService;

#[get("/{uid}")]
pub async fn get_profile(
    uid: web::Path<String>,
) -> AppResult<HttpResponse> {
    let service = ProfileService::instance();
    let profile = service.get_profile(&uid).await?;

    Ok(HttpResponse::Ok().json(profile))
}

#[put("/{uid}")]
pub async fn upsert_profile(
    uid: web::Path<String>,
    payload: web::Json<UpsertProfileRequest>,
) -> AppResult<HttpResponse> {
    payload.validate()?;

    let service = ProfileService::instance();
    let profile = service.upsert_profile(&uid, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(profile))
}

#[delete("/{uid}")]
pub async fn delete_profile(
    uid: web::Path<String>,
) -> AppResult<HttpResponse> {
    let service = ProfileService::instance();
    service.delete_profile(&uid).await?;

    Ok(HttpResponse::NoContent().finish())
}
