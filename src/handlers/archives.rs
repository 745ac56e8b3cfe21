//! # Archive HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/archives` | 이력 목록 (`guestId`, `hostId`, `status`) | 200 OK |
//! | `GET` | `/api/archives/{id}` | 이력 조회 | 200 OK |
//! | `POST` | `/api/archives/{id}/complete` | 반납 처리 | 200 OK |
//! | `PUT` | `/api/archives/{id}/rate` | 평점 등록 `{"rate": 1-5}` | 200 OK |
//! | `DELETE` | `/api/archives/{id}` | 목록에서 숨김 | 204 No Content |

use actix_web::{web, HttpResponse, get, post, put, delete};
use validator::Validate;
use crate::core::errors::AppResult;
use crate::domain::dto::archives::{ArchiveQuery, RateArchiveRequest};
use crate::services::archives::ArchiveService;

#[get("")]
pub async fn list_archives(
    query: web::Query<ArchiveQuery>,
) -> AppResult<HttpResponse> {
    let service = ArchiveService::instance();
    let archives = service.list_archives(query.into_inner()).await?;

    Ok(HttpResponse::Ok().json(archives))
}

#[get("/{archive_id}")]
pub async fn get_archive(
    archive_id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let service = ArchiveService::instance();
    let archive = service.get_archive(&archive_id).await?;

    Ok(HttpResponse::Ok().json(archive))
}

/// 반납 처리 후 차량은 다시 `대기중`이 됩니다.
#[post("/{archive_id}/complete")]
pub async fn complete_archive(
    archive_id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let service = ArchiveService::instance();
    let archive = service.complete_archive(&archive_id).await?;

    Ok(HttpResponse::Ok().json(archive))
}

#[put("/{archive_id}/rate")]
pub async fn rate_archive(
    archive_id: web::Path<String>,
    payload: web::Json<RateArchiveRequest>,
) -> AppResult<HttpResponse> {
    payload.validate()?;

    let service = ArchiveService::instance();
    let archive = service.rate_archive(&archive_id, payload.rate).await?;

    Ok(HttpResponse::Ok().json(archive))
}

#[delete("/{archive_id}")]
pub async fn hide_archive(
    archive_id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let service = ArchiveService::instance();
    service.hide_archive(&archive_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
