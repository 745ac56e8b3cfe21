//! # Rental Request HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/requests` | 대여 요청 | 201 Created |
//! | `GET` | `/api/requests` | 요청 목록 (`guestId`, `hostId`, `carId`) | 200 OK |
//! | `DELETE` | `/api/requests/{id}?guestId=` | 게스트의 요청 취소 | 204 No Content |
//! | `POST` | `/api/requests/{id}/approve?hostId=` | 호스트 승인, 대여 이력 생성 | 201 Created |
//! | `POST` | `/api/requests/{id}/reject?hostId=` | 호스트 거절 | 204 No Content |
//!
//! `guestId`/`hostId` 쿼리가 주어지면 요청의 당사자와 일치해야 하며,
//! 다르면 403입니다.

use actix_web::{web, HttpResponse, get, post, delete};
use validator::Validate;
use crate::core::errors::AppResult;
use crate::domain::dto::requests::{ActorQuery, CreateRentalRequest, RequestQuery};
use crate::services::requests::RequestService;

#[post("")]
pub async fn create_request(
    payload: web::Json<CreateRentalRequest>,
) -> AppResult<HttpResponse> {
    payload.validate()?;

    let service = RequestService::instance();
    let response = service.create_request(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

#[get("")]
pub async fn list_requests(
    query: web::Query<RequestQuery>,
) -> AppResult<HttpResponse> {
    let service = RequestService::instance();
    let requests = service.list_requests(query.into_inner()).await?;

    Ok(HttpResponse::Ok().json(requests))
}

#[delete("/{request_id}")]
pub async fn cancel_request(
    request_id: web::Path<String>,
    actor: web::Query<ActorQuery>,
) -> AppResult<HttpResponse> {
    let service = RequestService::instance();
    service.cancel_request(&request_id, &actor).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// 승인하면 차량이 `사용중`으로 바뀌고 새 대여 이력이 응답됩니다.
/// 같은 차량에 대한 다른 요청은 모두 정리됩니다.
#[post("/{request_id}/approve")]
pub async fn approve_request(
    request_id: web::Path<String>,
    actor: web::Query<ActorQuery>,
) -> AppResult<HttpResponse> {
    let service = RequestService::instance();
    let archive = service.approve_request(&request_id, &actor).await?;

    Ok(HttpResponse::Created().json(archive))
}

#[post("/{request_id}/reject")]
pub async fn reject_request(
    request_id: web::Path<String>,
    actor: web::Query<ActorQuery>,
) -> AppResult<HttpResponse> {
    let service = RequestService::instance();
    service.reject_request(&request_id, &actor).await?;

    Ok(HttpResponse::NoContent().finish())
}
