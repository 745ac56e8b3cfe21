//! # Registration HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/registrations` | 차량 등록 | 201 Created |
//! | `GET` | `/api/registrations` | 등록 차량 목록 (`hostId`, `status`, `tag`, `limit`) | 200 OK |
//! | `GET` | `/api/registrations/{id}` | 차량 조회 | 200 OK |
//! | `PATCH` | `/api/registrations/{id}` | 차량 정보 수정 (대기중일 때만) | 200 OK |
//! | `DELETE` | `/api/registrations/{id}` | 등록 취소 (대기중일 때만) | 204 No Content |
//!
//! ```bash
//! curl -X POST http://localhost:8080/api/registrations \
//!   -H "Content-Type: application/json" \
//!   -d '{"hostId":"uid-1","name":"아반떼","carNumber":"12가3456","carType":"세단",
//!        "carBrand":"현대","rentalFee":50000,"tags":["바다","드라이브"]}'
//! ```

use actix_web::{web, HttpResponse, get, post, patch, delete};
use validator::Validate;
use crate::core::errors::AppResult;
use crate::domain::dto::registrations::{CreateRegistrationRequest, RegistrationQuery, UpdateRegistrationRequest};
use crate::services::registrations::RegistrationService;

#[post("")]
pub async fn create_registration(
    payload: web::Json<CreateRegistrationRequest>,
) -> AppResult<HttpResponse> {
    payload.validate()?;

    let service = RegistrationService::instance();
    let response = service.create_registration(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 최신 등록순 목록. 필터가 없으면 전체를 돌려줍니다.
#[get("")]
pub async fn list_registrations(
    query: web::Query<RegistrationQuery>,
) -> AppResult<HttpResponse> {
    let service = RegistrationService::instance();
    let registrations = service.list_registrations(query.into_inner()).await?;

    Ok(HttpResponse::Ok().json(registrations))
}

#[get("/{registration_id}")]
pub async fn get_registration(
    registration_id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let service = RegistrationService::instance();
    let registration = service.get_registration(&registration_id).await?;

    Ok(HttpResponse::Ok().json(registration))
}

/// 부분 수정. 대여 중이거나 반납 처리 중인 차량이면 409입니다.
#[patch("/{registration_id}")]
pub async fn update_registration(
    registration_id: web::Path<String>,
    payload: web::Json<UpdateRegistrationRequest>,
) -> AppResult<HttpResponse> {
    payload.validate()?;

    let service = RegistrationService::instance();
    let registration = service
        .update_registration(&registration_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(registration))
}

/// 등록 취소. 해당 차량에 들어온 대기 요청도 함께 삭제됩니다.
#[delete("/{registration_id}")]
pub async fn delete_registration(
    registration_id: web::Path<String>,
) -> AppResult<HttpResponse> {
    let service = RegistrationService::instance();
    service.delete_registration(&registration_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
