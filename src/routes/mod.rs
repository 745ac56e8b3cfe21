//! API 라우트 설정 모듈
//!
//! 기능별 핸들러를 `/api` 아래 스코프로 묶어 등록합니다.
//! `/api`로 시작하지 않는 경로는 `main`에서 등록하는 SPA 정적 파일 서비스가 처리합니다.
//!
//! ```text
//! /api/health
//! /api/registrations   차량 등록
//! /api/requests        대여 요청 / 승인 / 거절
//! /api/archives        대여 이력 / 반납 / 평점
//! /api/users           마이페이지 프로필
//! /api/places          장소 검색 / 테마 추천
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use crate::core::errors::AppError;
use crate::handlers;
use actix_web::{web, HttpResponse};
use serde_json::json;

/// JSON 본문 최대 크기
const JSON_PAYLOAD_LIMIT: usize = 64 * 1024;

/// 모든 API 라우트를 설정합니다
///
/// 잘못된 JSON 본문과 쿼리 문자열도 `AppError`와 같은 `{"error": ...}` 형식의
/// 400 응답이 되도록 추출기 설정을 함께 등록합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config());

    cfg.service(
        web::scope("/api")
            .service(health_check)
            .configure(configure_registration_routes)
            .configure(configure_request_routes)
            .configure(configure_archive_routes)
            .configure(configure_profile_routes)
            .configure(configure_place_routes)
    );
}

fn configure_registration_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/registrations")
            .service(handlers::registrations::create_registration)
            .service(handlers::registrations::list_registrations)
            .service(handlers::registrations::get_registration)
            .service(handlers::registrations::update_registration)
            .service(handlers::registrations::delete_registration)
    );
}

fn configure_request_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/requests")
            .service(handlers::requests::create_request)
            .service(handlers::requests::list_requests)
            .service(handlers::requests::cancel_request)
            .service(handlers::requests::approve_request)
            .service(handlers::requests::reject_request)
    );
}

fn configure_archive_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/archives")
            .service(handlers::archives::list_archives)
            .service(handlers::archives::get_archive)
            .service(handlers::archives::complete_archive)
            .service(handlers::archives::rate_archive)
            .service(handlers::archives::hide_archive)
    );
}

/// 마이페이지 프로필. 경로의 `{uid}`는 ID 공급자가 발급한 사용자 ID입니다.
fn configure_profile_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::profiles::get_profile)
            .service(handlers::profiles::upsert_profile)
            .service(handlers::profiles::delete_profile)
    );
}

fn configure_place_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/places")
            .service(handlers::places::search_places)
            .service(handlers::places::list_themes)
            .service(handlers::places::theme_keywords)
    );
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_PAYLOAD_LIMIT)
        .error_handler(|err, _req| {
            AppError::ValidationError(format!("잘못된 요청 본문입니다: {}", err)).into()
        })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| {
            AppError::ValidationError(format!("잘못된 쿼리 파라미터입니다: {}", err)).into()
        })
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/api/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "carshare_backend",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00+00:00"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "carshare_backend");
        assert!(body["timestamp"].is_string());
    }

    #[actix_web::test]
    async fn test_theme_keywords_found() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get()
            .uri("/api/places/themes/%EC%BA%A0%ED%95%91")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["theme"], "캠핑");
        assert_eq!(body["keywords"][0], "캠핑장");
    }

    #[actix_web::test]
    async fn test_unknown_theme_is_not_found() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/api/places/themes/unknown").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_theme_list() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/api/places/themes").to_request();
        let body: Vec<String> = test::call_and_read_body_json(&app, req).await;

        assert!(body.contains(&"바다".to_string()));
    }
}
