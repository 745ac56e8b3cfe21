//! # Application Error Handling
//!
//! 카셰어링 백엔드 전역에서 사용하는 에러 타입입니다.
//! 모든 서비스와 리포지토리는 [`AppResult`]를 반환하고,
//! 핸들러는 `?`로 에러를 전파하기만 하면 `ResponseError` 구현이
//! 알맞은 HTTP 상태 코드와 JSON 본문으로 변환합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패, 잘못된 ID 형식 |
//! | `NotFound` | 404 Not Found | 차량/요청/이력/프로필 없음 |
//! | `ConflictError` | 409 Conflict | 중복 차량번호, 허용되지 않는 상태 전이 |
//! | `AuthenticationError` | 401 Unauthorized | 사용자 식별 실패 |
//! | `AuthorizationError` | 403 Forbidden | 다른 사용자의 리소스 조작 |
//! | `ExternalServiceError` | 502 Bad Gateway | 장소 검색 API 실패 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 오류 |
//! | `RedisError` | 500 Internal Server Error | 캐시 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 응답 형식
//!
//! ```json
//! { "error": "Conflict error: 이미 대여 중인 차량입니다" }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// `thiserror`로 `Error`를 구현하고, `actix_web::ResponseError`를 구현하여
/// 핸들러에서 그대로 반환할 수 있습니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// MongoDB 연산 실패
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 연산 실패
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 실패
    ///
    /// 필수 필드 누락, 대여료 범위 초과, 날짜 순서 오류,
    /// 잘못된 ObjectId 형식 등에서 발생합니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 요청한 리소스가 존재하지 않음
    #[error("Not found: {0}")]
    NotFound(String),

    /// 비즈니스 규칙 위반
    ///
    /// 중복 차량번호, 이미 대여 중인 차량에 대한 요청,
    /// 허용되지 않는 대여 상태 전이 등에서 발생합니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 사용자 식별 실패
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 외부 서비스(장소 검색 API 등) 호출 실패
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 예상하지 못한 내부 오류
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러에 대응하는 HTTP 상태 코드
    pub fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::ExternalServiceError(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        AppError::status_code(self)
    }

    /// 모든 에러를 `{"error": "..."}` JSON으로 응답합니다.
    ///
    /// 5xx 에러는 서버 로그에 남깁니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = AppError::status_code(self);

        if status.is_server_error() {
            log::error!("{}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}

/// 날짜 검증처럼 단일 규칙 검증 결과를 서비스에서 그대로 전파할 때 사용합니다.
impl From<validator::ValidationError> for AppError {
    fn from(error: validator::ValidationError) -> Self {
        match error.message {
            Some(message) => AppError::ValidationError(message.into_owned()),
            None => AppError::ValidationError(error.code.into_owned()),
        }
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(error: mongodb::error::Error) -> Self {
        AppError::DatabaseError(error.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let body = serde_json::to_string(&archive).context("이력 직렬화 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("대여료는 1원 이상이어야 합니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("차량을 찾을 수 없습니다".to_string());

        assert_eq!(error.error_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("이미 대여 중인 차량입니다".to_string());

        assert_eq!(error.error_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_external_service_error_is_bad_gateway() {
        let error = AppError::ExternalServiceError("장소 검색 실패".to_string());

        assert_eq!(error.error_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_infrastructure_errors_are_internal() {
        for error in [
            AppError::DatabaseError("timeout".to_string()),
            AppError::RedisError("refused".to_string()),
            AppError::InternalError("boom".to_string()),
        ] {
            assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_error_message_keeps_variant_prefix() {
        let error = AppError::NotFound("요청을 찾을 수 없습니다".to_string());

        assert_eq!(error.to_string(), "Not found: 요청을 찾을 수 없습니다");
    }

    #[test]
    fn test_single_validation_error_keeps_message() {
        let error: AppError = validator::ValidationError::new("invalid_date_range")
            .with_message("시작일은 종료일보다 늦을 수 없습니다".into())
            .into();

        assert_eq!(error.to_string(), "Validation error: 시작일은 종료일보다 늦을 수 없습니다");

        let error: AppError = validator::ValidationError::new("invalid_date").into();
        assert_eq!(error.to_string(), "Validation error: invalid_date");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        match app_result {
            Err(AppError::InternalError(msg)) => {
                assert!(msg.contains("Additional context"));
                assert!(msg.contains("original error"));
            }
            _ => panic!("Expected InternalError"),
        }
    }
}
