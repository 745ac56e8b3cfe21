//! 서버, 정적 파일, 외부 API 설정 관리 모듈
//!
//! 모든 값은 환경 변수에서 읽으며, 없거나 파싱에 실패하면 개발용 기본값을 사용합니다.

use std::env;
use log::warn;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        let value = env::var("ENVIRONMENT")
            .or_else(|_| env::var("NODE_ENV"))
            .unwrap_or_else(|_| "production".to_string());

        Self::from_str(&value)
    }

    /// 문자열에서 Environment를 생성합니다. 알 수 없는 값은 `Production`입니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// 환경 변수를 파싱하고, 실패하면 경고 후 기본값을 반환합니다.
fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse::<T>().unwrap_or_else(|e| {
            warn!("{} 파싱 실패: {}. 기본값 사용", key, e);
            default
        }),
        Err(_) => default,
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버 포트. 기본값: 8080 (`PORT`)
    pub fn port() -> u16 {
        env_or("PORT", 8080)
    }

    /// 서버 호스트. 기본값: "0.0.0.0" (`HOST`)
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// 워커 스레드 수. 기본값: 4 (`WORKERS`)
    pub fn workers() -> usize {
        env_or("WORKERS", 4usize).max(1)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 빌드된 SPA 정적 파일 설정
pub struct StaticConfig;

impl StaticConfig {
    /// 정적 파일 디렉터리. 기본값: "./build" (`STATIC_DIR`)
    pub fn dir() -> String {
        env::var("STATIC_DIR").unwrap_or_else(|_| "./build".to_string())
    }

    /// 클라이언트 라우팅용 fallback 파일. 기본값: "index.html" (`STATIC_INDEX`)
    pub fn index_file() -> String {
        env::var("STATIC_INDEX").unwrap_or_else(|_| "index.html".to_string())
    }
}

/// 장소 검색 API 설정
///
/// 기본값은 Kakao Local 키워드 검색 API입니다.
pub struct PlacesConfig;

impl PlacesConfig {
    pub const DEFAULT_API_URL: &'static str = "https://dapi.kakao.com/v2/local/search/keyword.json";

    /// 검색 API URL (`PLACES_API_URL`)
    pub fn api_url() -> String {
        env::var("PLACES_API_URL").unwrap_or_else(|_| Self::DEFAULT_API_URL.to_string())
    }

    /// REST API 키 (`PLACES_API_KEY`). 비어 있으면 인증 헤더 없이 호출합니다.
    pub fn api_key() -> Option<String> {
        env::var("PLACES_API_KEY").ok().filter(|key| !key.trim().is_empty())
    }

    /// 한 페이지 결과 수 (1-15). 기본값: 15 (`PLACES_PAGE_SIZE`)
    pub fn page_size() -> u32 {
        env_or("PLACES_PAGE_SIZE", 15u32).clamp(1, 15)
    }

    /// 요청 타임아웃(초). 기본값: 5 (`PLACES_TIMEOUT_SECS`)
    pub fn timeout_secs() -> u64 {
        env_or("PLACES_TIMEOUT_SECS", 5u64)
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// `RATE_LIMIT_PER_SECOND` (기본 100), `RATE_LIMIT_BURST_SIZE` (기본 200)
    pub fn from_env() -> Self {
        Self {
            per_second: env_or("RATE_LIMIT_PER_SECOND", 100u64).max(1),
            burst_size: env_or("RATE_LIMIT_BURST_SIZE", 200u32).max(1),
        }
    }
}

/// CORS 허용 Origin 설정
pub struct CorsConfig;

impl CorsConfig {
    /// 쉼표로 구분된 `CORS_ALLOWED_ORIGINS`. 기본값은 React 개발 서버입니다.
    pub fn allowed_origins() -> Vec<String> {
        let raw = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

        Self::parse_origins(&raw)
    }

    fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("DEV"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("stage"), Environment::Staging);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
        assert!(Environment::from_str("production").is_production());
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }

    #[test]
    fn test_places_defaults() {
        if env::var("PLACES_API_URL").is_err() {
            assert_eq!(PlacesConfig::api_url(), PlacesConfig::DEFAULT_API_URL);
        }
        let size = PlacesConfig::page_size();
        assert!((1..=15).contains(&size));
    }

    #[test]
    fn test_parse_origins() {
        let origins = CorsConfig::parse_origins(" http://a.com , ,http://b.com");

        assert_eq!(origins, vec!["http://a.com".to_string(), "http://b.com".to_string()]);
    }

    #[test]
    fn test_env_or_falls_back_on_parse_error() {
        // SAFETY: 이 테스트 전용 키이며 다른 테스트와 공유하지 않는다.
        unsafe { env::set_var("CARSHARE_TEST_BAD_NUMBER", "not-a-number") };

        assert_eq!(env_or("CARSHARE_TEST_BAD_NUMBER", 42u32), 42);
        assert_eq!(env_or("CARSHARE_TEST_MISSING_KEY", 7u64), 7);
    }
}
