//! # 장소 검색 서비스
//!
//! Kakao Local 키워드 검색 API를 감쌉니다.
//!
//! ```text
//! GET {PLACES_API_URL}?query={keyword}&page={page}&size={PLACES_PAGE_SIZE}
//! Authorization: KakaoAK {PLACES_API_KEY}
//! ```
//!
//! 2xx가 아니거나 본문을 해석할 수 없으면 `ExternalServiceError`(502)입니다.

use std::time::{Duration, Instant};
use log::debug;
use singleton_macro::service;
use crate::{
    config::PlacesConfig,
    core::errors::{AppError, AppResult, ErrorContext},
    domain::dto::places::PlaceSearchResponse,
    domain::models::KakaoKeywordResponse,
};

/// Kakao Local API가 허용하는 최대 페이지
const MAX_PAGE: u32 = 45;

#[service(name = "place")]
pub struct PlaceService {}

impl PlaceService {
    /// 키워드로 장소를 검색합니다.
    ///
    /// * `Err(AppError::ValidationError)` - 빈 검색어
    /// * `Err(AppError::ExternalServiceError)` - API 호출 실패, 비정상 응답
    pub async fn search(&self, keyword: &str, page: Option<u32>) -> AppResult<PlaceSearchResponse> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(AppError::ValidationError("검색어를 입력해주세요".to_string()));
        }

        let page = page.unwrap_or(1).clamp(1, MAX_PAGE);
        let url = build_search_url(&PlacesConfig::api_url(), keyword, page, PlacesConfig::page_size());

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(PlacesConfig::timeout_secs()))
            .build()
            .context("HTTP 클라이언트 생성 실패")?;

        let mut request = client.get(&url);
        if let Some(api_key) = PlacesConfig::api_key() {
            request = request.header(reqwest::header::AUTHORIZATION, format!("KakaoAK {}", api_key));
        }

        let started = Instant::now();
        let response = request
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("장소 검색 요청 실패: {}", e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("장소 검색 응답 읽기 실패: {}", e)))?;

        debug!("장소 검색 '{}' page={} → {} ({:?})", keyword, page, status, started.elapsed());

        let parsed = interpret_response(status, &body)?;

        Ok(PlaceSearchResponse::from_kakao(keyword.to_string(), page, parsed))
    }
}

fn build_search_url(base_url: &str, keyword: &str, page: u32, size: u32) -> String {
    format!(
        "{}?query={}&page={}&size={}",
        base_url,
        urlencoding::encode(keyword),
        page,
        size
    )
}

/// HTTP 상태와 본문으로 검색 결과를 해석합니다.
fn interpret_response(status: u16, body: &str) -> AppResult<KakaoKeywordResponse> {
    if !(200..300).contains(&status) {
        return Err(AppError::ExternalServiceError(format!(
            "장소 검색 실패 (HTTP {}): {}",
            status,
            body.chars().take(200).collect::<String>()
        )));
    }

    serde_json::from_str(body)
        .map_err(|e| AppError::ExternalServiceError(format!("장소 검색 응답 파싱 실패: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_BODY: &str = r#"{
        "documents": [
            {
                "id": "26338954",
                "place_name": "을왕리해수욕장",
                "address_name": "인천 중구 을왕동",
                "road_address_name": "",
                "category_name": "여행 > 관광,명소 > 해수욕장,해변",
                "phone": "032-760-7114",
                "x": "126.372",
                "y": "37.447",
                "place_url": "http://place.map.kakao.com/26338954"
            }
        ],
        "meta": { "total_count": 1, "pageable_count": 1, "is_end": true }
    }"#;

    #[test]
    fn test_interpret_success_response() {
        let parsed = interpret_response(200, SAMPLE_BODY).unwrap();
        let response = PlaceSearchResponse::from_kakao("해수욕장".to_string(), 1, parsed);

        assert_eq!(response.places.len(), 1);
        assert_eq!(response.places[0].name, "을왕리해수욕장");
        assert_eq!(response.places[0].phone, "032-760-7114");
        assert_eq!(response.total_count, 1);
        assert!(response.is_end);
    }

    #[test]
    fn test_interpret_http_failure() {
        let result = interpret_response(401, r#"{"errorType":"AccessDeniedError"}"#);

        match result {
            Err(AppError::ExternalServiceError(msg)) => assert!(msg.contains("401")),
            _ => panic!("Expected ExternalServiceError"),
        }
    }

    #[test]
    fn test_interpret_malformed_body() {
        assert!(matches!(
            interpret_response(200, "<html>maintenance</html>"),
            Err(AppError::ExternalServiceError(_))
        ));
    }

    #[test]
    fn test_search_url_encodes_keyword() {
        let url = build_search_url("https://dapi.kakao.com/v2/local/search/keyword.json", "바다 카페", 2, 15);

        assert_eq!(
            url,
            "https://dapi.kakao.com/v2/local/search/keyword.json?query=%EB%B0%94%EB%8B%A4%20%EC%B9%B4%ED%8E%98&page=2&size=15"
        );
    }
}
