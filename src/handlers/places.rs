//! # Place Recommendation HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/places/search?keyword=&page=` | 키워드 장소 검색 | 200 OK / 502 |
//! | `GET` | `/api/places/themes` | 지원 테마 목록 | 200 OK |
//! | `GET` | `/api/places/themes/{theme}` | 테마별 추천 검색어 | 200 OK / 404 |

use actix_web::{web, HttpResponse, get};
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::places::{PlaceSearchQuery, ThemeKeywordsResponse};
use crate::services::places::{recommended_keywords, themes, PlaceService};

#[get("/search")]
pub async fn search_places(
    query: web::Query<PlaceSearchQuery>,
) -> AppResult<HttpResponse> {
    let service = PlaceService::instance();
    let result = service.search(&query.keyword, query.page).await?;

    Ok(HttpResponse::Ok().json(result))
}

#[get("/themes")]
pub async fn list_themes() -> AppResult<HttpResponse> {
    let themes: Vec<&str> = themes().collect();

    Ok(HttpResponse::Ok().json(themes))
}

/// 외부 API를 호출하지 않는 고정 테이블 조회입니다.
#[get("/themes/{theme}")]
pub async fn theme_keywords(
    theme: web::Path<String>,
) -> AppResult<HttpResponse> {
    let theme = theme.into_inner();
    let keywords = recommended_keywords(&theme)
        .ok_or_else(|| AppError::NotFound(format!("지원하지 않는 테마입니다: {}", theme)))?;

    Ok(HttpResponse::Ok().json(ThemeKeywordsResponse {
        theme: theme.trim().to_string(),
        keywords: keywords.iter().map(|keyword| keyword.to_string()).collect(),
    }))
}
