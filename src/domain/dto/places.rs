//! 장소 검색/추천 DTO

use serde::{Deserialize, Serialize};
use crate::domain::models::{KakaoKeywordResponse, KakaoPlace};

/// `GET /api/places/search?keyword=&page=`
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceSearchQuery {
    #[serde(default)]
    pub keyword: String,
    pub page: Option<u32>,
}

/// 검색된 장소 한 건
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceResponse {
    pub id: String,
    pub name: String,
    pub address: String,
    pub road_address: String,
    pub category: String,
    pub phone: String,
    /// 경도
    pub x: String,
    /// 위도
    pub y: String,
    pub url: String,
}

impl From<KakaoPlace> for PlaceResponse {
    fn from(place: KakaoPlace) -> Self {
        Self {
            id: place.id,
            name: place.place_name,
            address: place.address_name,
            road_address: place.road_address_name,
            category: place.category_name,
            phone: place.phone,
            x: place.x,
            y: place.y,
            url: place.place_url,
        }
    }
}

/// 검색 결과 페이지
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceSearchResponse {
    pub keyword: String,
    pub page: u32,
    pub total_count: u32,
    pub is_end: bool,
    pub places: Vec<PlaceResponse>,
}

impl PlaceSearchResponse {
    pub fn from_kakao(keyword: String, page: u32, response: KakaoKeywordResponse) -> Self {
        Self {
            keyword,
            page,
            total_count: response.meta.total_count,
            is_end: response.meta.is_end,
            places: response.documents.into_iter().map(PlaceResponse::from).collect(),
        }
    }
}

/// 테마별 추천 검색어
#[derive(Debug, Clone, Serialize)]
pub struct ThemeKeywordsResponse {
    pub theme: String,
    pub keywords: Vec<String>,
}
