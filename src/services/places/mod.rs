//! 장소 추천 서비스 모듈
//!
//! - [`place_service`] - 외부 키워드 검색 API 래퍼
//! - [`theme_keywords`] - 테마별 추천 검색어 정적 테이블

pub mod place_service;
pub mod theme_keywords;

pub use place_service::PlaceService;
pub use theme_keywords::{recommended_keywords, themes};
