//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정리, 태그 정규화
//! - [`date_utils`] - `YYYY-MM-DD` 날짜 파싱과 기간 검증, 응답용 시각 포맷
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::normalize_tags;
//! use crate::utils::date_utils::validate_date_range;
//!
//! let tags = normalize_tags(vec![" 캠핑 ".into(), "캠핑".into()]);
//! validate_date_range(Some("2026-11-01"), Some("2026-11-03"))?;
//! ```

pub mod string_utils;
pub mod date_utils;
