//! # Domain Layer Module
//!
//! 카셰어링 도메인의 핵심 타입을 모아 둔 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - MongoDB에 저장되는 문서 (차량 등록, 대여 요청, 대여 이력, 프로필)
//! ├── dto       - HTTP 요청/응답 계약 (camelCase JSON)
//! └── models    - 대여 상태, 외부 장소 검색 API 응답 모델
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db, caching)
//! ```
//!
//! ## 대여 흐름
//!
//! 1. 호스트가 차량을 등록합니다 (`Registration`, 상태 `대기중`).
//! 2. 게스트가 대여를 요청합니다 (`RentalRequest`, 상태 `대기중`).
//! 3. 호스트가 요청을 승인하면 차량은 `사용중`이 되고 `Archive`가 생성됩니다.
//! 4. 반납하면 이력은 `완료`, 차량은 다시 `대기중`이 됩니다.
//! 5. 게스트는 완료된 이력에 1-5점 평점을 남기거나 목록에서 숨길 수 있습니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use models::*;
