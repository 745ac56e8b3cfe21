//! 카셰어링 대여 백엔드
//!
//! 호스트가 차량을 등록하고, 게스트가 대여를 요청하고, 승인된 대여가
//! 이력으로 남아 반납과 평점까지 이어지는 흐름을 제공하는 REST 서비스입니다.
//!
//! # Features
//!
//! - **차량 등록**: 등록, 조회, 수정, 삭제 (`대기중`일 때만 변경 가능)
//! - **대여 요청**: 요청, 취소, 승인, 거절 (승인은 조건부 상태 변경으로 한 건만 성공)
//! - **대여 이력**: 반납, 1-5점 평점, 목록 숨김
//! - **마이페이지**: 사용자 프로필
//! - **장소 추천**: 외부 키워드 검색 API, 테마별 추천 검색어
//! - **싱글톤 DI**: `singleton_macro` 기반 서비스/리포지토리 주입
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /api REST 엔드포인트 + SPA 정적 파일
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증, 응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 대여 상태 전이, 비즈니스 규칙
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use carshare_backend::services::requests::RequestService;
//!
//! let archive = RequestService::instance()
//!     .approve_request(&request_id, &ActorQuery::default())
//!     .await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
