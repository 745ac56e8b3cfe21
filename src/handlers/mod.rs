//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 받아 DTO를 검증하고 싱글톤 서비스에 위임하는 핸들러 모음입니다.
//!
//! ```text
//! Client (React SPA)
//!     │ HTTP Request/Response
//!     ▼
//! Handlers (이 모듈)      ← Web Layer
//!     ▼
//! Services               ← 비즈니스 로직, 대여 상태 전이
//!     ▼
//! Repositories           ← MongoDB + Redis
//! ```
//!
//! 모든 핸들러는 `AppResult<HttpResponse>`를 반환하며,
//! 에러는 `AppError`의 `ResponseError` 구현이 JSON으로 바꿉니다.
//!
//! | 모듈 | 경로 |
//! |------|------|
//! | `registrations` | `/api/registrations` |
//! | `requests` | `/api/requests` |
//! | `archives` | `/api/archives` |
//! | `profiles` | `/api/users` |
//! | `places` | `/api/places` |
//!
//! 사용자 식별은 외부 ID 공급자가 맡습니다. 클라이언트는 공급자가 발급한
//! `uid`를 본문(`hostId`, `guestId`)이나 경로, 쿼리로 전달합니다.

pub mod registrations;
pub mod requests;
pub mod archives;
pub mod profiles;
pub mod places;
