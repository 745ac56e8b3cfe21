//! # Data Transfer Objects
//!
//! HTTP 경계에서 사용하는 요청/응답 타입입니다.
//! 모든 JSON 필드는 프론트엔드 문서와 같은 camelCase(`carNumber`, `hostId`)를 사용합니다.
//!
//! 요청 DTO는 `validator::Validate`를 구현하고, 핸들러가 서비스 호출 전에 검증합니다.

pub mod registrations;
pub mod requests;
pub mod archives;
pub mod profiles;
pub mod places;
