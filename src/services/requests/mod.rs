//! 대여 요청 서비스 모듈
//!
//! 요청 생성부터 호스트 승인까지의 흐름을 담당합니다.

pub mod request_service;

pub use request_service::RequestService;
