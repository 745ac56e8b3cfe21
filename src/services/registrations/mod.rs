//! 차량 등록 서비스 모듈

pub mod registration_service;

pub use registration_service::RegistrationService;
