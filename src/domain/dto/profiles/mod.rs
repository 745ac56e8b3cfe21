//! 사용자 프로필(마이페이지) DTO

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
