//! # Core Module
//!
//! 서비스 전역에서 공유하는 기반 기능입니다.
//!
//! - [`registry`] - `#[service]` / `#[repository]` 싱글톤을 보관하는 `ServiceLocator`
//! - [`errors`] - `AppError`와 HTTP 응답 매핑
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//! use crate::core::registry::ServiceLocator;
//!
//! ServiceLocator::set(database);
//! ServiceLocator::initialize_all().await?;
//! ```

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
