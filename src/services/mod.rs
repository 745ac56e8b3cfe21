//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! `#[service]` 매크로로 싱글톤 관리되며, 필드에 선언한 리포지토리가 자동 주입됩니다.
//!
//! | 서비스 | 역할 |
//! |--------|------|
//! | [`RegistrationService`](registrations::RegistrationService) | 차량 등록/수정/삭제 |
//! | [`RequestService`](requests::RequestService) | 대여 요청, 승인/거절 |
//! | [`ArchiveService`](archives::ArchiveService) | 대여 이력, 반납, 평점 |
//! | [`ProfileService`](profiles::ProfileService) | 마이페이지 프로필 |
//! | [`PlaceService`](places::PlaceService) | 장소 검색, 테마별 추천 검색어 |
//!
//! ```rust,ignore
//! use crate::services::requests::RequestService;
//!
//! let archive = RequestService::instance().approve_request(&id, &actor).await?;
//! ```

pub mod registrations;
pub mod requests;
pub mod archives;
pub mod profiles;
pub mod places;
