//! 도메인 모델
//!
//! - [`rental_status`] - 차량/요청/이력이 공유하는 대여 상태와 전이 규칙
//! - [`place`] - 외부 장소 검색 API(Kakao Local) 응답 모델

pub mod rental_status;
pub mod place;

pub use rental_status::RentalStatus;
pub use place::{KakaoKeywordResponse, KakaoPlace, KakaoMeta};
