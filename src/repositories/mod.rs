//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! `#[repository]` 매크로로 싱글톤 관리되는 리포지토리들을 제공합니다.
//! MongoDB를 주 저장소로 사용하고, ID 단위 조회는 Redis에 캐싱합니다.
//!
//! | 리포지토리 | 컬렉션 | 캐시 |
//! |------------|--------|------|
//! | [`RegistrationRepository`](registrations::RegistrationRepository) | `registrations` | ID |
//! | [`RequestRepository`](requests::RequestRepository) | `requests` | 없음 |
//! | [`ArchiveRepository`](archives::ArchiveRepository) | `archives` | ID |
//! | [`ProfileRepository`](profiles::ProfileRepository) | `users` | uid |
//!
//! 상태가 바뀌는 쓰기는 모두 현재 상태를 조건으로 거는 단일 문서 연산
//! (`find_one_and_update`, `delete_one`)이라 동시 요청에서도 한쪽만 성공합니다.
//!
//! ```rust,ignore
//! use crate::repositories::registrations::RegistrationRepository;
//!
//! let repo = RegistrationRepository::instance();
//! let registration = repo.find_by_id("6650f0a1b2c3d4e5f6a7b8c9").await?;
//! ```

use mongodb::bson::{oid::ObjectId, Bson};
use mongodb::error::{ErrorKind, WriteFailure};
use crate::core::errors::{AppError, AppResult};

pub mod registrations;
pub mod requests;
pub mod archives;
pub mod profiles;

/// MongoDB duplicate key 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 16진수 문자열을 ObjectId로 파싱합니다.
pub(crate) fn parse_object_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
}

/// 대소문자가 섞인 ID를 소문자 16진수 표기로 맞춥니다.
///
/// 문자열로 저장하거나 캐시 키로 쓰는 ID는 모두 이 표기를 사용합니다.
pub(crate) fn canonical_id(id: &str) -> AppResult<String> {
    Ok(parse_object_id(id)?.to_hex())
}

/// unique 인덱스 위반인지 확인합니다.
pub(crate) fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

/// `insert_one` 결과의 `inserted_id`에서 ObjectId를 꺼냅니다.
pub(crate) fn inserted_object_id(inserted_id: &Bson) -> AppResult<ObjectId> {
    inserted_id
        .as_object_id()
        .ok_or_else(|| AppError::InternalError("생성된 문서 ID를 확인할 수 없습니다".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id() {
        let id = ObjectId::new();

        assert_eq!(parse_object_id(&id.to_hex()).unwrap(), id);

        match parse_object_id("not-an-object-id") {
            Err(AppError::ValidationError(msg)) => assert_eq!(msg, "유효하지 않은 ID 형식입니다"),
            _ => panic!("Expected ValidationError"),
        }
    }

    #[test]
    fn test_canonical_id_lowercases_hex() {
        let upper = canonical_id("6650F0A1B2C3D4E5F6A7B8C9").unwrap();
        let lower = canonical_id("6650f0a1b2c3d4e5f6a7b8c9").unwrap();

        assert_eq!(upper, "6650f0a1b2c3d4e5f6a7b8c9");
        assert_eq!(upper, lower);
        assert!(matches!(canonical_id("6650F0A1"), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_inserted_object_id() {
        let id = ObjectId::new();

        assert_eq!(inserted_object_id(&Bson::ObjectId(id)).unwrap(), id);
        assert!(matches!(
            inserted_object_id(&Bson::String("custom".to_string())),
            Err(AppError::InternalError(_))
        ));
    }
}
