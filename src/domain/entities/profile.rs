//! 사용자 프로필 엔티티 (마이페이지)
//!
//! 인증 정보는 외부 ID 공급자가 관리하고, 여기에는 `uid`에 연결된
//! 표시용 정보만 저장합니다. 컬렉션은 `users`입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// ID 공급자가 발급한 사용자 ID (unique)
    pub uid: String,
    pub name: String,
    /// 생년월일 (`YYYY-MM-DD`)
    pub birth: String,
    pub address: String,
    /// 연락용 이메일
    pub email: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Profile {
    pub fn new(uid: String, name: String, birth: String, address: String, email: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            uid,
            name,
            birth,
            address,
            email,
            created_at: now,
            updated_at: now,
        }
    }
}
