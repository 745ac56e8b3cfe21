//! 대여 상태 모델
//!
//! 차량 등록, 대여 요청, 대여 이력이 공유하는 상태 라벨입니다.
//! 저장소와 JSON에는 한국어 라벨(`대기중`, `사용중`, `완료`)로 기록됩니다.
//!
//! ```text
//!   대기중 ──approve──▶ 사용중 ──complete──▶ 완료
//!     ▲                                      │
//!     └──────────── relist (차량만) ─────────┘
//! ```

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::core::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RentalStatus {
    /// 등록/요청 후 대기 중
    #[serde(rename = "대기중")]
    Pending,
    /// 대여 진행 중
    #[serde(rename = "사용중")]
    InUse,
    /// 반납 완료
    #[serde(rename = "완료")]
    Completed,
}

impl RentalStatus {
    /// 저장소에 기록되는 라벨
    pub fn as_str(&self) -> &'static str {
        match self {
            RentalStatus::Pending => "대기중",
            RentalStatus::InUse => "사용중",
            RentalStatus::Completed => "완료",
        }
    }

    /// 허용되는 상태 전이인지 확인합니다.
    ///
    /// `완료 → 대기중`은 반납된 차량을 다시 대여 가능 상태로 돌리는 경우입니다.
    pub fn can_transition_to(&self, next: RentalStatus) -> bool {
        matches!(
            (self, next),
            (RentalStatus::Pending, RentalStatus::InUse)
                | (RentalStatus::InUse, RentalStatus::Completed)
                | (RentalStatus::Completed, RentalStatus::Pending)
        )
    }

    /// 전이가 허용되지 않으면 `ConflictError`를 반환합니다.
    pub fn ensure_transition(&self, next: RentalStatus) -> Result<(), AppError> {
        if self.can_transition_to(next) {
            Ok(())
        } else {
            Err(AppError::ConflictError(format!(
                "'{}' 상태에서 '{}' 상태로 변경할 수 없습니다",
                self, next
            )))
        }
    }
}

impl fmt::Display for RentalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RentalStatus {
    type Err = AppError;

    /// 한국어 라벨과 영문 별칭을 모두 받습니다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "대기중" => Ok(RentalStatus::Pending),
            "사용중" => Ok(RentalStatus::InUse),
            "완료" => Ok(RentalStatus::Completed),
            other => match other.to_lowercase().as_str() {
                "pending" => Ok(RentalStatus::Pending),
                "in_use" | "inuse" | "active" => Ok(RentalStatus::InUse),
                "completed" | "done" => Ok(RentalStatus::Completed),
                _ => Err(AppError::ValidationError(format!("알 수 없는 상태입니다: {}", s))),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_to_korean_label() {
        assert_eq!(serde_json::to_string(&RentalStatus::Pending).unwrap(), "\"대기중\"");
        assert_eq!(serde_json::to_string(&RentalStatus::InUse).unwrap(), "\"사용중\"");

        let parsed: RentalStatus = serde_json::from_str("\"완료\"").unwrap();
        assert_eq!(parsed, RentalStatus::Completed);
    }

    #[test]
    fn test_lifecycle_transitions() {
        use RentalStatus::*;

        assert!(Pending.can_transition_to(InUse));
        assert!(InUse.can_transition_to(Completed));
        assert!(Completed.can_transition_to(Pending));

        assert!(!Pending.can_transition_to(Completed));
        assert!(!InUse.can_transition_to(Pending));
        assert!(!Completed.can_transition_to(InUse));
        assert!(!Pending.can_transition_to(Pending));
    }

    #[test]
    fn test_ensure_transition_reports_conflict() {
        let result = RentalStatus::Completed.ensure_transition(RentalStatus::InUse);

        match result {
            Err(AppError::ConflictError(msg)) => {
                assert!(msg.contains("완료"));
                assert!(msg.contains("사용중"));
            }
            _ => panic!("Expected ConflictError"),
        }
    }

    #[test]
    fn test_from_str_accepts_aliases() {
        assert_eq!("대기중".parse::<RentalStatus>().unwrap(), RentalStatus::Pending);
        assert_eq!("IN_USE".parse::<RentalStatus>().unwrap(), RentalStatus::InUse);
        assert_eq!(" completed ".parse::<RentalStatus>().unwrap(), RentalStatus::Completed);
        assert!("returned".parse::<RentalStatus>().is_err());
    }
}
