//! 캐싱 계층 모듈
//!
//! Redis 기반 JSON 캐시를 제공합니다. 리포지토리는 ID 단위로 문서를 캐싱하고
//! 쓰기 후 해당 키를 무효화합니다.
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
