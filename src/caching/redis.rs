//! # Redis 캐시 클라이언트
//!
//! 차량 등록 정보처럼 조회가 잦고 변경이 드문 문서를 JSON으로 캐싱합니다.
//! 연결은 멀티플렉싱되어 하나의 TCP 연결로 동시 요청을 처리합니다.
//!
//! 캐시는 보조 수단입니다. 리포지토리는 캐시 오류를 무시하고
//! 항상 MongoDB를 기준으로 동작합니다.

use redis::{AsyncCommands, Client};
use serde::{Serialize, de::DeserializeOwned};
use std::env;
use log::info;

/// 기본 캐시 TTL (초)
pub const DEFAULT_TTL_SECS: usize = 600;

/// 대여 상태를 가진 문서(차량 등록, 대여 이력)의 캐시 TTL (초)
///
/// 조회와 무효화가 엇갈려 이전 상태가 다시 캐시되더라도 이 시간 안에 사라집니다.
pub const STATUS_TTL_SECS: usize = 60;

/// Redis 캐시 클라이언트 래퍼
///
/// ```rust,ignore
/// let redis = RedisClient::new().await?;
/// redis.set_with_expiry("registration:6650f0...", &registration, DEFAULT_TTL_SECS).await?;
/// let cached: Option<Registration> = redis.get("registration:6650f0...").await?;
/// ```
#[derive(Clone)]
pub struct RedisClient {
    client: Client,
}

impl RedisClient {
    /// `REDIS_URL`(기본값 `redis://localhost:6379`)로 연결하고 `PING`으로 확인합니다.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let client = Client::open(Self::redis_url())?;

        let mut conn = client.get_multiplexed_async_connection().await?;
        redis::cmd("PING").query_async::<()>(&mut conn).await?;

        info!("✅ Redis 연결 성공");

        Ok(Self { client })
    }

    fn redis_url() -> String {
        env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string())
    }

    /// 키의 값을 JSON 역직렬화하여 반환합니다. 키가 없으면 `None`.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(key).await?;

        match value {
            Some(json) => {
                let deserialized = serde_json::from_str(&json)
                    .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Deserialization failed", e.to_string())))?;
                Ok(Some(deserialized))
            }
            None => Ok(None),
        }
    }

    /// TTL(초)과 함께 저장합니다.
    pub async fn set_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: usize) -> Result<(), redis::RedisError> {
        let json = Self::to_json(value)?;
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.set_ex(key, json, seconds as u64).await
    }

    pub async fn del(&self, key: &str) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.del(key).await
    }

    pub async fn del_multiple(&self, keys: &[String]) -> Result<(), redis::RedisError> {
        if keys.is_empty() {
            return Ok(());
        }
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.del(keys).await
    }

    /// 패턴에 맞는 키 목록 (`registration:*`)
    pub async fn keys(&self, pattern: &str) -> Result<Vec<String>, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.keys(pattern).await
    }

    /// 패턴에 맞는 키를 모두 삭제하고 삭제한 개수를 반환합니다.
    pub async fn invalidate_pattern(&self, pattern: &str) -> Result<usize, redis::RedisError> {
        let keys = self.keys(pattern).await?;
        let count = keys.len();
        self.del_multiple(&keys).await?;
        Ok(count)
    }

    fn to_json<T: Serialize>(value: &T) -> Result<String, redis::RedisError> {
        serde_json::to_string(value)
            .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Serialization failed", e.to_string())))
    }
}

impl Default for RedisClient {
    /// 연결 확인 없이 클라이언트만 만듭니다. URL이 잘못되면 패닉합니다.
    fn default() -> Self {
        let client = Client::open(Self::redis_url())
            .expect("Failed to create Redis client with default configuration");

        Self { client }
    }
}
