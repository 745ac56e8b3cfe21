//! Database Connection Module
//!
//! MongoDB 연결을 관리합니다. 차량 등록(`registrations`), 대여 요청(`requests`),
//! 대여 이력(`archives`), 사용자 프로필(`users`) 컬렉션이 모두 이 연결을 사용합니다.
//!
//! ```bash
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="carshare_dev"
//! ```

use mongodb::{Client, options::ClientOptions};
use std::env;
use log::info;

/// MongoDB 데이터베이스 연결 래퍼
///
/// `main`에서 생성해 `ServiceLocator::set`으로 등록하면
/// `#[repository]` 리포지토리들에 자동으로 주입됩니다.
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 환경 변수로 클라이언트를 만들고 `ping`으로 연결을 확인합니다.
    ///
    /// ## 환경 변수
    /// - `MONGODB_URI` (기본값: "mongodb://localhost:27017")
    /// - `DATABASE_NAME` (기본값: "carshare_dev")
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let mongodb_uri = env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        let database_name = env::var("DATABASE_NAME")
            .unwrap_or_else(|_| "carshare_dev".to_string());

        let mut client_options = ClientOptions::parse(&mongodb_uri).await?;
        client_options.app_name = Some("carshare_backend".to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(&database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name,
        })
    }

    /// 리포지토리가 컬렉션에 접근할 때 사용하는 데이터베이스 핸들
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }
}
