//! # Configuration Module
//!
//! 환경 변수 기반 설정을 한 곳에서 관리합니다.
//! `.env` 파일은 `main`에서 `PROFILE`에 따라 먼저 로드됩니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! # 서버
//! HOST=0.0.0.0
//! PORT=8080
//! WORKERS=4
//!
//! # 저장소
//! MONGODB_URI=mongodb://localhost:27017
//! DATABASE_NAME=carshare_dev
//! REDIS_URL=redis://localhost:6379
//!
//! # 정적 파일 (빌드된 React 앱)
//! STATIC_DIR=./build
//!
//! # 장소 검색
//! PLACES_API_URL=https://dapi.kakao.com/v2/local/search/keyword.json
//! PLACES_API_KEY=your-rest-api-key
//!
//! # 요청 제한 / CORS
//! RATE_LIMIT_PER_SECOND=100
//! RATE_LIMIT_BURST_SIZE=200
//! CORS_ALLOWED_ORIGINS=http://localhost:3000
//! ```

pub mod data_config;

pub use data_config::*;
