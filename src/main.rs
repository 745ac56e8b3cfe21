//! 카셰어링 백엔드 메인 애플리케이션
//!
//! Actix-web HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! MongoDB, Redis 연결을 설정한 뒤 `/api` REST API와
//! 빌드된 React SPA 정적 파일을 같은 서버에서 제공합니다.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use actix_cors::Cors;
use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use carshare_backend::caching::redis::RedisClient;
use carshare_backend::config::{CorsConfig, Environment, RateLimitConfig, ServerConfig, StaticConfig};
use carshare_backend::core::registry::ServiceLocator;
use carshare_backend::db::Database;
use carshare_backend::repositories::archives::ArchiveRepository;
use carshare_backend::repositories::profiles::ProfileRepository;
use carshare_backend::repositories::registrations::RegistrationRepository;
use carshare_backend::repositories::requests::RequestRepository;
use carshare_backend::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚗 카셰어링 백엔드 시작중... ({:?})", Environment::current());

    let (database, redis_client) = initialize_data_stores().await?;

    ServiceLocator::set(database);
    ServiceLocator::set(redis_client);

    ServiceLocator::initialize_all()
        .await
        .map_err(|e| io::Error::other(format!("서비스 초기화 실패: {}", e)))?;

    ensure_indexes().await?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server().await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 미들웨어 순서: Rate Limiting → CORS → 접근 로그 → 경로 정규화.
/// `/api` 라우트를 먼저 등록하고 나머지 경로는 SPA 정적 파일로 넘깁니다.
async fn start_http_server() -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/api/health", bind_address);
    info!("📁 정적 파일: {}", StaticConfig::dir());

    let rate_limit = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit.per_second)
        .burst_size(rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit.per_second,
        rate_limit.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();

    HttpServer::new(move || {
        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
            .service(spa_files())
    })
        .bind(&bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 빌드된 SPA 정적 파일 서비스
///
/// 존재하지 않는 경로는 클라이언트 라우팅을 위해 `index.html`로 응답합니다.
fn spa_files() -> Files {
    let static_dir = StaticConfig::dir();
    let index_file = StaticConfig::index_file();
    let index_path: PathBuf = [static_dir.as_str(), index_file.as_str()].iter().collect();

    Files::new("/", &static_dir)
        .index_file(index_file)
        .default_handler(fn_service(move |req: ServiceRequest| {
            let index_path = index_path.clone();
            async move {
                let (req, _) = req.into_parts();
                let file = NamedFile::open_async(&index_path).await?;
                let res = file.into_response(&req);
                Ok(ServiceResponse::new(req, res))
            }
        }))
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전이므로 결과는 표준 에러로 출력합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    match loaded {
        Ok(file) => eprintln!("[{}] {} 파일 로드 됨", profile, file),
        Err(e) => eprintln!("[{}] 환경 파일 로드 실패: {}", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// ```bash
/// RUST_LOG=carshare_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// MongoDB와 Redis 연결을 초기화합니다
async fn initialize_data_stores() -> io::Result<(Arc<Database>, Arc<RedisClient>)> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new()
        .await
        .map_err(|e| {
            error!("데이터베이스 연결 실패: {}", e);
            io::Error::other(e.to_string())
        })?;

    let redis_client = RedisClient::new()
        .await
        .map_err(|e| {
            error!("Redis 연결 실패: {}", e);
            io::Error::other(e.to_string())
        })?;

    info!("✅ Redis 연결 성공");

    Ok((Arc::new(database), Arc::new(redis_client)))
}

/// 컬렉션 인덱스를 생성합니다
///
/// 차량번호 유일성과 게스트당 차량별 요청 1건 제약은 유니크 인덱스에 의존하므로
/// 생성에 실패하면 서버를 시작하지 않습니다.
async fn ensure_indexes() -> io::Result<()> {
    let to_io = |e: carshare_backend::core::errors::AppError| io::Error::other(e.to_string());

    RegistrationRepository::instance().create_indexes().await.map_err(to_io)?;
    RequestRepository::instance().create_indexes().await.map_err(to_io)?;
    ArchiveRepository::instance().create_indexes().await.map_err(to_io)?;
    ProfileRepository::instance().create_indexes().await.map_err(to_io)?;

    info!("🗂️ 인덱스 생성 완료");
    Ok(())
}

/// CORS 설정을 구성합니다
///
/// 허용 Origin은 `CORS_ALLOWED_ORIGINS`에서 읽습니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}
