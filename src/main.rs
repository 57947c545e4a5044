//! LinkedIn OAuth 콜백 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! 설정을 읽고 프로필 저장소를 연결한 뒤 콜백 엔드포인트를 제공합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use linkedin_callback_service::config::{AppConfig, ServerConfig, StoreBackend};
use linkedin_callback_service::core::AppState;
use linkedin_callback_service::db::Database;
use linkedin_callback_service::repositories::profiles::{
    InMemoryUserProfileStore, MongoUserProfileRepository, UserProfileStore,
};
use linkedin_callback_service::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 LinkedIn 콜백 서비스 시작중...");

    let config = AppConfig::from_env().map_err(|e| {
        error!("설정 로드 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    info!(
        "실행 환경: {:?}, userinfo_mode: {}, 에러 상세 노출: {}",
        config.environment,
        config.oauth.userinfo_mode.as_str(),
        config.expose_error_details
    );

    let store = initialize_profile_store(&config).await?;

    let state = AppState::new(config, store).map_err(|e| {
        error!("서비스 초기화 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(state).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패, Rate Limiting 설정 오류 또는 서버 실행 오류
async fn start_http_server(state: AppState) -> std::io::Result<()> {
    let server_config = state.config.server.clone();
    let bind_address = server_config.bind_address();
    let workers = server_config.workers.max(1);

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 OAuth callback: http://{}/auth/linkedin/callback", bind_address);
    info!("워커 스레드: {}개", workers);

    // Rate Limiting 설정
    let rate_limit = state.config.rate_limit.clone();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit.per_second)
        .burst_size(rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            error!("Rate Limiting 설정이 올바르지 않습니다: {:?}", rate_limit);
            std::io::Error::other("invalid rate limit configuration")
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit.per_second,
        rate_limit.burst_size
    );

    let data = web::Data::new(state);

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&server_config))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(data.clone())
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(workers)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 파일이 없으면 프로세스 환경 변수만 사용합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => eprintln!(".env.prod 파일 로드 됨"),
            Err(e) => eprintln!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => eprintln!(".env.dev 파일 로드 됨"),
            Err(e) => eprintln!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=linkedin_callback_service::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// 설정된 백엔드로 프로필 저장소를 초기화합니다
///
/// MongoDB 연결 실패 시 서버를 시작하지 않습니다.
async fn initialize_profile_store(config: &AppConfig) -> std::io::Result<Arc<dyn UserProfileStore>> {
    match config.database.backend {
        StoreBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::new(&config.database).await.map_err(|e| {
                error!("데이터베이스 연결 실패: {}", e);
                std::io::Error::other(e.to_string())
            })?;

            info!(
                "✅ 프로필 컬렉션: {}.{}",
                database.database_name(),
                config.database.collection
            );

            Ok(Arc::new(MongoUserProfileRepository::new(&database, &config.database.collection)))
        }
        StoreBackend::Memory => {
            warn!("⚠️ 메모리 프로필 저장소 사용 중: 재시작 시 데이터가 사라집니다");
            Ok(Arc::new(InMemoryUserProfileStore::new()))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// `CORS_ALLOWED_ORIGINS`에 나열된 Origin만 허용합니다.
/// 비어 있으면 교차 출처 요청을 허용하지 않습니다 (브라우저 리다이렉트는 영향 없음).
fn configure_cors(server: &ServerConfig) -> Cors {
    server
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
