//! # Configuration Module
//!
//! 콜백 서비스의 설정을 담당하는 모듈입니다.
//! 모든 설정은 프로세스 시작 시 [`AppConfig::from_env`]로 한 번만 읽어
//! `web::Data<AppConfig>`로 핸들러와 서비스에 전달됩니다.
//! 비즈니스 로직에서는 환경 변수를 직접 읽지 않습니다.
//!
//! ## 모듈 구성
//!
//! - [`oauth_config`] - LinkedIn 자격 증명과 엔드포인트
//! - [`data_config`] - 실행 환경, 서버, 저장소, Rate Limiting
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 필수
//! export LINKEDIN_CLIENT_ID="your-client-id"
//! export LINKEDIN_CLIENT_SECRET="your-client-secret"
//! export REDIRECT_URI="https://findjob.click/auth/linkedin/callback"
//!
//! # 선택
//! export ENVIRONMENT="production"      # development, test, staging, production
//! export EXPOSE_ERROR_DETAILS="false"  # 기본값은 ENVIRONMENT에 따름
//! export SITE_NAME="FindJob.click"
//! export HTTP_TIMEOUT_SECS="10"
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export PROFILE_STORE="mongodb"       # mongodb | memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="findjob"
//! export PROFILE_COLLECTION="linkedin_users"
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! export CORS_ALLOWED_ORIGINS="https://findjob.click,https://www.findjob.click"
//! ```

pub mod data_config;
pub mod oauth_config;

pub use data_config::*;
pub use oauth_config::*;

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::AppError;

/// 애플리케이션 전체 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub oauth: LinkedInOAuthConfig,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub rate_limit: RateLimitConfig,
    /// 환영 페이지에 표시되는 사이트 이름
    pub site_name: String,
    /// 에러 응답에 프로바이더 응답 본문과 원본 에러 문자열을 포함할지 여부
    pub expose_error_details: bool,
    /// 외부 HTTP 호출 타임아웃
    pub http_timeout: Duration,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    ///
    /// 필수 값이 없으면 `AppError::ConfigError`를 반환합니다.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 키-값 조회 함수로부터 설정을 구성합니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let environment = Environment::from_str(&get("ENVIRONMENT").unwrap_or_else(|| "production".to_string()));

        let expose_error_details = match get("EXPOSE_ERROR_DETAILS") {
            Some(value) => parse_bool("EXPOSE_ERROR_DETAILS", &value)?,
            None => environment.exposes_error_details(),
        };

        let server_defaults = ServerConfig::default();
        let server = ServerConfig {
            host: get("HOST").unwrap_or(server_defaults.host),
            port: parse_or("PORT", get("PORT"), server_defaults.port)?,
            workers: parse_or("WORKERS", get("WORKERS"), server_defaults.workers)?,
            allowed_origins: get("CORS_ALLOWED_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|o| o.trim().to_string())
                        .filter(|o| !o.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
        };

        let db_defaults = DatabaseConfig::default();
        let database = DatabaseConfig {
            backend: match get("PROFILE_STORE") {
                Some(backend) => StoreBackend::from_str(&backend)?,
                None => db_defaults.backend,
            },
            uri: get("MONGODB_URI").unwrap_or(db_defaults.uri),
            database_name: get("DATABASE_NAME").unwrap_or(db_defaults.database_name),
            collection: get("PROFILE_COLLECTION").unwrap_or(db_defaults.collection),
        };

        let rate_defaults = RateLimitConfig::default();
        let rate_limit = RateLimitConfig {
            per_second: parse_or("RATE_LIMIT_PER_SECOND", get("RATE_LIMIT_PER_SECOND"), rate_defaults.per_second)?,
            burst_size: parse_or("RATE_LIMIT_BURST_SIZE", get("RATE_LIMIT_BURST_SIZE"), rate_defaults.burst_size)?,
        };

        let timeout_secs: u64 = parse_or("HTTP_TIMEOUT_SECS", get("HTTP_TIMEOUT_SECS"), 10)?;

        Ok(Self {
            environment,
            oauth: LinkedInOAuthConfig::from_lookup(&lookup)?,
            server,
            database,
            rate_limit,
            site_name: get("SITE_NAME").unwrap_or_else(|| "FindJob.click".to_string()),
            expose_error_details,
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// 테스트 및 로컬 실행용 설정 (메모리 저장소, 상세 에러 노출)
    pub fn for_oauth(oauth: LinkedInOAuthConfig) -> Self {
        Self {
            environment: Environment::Test,
            oauth,
            server: ServerConfig::default(),
            database: DatabaseConfig {
                backend: StoreBackend::Memory,
                ..DatabaseConfig::default()
            },
            rate_limit: RateLimitConfig::default(),
            site_name: "FindJob.click".to_string(),
            expose_error_details: true,
            http_timeout: Duration::from_secs(10),
        }
    }
}

fn parse_or<T: FromStr>(key: &str, value: Option<String>, default: T) -> Result<T, AppError>
where
    T::Err: std::fmt::Display,
{
    match value {
        Some(raw) => raw
            .parse::<T>()
            .map_err(|e| AppError::ConfigError(format!("{} 파싱 실패 ({}): {}", key, raw, e))),
        None => Ok(default),
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, AppError> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(AppError::ConfigError(format!("{} 값이 올바르지 않습니다: {}", key, other))),
    }
}
