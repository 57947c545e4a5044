//! API 라우트 설정 모듈
//!
//! # Routes
//!
//! | 메서드 | 경로 | 핸들러 |
//! |--------|------|--------|
//! | GET | `/health` | [`health_check`] |
//! | GET | `/auth/linkedin/login` | [`handlers::auth::linkedin_login`] |
//! | GET | `/auth/linkedin/callback` | [`handlers::auth::linkedin_callback`] |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(state))
//!     .configure(configure_all_routes);
//! ```

use crate::errors::AppError;
use crate::handlers;
use actix_web::web;
use chrono;
use serde_json::json;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // 쿼리 문자열 파싱 실패도 JSON 에러 본문으로 응답
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("Invalid query string: {}", err)).into()
    }));

    // Health check endpoint
    cfg.service(health_check);

    configure_linkedin_routes(cfg);
}

/// LinkedIn OAuth 라우트를 설정합니다
///
/// `redirect_uri`로 등록한 경로가 `/auth/linkedin/callback`과 일치해야 합니다.
///
/// ```bash
/// # 로그인 시작 (LinkedIn 인증 페이지로 302)
/// curl -i http://localhost:8080/auth/linkedin/login
///
/// # LinkedIn이 호출하는 콜백
/// curl -i "http://localhost:8080/auth/linkedin/callback?code=AQT...&state=..."
/// ```
fn configure_linkedin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth/linkedin")
            .service(handlers::auth::linkedin_login)
            .service(handlers::auth::linkedin_callback),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "linkedin_callback_service",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00+00:00"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
