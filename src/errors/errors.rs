//! # Application Error Handling
//!
//! 콜백 서비스 전체에서 사용하는 에러 타입입니다.
//! 모든 에러는 핸들러 경계에서 `ResponseError`를 통해
//! `{"error": ..., "details": ...}` 형태의 JSON 응답으로 변환됩니다.
//!
//! ## 상태 코드 정책
//!
//! | 분류 | 변형 | 상태 코드 |
//! |------|------|-----------|
//! | 클라이언트 입력 오류 | `ValidationError` | 400 |
//! | 사용자가 동의를 거부함 (`code` 없음) | `ProviderDenied` | 400 |
//! | 액세스 토큰 누락 | `AuthenticationError` | 401 |
//! | 프로바이더 non-2xx 응답 | `UpstreamError` | 프로바이더 상태 코드 (4xx/5xx가 아니면 502) |
//! | 네트워크 오류 | `ExternalServiceError` | 500 |
//! | subject id 없는 프로바이더 응답 | `InvalidProviderResponse` | 500 |
//! | 잘못된 ID 토큰 / 내부 오류 | `MalformedIdToken`, `InternalError` | 500 |
//! | 저장소 오류 | `DatabaseError` | 500 |
//!
//! `details` 필드는 `expose_details`가 켜져 있을 때만 응답에 포함됩니다.
//! 비활성화 상태에서는 상세 내용이 로그에만 남습니다.

use actix_web::http::StatusCode;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Authorization denied by provider: {error}")]
    ProviderDenied {
        error: String,
        description: Option<String>,
    },

    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    #[error("Upstream provider returned {status}")]
    UpstreamError { status: u16, body: String },

    #[error("Malformed identity token: {0}")]
    MalformedIdToken(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Invalid provider response: {0}")]
    InvalidProviderResponse(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 노출되는 에러 메시지
    fn public_message(&self) -> String {
        match self {
            AppError::ValidationError(msg) => msg.clone(),
            AppError::ProviderDenied { error, .. } => format!("Authorization denied: {}", error),
            AppError::AuthenticationError(msg) => msg.clone(),
            AppError::UpstreamError { status, .. } => {
                format!("Identity provider request failed with status {}", status)
            }
            _ => "Internal Server Error".to_string(),
        }
    }

    /// 상세 정보 (프로바이더 응답 본문, 원본 에러 문자열)
    fn details(&self, expose_details: bool) -> Option<String> {
        match self {
            // 사용자 거부 사유는 프로바이더가 브라우저에 이미 전달한 값
            AppError::ProviderDenied { description, .. } => description.clone(),
            AppError::ValidationError(_) | AppError::AuthenticationError(_) => None,
            AppError::UpstreamError { body, .. } if expose_details => Some(body.clone()),
            _ if expose_details => Some(self.to_string()),
            _ => None,
        }
    }

    /// 에러를 JSON 응답으로 변환합니다.
    ///
    /// `expose_details`가 `false`이면 프로바이더 응답 본문과 원본 에러 문자열은
    /// 로그에만 남고 응답에는 포함되지 않습니다.
    pub fn to_http_response(&self, expose_details: bool) -> actix_web::HttpResponse {
        let status = actix_web::ResponseError::status_code(self);

        if status.is_server_error() {
            log::error!("요청 처리 실패 ({}): {}", status.as_u16(), self);
        } else {
            log::warn!("요청 거부 ({}): {}", status.as_u16(), self);
        }

        let body = match self.details(expose_details) {
            Some(details) => json!({ "error": self.public_message(), "details": details }),
            None => json!({ "error": self.public_message() }),
        };

        actix_web::HttpResponse::build(status).json(body)
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ProviderDenied { .. } => StatusCode::BAD_REQUEST,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::UpstreamError { status, .. } => StatusCode::from_u16(*status)
                .ok()
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        self.to_http_response(false)
    }
}

pub type AppResult<T> = Result<T, AppError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
