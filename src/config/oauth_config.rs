//! # LinkedIn OAuth 설정
//!
//! LinkedIn OAuth 2.0 클라이언트 자격 증명과 엔드포인트 설정입니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! # 필수
//! LINKEDIN_CLIENT_ID=your-client-id
//! LINKEDIN_CLIENT_SECRET=your-client-secret
//! REDIRECT_URI=https://findjob.click/auth/linkedin/callback
//!
//! # 선택 (기본값은 LinkedIn 운영 엔드포인트)
//! LINKEDIN_AUTHORIZE_URI=https://www.linkedin.com/oauth/v2/authorization
//! LINKEDIN_TOKEN_URI=https://www.linkedin.com/oauth/v2/accessToken
//! LINKEDIN_USERINFO_URI=https://api.linkedin.com/v2/userinfo
//! LINKEDIN_PROFILE_URI=https://api.linkedin.com/v2/me
//! LINKEDIN_EMAIL_URI=https://api.linkedin.com/v2/emailAddress?q=members&projection=(elements*(handle~))
//! LINKEDIN_SCOPE="openid profile email"
//! USERINFO_MODE=openid   # openid | legacy
//! ```

use std::fmt;

use crate::errors::AppError;

pub const DEFAULT_AUTHORIZE_URI: &str = "https://www.linkedin.com/oauth/v2/authorization";
pub const DEFAULT_TOKEN_URI: &str = "https://www.linkedin.com/oauth/v2/accessToken";
pub const DEFAULT_USERINFO_URI: &str = "https://api.linkedin.com/v2/userinfo";
pub const DEFAULT_PROFILE_URI: &str = "https://api.linkedin.com/v2/me";
pub const DEFAULT_EMAIL_URI: &str =
    "https://api.linkedin.com/v2/emailAddress?q=members&projection=(elements*(handle~))";
pub const DEFAULT_SCOPE: &str = "openid profile email";

/// ID 토큰이 없을 때 사용할 사용자 정보 조회 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserInfoMode {
    /// OpenID Connect userinfo 단일 엔드포인트
    OpenId,
    /// 구형 REST v2 `/me` + `/emailAddress` 두 번 호출
    Legacy,
}

impl UserInfoMode {
    pub fn from_str(s: &str) -> Result<Self, AppError> {
        match s.trim().to_lowercase().as_str() {
            "openid" | "oidc" | "userinfo" => Ok(UserInfoMode::OpenId),
            "legacy" | "v2" => Ok(UserInfoMode::Legacy),
            other => Err(AppError::ConfigError(format!(
                "USERINFO_MODE 값이 올바르지 않습니다: {}",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserInfoMode::OpenId => "openid",
            UserInfoMode::Legacy => "legacy",
        }
    }
}

/// LinkedIn OAuth 클라이언트 설정
///
/// `client_secret`은 `Debug` 출력에서 가려집니다.
#[derive(Clone)]
pub struct LinkedInOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub authorize_uri: String,
    pub token_uri: String,
    pub userinfo_uri: String,
    pub profile_uri: String,
    pub email_uri: String,
    pub scope: String,
    pub userinfo_mode: UserInfoMode,
}

impl LinkedInOAuthConfig {
    /// 필수 자격 증명만으로 설정을 만들고 나머지는 기본 엔드포인트를 사용합니다.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            authorize_uri: DEFAULT_AUTHORIZE_URI.to_string(),
            token_uri: DEFAULT_TOKEN_URI.to_string(),
            userinfo_uri: DEFAULT_USERINFO_URI.to_string(),
            profile_uri: DEFAULT_PROFILE_URI.to_string(),
            email_uri: DEFAULT_EMAIL_URI.to_string(),
            scope: DEFAULT_SCOPE.to_string(),
            userinfo_mode: UserInfoMode::OpenId,
        }
    }

    pub(crate) fn from_lookup<F>(lookup: &F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String, AppError> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| AppError::ConfigError(format!("{} must be set", key)))
        };
        let optional = |key: &str, default: &str| -> String {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let userinfo_mode = match lookup("USERINFO_MODE") {
            Some(mode) if !mode.trim().is_empty() => UserInfoMode::from_str(&mode)?,
            _ => UserInfoMode::OpenId,
        };

        Ok(Self {
            client_id: required("LINKEDIN_CLIENT_ID")?,
            client_secret: required("LINKEDIN_CLIENT_SECRET")?,
            redirect_uri: required("REDIRECT_URI")?,
            authorize_uri: optional("LINKEDIN_AUTHORIZE_URI", DEFAULT_AUTHORIZE_URI),
            token_uri: optional("LINKEDIN_TOKEN_URI", DEFAULT_TOKEN_URI),
            userinfo_uri: optional("LINKEDIN_USERINFO_URI", DEFAULT_USERINFO_URI),
            profile_uri: optional("LINKEDIN_PROFILE_URI", DEFAULT_PROFILE_URI),
            email_uri: optional("LINKEDIN_EMAIL_URI", DEFAULT_EMAIL_URI),
            scope: optional("LINKEDIN_SCOPE", DEFAULT_SCOPE),
            userinfo_mode,
        })
    }
}

impl fmt::Debug for LinkedInOAuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedInOAuthConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri)
            .field("token_uri", &self.token_uri)
            .field("userinfo_mode", &self.userinfo_mode)
            .finish()
    }
}
