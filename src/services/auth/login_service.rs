//! LinkedIn 인증 페이지 URL 생성

use crate::config::LinkedInOAuthConfig;
use crate::domain::dto::oauth::OAuthLoginUrlResponse;

#[derive(Debug, Clone)]
pub struct LinkedInLoginService {
    config: LinkedInOAuthConfig,
}

impl LinkedInLoginService {
    pub fn new(config: LinkedInOAuthConfig) -> Self {
        Self { config }
    }

    /// 사용자를 보낼 LinkedIn 인증 URL
    ///
    /// ```text
    /// https://www.linkedin.com/oauth/v2/authorization?
    ///   response_type=code&
    ///   client_id=..&
    ///   redirect_uri=..&
    ///   scope=openid%20profile%20email&
    ///   state=<uuid v4>
    /// ```
    ///
    /// state는 매번 새로 만들지만 콜백에서 대조하지는 않습니다.
    pub fn login_url(&self) -> OAuthLoginUrlResponse {
        let state = uuid::Uuid::new_v4().to_string();

        let params = [
            ("response_type", "code"),
            ("client_id", self.config.client_id.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("scope", self.config.scope.as_str()),
            ("state", state.as_str()),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let login_url = format!("{}?{}", self.config.authorize_uri, query_string);

        OAuthLoginUrlResponse { login_url, state }
    }
}
