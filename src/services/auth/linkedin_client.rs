//! # LinkedIn API 클라이언트
//!
//! LinkedIn OAuth 2.0 엔드포인트에 대한 모든 외부 HTTP 호출을 담당합니다.
//!
//! | 용도 | 엔드포인트 | 메서드 |
//! |------|------------|--------|
//! | **Token Exchange** | `https://www.linkedin.com/oauth/v2/accessToken` | POST |
//! | **User Info** | `https://api.linkedin.com/v2/userinfo` | GET |
//! | **Legacy Profile** | `https://api.linkedin.com/v2/me` | GET |
//! | **Legacy Email** | `https://api.linkedin.com/v2/emailAddress?q=members&projection=(elements*(handle~))` | GET |
//!
//! 모든 호출은 순차적으로 한 번만 수행되며 재시도하지 않습니다.
//! non-2xx 응답은 [`AppError::UpstreamError`]로 프로바이더 상태 코드와 본문을 그대로 전달합니다.

use std::time::Duration;

use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::config::LinkedInOAuthConfig;
use crate::domain::dto::oauth::LinkedInTokenResponse;
use crate::domain::models::oauth::linkedin_model::{
    LegacyEmailResponse, LegacyProfileResponse, LinkedInOpenIdClaims,
};
use crate::errors::{AppError, ErrorContext};

#[derive(Clone)]
pub struct LinkedInClient {
    http: reqwest::Client,
    config: LinkedInOAuthConfig,
}

impl LinkedInClient {
    pub fn new(config: LinkedInOAuthConfig, timeout: Duration) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("HTTP 클라이언트 생성 실패")?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &LinkedInOAuthConfig {
        &self.config
    }

    /// Authorization Code를 Access Token으로 교환
    ///
    /// ```text
    /// POST {token_uri}
    /// Content-Type: application/x-www-form-urlencoded
    ///
    /// grant_type=authorization_code&code=..&redirect_uri=..&client_id=..&client_secret=..
    /// ```
    pub async fn exchange_code_for_token(&self, auth_code: &str) -> Result<LinkedInTokenResponse, AppError> {
        let params = [
            ("grant_type", "authorization_code"),
            ("code", auth_code),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
        ];

        let response = self
            .http
            .post(&self.config.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("LinkedIn 토큰 요청 실패: {}", e)))?;

        let tokens: LinkedInTokenResponse = read_json(response, "LinkedIn 토큰 교환").await?;

        log::info!(
            "LinkedIn 토큰 교환 성공 (access_token: {}, id_token: {}, expires_in: {:?})",
            tokens.access_token.is_some(),
            tokens.id_token.is_some(),
            tokens.expires_in
        );

        Ok(tokens)
    }

    /// OpenID Connect userinfo 조회
    pub async fn fetch_userinfo(&self, access_token: &str) -> Result<LinkedInOpenIdClaims, AppError> {
        self.get_json(&self.config.userinfo_uri, access_token, "LinkedIn 사용자 정보 조회")
            .await
    }

    /// 구형 프로필 조회 (`/v2/me`)
    pub async fn fetch_legacy_profile(&self, access_token: &str) -> Result<LegacyProfileResponse, AppError> {
        self.get_json(&self.config.profile_uri, access_token, "LinkedIn 프로필 조회")
            .await
    }

    /// 구형 이메일 조회 (`/v2/emailAddress`)
    pub async fn fetch_legacy_email(&self, access_token: &str) -> Result<LegacyEmailResponse, AppError> {
        self.get_json(&self.config.email_uri, access_token, "LinkedIn 이메일 조회")
            .await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        access_token: &str,
        operation: &str,
    ) -> Result<T, AppError> {
        let response = self
            .http
            .get(url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("{} 요청 실패: {}", operation, e)))?;

        read_json(response, operation).await
    }
}

/// 응답 상태를 확인하고 본문을 JSON으로 파싱합니다.
async fn read_json<T: DeserializeOwned>(response: Response, operation: &str) -> Result<T, AppError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| AppError::ExternalServiceError(format!("{} 응답 수신 실패: {}", operation, e)))?;

    if !status.is_success() {
        log::warn!("{} 실패: HTTP {} - {}", operation, status.as_u16(), body);
        return Err(AppError::UpstreamError {
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str::<T>(&body).with_context(|| format!("{} 응답 파싱 실패", operation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> LinkedInClient {
        let mut config = LinkedInOAuthConfig::new("client-123", "secret-456", "https://findjob.click/cb");
        config.token_uri = format!("{}/oauth/v2/accessToken", server.uri());
        config.userinfo_uri = format!("{}/v2/userinfo", server.uri());
        config.profile_uri = format!("{}/v2/me", server.uri());
        config.email_uri = format!("{}/v2/emailAddress", server.uri());

        LinkedInClient::new(config, Duration::from_secs(5)).unwrap()
    }

    #[actix_web::test]
    async fn test_exchange_sends_form_encoded_grant() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/oauth/v2/accessToken"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string_contains("grant_type=authorization_code"))
            .and(body_string_contains("code=AQT-code"))
            .and(body_string_contains("client_id=client-123"))
            .and(body_string_contains("client_secret=secret-456"))
            .and(body_string_contains("redirect_uri=https%3A%2F%2Ffindjob.click%2Fcb"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "AQX-access",
                "expires_in": 5183999
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tokens = client_for(&server).exchange_code_for_token("AQT-code").await.unwrap();

        assert_eq!(tokens.access_token.as_deref(), Some("AQX-access"));
        assert!(tokens.id_token.is_none());
    }

    #[actix_web::test]
    async fn test_exchange_propagates_provider_status_and_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/oauth/v2/accessToken"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "invalid_request",
                "error_description": "Unable to retrieve access token: appid/redirect uri/code verifier does not match authorization code"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).exchange_code_for_token("expired").await.unwrap_err();

        match err {
            AppError::UpstreamError { status, body } => {
                assert_eq!(status, 400);
                assert!(body.contains("invalid_request"));
            }
            other => panic!("Expected UpstreamError, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_malformed_token_json_is_internal_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/oauth/v2/accessToken"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).exchange_code_for_token("code").await.unwrap_err();
        assert!(matches!(err, AppError::InternalError(_)));
    }

    #[actix_web::test]
    async fn test_userinfo_uses_bearer_token() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/userinfo"))
            .and(header("authorization", "Bearer AQX-access"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "sub": "abc123",
                "given_name": "Jane",
                "email": "jane@example.com",
                "email_verified": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let claims = client_for(&server).fetch_userinfo("AQX-access").await.unwrap();

        assert_eq!(claims.sub, "abc123");
        assert_eq!(claims.email_verified, Some(true));
    }

    #[actix_web::test]
    async fn test_unreachable_provider_is_external_service_error() {
        let mut config = LinkedInOAuthConfig::new("client", "secret", "https://x/cb");
        // 예약된 discard 포트: 연결 거부
        config.token_uri = "http://127.0.0.1:9/oauth/v2/accessToken".to_string();
        let client = LinkedInClient::new(config, Duration::from_secs(2)).unwrap();

        let err = client.exchange_code_for_token("code").await.unwrap_err();
        assert!(matches!(err, AppError::ExternalServiceError(_)));
    }
}
