//! LinkedIn OAuth HTTP Handlers
//!
//! - `GET /auth/linkedin/login` - LinkedIn 인증 페이지로 302 리다이렉트
//! - `GET /auth/linkedin/callback` - Authorization Code 처리 후 환영 페이지 렌더링
//!
//! 콜백 실패 응답은 설정된 `expose_error_details`에 따라 `details`를 포함합니다.
use actix_web::http::header::{self, ContentType};
use actix_web::{get, web, HttpResponse};
use validator::Validate;

use crate::core::AppState;
use crate::domain::entities::users::user_profile::UserProfile;
use crate::domain::{first_validation_message, OAuthCallbackQuery, MISSING_CODE_MESSAGE};
use crate::errors::AppError;
use crate::views::render_welcome_page;

/// LinkedIn 로그인 시작 핸들러
///
/// # Endpoint
/// `GET /auth/linkedin/login`
#[get("/login")]
pub async fn linkedin_login(state: web::Data<AppState>) -> HttpResponse {
    let login = state.login_service.login_url();
    log::debug!("LinkedIn 인증 페이지로 리다이렉트 (state: {})", login.state);

    HttpResponse::Found()
        .append_header((header::LOCATION, login.login_url))
        .finish()
}

/// LinkedIn OAuth 콜백 핸들러
///
/// # Endpoint
/// `GET /auth/linkedin/callback?code=..&state=..`
///
/// # Responses
/// - `200 text/html` - 환영 페이지
/// - `400` - `code` 누락 (사용자 거부 포함)
/// - `401` - 토큰 없음
/// - `4xx/5xx` - 프로바이더 실패 상태 그대로
/// - `500` - 네트워크 실패, 잘못된 응답/ID 토큰, 저장 실패
#[get("/callback")]
pub async fn linkedin_callback(
    state: web::Data<AppState>,
    query: web::Query<OAuthCallbackQuery>,
) -> HttpResponse {
    match complete_callback(&state, query.into_inner()).await {
        Ok(profile) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(render_welcome_page(&profile, &state.config.site_name)),
        Err(e) => e.to_http_response(state.config.expose_error_details),
    }
}

async fn complete_callback(state: &AppState, mut query: OAuthCallbackQuery) -> Result<UserProfile, AppError> {
    log::info!(
        "LinkedIn 콜백 수신 (code: {}, state: {}, error: {})",
        query.code.is_some(),
        query.state.is_some(),
        query.error.is_some()
    );

    if let Some(error) = query.error.take() {
        return Err(AppError::ProviderDenied {
            error,
            description: query.error_description.take(),
        });
    }

    query
        .validate()
        .map_err(|e| AppError::ValidationError(first_validation_message(&e)))?;

    let code = query
        .code
        .ok_or_else(|| AppError::ValidationError(MISSING_CODE_MESSAGE.to_string()))?;

    // state는 세션과 대조하지 않음
    state.callback_service.complete_login(&code).await
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{test, App};
    use base64::Engine as _;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use serde_json::{json, Value};
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::config::{AppConfig, LinkedInOAuthConfig, UserInfoMode};
    use crate::core::AppState;
    use crate::repositories::profiles::InMemoryUserProfileStore;
    use crate::routes::configure_all_routes;

    fn config_for(server: &MockServer, mode: UserInfoMode) -> AppConfig {
        let mut oauth = LinkedInOAuthConfig::new("client-123", "secret-456", "https://findjob.click/auth/linkedin/callback");
        oauth.token_uri = format!("{}/oauth/v2/accessToken", server.uri());
        oauth.userinfo_uri = format!("{}/v2/userinfo", server.uri());
        oauth.profile_uri = format!("{}/v2/me", server.uri());
        oauth.email_uri = format!("{}/v2/emailAddress", server.uri());
        oauth.userinfo_mode = mode;
        AppConfig::for_oauth(oauth)
    }

    async fn mount_token(server: &MockServer, status: u16, body: Value) {
        Mock::given(method("POST"))
            .and(path("/oauth/v2/accessToken"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(server)
            .await;
    }

    async fn call(config: AppConfig, store: Arc<InMemoryUserProfileStore>, uri: &str) -> actix_web::dev::ServiceResponse {
        let state = AppState::new(config, store).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(actix_web::web::Data::new(state))
                .configure(configure_all_routes),
        )
        .await;

        test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await
    }

    #[actix_web::test]
    async fn test_missing_code_is_bad_request_without_outbound_calls() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let store = Arc::new(InMemoryUserProfileStore::new());
        let resp = call(config_for(&server, UserInfoMode::OpenId), store.clone(), "/auth/linkedin/callback").await;

        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Missing 'code' parameter");
        assert!(store.is_empty());
    }

    #[actix_web::test]
    async fn test_blank_code_is_bad_request() {
        let server = MockServer::start().await;
        let store = Arc::new(InMemoryUserProfileStore::new());

        let resp = call(config_for(&server, UserInfoMode::OpenId), store, "/auth/linkedin/callback?code=&state=s").await;

        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_malformed_query_is_json_bad_request() {
        let server = MockServer::start().await;
        let store = Arc::new(InMemoryUserProfileStore::new());

        let resp = call(config_for(&server, UserInfoMode::OpenId), store, "/auth/linkedin/callback?code=a&code=b").await;

        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().starts_with("Invalid query string"));
    }

    #[actix_web::test]
    async fn test_provider_denied() {
        let server = MockServer::start().await;
        let store = Arc::new(InMemoryUserProfileStore::new());

        let resp = call(
            config_for(&server, UserInfoMode::OpenId),
            store,
            "/auth/linkedin/callback?error=user_cancelled_login&error_description=The+user+cancelled+LinkedIn+login",
        )
        .await;

        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Authorization denied: user_cancelled_login");
        assert_eq!(body["details"], "The user cancelled LinkedIn login");
    }

    #[actix_web::test]
    async fn test_provider_error_without_description_is_bad_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        let store = Arc::new(InMemoryUserProfileStore::new());

        let resp = call(
            config_for(&server, UserInfoMode::OpenId),
            store,
            "/auth/linkedin/callback?error=user_cancelled_login",
        )
        .await;

        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert!(body.get("error").is_some());
    }

    #[actix_web::test]
    async fn test_token_response_without_tokens_is_unauthorized() {
        let server = MockServer::start().await;
        mount_token(&server, 200, json!({ "expires_in": 60 })).await;
        let store = Arc::new(InMemoryUserProfileStore::new());

        let resp = call(config_for(&server, UserInfoMode::OpenId), store.clone(), "/auth/linkedin/callback?code=abc").await;

        assert_eq!(resp.status(), 401);
        let body: Value = test::read_body_json(resp).await;
        assert!(body.get("error").is_some());
        assert!(store.is_empty());
    }

    #[actix_web::test]
    async fn test_id_token_path_stores_profile_and_renders_page() {
        let server = MockServer::start().await;
        let payload = URL_SAFE_NO_PAD.encode(r#"{"sub":"abc123","given_name":"Jane","email":"jane@example.com"}"#);
        mount_token(
            &server,
            200,
            json!({ "access_token": "AQX", "id_token": format!("eyJhbGciOiJSUzI1NiJ9.{}.sig", payload) }),
        )
        .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let store = Arc::new(InMemoryUserProfileStore::new());
        let resp = call(config_for(&server, UserInfoMode::OpenId), store.clone(), "/auth/linkedin/callback?code=abc&state=xyz").await;

        assert_eq!(resp.status(), 200);
        let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));

        let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(html.contains("Hello Jane, welcome to FindJob.click!"));

        let stored = store.get("abc123").unwrap();
        assert_eq!(stored.email.as_deref(), Some("jane@example.com"));
    }

    #[actix_web::test]
    async fn test_legacy_path_renders_first_name() {
        let server = MockServer::start().await;
        mount_token(&server, 200, json!({ "access_token": "AQX" })).await;
        Mock::given(method("GET"))
            .and(path("/v2/me"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "xyz",
                "localizedFirstName": "Sam",
                "localizedLastName": "Lee"
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v2/emailAddress"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "elements": [{ "handle~": { "emailAddress": "sam@example.com" } }]
            })))
            .mount(&server)
            .await;

        let store = Arc::new(InMemoryUserProfileStore::new());
        let resp = call(config_for(&server, UserInfoMode::Legacy), store.clone(), "/auth/linkedin/callback?code=abc").await;

        assert_eq!(resp.status(), 200);
        let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(html.contains("Hello Sam"));
        assert_eq!(store.get("xyz").unwrap().last_name.as_deref(), Some("Lee"));
    }

    #[actix_web::test]
    async fn test_token_endpoint_failure_is_json_error() {
        let server = MockServer::start().await;
        mount_token(
            &server,
            400,
            json!({ "error": "invalid_request", "error_description": "authorization code expired" }),
        )
        .await;

        let store = Arc::new(InMemoryUserProfileStore::new());
        let resp = call(config_for(&server, UserInfoMode::OpenId), store.clone(), "/auth/linkedin/callback?code=stale").await;

        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert!(body.get("error").is_some());
        assert!(body["details"].as_str().unwrap().contains("authorization code expired"));
        assert!(store.is_empty());
    }

    #[actix_web::test]
    async fn test_failure_details_hidden_when_disabled() {
        let server = MockServer::start().await;
        mount_token(&server, 503, json!({ "message": "maintenance" })).await;

        let mut config = config_for(&server, UserInfoMode::OpenId);
        config.expose_error_details = false;

        let store = Arc::new(InMemoryUserProfileStore::new());
        let resp = call(config, store, "/auth/linkedin/callback?code=abc").await;

        assert_eq!(resp.status(), 503);
        let body: Value = test::read_body_json(resp).await;
        assert!(body.get("error").is_some());
        assert!(body.get("details").is_none());
    }

    #[actix_web::test]
    async fn test_welcome_page_escapes_provider_values() {
        let server = MockServer::start().await;
        mount_token(&server, 200, json!({ "access_token": "AQX" })).await;
        Mock::given(method("GET"))
            .and(path("/v2/userinfo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "sub": "evil",
                "given_name": "<script>alert(1)</script>"
            })))
            .mount(&server)
            .await;

        let store = Arc::new(InMemoryUserProfileStore::new());
        let resp = call(config_for(&server, UserInfoMode::OpenId), store, "/auth/linkedin/callback?code=abc").await;

        assert_eq!(resp.status(), 200);
        let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("Hello &lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    async fn assert_generic_server_error(resp: actix_web::dev::ServiceResponse) {
        assert_eq!(resp.status(), 500);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Internal Server Error");
    }

    #[actix_web::test]
    async fn test_malformed_id_token_base64_is_server_error() {
        let server = MockServer::start().await;
        mount_token(&server, 200, json!({ "access_token": "AQX", "id_token": "header.!!!.sig" })).await;
        let store = Arc::new(InMemoryUserProfileStore::new());

        let resp = call(config_for(&server, UserInfoMode::OpenId), store.clone(), "/auth/linkedin/callback?code=abc").await;

        assert_generic_server_error(resp).await;
        assert!(store.is_empty());
    }

    #[actix_web::test]
    async fn test_non_json_id_token_payload_is_server_error() {
        let server = MockServer::start().await;
        let id_token = format!("h.{}.s", URL_SAFE_NO_PAD.encode("not json"));
        mount_token(&server, 200, json!({ "access_token": "AQX", "id_token": id_token })).await;
        let store = Arc::new(InMemoryUserProfileStore::new());

        let resp = call(config_for(&server, UserInfoMode::OpenId), store.clone(), "/auth/linkedin/callback?code=abc").await;

        assert_generic_server_error(resp).await;
        assert!(store.is_empty());
    }

    #[actix_web::test]
    async fn test_unreachable_token_endpoint_is_server_error() {
        let server = MockServer::start().await;
        let mut config = config_for(&server, UserInfoMode::OpenId);
        // 예약된 discard 포트: 연결 거부
        config.oauth.token_uri = "http://127.0.0.1:9/oauth/v2/accessToken".to_string();
        let store = Arc::new(InMemoryUserProfileStore::new());

        let resp = call(config, store.clone(), "/auth/linkedin/callback?code=abc").await;

        assert_generic_server_error(resp).await;
        assert!(store.is_empty());
    }

    #[actix_web::test]
    async fn test_userinfo_without_subject_is_server_error() {
        let server = MockServer::start().await;
        mount_token(&server, 200, json!({ "access_token": "AQX" })).await;
        Mock::given(method("GET"))
            .and(path("/v2/userinfo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "given_name": "G" })))
            .mount(&server)
            .await;
        let store = Arc::new(InMemoryUserProfileStore::new());

        let resp = call(config_for(&server, UserInfoMode::OpenId), store.clone(), "/auth/linkedin/callback?code=abc").await;

        assert_generic_server_error(resp).await;
        assert!(store.is_empty());
    }

    #[actix_web::test]
    async fn test_legacy_email_failure_propagates_status() {
        let server = MockServer::start().await;
        mount_token(&server, 200, json!({ "access_token": "AQX" })).await;
        Mock::given(method("GET"))
            .and(path("/v2/me"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "xyz", "localizedFirstName": "Sam" })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v2/emailAddress"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "serviceErrorCode": 100,
                "message": "Not enough permissions to access: GET /emailAddress",
                "status": 403
            })))
            .mount(&server)
            .await;
        let store = Arc::new(InMemoryUserProfileStore::new());

        let resp = call(config_for(&server, UserInfoMode::Legacy), store.clone(), "/auth/linkedin/callback?code=abc").await;

        assert_eq!(resp.status(), 403);
        let body: Value = test::read_body_json(resp).await;
        assert!(body.get("error").is_some());
        assert!(body["details"].as_str().unwrap().contains("Not enough permissions"));
        assert!(store.is_empty());
    }

    #[actix_web::test]
    async fn test_code_is_forwarded_without_trimming() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/v2/accessToken"))
            .and(body_string_contains("code=+AQT+"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token_type": "Bearer" })))
            .expect(1)
            .mount(&server)
            .await;
        let store = Arc::new(InMemoryUserProfileStore::new());

        let resp = call(config_for(&server, UserInfoMode::OpenId), store, "/auth/linkedin/callback?code=%20AQT%20").await;

        // 토큰 없는 응답까지 도달했다면 code가 그대로 전달된 것
        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_login_redirects_to_authorization_url() {
        let server = MockServer::start().await;
        let store = Arc::new(InMemoryUserProfileStore::new());

        let resp = call(config_for(&server, UserInfoMode::OpenId), store, "/auth/linkedin/login").await;

        assert_eq!(resp.status(), 302);
        let location = resp.headers().get("location").unwrap().to_str().unwrap();
        assert!(location.starts_with("https://www.linkedin.com/oauth/v2/authorization?"));
        assert!(location.contains("client_id=client-123"));
        assert!(location.contains("redirect_uri=https%3A%2F%2Ffindjob.click%2Fauth%2Flinkedin%2Fcallback"));
        assert!(location.contains("state="));
        assert!(!location.contains("secret-456"));
    }

    #[actix_web::test]
    async fn test_health() {
        let server = MockServer::start().await;
        let store = Arc::new(InMemoryUserProfileStore::new());

        let resp = call(config_for(&server, UserInfoMode::OpenId), store, "/health").await;

        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
    }
}
