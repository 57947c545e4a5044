//! # LinkedIn OAuth 인증 서비스
//!
//! - [`linkedin_client`] - LinkedIn 엔드포인트 HTTP 호출
//! - [`id_token`] - `id_token` 클레임 추출 (서명 미검증)
//! - [`identity_resolver`] - 토큰 응답에 따른 사용자 식별 방식 선택
//! - [`callback_service`] - 콜백 처리 전체 흐름
//! - [`login_service`] - 인증 페이지 URL 생성

pub mod callback_service;
pub mod id_token;
pub mod identity_resolver;
pub mod linkedin_client;
pub mod login_service;

pub use callback_service::OAuthCallbackService;
pub use id_token::{IdTokenDecoder, UnverifiedIdTokenDecoder};
pub use identity_resolver::IdentityResolver;
pub use linkedin_client::LinkedInClient;
pub use login_service::LinkedInLoginService;
