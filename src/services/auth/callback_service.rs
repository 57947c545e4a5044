//! # LinkedIn OAuth 콜백 처리 서비스
//!
//! 콜백 한 번의 처리 순서:
//!
//! ```text
//! code ──► 토큰 교환 ──► 사용자 식별 ──► UserProfile 생성 ──► upsert ──► UserProfile
//!            │              │                                 │
//!            ▼              ▼                                 ▼
//!       UpstreamError   MalformedIdToken /              DatabaseError
//!                       InvalidProviderResponse
//! ```
//!
//! 각 단계는 한 번만 시도하며 실패하면 즉시 중단합니다.
//! 토큰은 이 요청 안에서만 사용되고 저장되지 않습니다.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::domain::entities::users::user_profile::UserProfile;
use crate::errors::AppError;
use crate::repositories::profiles::UserProfileStore;
use crate::services::auth::id_token::UnverifiedIdTokenDecoder;
use crate::services::auth::identity_resolver::IdentityResolver;
use crate::services::auth::linkedin_client::LinkedInClient;

pub struct OAuthCallbackService {
    client: LinkedInClient,
    resolver: IdentityResolver,
    store: Arc<dyn UserProfileStore>,
}

impl OAuthCallbackService {
    pub fn new(config: &AppConfig, store: Arc<dyn UserProfileStore>) -> Result<Self, AppError> {
        let client = LinkedInClient::new(config.oauth.clone(), config.http_timeout)?;
        let resolver = IdentityResolver::new(Arc::new(UnverifiedIdTokenDecoder), config.oauth.userinfo_mode);

        log::info!(
            "OAuth 콜백 서비스 초기화 (userinfo_mode: {}, store: {})",
            config.oauth.userinfo_mode.as_str(),
            store.name()
        );

        Ok(Self { client, resolver, store })
    }

    /// Authorization Code로 로그인을 완료하고 저장된 프로필을 반환합니다.
    pub async fn complete_login(&self, auth_code: &str) -> Result<UserProfile, AppError> {
        let tokens = self.client.exchange_code_for_token(auth_code).await?;
        let identity = self.resolver.resolve(&self.client, &tokens).await?;

        let profile = UserProfile::from_identity(identity);
        self.store.upsert(&profile).await?;

        log::info!("LinkedIn 로그인 완료 (id: {}, store: {})", profile.id, self.store.name());

        Ok(profile)
    }
}
