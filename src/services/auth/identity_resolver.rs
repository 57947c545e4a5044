//! # 사용자 식별 정보 조회
//!
//! 토큰 응답 형태와 설정에 따라 세 가지 방식 중 하나로 [`ProviderIdentity`]를 얻습니다.
//!
//! ```text
//! 토큰 응답
//!    │
//!    ├─ id_token 있음 ──────────────► payload 디코딩 (서명 미검증)
//!    │
//!    ├─ access_token 있음
//!    │      ├─ USERINFO_MODE=openid ─► GET /v2/userinfo
//!    │      └─ USERINFO_MODE=legacy ─► GET /v2/me → GET /v2/emailAddress
//!    │
//!    └─ 둘 다 없음 ─────────────────► 401 (외부 호출 없음)
//! ```

use std::sync::Arc;

use crate::config::UserInfoMode;
use crate::domain::dto::oauth::LinkedInTokenResponse;
use crate::domain::models::oauth::linkedin_model::{IdentitySource, ProviderIdentity};
use crate::errors::AppError;
use crate::services::auth::id_token::IdTokenDecoder;
use crate::services::auth::linkedin_client::LinkedInClient;

/// 토큰 응답에서 결정된 조회 계획
#[derive(Debug, PartialEq)]
pub enum ResolutionPlan<'a> {
    DecodeIdToken(&'a str),
    UserInfo { access_token: &'a str },
    LegacyProfileAndEmail { access_token: &'a str },
}

impl ResolutionPlan<'_> {
    pub fn source(&self) -> IdentitySource {
        match self {
            ResolutionPlan::DecodeIdToken(_) => IdentitySource::IdTokenClaims,
            ResolutionPlan::UserInfo { .. } => IdentitySource::UserInfoEndpoint,
            ResolutionPlan::LegacyProfileAndEmail { .. } => IdentitySource::LegacyProfileAndEmail,
        }
    }
}

pub struct IdentityResolver {
    decoder: Arc<dyn IdTokenDecoder>,
    mode: UserInfoMode,
}

impl IdentityResolver {
    pub fn new(decoder: Arc<dyn IdTokenDecoder>, mode: UserInfoMode) -> Self {
        Self { decoder, mode }
    }

    /// 토큰 응답만 보고 조회 방식을 결정합니다.
    pub fn plan<'a>(&self, tokens: &'a LinkedInTokenResponse) -> Result<ResolutionPlan<'a>, AppError> {
        if let Some(id_token) = tokens.id_token.as_deref() {
            return Ok(ResolutionPlan::DecodeIdToken(id_token));
        }

        let access_token = tokens.access_token.as_deref().ok_or_else(|| {
            AppError::AuthenticationError("Token response did not include an access token".to_string())
        })?;

        Ok(match self.mode {
            UserInfoMode::OpenId => ResolutionPlan::UserInfo { access_token },
            UserInfoMode::Legacy => ResolutionPlan::LegacyProfileAndEmail { access_token },
        })
    }

    pub async fn resolve(
        &self,
        client: &LinkedInClient,
        tokens: &LinkedInTokenResponse,
    ) -> Result<ProviderIdentity, AppError> {
        let plan = self.plan(tokens)?;
        log::info!("사용자 식별 방식: {}", plan.source());

        let identity = match plan {
            ResolutionPlan::DecodeIdToken(id_token) => {
                if !self.decoder.verifies_signature() {
                    log::debug!("id_token 서명을 검증하지 않고 클레임을 사용합니다");
                }
                let claims = self.decoder.decode_claims(id_token)?;
                ProviderIdentity::from_claims(claims, IdentitySource::IdTokenClaims)
            }
            ResolutionPlan::UserInfo { access_token } => {
                let claims = client.fetch_userinfo(access_token).await?;
                ProviderIdentity::from_claims(claims, IdentitySource::UserInfoEndpoint)
            }
            ResolutionPlan::LegacyProfileAndEmail { access_token } => {
                let profile = client.fetch_legacy_profile(access_token).await?;
                let email = client.fetch_legacy_email(access_token).await?;
                if email.primary_email().is_none() {
                    log::warn!("LinkedIn 이메일 응답에 주소가 없습니다 (id: {})", profile.id);
                }
                ProviderIdentity::from_legacy(profile, &email)
            }
        };

        if identity.subject.is_empty() {
            return Err(AppError::InvalidProviderResponse(format!(
                "{} 응답에 사용자 식별자가 없습니다",
                identity.source
            )));
        }

        Ok(identity)
    }
}
