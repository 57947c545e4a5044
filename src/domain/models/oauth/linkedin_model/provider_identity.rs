use std::fmt;

use super::linkedin_user::{LegacyEmailResponse, LegacyProfileResponse, LinkedInOpenIdClaims};

/// 사용자 식별 정보를 어디서 얻었는지
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentitySource {
    /// 토큰 응답의 `id_token` payload (서명 미검증)
    IdTokenClaims,
    /// OpenID Connect userinfo 엔드포인트
    UserInfoEndpoint,
    /// 구형 `/v2/me` + `/v2/emailAddress`
    LegacyProfileAndEmail,
}

impl fmt::Display for IdentitySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IdentitySource::IdTokenClaims => "id_token_claims",
            IdentitySource::UserInfoEndpoint => "userinfo",
            IdentitySource::LegacyProfileAndEmail => "legacy_profile_email",
        };
        f.write_str(name)
    }
}

/// 응답 형태와 무관하게 정규화된 사용자 식별 정보
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderIdentity {
    pub source: IdentitySource,
    pub subject: String,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub email_verified: Option<bool>,
    pub picture: Option<String>,
    pub locale: Option<String>,
}

impl ProviderIdentity {
    pub fn from_claims(claims: LinkedInOpenIdClaims, source: IdentitySource) -> Self {
        Self {
            source,
            subject: claims.sub.trim().to_string(),
            given_name: claims.given_name,
            family_name: claims.family_name,
            name: claims.name,
            email: claims.email,
            email_verified: claims.email_verified,
            picture: claims.picture,
            locale: claims.locale,
        }
    }

    /// 구형 API에는 이메일 인증 여부, 사진, 로케일이 없습니다.
    pub fn from_legacy(profile: LegacyProfileResponse, email: &LegacyEmailResponse) -> Self {
        let name = match (&profile.localized_first_name, &profile.localized_last_name) {
            (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
            _ => None,
        };

        Self {
            source: IdentitySource::LegacyProfileAndEmail,
            subject: profile.id.trim().to_string(),
            given_name: profile.localized_first_name,
            family_name: profile.localized_last_name,
            name,
            email: email.primary_email().map(str::to_string),
            email_verified: None,
            picture: None,
            locale: None,
        }
    }
}
