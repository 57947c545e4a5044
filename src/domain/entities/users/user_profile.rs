use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::domain::models::oauth::linkedin_model::ProviderIdentity;

/// 환영 페이지에서 이름을 알 수 없을 때 사용하는 호칭
pub const FALLBACK_DISPLAY_NAME: &str = "User";

/// LinkedIn 회원 프로필 레코드
///
/// 프로바이더가 발급한 subject id(`_id`)로 식별됩니다.
/// 로그인할 때마다 레코드 전체를 덮어쓰며 (last-write-wins),
/// 병합이나 버전 관리는 하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    pub updated_at: DateTime,
}

impl UserProfile {
    pub fn from_identity(identity: ProviderIdentity) -> Self {
        Self {
            id: identity.subject,
            first_name: identity.given_name,
            last_name: identity.family_name,
            full_name: identity.name,
            email: identity.email,
            email_verified: identity.email_verified,
            picture_url: identity.picture,
            locale: identity.locale,
            updated_at: DateTime::now(),
        }
    }

    /// 화면에 표시할 이름: 이름 → 전체 이름 → "User"
    pub fn display_name(&self) -> &str {
        self.first_name
            .as_deref()
            .or(self.full_name.as_deref())
            .unwrap_or(FALLBACK_DISPLAY_NAME)
    }
}
