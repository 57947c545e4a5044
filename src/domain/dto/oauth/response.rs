//! LinkedIn OAuth 응답 DTO 모듈

use std::fmt;

use serde::Deserialize;

use crate::utils::string_utils::deserialize_optional_string;

/// 토큰 엔드포인트 응답
///
/// `access_token`과 `id_token`은 모두 선택값입니다. 둘 다 없으면 인증 실패로 처리합니다.
/// 토큰 값은 `Debug` 출력에서 가려집니다.
#[derive(Clone, Default, Deserialize)]
pub struct LinkedInTokenResponse {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub access_token: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub id_token: Option<String>,

    /// 액세스 토큰 만료 시간 (초)
    #[serde(default)]
    pub expires_in: Option<i64>,

    #[serde(default)]
    pub scope: Option<String>,

    #[serde(default)]
    pub token_type: Option<String>,
}

impl fmt::Debug for LinkedInTokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedInTokenResponse")
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("id_token", &self.id_token.as_ref().map(|_| "<redacted>"))
            .field("expires_in", &self.expires_in)
            .field("scope", &self.scope)
            .field("token_type", &self.token_type)
            .finish()
    }
}

/// OAuth 로그인 URL
///
/// 인증 페이지 URL과 함께 생성된 state 값을 담습니다.
#[derive(Debug)]
pub struct OAuthLoginUrlResponse {
    pub login_url: String,
    pub state: String,
}
