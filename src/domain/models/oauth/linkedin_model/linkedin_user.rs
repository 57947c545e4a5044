//! LinkedIn API 응답 모델
//!
//! - [`LinkedInOpenIdClaims`]: ID 토큰 payload 및 `/v2/userinfo` 응답 (동일한 클레임 구조)
//! - [`LegacyProfileResponse`]: 구형 `/v2/me` 응답
//! - [`LegacyEmailResponse`]: 구형 `/v2/emailAddress` 응답

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::utils::string_utils::{clean_optional_string, deserialize_optional_string};

/// OpenID Connect 표준 클레임
///
/// 값이 없거나 빈 문자열이면 `None`으로 정리됩니다.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LinkedInOpenIdClaims {
    #[serde(default)]
    pub sub: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub given_name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub family_name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "deserialize_flexible_bool")]
    pub email_verified: Option<bool>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub picture: Option<String>,

    #[serde(default, deserialize_with = "deserialize_locale")]
    pub locale: Option<String>,
}

/// 구형 REST v2 프로필 응답 (`GET /v2/me`)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyProfileResponse {
    #[serde(default)]
    pub id: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub localized_first_name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub localized_last_name: Option<String>,
}

/// 구형 REST v2 이메일 응답 (`GET /v2/emailAddress?q=members&projection=(elements*(handle~))`)
///
/// ```json
/// { "elements": [ { "handle": "urn:li:emailAddress:1", "handle~": { "emailAddress": "sam@example.com" } } ] }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LegacyEmailResponse {
    #[serde(default)]
    pub elements: Vec<LegacyEmailElement>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LegacyEmailElement {
    #[serde(rename = "handle~", default)]
    pub handle: Option<LegacyEmailHandle>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LegacyEmailHandle {
    #[serde(rename = "emailAddress", default, deserialize_with = "deserialize_optional_string")]
    pub email_address: Option<String>,
}

impl LegacyEmailResponse {
    /// 첫 번째 요소의 이메일 주소
    pub fn primary_email(&self) -> Option<&str> {
        self.elements
            .first()
            .and_then(|element| element.handle.as_ref())
            .and_then(|handle| handle.email_address.as_deref())
    }
}

/// `true`/`false` 외에 `"true"`/`"false"` 문자열도 허용합니다.
fn deserialize_flexible_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::String(s)) => match s.trim().to_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

/// 로케일은 `"en_US"` 문자열 또는 `{"country":"US","language":"en"}` 객체로 내려옵니다.
/// 두 형태 모두 `en_US` 형식 문자열로 정규화합니다.
fn deserialize_locale<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => clean_optional_string(Some(s)),
        Some(Value::Object(map)) => {
            let language = map.get("language").and_then(Value::as_str).unwrap_or("").trim();
            let country = map.get("country").and_then(Value::as_str).unwrap_or("").trim();
            match (language.is_empty(), country.is_empty()) {
                (false, false) => Some(format!("{}_{}", language, country)),
                (false, true) => Some(language.to_string()),
                (true, false) => Some(country.to_string()),
                (true, true) => None,
            }
        }
        _ => None,
    })
}
