//! OAuth 콜백 요청 DTO
//!
//! LinkedIn이 사용자를 `redirect_uri`로 돌려보낼 때 붙이는 쿼리 파라미터를 매핑합니다.
use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::utils::string_utils::{deserialize_non_blank_string, deserialize_optional_string};

pub const MISSING_CODE_MESSAGE: &str = "Missing 'code' parameter";

/// OAuth 콜백 쿼리 파라미터 구조체
///
/// `state`는 받기만 하고 세션 값과 대조하지 않습니다 (CSRF 검증 없음).
#[derive(Debug, Default, Deserialize, Validate)]
pub struct OAuthCallbackQuery {
    /// 프로바이더가 준 값 그대로 토큰 교환에 전달 (trim 하지 않음)
    #[serde(default, deserialize_with = "deserialize_non_blank_string")]
    #[validate(required(message = "Missing 'code' parameter"))]
    pub code: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub state: Option<String>,

    /// 사용자가 동의를 거부했거나 프로바이더 에러가 발생한 경우
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub error_description: Option<String>,
}

/// 검증 에러 중 첫 번째 메시지를 꺼냅니다.
pub fn first_validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|field_errors| field_errors.iter())
        .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}
