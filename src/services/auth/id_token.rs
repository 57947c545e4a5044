//! # ID 토큰 클레임 추출
//!
//! 토큰 응답의 `id_token`에서 사용자 클레임을 꺼내는 단계입니다.
//!
//! **주의:** 기본 구현인 [`UnverifiedIdTokenDecoder`]는 서명, 발급자(`iss`),
//! 대상(`aud`), 만료(`exp`)를 전혀 검증하지 않습니다. 결과는 *신뢰할 수 없는 클레임*이며
//! 인증 근거로 사용해서는 안 됩니다. 이 서비스에서는 토큰 엔드포인트와 TLS로 직접 통신해
//! 받은 토큰이라는 점에 기대어 프로필 표시/저장 용도로만 사용합니다.
//!
//! 서명 검증이 필요해지면 [`IdTokenDecoder`]를 구현한 검증기로 교체합니다.
//!
//! ```text
//! eyJhbGciOiJSUzI1NiJ9 . eyJzdWIiOiJhYmMxMjMifQ . c2lnbmF0dXJl
//!        header                 payload            signature
//!                         ▲
//!                         └── base64url 디코딩 → JSON 클레임
//! ```

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::domain::models::oauth::linkedin_model::LinkedInOpenIdClaims;
use crate::errors::AppError;

pub trait IdTokenDecoder: Send + Sync {
    /// `id_token`에서 클레임을 추출합니다.
    fn decode_claims(&self, id_token: &str) -> Result<LinkedInOpenIdClaims, AppError>;

    /// 서명을 검증하는 구현인지 여부
    fn verifies_signature(&self) -> bool;
}

/// 서명 검증 없이 payload만 디코딩하는 구현
#[derive(Debug, Clone, Copy, Default)]
pub struct UnverifiedIdTokenDecoder;

impl IdTokenDecoder for UnverifiedIdTokenDecoder {
    fn decode_claims(&self, id_token: &str) -> Result<LinkedInOpenIdClaims, AppError> {
        let payload = decode_untrusted_payload(id_token)?;

        serde_json::from_slice::<LinkedInOpenIdClaims>(&payload)
            .map_err(|e| AppError::MalformedIdToken(format!("payload JSON 파싱 실패: {}", e)))
    }

    fn verifies_signature(&self) -> bool {
        false
    }
}

/// compact JWS의 두 번째 세그먼트를 base64url 디코딩한 바이트
///
/// 패딩(`=`)이 있든 없든 허용합니다.
pub fn decode_untrusted_payload(id_token: &str) -> Result<Vec<u8>, AppError> {
    let segments: Vec<&str> = id_token.trim().split('.').collect();
    if segments.len() != 3 {
        return Err(AppError::MalformedIdToken(format!(
            "세그먼트 수가 3이 아닙니다: {}",
            segments.len()
        )));
    }

    let payload = segments[1].trim_end_matches('=');
    if payload.is_empty() {
        return Err(AppError::MalformedIdToken("payload 세그먼트가 비어 있습니다".to_string()));
    }

    URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| AppError::MalformedIdToken(format!("payload base64url 디코딩 실패: {}", e)))
}
