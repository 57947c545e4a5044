//! # LinkedIn OAuth 2.0 Domain Models
//!
//! LinkedIn이 돌려주는 세 가지 응답 형태를 하나의 [`ProviderIdentity`]로 정규화합니다.
//!
//! ```text
//! id_token payload ─────┐
//! /v2/userinfo ─────────┼──► ProviderIdentity ──► UserProfile
//! /v2/me + /emailAddress┘
//! ```

pub mod linkedin_user;
pub mod provider_identity;

pub use linkedin_user::*;
pub use provider_identity::*;
