//! Users Entity Module
//!
//! 저장소에 기록되는 LinkedIn 회원 프로필 엔티티를 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user_profile::UserProfile;
//!
//! let profile = UserProfile::from_identity(identity);
//! println!("Hello {}", profile.display_name());
//! ```

pub mod user_profile;
