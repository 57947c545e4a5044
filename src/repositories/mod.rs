//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 프로필 레코드는 [`UserProfileStore`](profiles::UserProfileStore) 트레이트 뒤에 숨겨져 있어
//! 운영 환경에서는 MongoDB, 로컬 개발과 테스트에서는 메모리 저장소를 사용합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::profiles::{UserProfileStore, MongoUserProfileRepository};
//!
//! let repo = MongoUserProfileRepository::new(&database, "linkedin_users");
//! repo.upsert(&profile).await?;
//! ```

pub mod profiles;
