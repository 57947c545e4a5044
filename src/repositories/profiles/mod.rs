//! 사용자 프로필 레코드 저장소
//!
//! 모든 구현은 subject id를 키로 한 무조건 덮어쓰기(upsert)를 제공합니다.
//! 낙관적 동시성 검사나 트랜잭션은 없으며, 같은 사용자에 대한 동시 쓰기는
//! 마지막 쓰기가 남습니다.

pub mod memory_store;
pub mod profile_repo;

pub use memory_store::InMemoryUserProfileStore;
pub use profile_repo::MongoUserProfileRepository;

use async_trait::async_trait;

use crate::domain::entities::users::user_profile::UserProfile;
use crate::errors::AppError;

#[async_trait]
pub trait UserProfileStore: Send + Sync {
    /// `profile.id`를 키로 레코드 전체를 저장하거나 교체합니다.
    async fn upsert(&self, profile: &UserProfile) -> Result<(), AppError>;

    /// 로그용 저장소 이름
    fn name(&self) -> &str;
}
