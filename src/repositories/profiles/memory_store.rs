//! 프로세스 메모리 프로필 저장소
//!
//! `PROFILE_STORE=memory`로 로컬 실행할 때와 테스트에서 사용합니다.
//! 재시작하면 내용이 사라집니다.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::UserProfileStore;
use crate::domain::entities::users::user_profile::UserProfile;
use crate::errors::AppError;

#[derive(Default)]
pub struct InMemoryUserProfileStore {
    records: RwLock<HashMap<String, UserProfile>>,
}

impl InMemoryUserProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<UserProfile> {
        self.records.read().ok()?.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.records.read().map(|records| records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserProfileStore for InMemoryUserProfileStore {
    async fn upsert(&self, profile: &UserProfile) -> Result<(), AppError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| AppError::DatabaseError(format!("메모리 저장소 잠금 실패: {}", e)))?;

        records.insert(profile.id.clone(), profile.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
