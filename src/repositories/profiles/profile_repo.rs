//! # MongoDB 프로필 리포지토리
//!
//! - **컬렉션명**: 설정값 (`linkedin_users` 기본)
//! - **키**: `_id` = LinkedIn subject id

use async_trait::async_trait;
use mongodb::{Collection, bson::doc};

use super::UserProfileStore;
use crate::db::Database;
use crate::domain::entities::users::user_profile::UserProfile;
use crate::errors::AppError;

#[derive(Clone)]
pub struct MongoUserProfileRepository {
    collection: Collection<UserProfile>,
}

impl MongoUserProfileRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.get_database().collection::<UserProfile>(collection_name),
        }
    }
}

#[async_trait]
impl UserProfileStore for MongoUserProfileRepository {
    async fn upsert(&self, profile: &UserProfile) -> Result<(), AppError> {
        let result = self
            .collection
            .replace_one(doc! { "_id": profile.id.as_str() }, profile)
            .upsert(true)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.upserted_id.is_some() {
            log::info!("새 프로필 레코드 생성: {}", profile.id);
        } else {
            log::info!("기존 프로필 레코드 교체: {} (matched={})", profile.id, result.matched_count);
        }

        Ok(())
    }

    fn name(&self) -> &str {
        self.collection.name()
    }
}
