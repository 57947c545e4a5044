//! 핸들러가 공유하는 애플리케이션 상태

use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::repositories::profiles::UserProfileStore;
use crate::services::auth::{LinkedInLoginService, OAuthCallbackService};

/// `web::Data<AppState>`로 모든 워커에 공유됩니다.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub callback_service: Arc<OAuthCallbackService>,
    pub login_service: Arc<LinkedInLoginService>,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn UserProfileStore>) -> Result<Self, AppError> {
        let callback_service = Arc::new(OAuthCallbackService::new(&config, store)?);
        let login_service = Arc::new(LinkedInLoginService::new(config.oauth.clone()));

        Ok(Self {
            config: Arc::new(config),
            callback_service,
            login_service,
        })
    }
}
