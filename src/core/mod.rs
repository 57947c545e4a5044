//! # Core Module
//!
//! 서비스 전역에서 공유되는 실행 상태를 제공합니다.
//!
//! 모든 의존성은 `main`에서 [`AppConfig`](crate::config::AppConfig)로부터 명시적으로 생성되어
//! [`AppState`]에 담깁니다. 전역 싱글톤이나 숨은 레지스트리는 사용하지 않습니다.
//!
//! ```text
//! AppConfig ──► UserProfileStore (MongoDB | memory)
//!     │                 │
//!     ▼                 ▼
//! AppState { config, callback_service, login_service }
//!     │
//!     ▼
//! web::Data<AppState> ──► handlers
//! ```

pub mod state;

pub use state::AppState;
