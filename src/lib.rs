//! LinkedIn OAuth 콜백 서비스
//!
//! LinkedIn OAuth 2.0 Authorization Code 흐름의 콜백을 처리하는 서비스입니다.
//! 코드를 토큰으로 교환하고, 회원 정보를 조회해 프로필 레코드를 저장한 뒤
//! 환영 페이지를 보여줍니다.
//!
//! # Features
//!
//! - **토큰 교환**: `code` → `access_token` / `id_token`
//! - **사용자 식별**: ID 토큰 클레임, OpenID userinfo, 구형 `/v2/me` + `/v2/emailAddress`
//! - **프로필 저장**: subject id 기준 upsert (MongoDB 또는 메모리)
//! - **환영 페이지**: HTML 이스케이프된 인사말
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /auth/linkedin/{login,callback}, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 쿼리 검증, HTML/JSON 응답
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 토큰 교환, 사용자 식별
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 프로필 upsert
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB/memory  │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use linkedin_callback_service::config::AppConfig;
//! use linkedin_callback_service::core::AppState;
//! use linkedin_callback_service::repositories::profiles::InMemoryUserProfileStore;
//!
//! let config = AppConfig::from_env()?;
//! let state = AppState::new(config, Arc::new(InMemoryUserProfileStore::new()))?;
//! let profile = state.callback_service.complete_login("AQT...").await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod views;
