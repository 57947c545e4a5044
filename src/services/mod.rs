//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 시작 시 [`AppConfig`](crate::config::AppConfig)로 한 번 생성되어
//! [`AppState`](crate::core::AppState)에 담겨 핸들러로 전달됩니다.

pub mod auth;
