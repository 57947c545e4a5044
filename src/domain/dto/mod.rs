//! # Data Transfer Objects
//!
//! HTTP 경계를 오가는 요청/응답 데이터 구조를 정의합니다.

pub mod oauth;

pub use oauth::*;
