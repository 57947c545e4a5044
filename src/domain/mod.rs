//! # Domain Layer
//!
//! - [`entities`] - 저장소에 기록되는 엔티티 (`UserProfile`)
//! - [`dto`] - HTTP 요청/응답 DTO
//! - [`models`] - LinkedIn API 응답 모델

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
