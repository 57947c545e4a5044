//! OAuth 프로바이더 도메인 모델

pub mod linkedin_model;
