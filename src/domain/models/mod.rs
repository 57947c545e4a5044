//! 외부 API 응답을 표현하는 도메인 모델

pub mod oauth;
