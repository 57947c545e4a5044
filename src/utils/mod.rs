//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 정리, 역직렬화 헬퍼, HTML 이스케이프

pub mod string_utils;
