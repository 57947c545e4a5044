//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Browser (LinkedIn 인증 후 리다이렉트)
//! └─────────────────────┬───────────────────────┘
//!                       │ GET /auth/linkedin/callback?code=..
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 쿼리 검증, 응답 렌더링      ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 토큰 교환, 사용자 식별               ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 프로필 upsert                   ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 `web::Data<AppState>`로 서비스와 설정을 받습니다.
//! 콜백 핸들러는 성공 시 HTML, 실패 시 `{"error", "details"?}` JSON을 반환합니다.
//!
//! ## 모듈 구성
//!
//! - **`auth`**: LinkedIn 로그인 시작 / 콜백

pub mod auth;
