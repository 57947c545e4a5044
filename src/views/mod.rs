//! HTML 응답 렌더링

pub mod welcome_page;

pub use welcome_page::render_welcome_page;
